// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]
// The following lints are allowed in all crates of the workspace. Please see the workspace
// Cargo.toml for their justification.
#![allow(clippy::identity_op)]
#![allow(clippy::manual_range_contains)]

use std::io::{Read, Seek};

use adxwav_codec_adx::{ADX_BYTES_PER_BLOCK, ADX_FRAMES_PER_BLOCK};
use adxwav_core::codecs::CodecParameters;
use adxwav_core::errors::Result;
use adxwav_core::formats::Packet;
use adxwav_core::io::{ReadBytes, SourceStream};

use log::debug;

mod header;

pub use header::{AdxHeader, ADX_HEADER_LEN};

/// CRI ADX format reader.
///
/// `AdxReader` parses the stream header and then splits the payload into packets of one block per
/// channel. The last packet may carry fewer valid frames than a full block.
pub struct AdxReader<R: Read + Seek> {
    reader: SourceStream<R>,
    header: AdxHeader,
    params: CodecParameters,
    packet_len: usize,
    next_ts: u64,
}

impl<R: Read + Seek> AdxReader<R> {
    /// Reads the stream header from `source` and prepares to read the first packet.
    pub fn try_new(source: R) -> Result<Self> {
        let mut reader = SourceStream::new(source);

        let header = AdxHeader::read(&mut reader)?;

        let params = CodecParameters::new(header.sample_rate, header.channels)
            .with_n_frames(u64::from(header.n_frames));

        let packet_len = ADX_BYTES_PER_BLOCK * header.channels.count();

        debug!("adx: first block at byte {}, {} bytes per packet", reader.pos(), packet_len);

        Ok(AdxReader { reader, header, params, packet_len, next_ts: 0 })
    }

    /// Gets the parsed stream header.
    pub fn header(&self) -> &AdxHeader {
        &self.header
    }

    /// Gets the parameters to instantiate a decoder with.
    pub fn codec_params(&self) -> &CodecParameters {
        &self.params
    }

    /// Reads the next packet. Returns `None` once every frame declared by the header was read.
    pub fn next_packet(&mut self) -> Result<Option<Packet>> {
        let n_frames = self.params.n_frames;

        if self.next_ts >= n_frames {
            return Ok(None);
        }

        let dur = (n_frames - self.next_ts).min(ADX_FRAMES_PER_BLOCK as u64);
        let data = self.reader.read_boxed_slice_exact(self.packet_len)?;

        let packet = Packet::new(self.next_ts, dur, data);
        self.next_ts += dur;

        Ok(Some(packet))
    }
}
