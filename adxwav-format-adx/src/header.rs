// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::{Read, Seek};

use adxwav_core::audio::Channels;
use adxwav_core::errors::{invalid_format_error, Result};
use adxwav_core::io::{BufReader, ReadBytes, SourceStream};

use log::info;

/// The length of the fixed stream header.
pub const ADX_HEADER_LEN: usize = 16;

/// The signature found at the data offset. The leading marker byte is implied and never read
/// from the stream; only the copyright text is compared.
const ADX_SIGNATURE: [u8; 7] = *b"\x80(c)CRI";

/// `AdxHeader` holds the stream properties stored in the fixed header of an ADX stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdxHeader {
    /// The channel layout.
    pub channels: Channels,
    /// The sample rate in Hz.
    pub sample_rate: u32,
    /// The number of frames (samples per channel) in the stream.
    pub n_frames: u32,
    /// The byte offset of the copyright signature.
    pub data_offset: u64,
}

impl AdxHeader {
    /// Reads and validates the stream header. On success the stream is positioned at the first
    /// compressed block, immediately after the signature.
    pub fn read<R: Read + Seek>(stream: &mut SourceStream<R>) -> Result<AdxHeader> {
        let mut buf = [0u8; ADX_HEADER_LEN];
        stream.read_buf_exact(&mut buf)?;

        let mut reader = BufReader::new(&buf);

        reader.ignore_bytes(2)?;
        let raw_offset = reader.read_be_u16()?;
        reader.ignore_bytes(3)?;
        let channel_count = reader.read_u8()?;
        let sample_rate = reader.read_be_u32()?;
        let n_frames = reader.read_be_u32()?;

        // The stored offset counts from the byte after the offset field.
        let data_offset = match raw_offset.checked_sub(2) {
            Some(offset) => u64::from(offset),
            None => return invalid_format_error("adx: data offset is out of range", 2),
        };

        info!(
            "adx: channels={} rate={} frames={} offset={}",
            channel_count, sample_rate, n_frames, data_offset
        );

        stream.seek(data_offset)?;

        let mut signature = ADX_SIGNATURE;
        stream.read_buf_exact(&mut signature[1..])?;

        if signature != ADX_SIGNATURE {
            return invalid_format_error("adx: missing (c)CRI signature", data_offset);
        }

        let channels = Channels::try_from_count(channel_count)?;

        Ok(AdxHeader { channels, sample_rate, n_frames, data_offset })
    }
}
