// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `formats` module provides the unit of data exchanged between a demuxer and a decoder.

use crate::io::BufReader;

/// A `Packet` contains one compressed chunk of a stream: one block for every channel.
#[derive(Clone, Debug)]
pub struct Packet {
    /// The timestamp of the first frame in the packet, in frames.
    pub ts: u64,
    /// The number of *valid* frames in the packet. The decoder always decodes the full block, but
    /// only this many frames are returned.
    pub dur: u64,
    /// The packet data buffer.
    pub data: Box<[u8]>,
}

impl Packet {
    /// Create a new `Packet`.
    pub fn new(ts: u64, dur: u64, data: impl Into<Box<[u8]>>) -> Self {
        Packet { ts, dur, data: data.into() }
    }

    /// Get the timestamp of the packet.
    pub fn ts(&self) -> u64 {
        self.ts
    }

    /// Get the number of valid frames in the packet.
    pub fn dur(&self) -> u64 {
        self.dur
    }

    /// Get an immutable slice to the packet buffer.
    pub fn buf(&self) -> &[u8] {
        &self.data
    }

    /// Get a `BufReader` to read the packet data buffer sequentially.
    pub fn as_buf_reader(&self) -> BufReader<'_> {
        BufReader::new(&self.data)
    }
}
