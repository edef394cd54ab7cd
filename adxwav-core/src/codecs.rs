// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `codecs` module provides the parameters shared between a demuxer and a decoder.

use crate::audio::{Channels, SignalSpec};

/// `CodecParameters` is a container for the parameters a decoder needs to decode a stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecParameters {
    /// The sample rate of the audio in Hz.
    pub sample_rate: u32,
    /// The channel layout.
    pub channels: Channels,
    /// The total number of frames (samples per channel) in the stream.
    pub n_frames: u64,
}

impl CodecParameters {
    pub fn new(sample_rate: u32, channels: Channels) -> CodecParameters {
        CodecParameters { sample_rate, channels, n_frames: 0 }
    }

    /// Provide the total number of frames.
    pub fn with_n_frames(mut self, n_frames: u64) -> Self {
        self.n_frames = n_frames;
        self
    }

    /// Gets the signal specification of the decoded audio.
    pub fn signal_spec(&self) -> SignalSpec {
        SignalSpec::new(self.sample_rate, self.channels)
    }
}
