// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `audio` module provides primitives for describing decoded audio.

use std::fmt;

use crate::errors::{unsupported_channels_error, Result};

/// `Channels` describes the channel layouts an ADX stream may carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Channels {
    /// A single channel.
    Mono,
    /// A left and right channel pair, interleaved left first.
    Stereo,
}

impl Channels {
    /// Gets the layout for the channel count stored in a stream header. Only one or two channels
    /// are supported.
    pub fn try_from_count(count: u8) -> Result<Channels> {
        match count {
            1 => Ok(Channels::Mono),
            2 => Ok(Channels::Stereo),
            _ => unsupported_channels_error(count),
        }
    }

    /// Gets the number of channels.
    pub fn count(self) -> usize {
        match self {
            Channels::Mono => 1,
            Channels::Stereo => 2,
        }
    }
}

impl fmt::Display for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channels::Mono => f.write_str("mono"),
            Channels::Stereo => f.write_str("stereo"),
        }
    }
}

/// `SignalSpec` describes the characteristics of a stream of interleaved 16-bit PCM.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SignalSpec {
    /// The signal sampling rate in hertz (Hz).
    pub rate: u32,
    /// The channel layout.
    pub channels: Channels,
}

impl SignalSpec {
    pub fn new(rate: u32, channels: Channels) -> Self {
        SignalSpec { rate, channels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn verify_channel_counts() {
        assert_eq!(Channels::try_from_count(1).unwrap(), Channels::Mono);
        assert_eq!(Channels::try_from_count(2).unwrap().count(), 2);

        for count in [0, 3, 6, 255] {
            match Channels::try_from_count(count) {
                Err(Error::UnsupportedChannelLayout(c)) => assert_eq!(c, count),
                other => panic!("unexpected result {:?}", other),
            }
        }
    }
}
