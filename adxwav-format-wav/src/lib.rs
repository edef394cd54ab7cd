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

use std::io::Write;

use adxwav_core::audio::SignalSpec;
use adxwav_core::errors::Result;

use log::warn;

mod chunks;

pub use chunks::{WavHeader, WAV_HEADER_LEN};

/// WAVE (WAV) format writer.
///
/// `WavWriter` writes the header up front, so the number of frames must be known before the first
/// sample is written. Samples are interleaved 16-bit PCM.
pub struct WavWriter<W: Write> {
    writer: W,
    spec: SignalSpec,
    n_frames: u64,
    frames_written: u64,
    bytes: Vec<u8>,
}

impl<W: Write> WavWriter<W> {
    /// Writes the header of a stream of `n_frames` frames and returns the writer.
    pub fn try_new(mut writer: W, spec: SignalSpec, n_frames: u64) -> Result<Self> {
        let header = WavHeader::new(&spec, n_frames)?;
        header.write_to(&mut writer)?;

        Ok(WavWriter { writer, spec, n_frames, frames_written: 0, bytes: Vec::new() })
    }

    /// Gets the number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Writes interleaved samples. The slice must hold whole frames.
    pub fn write_interleaved(&mut self, samples: &[i16]) -> Result<()> {
        let n_channels = self.spec.channels.count();
        debug_assert!(samples.len() % n_channels == 0);

        self.bytes.clear();
        self.bytes.extend(samples.iter().flat_map(|sample| sample.to_le_bytes()));
        self.writer.write_all(&self.bytes)?;

        self.frames_written += (samples.len() / n_channels) as u64;
        Ok(())
    }

    /// Flushes the stream and returns the underlying writer.
    pub fn finalize(mut self) -> Result<W> {
        if self.frames_written != self.n_frames {
            warn!(
                "wav: header declares {} frames but {} were written",
                self.n_frames, self.frames_written
            );
        }

        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use adxwav_core::audio::Channels;

    use super::*;

    #[test]
    fn verify_samples_follow_header() {
        let spec = SignalSpec::new(32_000, Channels::Stereo);
        let mut writer = WavWriter::try_new(Vec::new(), spec, 2).unwrap();

        writer.write_interleaved(&[1, -1]).unwrap();
        writer.write_interleaved(&[i16::MAX, i16::MIN]).unwrap();
        assert_eq!(writer.frames_written(), 2);

        let buf = writer.finalize().unwrap();
        assert_eq!(buf.len(), WAV_HEADER_LEN + 8);
        assert_eq!(&buf[40..44], &8u32.to_le_bytes());
        assert_eq!(&buf[WAV_HEADER_LEN..], &[0x01, 0x00, 0xff, 0xff, 0xff, 0x7f, 0x00, 0x80]);
    }

    #[test]
    fn verify_empty_stream() {
        let spec = SignalSpec::new(44_100, Channels::Mono);
        let buf = WavWriter::try_new(Vec::new(), spec, 0).unwrap().finalize().unwrap();

        assert_eq!(buf.len(), WAV_HEADER_LEN);
        assert_eq!(&buf[4..8], &36u32.to_le_bytes());
    }
}
