// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::{self, Write};

use adxwav_core::audio::SignalSpec;
use adxwav_core::errors::{limit_error, Result};

/// The length of the header written before the sample data.
pub const WAV_HEADER_LEN: usize = 44;

/// The PCM Wave Format identifier from mmreg.h of the Microsoft Windows Platform SDK.
const WAVE_FORMAT_PCM: u16 = 0x0001;

/// Output samples are always signed 16-bit.
const BITS_PER_SAMPLE: u16 = 16;

/// The length of the `fmt ` chunk body for a basic WaveFormat struct.
const FMT_CHUNK_LEN: u32 = 16;

/// `WavHeader` is the canonical 44 byte RIFF/WAVE header of a 16-bit PCM stream.
///
/// Fields are listed in the order they are written. Every field is little-endian.
///
/// | Offset | Size | Field                 |
/// |--------|------|-----------------------|
/// | 0      | 4    | `RIFF`                |
/// | 4      | 4    | `riff_len`            |
/// | 8      | 4    | `WAVE`                |
/// | 12     | 4    | `fmt `                |
/// | 16     | 4    | `fmt_len` (16)        |
/// | 20     | 2    | `format` (1, PCM)     |
/// | 22     | 2    | `n_channels`          |
/// | 24     | 4    | `sample_rate`         |
/// | 28     | 4    | `avg_bytes_per_sec`   |
/// | 32     | 2    | `block_align`         |
/// | 34     | 2    | `bits_per_sample`     |
/// | 36     | 4    | `data`                |
/// | 40     | 4    | `data_len`            |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WavHeader {
    /// The length of the RIFF form: everything after the `riff_len` field.
    pub riff_len: u32,
    pub n_channels: u16,
    pub sample_rate: u32,
    /// `sample_rate * block_align`.
    pub avg_bytes_per_sec: u32,
    /// The length of one interleaved frame in bytes.
    pub block_align: u16,
    pub bits_per_sample: u16,
    /// The length of the sample data in bytes.
    pub data_len: u32,
}

impl WavHeader {
    /// Builds the header of a stream of `n_frames` frames.
    pub fn new(spec: &SignalSpec, n_frames: u64) -> Result<Self> {
        let n_channels = spec.channels.count() as u16;
        let block_align = n_channels * (BITS_PER_SAMPLE / 8);

        let avg_bytes_per_sec = match spec.rate.checked_mul(u32::from(block_align)) {
            Some(rate) => rate,
            None => return limit_error("wav: byte rate exceeds 32 bits"),
        };

        // The data length, and the RIFF length derived from it, must fit in 32 bits.
        let riff_overhead = WAV_HEADER_LEN as u64 - 8;

        let data_len = n_frames * u64::from(block_align);

        if data_len + riff_overhead > u64::from(u32::MAX) {
            return limit_error("wav: sample data exceeds the 4 GiB RIFF limit");
        }

        Ok(WavHeader {
            riff_len: (data_len + riff_overhead) as u32,
            n_channels,
            sample_rate: spec.rate,
            avg_bytes_per_sec,
            block_align,
            bits_per_sample: BITS_PER_SAMPLE,
            data_len: data_len as u32,
        })
    }

    /// Serializes the header field by field.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"RIFF")?;
        writer.write_all(&self.riff_len.to_le_bytes())?;
        writer.write_all(b"WAVE")?;

        writer.write_all(b"fmt ")?;
        writer.write_all(&FMT_CHUNK_LEN.to_le_bytes())?;
        writer.write_all(&WAVE_FORMAT_PCM.to_le_bytes())?;
        writer.write_all(&self.n_channels.to_le_bytes())?;
        writer.write_all(&self.sample_rate.to_le_bytes())?;
        writer.write_all(&self.avg_bytes_per_sec.to_le_bytes())?;
        writer.write_all(&self.block_align.to_le_bytes())?;
        writer.write_all(&self.bits_per_sample.to_le_bytes())?;

        writer.write_all(b"data")?;
        writer.write_all(&self.data_len.to_le_bytes())?;

        Ok(())
    }
}
