// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

//! ADX to WAVE conversion.
//!
//! A conversion either runs to completion or stops at the first error. The output file is only
//! created once the input header has been validated, but an I/O error while decoding leaves a
//! partial output file behind.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::{Path, PathBuf};

use adxwav_codec_adx::AdxDecoder;
use adxwav_core::errors::Result;
use adxwav_format_adx::{AdxHeader, AdxReader};
use adxwav_format_wav::WavWriter;

use log::info;

/// The extension given to derived output paths.
const OUTPUT_EXTENSION: &str = "wav";

/// `ConvertOptions` describes one conversion run.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// The ADX stream to read.
    pub input: PathBuf,
    /// The WAVE file to create or overwrite.
    pub output: PathBuf,
    /// Suppress the stream summary and progress lines.
    pub quiet: bool,
}

impl ConvertOptions {
    /// Creates options for `input`. When `output` is `None`, the output path is the input path
    /// with its extension replaced.
    pub fn new(input: PathBuf, output: Option<PathBuf>) -> Self {
        let output = output.unwrap_or_else(|| default_output_path(&input));
        ConvertOptions { input, output, quiet: false }
    }
}

/// Replaces the extension of `input` with the WAVE extension, or adds it if there is none.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Opens an ADX file and validates its header.
pub fn open_input(path: &Path) -> Result<AdxReader<BufReader<File>>> {
    let file = File::open(path)?;
    AdxReader::try_new(BufReader::new(file))
}

/// Decodes every remaining packet of `reader` and writes the result as a WAVE stream to
/// `writer`. Returns `writer` once the stream is flushed.
pub fn transcode<R, W>(reader: &mut AdxReader<R>, writer: W) -> Result<W>
where
    R: Read + Seek,
    W: Write,
{
    let params = reader.codec_params().clone();

    let mut decoder = AdxDecoder::new(&params);
    let mut wav = WavWriter::try_new(writer, params.signal_spec(), params.n_frames)?;

    while let Some(packet) = reader.next_packet()? {
        let samples = decoder.decode(&packet)?;
        wav.write_interleaved(samples)?;
    }

    info!("wrote {} frames", wav.frames_written());

    wav.finalize()
}

/// Converts the file named by `opts.input` into `opts.output` and returns the parsed header.
pub fn convert(opts: &ConvertOptions) -> Result<AdxHeader> {
    let mut reader = open_input(&opts.input)?;
    let header = reader.header().clone();

    if !opts.quiet {
        println!("Channels: {}", header.channels.count());
        println!("Freq: {} Hz", header.sample_rate);
        println!("Size: {} samples", header.n_frames);
        println!("Offset: {}", header.data_offset);
    }

    let output = BufWriter::new(File::create(&opts.output)?);

    if !opts.quiet {
        println!("Converting {} -> {}", opts.input.display(), opts.output.display());
    }

    transcode(&mut reader, output)?;

    if !opts.quiet {
        println!("Done!");
    }

    Ok(header)
}
