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

use adxwav_core::audio::Channels;
use adxwav_core::codecs::CodecParameters;
use adxwav_core::errors::Result;
use adxwav_core::formats::Packet;

use log::debug;

mod block;
mod coefficients;
mod common;

pub use block::{decode_block, PredictorState, ADX_BYTES_PER_BLOCK, ADX_FRAMES_PER_BLOCK};
pub use coefficients::Coefficients;

/// Interleaves one block of a left and a right channel as `L0, R0, L1, R1, ...`.
fn interleave_stereo(
    left: &[i16; ADX_FRAMES_PER_BLOCK],
    right: &[i16; ADX_FRAMES_PER_BLOCK],
    out: &mut [i16],
) {
    for (frame, (&l, &r)) in out.chunks_exact_mut(2).zip(left.iter().zip(right)) {
        frame[0] = l;
        frame[1] = r;
    }
}

/// CRI ADX decoder.
///
/// Each packet holds one 18 byte block per channel, left channel first. Every block is always
/// decoded in full so that the predictor history stays correct, and the decoded frames are held
/// in a buffer sized for a whole block. Only the packet's valid frames are returned.
pub struct AdxDecoder {
    params: CodecParameters,
    coeffs: Coefficients,
    states: [PredictorState; 2],
    planes: [[i16; ADX_FRAMES_PER_BLOCK]; 2],
    buf: Vec<i16>,
}

impl AdxDecoder {
    pub fn new(params: &CodecParameters) -> Self {
        let coeffs = Coefficients::from_sample_rate(params.sample_rate);

        debug!(
            "adx: rate={} coef1={} coef2={} channels={}",
            params.sample_rate, coeffs.coef1, coeffs.coef2, params.channels
        );

        AdxDecoder {
            params: params.clone(),
            coeffs,
            states: Default::default(),
            planes: [[0; ADX_FRAMES_PER_BLOCK]; 2],
            buf: vec![0; ADX_FRAMES_PER_BLOCK * params.channels.count()],
        }
    }

    /// Gets the prediction coefficients in use.
    pub fn coefficients(&self) -> Coefficients {
        self.coeffs
    }

    /// Gets the predictor state of a channel.
    pub fn predictor_state(&self, channel: usize) -> PredictorState {
        self.states[channel]
    }

    /// Clears the predictor history of every channel. Only valid before decoding the first block
    /// of a stream again.
    pub fn reset(&mut self) {
        self.states = Default::default();
    }

    /// Decodes a packet and returns its valid frames as interleaved samples.
    pub fn decode(&mut self, packet: &Packet) -> Result<&[i16]> {
        let mut stream = packet.as_buf_reader();

        match self.params.channels {
            Channels::Mono => {
                decode_block(&mut stream, &mut self.states[0], &self.coeffs, &mut self.planes[0])?;
                self.buf.copy_from_slice(&self.planes[0]);
            }
            Channels::Stereo => {
                let [left, right] = &mut self.planes;
                decode_block(&mut stream, &mut self.states[0], &self.coeffs, left)?;
                decode_block(&mut stream, &mut self.states[1], &self.coeffs, right)?;
                interleave_stereo(left, right, &mut self.buf);
            }
        }

        let n_frames = packet.dur().min(ADX_FRAMES_PER_BLOCK as u64) as usize;

        Ok(&self.buf[..n_frames * self.params.channels.count()])
    }
}
