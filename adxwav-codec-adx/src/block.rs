// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use adxwav_core::errors::Result;
use adxwav_core::io::ReadBytes;
use adxwav_core::util::clamp::clamp_i16;

use crate::coefficients::Coefficients;
use crate::common::{signed_nibble, Nibble};

/// The number of samples one block decodes to.
pub const ADX_FRAMES_PER_BLOCK: usize = 32;

/// The size in bytes of one block: a 16-bit scale followed by 32 packed nibbles.
pub const ADX_BYTES_PER_BLOCK: usize = 2 + ADX_FRAMES_PER_BLOCK / 2;

/// `PredictorState` is the filter history of one channel: the two most recently decoded samples.
///
/// It starts at zero and is carried from one block to the next for the whole stream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictorState {
    /// The previous sample.
    pub s1: i32,
    /// The sample before the previous sample.
    pub s2: i32,
}

impl PredictorState {
    pub fn new(s1: i32, s2: i32) -> Self {
        PredictorState { s1, s2 }
    }

    fn expand_nibble(
        &mut self,
        byte: u8,
        nibble: Nibble,
        scale: i32,
        coeffs: &Coefficients,
    ) -> i16 {
        let delta = signed_nibble(nibble.get_nibble(byte));
        let sample = clamp_i16(delta * scale + coeffs.predict(self.s1, self.s2));
        // The saturated sample, not the raw prediction, becomes the history.
        self.s2 = self.s1;
        self.s1 = i32::from(sample);
        sample
    }
}

/// Decodes one block of one channel from `stream` into `out`, advancing `state`.
pub fn decode_block<B: ReadBytes>(
    stream: &mut B,
    state: &mut PredictorState,
    coeffs: &Coefficients,
    out: &mut [i16; ADX_FRAMES_PER_BLOCK],
) -> Result<()> {
    let scale = i32::from(stream.read_be_u16()?) + 1;

    for pair in out.chunks_exact_mut(2) {
        let nibbles = stream.read_u8()?;
        pair[0] = state.expand_nibble(nibbles, Nibble::Upper, scale, coeffs);
        pair[1] = state.expand_nibble(nibbles, Nibble::Lower, scale, coeffs);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use adxwav_core::io::BufReader;

    use super::*;

    fn decode(block: &[u8], state: &mut PredictorState) -> [i16; ADX_FRAMES_PER_BLOCK] {
        let coeffs = Coefficients::from_sample_rate(44_100);
        let mut out = [0; ADX_FRAMES_PER_BLOCK];
        decode_block(&mut BufReader::new(block), state, &coeffs, &mut out).unwrap();
        out
    }

    fn block(scale: u16, nibbles: [u8; 16]) -> [u8; ADX_BYTES_PER_BLOCK] {
        let mut block = [0u8; ADX_BYTES_PER_BLOCK];
        block[..2].copy_from_slice(&scale.to_be_bytes());
        block[2..].copy_from_slice(&nibbles);
        block
    }

    #[test]
    fn verify_silent_block() {
        let mut state = PredictorState::default();
        let out = decode(&block(0, [0; 16]), &mut state);

        assert_eq!(out, [0; ADX_FRAMES_PER_BLOCK]);
        assert_eq!(state, PredictorState::new(0, 0));
    }

    #[test]
    fn verify_nibble_order_and_sign() {
        let mut nibbles = [0u8; 16];
        nibbles.copy_from_slice(&[0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0].repeat(2));

        let mut state = PredictorState::default();
        let out = decode(&block(0, nibbles), &mut state);

        #[rustfmt::skip]
        let expected: [i16; ADX_FRAMES_PER_BLOCK] = [
              1,   3,   7,  14,  24,  37,  54,  59,  55,  45,  31,  15,  -1, -16, -29, -40,
            -48, -52, -52, -48, -40, -28, -12,  -8, -12, -22, -35, -50, -65, -79, -91, -100,
        ];

        assert_eq!(out, expected);
        assert_eq!(state, PredictorState::new(-100, -91));
    }

    #[test]
    fn verify_positive_saturation_feeds_history() {
        let mut state = PredictorState::default();
        let out = decode(&block(0x0fff, [0x77; 16]), &mut state);

        assert_eq!(out[0], 28_672);
        assert!(out[1..].iter().all(|&s| s == i16::MAX));
        assert_eq!(state, PredictorState::new(32_767, 32_767));
    }

    #[test]
    fn verify_negative_saturation() {
        let mut state = PredictorState::new(-32_768, -32_768);
        let out = decode(&block(0xffff, [0x88; 16]), &mut state);

        assert!(out.iter().all(|&s| s == i16::MIN));
        assert_eq!(state, PredictorState::new(-32_768, -32_768));
    }

    #[test]
    fn verify_state_carries_across_blocks() {
        let mut first = [0u8; 16];
        first[0] = 0x10;

        let mut state = PredictorState::default();
        let out = decode(&block(9, first), &mut state);

        assert_eq!(&out[..8], &[10, 17, 22, 25, 27, 28, 28, 27]);
        assert_eq!(&out[30..], &[-19, -21]);
        assert_eq!(state, PredictorState::new(-21, -19));

        // The second block has no deltas, so its output is pure prediction from the first
        // block's last two samples.
        let out = decode(&block(0, [0; 16]), &mut state);

        assert_eq!(&out[..4], &[-23, -25, -27, -29]);
        assert_eq!(&out[28..], &[-67, -68, -69, -70]);
        assert_eq!(state, PredictorState::new(-70, -69));
    }

    #[test]
    fn verify_decode_is_repeatable() {
        let mut nibbles = [0u8; 16];
        nibbles.iter_mut().enumerate().for_each(|(i, b)| *b = (i as u8).wrapping_mul(37));
        let data = block(0x0123, nibbles);

        let mut state_a = PredictorState::new(1_000, -2_000);
        let mut state_b = state_a;

        assert_eq!(decode(&data, &mut state_a), decode(&data, &mut state_b));
        assert_eq!(state_a, state_b);
    }

    #[test]
    fn verify_short_block_is_an_error() {
        let coeffs = Coefficients::from_sample_rate(44_100);
        let mut state = PredictorState::default();
        let mut out = [0; ADX_FRAMES_PER_BLOCK];

        let data = [0u8; ADX_BYTES_PER_BLOCK - 1];
        assert!(decode_block(&mut BufReader::new(&data), &mut state, &coeffs, &mut out).is_err());
    }
}
