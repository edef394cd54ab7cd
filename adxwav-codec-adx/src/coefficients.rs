// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::f64::consts::{PI, SQRT_2};

/// The cutoff frequency, in Hz, of the low-pass design the prediction filter is derived from.
const CUTOFF_FREQUENCY: f64 = 500.0;

/// `Coefficients` are the two fixed-point (Q12) taps of the second-order prediction filter. They
/// are derived once from the sample rate and shared by every channel of the stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Coefficients {
    pub coef1: i32,
    pub coef2: i32,
}

impl Coefficients {
    /// Derives the prediction coefficients for a sample rate.
    ///
    /// The intermediate math is carried out in double precision and the results are floored,
    /// not truncated, so negative values round toward negative infinity. Rates near zero yield
    /// meaningless coefficients and are not guarded against.
    pub fn from_sample_rate(sample_rate: u32) -> Self {
        let z = (2.0 * PI * CUTOFF_FREQUENCY / f64::from(sample_rate)).cos();
        let a = SQRT_2 - z;
        let b = SQRT_2 - 1.0;
        let c = (a - ((a + b) * (a - b)).sqrt()) / b;

        Coefficients {
            coef1: (8192.0 * c).floor() as i32,
            coef2: (-4096.0 * c * c).floor() as i32,
        }
    }

    /// Computes the filter prediction from the two previous samples.
    #[inline(always)]
    pub(crate) fn predict(&self, s1: i32, s2: i32) -> i32 {
        // Arithmetic shift: floors negative accumulators.
        (self.coef1 * s1 + self.coef2 * s2) >> 12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_golden_coefficients() {
        let golden = [
            (44_100, 7334, -3284),
            (48_000, 7400, -3343),
            (32_000, 7034, -3021),
            (22_050, 6569, -2635),
            (11_025, 5287, -1707),
        ];

        for (rate, coef1, coef2) in golden {
            assert_eq!(Coefficients::from_sample_rate(rate), Coefficients { coef1, coef2 });
        }
    }

    #[test]
    fn verify_coefficients_are_deterministic() {
        for rate in [8_000, 16_000, 24_000, 44_100, 96_000] {
            assert_eq!(Coefficients::from_sample_rate(rate), Coefficients::from_sample_rate(rate));
        }
    }

    #[test]
    fn verify_prediction_floors() {
        let coeffs = Coefficients::from_sample_rate(44_100);

        // (7334 * -21 + -3284 * -19) = -91618, and -91618 / 4096 = -22.37, floored to -23.
        assert_eq!(coeffs.predict(-21, -19), -23);
        assert_eq!(coeffs.predict(0, 0), 0);
        // (7334 * 10) = 73340, 73340 / 4096 = 17.9, floored to 17.
        assert_eq!(coeffs.predict(10, 0), 17);
    }
}
