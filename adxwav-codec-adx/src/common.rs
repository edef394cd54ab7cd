// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// `Nibble` represents the lower or upper 4 bits of a byte
#[derive(Copy, Clone)]
pub(crate) enum Nibble {
    Upper,
    Lower,
}

impl Nibble {
    pub fn get_nibble(&self, byte: u8) -> u8 {
        match self {
            Nibble::Upper => byte >> 4,
            Nibble::Lower => byte & 0x0F,
        }
    }
}

/// Sign-extends a 4-bit two's complement value. 8..=15 map to -8..=-1.
pub(crate) fn signed_nibble(nibble: u8) -> i32 {
    let nibble = i32::from(nibble & 0x0F);
    if (nibble & 0x08) != 0 {
        nibble - 0x10
    }
    else {
        nibble
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_nibble_split() {
        assert_eq!(Nibble::Upper.get_nibble(0x9c), 0x9);
        assert_eq!(Nibble::Lower.get_nibble(0x9c), 0xc);
    }

    #[test]
    fn verify_signed_nibble() {
        let expected = [0, 1, 2, 3, 4, 5, 6, 7, -8, -7, -6, -5, -4, -3, -2, -1];
        for (nibble, &value) in expected.iter().enumerate() {
            assert_eq!(signed_nibble(nibble as u8), value);
        }
    }
}
