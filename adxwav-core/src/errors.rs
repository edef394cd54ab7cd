// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `errors` module defines the common error type.

use std::error;
use std::fmt;
use std::io;
use std::result;

/// `Error` provides an enumeration of all possible errors reported while converting a stream.
#[derive(Debug)]
pub enum Error {
    /// An IO error occured while reading, writing, or seeking a stream.
    IoError(io::Error),
    /// The stream is not a valid ADX stream. `pos` is the byte offset at which the problem was
    /// detected.
    InvalidFormat { desc: &'static str, pos: u64 },
    /// The stream declares a channel count that cannot be decoded.
    UnsupportedChannelLayout(u8),
    /// A limit of the output container was reached.
    LimitError(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::IoError(ref err) => err.fmt(f),
            Error::InvalidFormat { desc, pos } => {
                write!(f, "invalid format at byte {}: {}", pos, desc)
            }
            Error::UnsupportedChannelLayout(count) => {
                write!(f, "unsupported channel layout: {} channels (expected 1 or 2)", count)
            }
            Error::LimitError(constraint) => {
                write!(f, "limit reached: {}", constraint)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IoError(ref err) => Some(err),
            Error::InvalidFormat { .. } => None,
            Error::UnsupportedChannelLayout(_) => None,
            Error::LimitError(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Convenience function to create an invalid format error.
pub fn invalid_format_error<T>(desc: &'static str, pos: u64) -> Result<T> {
    Err(Error::InvalidFormat { desc, pos })
}

/// Convenience function to create an unsupported channel layout error.
pub fn unsupported_channels_error<T>(count: u8) -> Result<T> {
    Err(Error::UnsupportedChannelLayout(count))
}

/// Convenience function to create a limit error.
pub fn limit_error<T>(constraint: &'static str) -> Result<T> {
    Err(Error::LimitError(constraint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_display_carries_context() {
        let err = invalid_format_error::<()>("signature mismatch", 26).unwrap_err();
        assert_eq!(err.to_string(), "invalid format at byte 26: signature mismatch");

        let err = unsupported_channels_error::<()>(6).unwrap_err();
        assert!(err.to_string().contains("6 channels"));
    }

    #[test]
    fn verify_io_error_source() {
        use std::error::Error as _;

        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::IoError(_)));
        assert!(err.source().is_some());

        let err = limit_error::<()>("too large").unwrap_err();
        assert!(err.source().is_none());
    }
}
