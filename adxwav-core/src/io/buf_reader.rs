// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io;

use super::ReadBytes;

#[inline(always)]
fn underrun_error<T>(pos: usize, wanted: usize, available: usize) -> io::Result<T> {
    Err(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("buffer underrun at byte {}: expected {} bytes, got {}", pos, wanted, available),
    ))
}

/// A `BufReader` reads bytes from a byte buffer.
pub struct BufReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BufReader<'a> {
    /// Instantiate a new `BufReader` with a given byte buffer.
    pub fn new(buf: &'a [u8]) -> Self {
        BufReader { buf, pos: 0 }
    }

    /// Returns a reference to the next `len` bytes in the buffer and advances the stream.
    pub fn read_buf_bytes_ref(&mut self, len: usize) -> io::Result<&'a [u8]> {
        let available = self.buf.len() - self.pos;
        if available < len {
            return underrun_error(self.pos, len, available);
        }
        self.pos += len;
        Ok(&self.buf[self.pos - len..self.pos])
    }

    /// Returns the number of bytes not yet read.
    pub fn bytes_available(&self) -> usize {
        self.buf.len() - self.pos
    }
}

impl ReadBytes for BufReader<'_> {
    #[inline(always)]
    fn read_byte(&mut self) -> io::Result<u8> {
        if self.buf.len() - self.pos < 1 {
            return underrun_error(self.pos, 1, 0);
        }

        self.pos += 1;
        Ok(self.buf[self.pos - 1])
    }

    #[inline(always)]
    fn read_double_bytes(&mut self) -> io::Result<[u8; 2]> {
        let mut bytes = [0u8; 2];
        self.read_buf_exact(&mut bytes)?;
        Ok(bytes)
    }

    #[inline(always)]
    fn read_quad_bytes(&mut self) -> io::Result<[u8; 4]> {
        let mut bytes = [0u8; 4];
        self.read_buf_exact(&mut bytes)?;
        Ok(bytes)
    }

    fn read_buf_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        let len = buf.len();
        let available = self.buf.len() - self.pos;

        if available < len {
            return underrun_error(self.pos, len, available);
        }

        buf.copy_from_slice(&self.buf[self.pos..self.pos + len]);
        self.pos += len;

        Ok(())
    }

    fn ignore_bytes(&mut self, count: u64) -> io::Result<()> {
        let available = self.buf.len() - self.pos;

        if (available as u64) < count {
            return underrun_error(self.pos, count as usize, available);
        }

        self.pos += count as usize;
        Ok(())
    }

    #[inline(always)]
    fn pos(&self) -> u64 {
        self.pos as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_be_reads() {
        let data = [0x12, 0x34, 0x00, 0x00, 0xac, 0x44, 0xff];
        let mut reader = BufReader::new(&data);

        assert_eq!(reader.read_be_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_be_u32().unwrap(), 44_100);
        assert_eq!(reader.pos(), 6);
        assert_eq!(reader.bytes_available(), 1);
        assert_eq!(reader.read_u8().unwrap(), 0xff);
    }

    #[test]
    fn verify_underrun_reports_counts() {
        let data = [0u8; 3];
        let mut reader = BufReader::new(&data);
        reader.ignore_bytes(1).unwrap();

        let err = reader.read_be_u32().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(err.to_string(), "buffer underrun at byte 1: expected 4 bytes, got 2");

        // A failed read does not advance the reader.
        assert_eq!(reader.pos(), 1);
        assert_eq!(reader.read_buf_bytes_ref(2).unwrap(), &[0, 0]);
    }
}
