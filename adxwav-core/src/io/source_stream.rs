// Symphonia
// Copyright (c) 2019 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io;
use std::io::{Read, Seek, SeekFrom};

use super::ReadBytes;

/// A `SourceStream` wraps any seekable reader and tracks the absolute position of the stream so
/// that read failures can be reported with their location.
///
/// `SourceStream` does not buffer. Wrap unbuffered sources such as `std::fs::File` in a
/// `std::io::BufReader` before handing them over.
pub struct SourceStream<R: Read + Seek> {
    inner: R,
    pos: u64,
}

impl<R: Read + Seek> SourceStream<R> {
    /// Instantiates a new `SourceStream` positioned at the start of `inner`.
    pub fn new(inner: R) -> Self {
        SourceStream { inner, pos: 0 }
    }

    /// Seeks to an absolute byte offset and returns the new position.
    pub fn seek(&mut self, pos: u64) -> io::Result<u64> {
        self.pos = self.inner.seek(SeekFrom::Start(pos))?;
        Ok(self.pos)
    }

    /// Reads until `buf` is full or the source is exhausted. Returns the number of bytes read.
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;

        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(ref err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }

        self.pos += filled as u64;
        Ok(filled)
    }
}

impl<R: Read + Seek> ReadBytes for SourceStream<R> {
    #[inline(always)]
    fn read_byte(&mut self) -> io::Result<u8> {
        let mut byte = [0u8; 1];
        self.read_buf_exact(&mut byte)?;
        Ok(byte[0])
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
        let start = self.pos;
        let read = self.fill(buf)?;

        if read < buf.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "short read at byte {}: expected {} bytes, got {}",
                    start,
                    buf.len(),
                    read
                ),
            ));
        }

        Ok(())
    }

    fn ignore_bytes(&mut self, count: u64) -> io::Result<()> {
        let target = self.pos + count;
        self.seek(target)?;
        Ok(())
    }

    #[inline(always)]
    fn pos(&self) -> u64 {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn verify_seek_and_read() {
        let data: Vec<u8> = (0..16).collect();
        let mut stream = SourceStream::new(Cursor::new(data));

        assert_eq!(stream.read_be_u16().unwrap(), 0x0001);
        assert_eq!(stream.pos(), 2);

        assert_eq!(stream.seek(12).unwrap(), 12);
        assert_eq!(stream.read_be_u32().unwrap(), 0x0c0d0e0f);
        assert_eq!(stream.pos(), 16);

        stream.seek(4).unwrap();
        stream.ignore_bytes(3).unwrap();
        assert_eq!(stream.read_u8().unwrap(), 7);
    }

    #[test]
    fn verify_short_read_context() {
        let mut stream = SourceStream::new(Cursor::new(vec![0u8; 20]));
        stream.seek(10).unwrap();

        let mut buf = [0u8; 18];
        let err = stream.read_buf_exact(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(err.to_string(), "short read at byte 10: expected 18 bytes, got 10");
    }
}
