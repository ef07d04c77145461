//! Wire format utilities.
//!
//! This module provides the read cursor used by the parsing path and a
//! helper for writing length-prefixed data on the serialization path.

use crate::error::{Error, Result};
use bytes::{BufMut, BytesMut};

/// A cursor for reading DNS wire format data.
///
/// Every read advances the position by the nominal width of the read,
/// whether or not the buffer has enough bytes left. A read past the end
/// returns [`Error::ShortBuffer`] and leaves the cursor past the end, so
/// every subsequent read fails too. Callers may therefore perform a
/// series of reads and inspect only the final error.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    /// The underlying data.
    data: &'a [u8],
    /// Current position.
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Creates a new wire reader.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Sets the position.
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Returns the remaining bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns a fresh reader over the same buffer, positioned at
    /// `offset`. The original reader is unchanged.
    ///
    /// Used by compression pointer resolution.
    #[inline]
    pub const fn at(&self, offset: usize) -> Self {
        Self {
            data: self.data,
            pos: offset,
        }
    }

    /// Moves backwards by one byte, if possible.
    ///
    /// Used after a lookahead byte revealed a compression pointer.
    #[inline]
    pub fn step_back(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
        }
    }

    /// Advances past `width` bytes and returns the starting position.
    ///
    /// The position moves even when the read would overrun the buffer,
    /// keeping the cursor poisoned for subsequent reads.
    #[inline]
    fn advance(&mut self, width: usize) -> Result<usize> {
        let start = self.pos;
        self.pos += width;
        if self.pos > self.data.len() {
            return Err(Error::ShortBuffer);
        }
        Ok(start)
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        let p = self.advance(1)?;
        Ok(self.data[p])
    }

    /// Reads a big-endian u16.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        let p = self.advance(2)?;
        Ok(u16::from_be_bytes([self.data[p], self.data[p + 1]]))
    }

    /// Reads a big-endian u32.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        let p = self.advance(4)?;
        Ok(u32::from_be_bytes(
            self.data[p..p + 4].try_into().unwrap(),
        ))
    }

    /// Reads a big-endian i32.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_u32().map(|v| v as i32)
    }

    /// Reads a slice of bytes.
    #[inline]
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        let p = self.advance(len)?;
        Ok(&self.data[p..p + len])
    }

    /// Reads `len` bytes into an owned vector.
    #[inline]
    pub fn read_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        self.read_slice(len).map(<[u8]>::to_vec)
    }
}

/// Writes a length-prefixed body into `buf`.
///
/// Reserves a two-byte placeholder, runs `body`, then patches the
/// placeholder with the number of bytes the body wrote. This is how
/// every variable-length RDATA field is emitted: the body's final size
/// depends on name compression choices made while writing it.
pub(crate) fn write_length_prefixed<F>(buf: &mut BytesMut, body: F) -> Result<()>
where
    F: FnOnce(&mut BytesMut) -> Result<()>,
{
    let len_at = buf.len();
    buf.put_u16(0);
    let start = buf.len();
    body(buf)?;
    let written = (buf.len() - start) as u16;
    buf[len_at..len_at + 2].copy_from_slice(&written.to_be_bytes());
    Ok(())
}
