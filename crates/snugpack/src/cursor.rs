//! Bounds-checked cursors over borrowed buffers.
//!
//! Both halves of the codec sit on top of one of these: the decoder on a
//! [`ReadCursor`] over a shared slice, the encoder on a [`WriteCursor`]
//! over an exclusive one. Neither ever reallocates or allocates.

use crate::types::Error;
use crate::types::Result;

/// Tracks the read position within a borrowed input slice.
#[derive(Debug)]
pub(crate) struct ReadCursor<'a> {
    slice: &'a [u8],
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    pub(crate) fn new(slice: &'a [u8]) -> Self {
        Self { slice, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.slice.len() - self.pos
    }

    #[inline]
    fn need(&self, n: usize) -> Result<()> {
        if self.remaining() < n {
            Err(Error::Exhausted)
        } else {
            Ok(())
        }
    }

    #[inline]
    pub(crate) fn read_byte(&mut self) -> Result<u8> {
        self.need(1)?;
        let byte = self.slice[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    pub(crate) fn peek_byte(&self) -> Result<u8> {
        self.need(1)?;
        Ok(self.slice[self.pos])
    }

    /// Reads exactly `N` bytes, or fails without advancing.
    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.need(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.slice[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}

/// Tracks the write position within a borrowed output slice.
#[derive(Debug)]
pub(crate) struct WriteCursor<'a> {
    slice: &'a mut [u8],
    used: usize,
}

impl<'a> WriteCursor<'a> {
    pub(crate) fn new(slice: &'a mut [u8]) -> Self {
        Self { slice, used: 0 }
    }

    pub(crate) fn used(&self) -> usize {
        self.used
    }

    pub(crate) fn left(&self) -> usize {
        self.slice.len() - self.used
    }

    /// Writes `bytes` whole, or fails without writing anything.
    #[inline]
    pub(crate) fn put(&mut self, bytes: &[u8]) -> Result<()> {
        if self.left() < bytes.len() {
            return Err(Error::BufferFull);
        }
        self.slice[self.used..self.used + bytes.len()].copy_from_slice(bytes);
        self.used += bytes.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_cursor_basic() {
        let data = [0xc0u8, 0xc2, 0xc3];
        let mut cursor = ReadCursor::new(&data);

        assert_eq!(cursor.pos(), 0);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.peek_byte().unwrap(), 0xc0);
        assert_eq!(cursor.read_byte().unwrap(), 0xc0);
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.read_array::<2>().unwrap(), [0xc2, 0xc3]);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn read_cursor_exhausted_does_not_advance() {
        let data = [0xcdu8, 0xff];
        let mut cursor = ReadCursor::new(&data);

        assert_eq!(cursor.read_byte().unwrap(), 0xcd);
        assert_eq!(cursor.read_array::<2>(), Err(Error::Exhausted));
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn write_cursor_basic() {
        let mut buf = [0u8; 4];
        let mut cursor = WriteCursor::new(&mut buf);

        cursor.put(&[0xcd, 0xff, 0xff]).unwrap();
        assert_eq!(cursor.used(), 3);
        assert_eq!(cursor.left(), 1);
        assert_eq!(buf[..3], [0xcd, 0xff, 0xff]);
    }

    #[test]
    fn write_cursor_overflow_writes_nothing() {
        let mut buf = [0u8; 2];
        let mut cursor = WriteCursor::new(&mut buf);

        assert_eq!(cursor.put(&[1, 2, 3]), Err(Error::BufferFull));
        assert_eq!(cursor.used(), 0);
        assert_eq!(buf, [0, 0]);
    }
}
