//! Encoding half: borrows a buffer and packs scalars in minimal form.

use log::debug;
use log::trace;

use crate::cursor::WriteCursor;
use crate::tag;
use crate::tag::Tag;
use crate::types::Error;
use crate::types::Result;

/// Packs scalars into a caller-provided byte buffer.
///
/// The encoder borrows the buffer exclusively for its lifetime and never
/// reallocates. Integers always go out in their narrowest wire form, so
/// two encoders given the same values produce identical bytes.
///
/// Errors latch: after the first failure every call returns the same error
/// and the write cursor stays frozen. A failing operation writes nothing,
/// but the buffer as a whole must be treated as invalid once any call has
/// failed.
pub struct Encoder<'a> {
    cursor: WriteCursor<'a>,
    latched: Option<Error>,
}

impl<'a> Encoder<'a> {
    /// Borrows `buf` for writing. `buf` must not be empty.
    pub fn new(buf: &'a mut [u8]) -> Self {
        debug_assert!(!buf.is_empty());
        trace!("encoder over {} byte buffer", buf.len());
        Self {
            cursor: WriteCursor::new(buf),
            latched: None,
        }
    }

    /// Bytes written so far.
    pub fn space_used(&self) -> usize {
        self.cursor.used()
    }

    /// Bytes still available.
    pub fn space_left(&self) -> usize {
        self.cursor.left()
    }

    /// Releases the buffer borrow and reports the encoded length.
    ///
    /// Dropping the encoder releases the borrow just the same; `finish` is
    /// for callers who want the length back.
    pub fn finish(self) -> usize {
        trace!("encoder finished, {} bytes", self.cursor.used());
        self.cursor.used()
    }

    fn guard(&self) -> Result<()> {
        match self.latched {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn latch(&mut self, err: Error) -> Error {
        debug!("encode error after {} bytes: {}", self.cursor.used(), err);
        self.latched = Some(err);
        err
    }

    /// Single choke point: every encode lands here as one whole write.
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.guard()?;
        self.cursor.put(bytes).map_err(|err| self.latch(err))
    }

    /// Writes a bare tag byte. Collaborator hook for container framing.
    pub fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.put(&[tag.byte()])
    }

    /// Packs an unsigned value in its narrowest wire form.
    fn put_uint(&mut self, value: u64) -> Result<()> {
        if value <= 0x7f {
            return self.put(&[value as u8]);
        }
        if let Ok(v) = u8::try_from(value) {
            self.put(&[tag::U8, v])
        } else if let Ok(v) = u16::try_from(value) {
            let mut out = [tag::U16; 3];
            out[1..].copy_from_slice(&v.to_be_bytes());
            self.put(&out)
        } else if let Ok(v) = u32::try_from(value) {
            let mut out = [tag::U32; 5];
            out[1..].copy_from_slice(&v.to_be_bytes());
            self.put(&out)
        } else {
            let mut out = [tag::U64; 9];
            out[1..].copy_from_slice(&value.to_be_bytes());
            self.put(&out)
        }
    }

    /// Packs a signed value in its narrowest wire form.
    ///
    /// Both fixint bands are the value's own byte; past them, positive
    /// values stay in the signed family (`int16` upward, since `int8`
    /// tops out inside the fixint band).
    fn put_int(&mut self, value: i64) -> Result<()> {
        if (-32..=0x7f).contains(&value) {
            return self.put(&[value as u8]);
        }
        if let Ok(v) = i8::try_from(value) {
            self.put(&[tag::I8, v as u8])
        } else if let Ok(v) = i16::try_from(value) {
            let mut out = [tag::I16; 3];
            out[1..].copy_from_slice(&v.to_be_bytes());
            self.put(&out)
        } else if let Ok(v) = i32::try_from(value) {
            let mut out = [tag::I32; 5];
            out[1..].copy_from_slice(&v.to_be_bytes());
            self.put(&out)
        } else {
            let mut out = [tag::I64; 9];
            out[1..].copy_from_slice(&value.to_be_bytes());
            self.put(&out)
        }
    }

    /// Encodes a `u8` (`fixint` or `uint8` form).
    #[inline]
    pub fn encode_u8(&mut self, value: u8) -> Result<()> {
        self.put_uint(value as u64)
    }

    /// Encodes a `u16` (`fixint` through `uint16` form).
    #[inline]
    pub fn encode_u16(&mut self, value: u16) -> Result<()> {
        self.put_uint(value as u64)
    }

    /// Encodes a `u32` (`fixint` through `uint32` form).
    #[inline]
    pub fn encode_u32(&mut self, value: u32) -> Result<()> {
        self.put_uint(value as u64)
    }

    /// Encodes a `u64` (`fixint` through `uint64` form).
    #[inline]
    pub fn encode_u64(&mut self, value: u64) -> Result<()> {
        self.put_uint(value)
    }

    /// Encodes an `i8` (`fixint` or `int8` form).
    #[inline]
    pub fn encode_i8(&mut self, value: i8) -> Result<()> {
        self.put_int(value as i64)
    }

    /// Encodes an `i16` (`fixint` through `int16` form).
    #[inline]
    pub fn encode_i16(&mut self, value: i16) -> Result<()> {
        self.put_int(value as i64)
    }

    /// Encodes an `i32` (`fixint` through `int32` form).
    #[inline]
    pub fn encode_i32(&mut self, value: i32) -> Result<()> {
        self.put_int(value as i64)
    }

    /// Encodes an `i64` (`fixint` through `int64` form).
    #[inline]
    pub fn encode_i64(&mut self, value: i64) -> Result<()> {
        self.put_int(value)
    }

    /// Encodes a boolean (`0xc2`/`0xc3`).
    #[inline]
    pub fn encode_bool(&mut self, value: bool) -> Result<()> {
        self.put(&[if value { tag::TRUE } else { tag::FALSE }])
    }

    /// Encodes nil (`0xc0`).
    #[inline]
    pub fn encode_nil(&mut self) -> Result<()> {
        self.put(&[tag::NIL])
    }

    /// Encodes an `f32` as tag plus big-endian IEEE-754 payload.
    ///
    /// NaN is a caller bug: the format forbids delivering one, so none may
    /// be written.
    #[cfg(feature = "float32")]
    pub fn encode_f32(&mut self, value: f32) -> Result<()> {
        debug_assert!(!value.is_nan());

        let mut out = [tag::F32; 5];
        out[1..].copy_from_slice(&value.to_be_bytes());
        self.put(&out)
    }

    /// Encodes an `f64` as tag plus big-endian IEEE-754 payload.
    ///
    /// NaN is a caller bug, as for [`Self::encode_f32`].
    #[cfg(feature = "float64")]
    pub fn encode_f64(&mut self, value: f64) -> Result<()> {
        debug_assert!(!value.is_nan());

        let mut out = [tag::F64; 9];
        out[1..].copy_from_slice(&value.to_be_bytes());
        self.put(&out)
    }
}
