//! Decoding half: borrows a buffer and unpacks scalars, width-liberal.

use log::debug;
use log::trace;

use crate::cursor::ReadCursor;
use crate::macros::decode_int_ops;
use crate::macros::decode_uint_ops;
use crate::tag::Tag;
use crate::types::Error;
use crate::types::Result;

#[cfg(any(feature = "float32", feature = "float64"))]
use crate::macros::decode_float_ops;

/// A raw integer pulled off the wire before it is fitted to a target type.
///
/// Non-negative values normalize to `Unsigned` no matter which family
/// encoded them, so fitting a target is a single bounds check and the
/// signed/unsigned cross-reads fall out for free.
#[derive(Debug, Clone, Copy)]
enum RawInt {
    Unsigned(u64),
    /// Always strictly negative.
    Negative(i64),
}

impl RawInt {
    fn from_signed(value: i64) -> Self {
        if value < 0 {
            RawInt::Negative(value)
        } else {
            RawInt::Unsigned(value as u64)
        }
    }
}

/// Unpacks scalars from a caller-provided byte buffer.
///
/// The decoder is width-liberal within range: any integer wire form is
/// accepted by any integer operation as long as the decoded value fits the
/// requested type. It is not liberal about families, though. A bool read
/// never accepts a numeric form and vice versa.
///
/// Errors latch exactly as on [`crate::Encoder`]: the first failure
/// freezes the read cursor and repeats itself on every later call.
pub struct Decoder<'a> {
    cursor: ReadCursor<'a>,
    latched: Option<Error>,
}

impl<'a> Decoder<'a> {
    /// Borrows `buf` for reading. `buf` must not be empty.
    pub fn new(buf: &'a [u8]) -> Self {
        debug_assert!(!buf.is_empty());
        trace!("decoder over {} byte buffer", buf.len());
        Self {
            cursor: ReadCursor::new(buf),
            latched: None,
        }
    }

    /// Bytes not yet consumed.
    pub fn data_left(&self) -> usize {
        self.cursor.remaining()
    }

    /// Releases the buffer borrow and reports how many bytes were consumed.
    ///
    /// Dropping the decoder releases the borrow just the same.
    pub fn finish(self) -> usize {
        trace!("decoder finished, {} bytes consumed", self.cursor.pos());
        self.cursor.pos()
    }

    fn guard(&self) -> Result<()> {
        match self.latched {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn latch(&mut self, err: Error) -> Error {
        debug!("decode error at offset {}: {}", self.cursor.pos(), err);
        self.latched = Some(err);
        err
    }

    fn fetch_tag(&mut self) -> Result<Tag> {
        self.guard()?;
        let byte = self.cursor.read_byte().map_err(|err| self.latch(err))?;
        Tag::from_byte(byte).map_err(|err| self.latch(err))
    }

    /// Reads the next tag byte, advancing past it.
    ///
    /// Collaborator hook: foreign families come back as [`Tag::Other`] for
    /// container and string decoders to interpret. Fails with
    /// [`Error::Exhausted`] on an empty buffer and [`Error::InvalidTag`]
    /// on the reserved byte.
    pub fn read_tag(&mut self) -> Result<Tag> {
        self.fetch_tag()
    }

    /// Looks at the next tag byte without consuming it.
    ///
    /// Unlike every other operation, peeking never latches an error.
    pub fn peek_tag(&self) -> Result<Tag> {
        self.guard()?;
        Tag::from_byte(self.cursor.peek_byte()?)
    }

    fn read_payload<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.cursor.read_array::<N>().map_err(|err| self.latch(err))
    }

    /// Reads one integer of any width off the wire, sign preserved.
    fn read_raw_int(&mut self) -> Result<RawInt> {
        let tag = self.fetch_tag()?;
        let raw = match tag {
            Tag::FixPos(v) => RawInt::Unsigned(v as u64),
            Tag::FixNeg(v) => RawInt::Negative(v as i64),
            Tag::U8 => RawInt::Unsigned(self.read_payload::<1>()?[0] as u64),
            Tag::U16 => {
                RawInt::Unsigned(u16::from_be_bytes(self.read_payload()?) as u64)
            }
            Tag::U32 => {
                RawInt::Unsigned(u32::from_be_bytes(self.read_payload()?) as u64)
            }
            Tag::U64 => RawInt::Unsigned(u64::from_be_bytes(self.read_payload()?)),
            Tag::I8 => {
                RawInt::from_signed(self.read_payload::<1>()?[0] as i8 as i64)
            }
            Tag::I16 => {
                RawInt::from_signed(i16::from_be_bytes(self.read_payload()?) as i64)
            }
            Tag::I32 => {
                RawInt::from_signed(i32::from_be_bytes(self.read_payload()?) as i64)
            }
            Tag::I64 => RawInt::from_signed(i64::from_be_bytes(self.read_payload()?)),
            _ => return Err(self.latch(Error::TypeMismatch)),
        };
        Ok(raw)
    }

    decode_uint_ops!(u8, decode_u8, decode_u8_min, decode_u8_max, decode_u8_range);
    decode_uint_ops!(u16, decode_u16, decode_u16_min, decode_u16_max, decode_u16_range);
    decode_uint_ops!(u32, decode_u32, decode_u32_min, decode_u32_max, decode_u32_range);
    decode_uint_ops!(u64, decode_u64, decode_u64_min, decode_u64_max, decode_u64_range);

    decode_int_ops!(i8, decode_i8, decode_i8_min, decode_i8_max, decode_i8_range);
    decode_int_ops!(i16, decode_i16, decode_i16_min, decode_i16_max, decode_i16_range);
    decode_int_ops!(i32, decode_i32, decode_i32_min, decode_i32_max, decode_i32_range);
    decode_int_ops!(i64, decode_i64, decode_i64_min, decode_i64_max, decode_i64_range);

    /// Decodes a boolean. Only `0xc2`/`0xc3` match; numeric zero and one
    /// do not.
    pub fn decode_bool(&mut self) -> Result<bool> {
        match self.fetch_tag()? {
            Tag::True => Ok(true),
            Tag::False => Ok(false),
            _ => Err(self.latch(Error::TypeMismatch)),
        }
    }

    /// Decodes nil. Only `0xc0` matches.
    pub fn decode_nil(&mut self) -> Result<()> {
        match self.fetch_tag()? {
            Tag::Nil => Ok(()),
            _ => Err(self.latch(Error::TypeMismatch)),
        }
    }

    /// Reads and checks a `float32` payload once its tag has been consumed.
    #[cfg(feature = "float32")]
    fn read_f32_payload(&mut self) -> Result<f32> {
        let value = f32::from_be_bytes(self.read_payload()?);
        if value.is_nan() {
            return Err(self.latch(Error::Malformed));
        }
        Ok(value)
    }

    /// Decodes an `f32`. Only the `float32` form matches; NaN on the wire
    /// is malformed and never delivered.
    #[cfg(feature = "float32")]
    pub fn decode_f32(&mut self) -> Result<f32> {
        match self.fetch_tag()? {
            Tag::F32 => self.read_f32_payload(),
            _ => Err(self.latch(Error::TypeMismatch)),
        }
    }

    /// Decodes an `f64` from the `float64` form, or from the `float32`
    /// form by widening. NaN on the wire is malformed and never delivered.
    #[cfg(feature = "float64")]
    pub fn decode_f64(&mut self) -> Result<f64> {
        match self.fetch_tag()? {
            Tag::F64 => {
                let value = f64::from_be_bytes(self.read_payload()?);
                if value.is_nan() {
                    return Err(self.latch(Error::Malformed));
                }
                Ok(value)
            }
            #[cfg(feature = "float32")]
            Tag::F32 => self.read_f32_payload().map(f64::from),
            #[cfg(not(feature = "float32"))]
            Tag::F32 => Err(self.latch(Error::Unsupported(crate::tag::F32))),
            _ => Err(self.latch(Error::TypeMismatch)),
        }
    }
}

#[cfg(feature = "float32")]
impl<'a> Decoder<'a> {
    decode_float_ops!(f32, decode_f32, decode_f32_min, decode_f32_max, decode_f32_range);
}

#[cfg(feature = "float64")]
impl<'a> Decoder<'a> {
    decode_float_ops!(f64, decode_f64, decode_f64_min, decode_f64_max, decode_f64_range);
}
