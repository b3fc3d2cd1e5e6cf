//! # Snugpack
//!
//! A small, bounded codec for the MessagePack scalar subset.
//!
//! ## Philosophy
//!
//! - **Bounded**: both halves work on caller-provided buffers. The codec
//!   itself never allocates and never reallocates.
//! - **Minimal form**: the encoder always emits the shortest MessagePack
//!   form capable of representing a value, so encoded streams are
//!   byte-comparable across producers.
//! - **Liberal reads**: the decoder accepts any integer wire form whose
//!   value fits the requested type, be it narrower, wider, signed or
//!   unsigned.
//! - **Latched errors**: the first failure sticks. Callers may chain a
//!   whole series of operations and check once at the end.
//!
//! ## Format
//!
//! The scalar subset of MessagePack: positive/negative fixint,
//! uint8..uint64, int8..int64, float32/float64, bool, nil. Multi-byte
//! payloads are big-endian. Container, string, bin and ext families are
//! left to collaborators via the [`Tag`] hook surface.

mod cursor;
mod macros;

pub mod decoder;
pub mod encoder;
pub mod tag;
pub mod types;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use tag::size;
pub use tag::Tag;
pub use types::Error;
pub use types::Result;
