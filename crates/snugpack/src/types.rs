//! Core error types shared by the encoder and decoder.

use thiserror::Error;

/// Codec errors.
///
/// Errors are latched: the first failure sticks to the codec that produced
/// it, and every later operation on that codec returns the same value
/// without touching the cursor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Encoding would pass the end of the output buffer.
    #[error("output buffer full")]
    BufferFull,
    /// Input ran out of bytes mid-value.
    #[error("input exhausted")]
    Exhausted,
    /// Byte is not a valid MessagePack tag.
    #[error("invalid tag byte {0:#04x}")]
    InvalidTag(u8),
    /// Tag is valid MessagePack but support for it is compiled out.
    #[error("unsupported tag byte {0:#04x}")]
    Unsupported(u8),
    /// Tag or value does not fit the requested type.
    #[error("type mismatch")]
    TypeMismatch,
    /// Payload violates a format rule, such as NaN on the wire.
    #[error("malformed payload")]
    Malformed,
    /// Value decoded fine but falls outside the caller-supplied bounds.
    #[error("value out of range")]
    OutOfRange,
    /// Reserved for collaborators that allocate; the core never returns it.
    #[error("out of memory")]
    OutOfMemory,
}

/// Specialized `Result` for codec operations.
pub type Result<T> = core::result::Result<T, Error>;
