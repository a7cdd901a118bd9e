//! Error types for the codec.
//!
//! The panicking entry points (`uint`, `UintMulti::wrap`, ...) report the same
//! conditions through these variants' `Display` text; the `try_*` twins return
//! them instead.

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors that can occur while encoding or decoding engine integers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Host value does not fit in the engine's native unsigned int
    #[error("value {value} overflows unsigned int (max: {max})")]
    Overflow { value: u64, max: u64 },

    /// Stored engine value does not fit in the host's unsigned int
    #[error("value {value} overflows host uint (max: {max})")]
    ValueNotRepresentable { value: u64, max: u64 },

    /// Scalar buffer has the wrong number of bytes
    #[error("invalid uint buffer: {len} bytes (expected {expected})")]
    InvalidLength { len: usize, expected: usize },

    /// Page length is not a multiple of the value stride
    #[error("argument is not a page of uint values: {len} bytes is not a multiple of {stride}")]
    InvalidPage { len: usize, stride: usize },

    /// Page index is past the last element
    #[error("index {index} out of bounds for page of {len} values")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Malformed hex input (command-line tool)
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl CodecError {
    /// Create an invalid hex error with a message
    pub fn invalid_hex(msg: impl Into<String>) -> Self {
        Self::InvalidHex(msg.into())
    }
}
