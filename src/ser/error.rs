use core::fmt;
use serde::Serialize;

/// Canonical serialization error surfaced while encoding or decoding data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SerError {
    /// Input ended before the expected number of bytes were read.
    BufferUnderrun {
        /// Bytes the failed read required.
        needed: usize,
        /// Bytes left in the input when the read was attempted.
        remaining: usize,
    },
    /// A decoded varint exceeded the width of the target integer.
    IntegerOverflow {
        /// Bit width the value had to fit in.
        max_bits: u32,
    },
    /// A varint was not minimally encoded.
    NonCanonicalEncoding,
    /// String payload bytes were not valid UTF-8.
    InvalidUtf8,
    /// A boolean or option presence byte held a value other than 0 or 1.
    InvalidFlagByte {
        /// The offending byte.
        byte: u8,
    },
    /// A variant ordinal had no mapped case.
    InvalidVariantIndex {
        /// Sum type that rejected the ordinal.
        name: &'static str,
        /// The rejected ordinal.
        index: u32,
    },
    /// A declared-but-unfinished case was exercised.
    Unimplemented {
        /// Case that has no encoding yet.
        name: &'static str,
    },
    /// Additional bytes remained after consuming the expected payload.
    TrailingBytes {
        /// Position reached by the decoder.
        consumed: usize,
        /// Number of remaining bytes.
        remaining: usize,
    },
}

impl SerError {
    /// Creates a buffer-underrun error helper.
    pub fn underrun(needed: usize, remaining: usize) -> Self {
        SerError::BufferUnderrun { needed, remaining }
    }

    /// Creates an integer-overflow error helper.
    pub fn overflow(max_bits: u32) -> Self {
        SerError::IntegerOverflow { max_bits }
    }

    /// Creates an invalid-flag-byte error helper.
    pub fn invalid_flag(byte: u8) -> Self {
        SerError::InvalidFlagByte { byte }
    }

    /// Creates an invalid-variant-index error helper.
    pub fn invalid_variant(name: &'static str, index: u32) -> Self {
        SerError::InvalidVariantIndex { name, index }
    }

    /// Creates an unimplemented-case error helper.
    pub fn unimplemented(name: &'static str) -> Self {
        SerError::Unimplemented { name }
    }

    /// Creates a trailing-bytes error helper.
    pub fn trailing_bytes(consumed: usize, remaining: usize) -> Self {
        SerError::TrailingBytes {
            consumed,
            remaining,
        }
    }
}

impl fmt::Display for SerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerError::BufferUnderrun { needed, remaining } => write!(
                f,
                "buffer underrun: needed {needed} bytes, {remaining} remaining"
            ),
            SerError::IntegerOverflow { max_bits } => {
                write!(f, "varint exceeds {max_bits}-bit target width")
            }
            SerError::NonCanonicalEncoding => write!(f, "varint is not minimally encoded"),
            SerError::InvalidUtf8 => write!(f, "string payload is not valid UTF-8"),
            SerError::InvalidFlagByte { byte } => {
                write!(f, "flag byte must be 0 or 1, got {byte:#04x}")
            }
            SerError::InvalidVariantIndex { name, index } => {
                write!(f, "invalid variant index {index} for {name}")
            }
            SerError::Unimplemented { name } => write!(f, "{name} has no implemented encoding"),
            SerError::TrailingBytes {
                consumed,
                remaining,
            } => write!(
                f,
                "trailing bytes: consumed {consumed}, {remaining} left over"
            ),
        }
    }
}

impl std::error::Error for SerError {}

/// Convenient alias for serialization results.
pub type SerResult<T> = core::result::Result<T, SerError>;
