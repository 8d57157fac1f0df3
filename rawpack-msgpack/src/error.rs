use core::fmt;

/// Errors that can occur while decoding MessagePack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A read would run past the end of the input
    BufferUnderrun {
        /// Offset of the read that failed
        pos: usize,
        /// Bytes the read required
        needed: usize,
        /// Bytes that were left
        remaining: usize,
    },
    /// The tag byte has no meaning in this codec
    UnsupportedTag {
        /// The offending byte
        tag: u8,
        /// Offset of the tag byte
        pos: usize,
    },
    /// Containers nest deeper than the configured limit
    DepthLimitExceeded {
        /// The configured limit
        limit: usize,
        /// Offset of the container tag that crossed the limit
        pos: usize,
    },
    /// A complete value was decoded but input remains, and the options deny that
    TrailingBytes {
        /// Offset just past the decoded value
        pos: usize,
        /// Bytes left over
        remaining: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::BufferUnderrun {
                pos,
                needed,
                remaining,
            } => write!(
                f,
                "Buffer underrun at position {pos}: needed {needed} bytes, {remaining} remaining"
            ),
            DecodeError::UnsupportedTag { tag, pos } => {
                write!(f, "Unsupported type tag 0x{tag:02x} at position {pos}")
            }
            DecodeError::DepthLimitExceeded { limit, pos } => {
                write!(f, "Nesting deeper than {limit} levels at position {pos}")
            }
            DecodeError::TrailingBytes { pos, remaining } => {
                write!(f, "{remaining} trailing bytes after value ending at position {pos}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors that can occur while encoding MessagePack
#[derive(Debug)]
pub enum EncodeError {
    /// A byte string, array or map is longer than a 32-bit length field can hold
    SizeTooLarge {
        /// The offending length
        size: usize,
    },
    /// An integer lies outside the 64-bit signed/unsigned envelope
    IntegerOutOfRange {
        /// The offending integer
        value: i128,
    },
    /// The value has no built-in kind and no custom serialization
    UnsupportedValue {
        /// The value's type name
        type_name: String,
    },
    /// Writing the encoded bytes to a writer failed
    Io(std::io::Error),
}

impl From<std::io::Error> for EncodeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::SizeTooLarge { size } => {
                write!(f, "Size too big: {size} (max: 0xffffffff)")
            }
            EncodeError::IntegerOutOfRange { value } => {
                write!(f, "Integer out of range: {value}")
            }
            EncodeError::UnsupportedValue { type_name } => {
                write!(f, "Cannot encode value of type \"{type_name}\"")
            }
            EncodeError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::Io(err) => Some(err),
            _ => None,
        }
    }
}
