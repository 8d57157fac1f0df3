//! Integer width selection.
//!
//! The encoder always picks the narrowest wire integer that holds a value
//! exactly. The decoder maps wire integers onto the host's native signed
//! integer and falls back to a float when the value does not fit.

use rawpack_value::Value;

use crate::error::EncodeError;
use crate::tag::*;

/// Wire representation chosen for an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    /// Single byte: positive or negative fixint
    FixInt,
    /// `0xcc` plus one byte
    UInt8,
    /// `0xcd` plus two bytes
    UInt16,
    /// `0xce` plus four bytes
    UInt32,
    /// `0xcf` plus eight bytes
    UInt64,
    /// `0xd0` plus one byte
    Int8,
    /// `0xd1` plus two bytes
    Int16,
    /// `0xd2` plus four bytes
    Int32,
    /// `0xd3` plus eight bytes
    Int64,
}

impl IntWidth {
    /// Picks the narrowest representation of `n`.
    ///
    /// Fixints cover `-32..=127`. Other non-negative values use the unsigned
    /// family and other negative values the signed family. Anything outside
    /// `i64::MIN..=u64::MAX` is an error.
    pub fn select(n: i128) -> Result<Self, EncodeError> {
        let width = match n {
            -32..=127 => IntWidth::FixInt,
            128..=0xff => IntWidth::UInt8,
            0x100..=0xffff => IntWidth::UInt16,
            0x1_0000..=0xffff_ffff => IntWidth::UInt32,
            0x1_0000_0000.. if n <= u64::MAX as i128 => IntWidth::UInt64,
            -128..=-33 => IntWidth::Int8,
            -32768..=-129 => IntWidth::Int16,
            -2147483648..=-32769 => IntWidth::Int32,
            _ if n >= i64::MIN as i128 && n < 0 => IntWidth::Int64,
            _ => return Err(EncodeError::IntegerOutOfRange { value: n }),
        };
        Ok(width)
    }

    /// The tag byte, `None` for fixints (the tag is the value).
    pub const fn tag(self) -> Option<u8> {
        match self {
            IntWidth::FixInt => None,
            IntWidth::UInt8 => Some(MSGPACK_UINT8),
            IntWidth::UInt16 => Some(MSGPACK_UINT16),
            IntWidth::UInt32 => Some(MSGPACK_UINT32),
            IntWidth::UInt64 => Some(MSGPACK_UINT64),
            IntWidth::Int8 => Some(MSGPACK_INT8),
            IntWidth::Int16 => Some(MSGPACK_INT16),
            IntWidth::Int32 => Some(MSGPACK_INT32),
            IntWidth::Int64 => Some(MSGPACK_INT64),
        }
    }

    /// Total encoded size in bytes, tag included.
    pub const fn encoded_len(self) -> usize {
        match self {
            IntWidth::FixInt => 1,
            IntWidth::UInt8 | IntWidth::Int8 => 2,
            IntWidth::UInt16 | IntWidth::Int16 => 3,
            IntWidth::UInt32 | IntWidth::Int32 => 5,
            IntWidth::UInt64 | IntWidth::Int64 => 9,
        }
    }

    /// Appends `n` in this representation. `n` must be one `select` chose this width for.
    pub(crate) fn write(self, n: i128, out: &mut Vec<u8>) {
        match self {
            IntWidth::FixInt => out.push(n as i8 as u8),
            IntWidth::UInt8 => out.extend_from_slice(&[MSGPACK_UINT8, n as u8]),
            IntWidth::UInt16 => {
                out.push(MSGPACK_UINT16);
                out.extend_from_slice(&(n as u16).to_be_bytes());
            }
            IntWidth::UInt32 => {
                out.push(MSGPACK_UINT32);
                out.extend_from_slice(&(n as u32).to_be_bytes());
            }
            IntWidth::UInt64 => {
                out.push(MSGPACK_UINT64);
                out.extend_from_slice(&(n as u64).to_be_bytes());
            }
            IntWidth::Int8 => out.extend_from_slice(&[MSGPACK_INT8, n as i8 as u8]),
            IntWidth::Int16 => {
                out.push(MSGPACK_INT16);
                out.extend_from_slice(&(n as i16).to_be_bytes());
            }
            IntWidth::Int32 => {
                out.push(MSGPACK_INT32);
                out.extend_from_slice(&(n as i32).to_be_bytes());
            }
            IntWidth::Int64 => {
                out.push(MSGPACK_INT64);
                out.extend_from_slice(&(n as i64).to_be_bytes());
            }
        }
    }
}

/// Selects and appends the narrowest encoding of `n`.
pub(crate) fn write_integer(out: &mut Vec<u8>, n: i128) -> Result<(), EncodeError> {
    IntWidth::select(n)?.write(n, out);
    Ok(())
}

/// Range of the host's native signed integer.
///
/// Decoded integers outside this range become [`Value::Float`] holding the
/// nearest `f64`. That conversion is lossy once the magnitude exceeds 2^53,
/// and the encoder never reverses it: a float always goes back out as a
/// float64.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NativeInt {
    /// 16-bit host integers
    I16,
    /// 32-bit host integers
    I32,
    /// 64-bit host integers
    #[default]
    I64,
}

impl NativeInt {
    /// Smallest native integer.
    pub const fn min(self) -> i64 {
        match self {
            NativeInt::I16 => i16::MIN as i64,
            NativeInt::I32 => i32::MIN as i64,
            NativeInt::I64 => i64::MIN,
        }
    }

    /// Largest native integer.
    pub const fn max(self) -> i64 {
        match self {
            NativeInt::I16 => i16::MAX as i64,
            NativeInt::I32 => i32::MAX as i64,
            NativeInt::I64 => i64::MAX,
        }
    }

    /// Returns `true` if `n` is a native integer.
    pub const fn contains(self, n: i128) -> bool {
        self.min() as i128 <= n && n <= self.max() as i128
    }

    /// Wraps a decoded wire integer, falling back to a float outside the native range.
    pub fn to_value(self, n: i128) -> Value {
        if self.contains(n) {
            Value::Integer(n as i64)
        } else {
            log::trace!("integer {n} exceeds native {self:?}, decoding as float");
            Value::Float(n as f64)
        }
    }
}
