//! The MessagePack tag format table.
//!
//! Every byte value classifies into exactly one [`Tag`]. The table covers the
//! subset of MessagePack this codec speaks; the remaining bytes (`0xc1`, the
//! bin/ext families, `str8`) classify as [`Tag::Unsupported`].

#![allow(missing_docs)]

// MsgPack format constants
pub const MSGPACK_NIL: u8 = 0xc0;
pub const MSGPACK_UNUSED: u8 = 0xc1;
pub const MSGPACK_FALSE: u8 = 0xc2;
pub const MSGPACK_TRUE: u8 = 0xc3;
pub const MSGPACK_FLOAT32: u8 = 0xca;
pub const MSGPACK_FLOAT64: u8 = 0xcb;
pub const MSGPACK_UINT8: u8 = 0xcc;
pub const MSGPACK_UINT16: u8 = 0xcd;
pub const MSGPACK_UINT32: u8 = 0xce;
pub const MSGPACK_UINT64: u8 = 0xcf;
pub const MSGPACK_INT8: u8 = 0xd0;
pub const MSGPACK_INT16: u8 = 0xd1;
pub const MSGPACK_INT32: u8 = 0xd2;
pub const MSGPACK_INT64: u8 = 0xd3;
pub const MSGPACK_STR16: u8 = 0xda;
pub const MSGPACK_STR32: u8 = 0xdb;
pub const MSGPACK_ARRAY16: u8 = 0xdc;
pub const MSGPACK_ARRAY32: u8 = 0xdd;
pub const MSGPACK_MAP16: u8 = 0xde;
pub const MSGPACK_MAP32: u8 = 0xdf;

pub const MSGPACK_POSFIXINT_MAX: u8 = 0x7f;
pub const MSGPACK_FIXMAP_MIN: u8 = 0x80;
pub const MSGPACK_FIXMAP_MAX: u8 = 0x8f;
pub const MSGPACK_FIXARRAY_MIN: u8 = 0x90;
pub const MSGPACK_FIXARRAY_MAX: u8 = 0x9f;
pub const MSGPACK_FIXSTR_MIN: u8 = 0xa0;
pub const MSGPACK_FIXSTR_MAX: u8 = 0xbf;
pub const MSGPACK_NEGFIXINT_MIN: u8 = 0xe0;

/// Containers shorter than this use the fixarray/fixmap encodings.
pub const FIX_CONTAINER_LIMIT: usize = 16;
/// Byte strings shorter than this use the fixstr encoding.
pub const FIX_STR_LIMIT: usize = 32;

/// Width of the explicit length field following a variable-size tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPrefix {
    /// Two big-endian bytes
    U16,
    /// Four big-endian bytes
    U32,
}

impl LengthPrefix {
    /// Number of bytes the length field occupies.
    pub const fn width(self) -> usize {
        match self {
            LengthPrefix::U16 => 2,
            LengthPrefix::U32 => 4,
        }
    }
}

/// Classification of a tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `0x00..=0x7f`, the tag is the value
    PosFixInt(u8),
    /// `0xe0..=0xff`, the tag is the two's-complement value
    NegFixInt(i8),
    /// `0x80..=0x8f`, pair count in the low nibble
    FixMap(u8),
    /// `0x90..=0x9f`, element count in the low nibble
    FixArray(u8),
    /// `0xa0..=0xbf`, byte count in the low five bits
    FixStr(u8),
    Nil,
    False,
    True,
    Float32,
    Float64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Int8,
    Int16,
    Int32,
    Int64,
    Str16,
    Str32,
    Array16,
    Array32,
    Map16,
    Map32,
    /// A byte with no meaning in this codec
    Unsupported(u8),
}

impl Tag {
    /// Classifies a tag byte.
    pub const fn classify(byte: u8) -> Tag {
        match byte {
            0x00..=MSGPACK_POSFIXINT_MAX => Tag::PosFixInt(byte),
            MSGPACK_FIXMAP_MIN..=MSGPACK_FIXMAP_MAX => Tag::FixMap(byte & 0x0f),
            MSGPACK_FIXARRAY_MIN..=MSGPACK_FIXARRAY_MAX => Tag::FixArray(byte & 0x0f),
            MSGPACK_FIXSTR_MIN..=MSGPACK_FIXSTR_MAX => Tag::FixStr(byte & 0x1f),
            MSGPACK_NIL => Tag::Nil,
            MSGPACK_FALSE => Tag::False,
            MSGPACK_TRUE => Tag::True,
            MSGPACK_FLOAT32 => Tag::Float32,
            MSGPACK_FLOAT64 => Tag::Float64,
            MSGPACK_UINT8 => Tag::UInt8,
            MSGPACK_UINT16 => Tag::UInt16,
            MSGPACK_UINT32 => Tag::UInt32,
            MSGPACK_UINT64 => Tag::UInt64,
            MSGPACK_INT8 => Tag::Int8,
            MSGPACK_INT16 => Tag::Int16,
            MSGPACK_INT32 => Tag::Int32,
            MSGPACK_INT64 => Tag::Int64,
            MSGPACK_STR16 => Tag::Str16,
            MSGPACK_STR32 => Tag::Str32,
            MSGPACK_ARRAY16 => Tag::Array16,
            MSGPACK_ARRAY32 => Tag::Array32,
            MSGPACK_MAP16 => Tag::Map16,
            MSGPACK_MAP32 => Tag::Map32,
            MSGPACK_NEGFIXINT_MIN..=0xff => Tag::NegFixInt(byte as i8),
            _ => Tag::Unsupported(byte),
        }
    }

    /// Payload size of a fixed-width scalar tag, `None` for every other tag.
    pub const fn payload_width(self) -> Option<usize> {
        match self {
            Tag::UInt8 | Tag::Int8 => Some(1),
            Tag::UInt16 | Tag::Int16 => Some(2),
            Tag::UInt32 | Tag::Int32 | Tag::Float32 => Some(4),
            Tag::UInt64 | Tag::Int64 | Tag::Float64 => Some(8),
            _ => None,
        }
    }

    /// Length field of an explicit-length container tag, `None` for every other tag.
    pub const fn length_prefix(self) -> Option<LengthPrefix> {
        match self {
            Tag::Str16 | Tag::Array16 | Tag::Map16 => Some(LengthPrefix::U16),
            Tag::Str32 | Tag::Array32 | Tag::Map32 => Some(LengthPrefix::U32),
            _ => None,
        }
    }
}
