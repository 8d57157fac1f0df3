//! MessagePack decoder.
//!
//! Decoding is a single synchronous pass over a byte slice. Nested containers
//! are tracked on an explicit frame stack rather than by recursion, so deeply
//! nested input costs heap memory, never call stack.

use bytes::Bytes;
use log::trace;
use rawpack_value::{VMap, Value};

use crate::error::DecodeError;
use crate::options::DecodeOptions;
use crate::tag::Tag;

/// A container that is still collecting its elements.
#[derive(Debug)]
enum Frame {
    Array {
        items: Vec<Value>,
        remaining: usize,
    },
    Map {
        map: VMap,
        /// Key read, waiting for its value
        key: Option<Value>,
        /// Pairs not yet complete
        remaining: usize,
    },
}

impl Frame {
    /// Adds the next decoded value. Returns `true` once the container is full.
    fn push(&mut self, value: Value) -> bool {
        match self {
            Frame::Array { items, remaining } => {
                items.push(value);
                *remaining -= 1;
                *remaining == 0
            }
            Frame::Map {
                map,
                key,
                remaining,
            } => match key.take() {
                None => {
                    *key = Some(value);
                    false
                }
                Some(k) => {
                    // A repeated key overwrites the earlier pair.
                    map.insert(k, value);
                    *remaining -= 1;
                    *remaining == 0
                }
            },
        }
    }

    fn into_value(self) -> Value {
        match self {
            Frame::Array { items, .. } => Value::Array(items),
            Frame::Map { map, .. } => Value::Map(map),
        }
    }
}

/// What a single tag produced: a finished value or an open container.
enum Item {
    Value(Value),
    Open(Frame),
}

#[derive(Debug, Clone, Copy)]
enum ContainerKind {
    Array,
    Map,
}

/// Decodes MessagePack values from a byte slice.
///
/// Each call to [`decode_value`](Decoder::decode_value) consumes exactly one
/// value and leaves the cursor just past it, so concatenated values can be
/// read one after another.
pub struct Decoder<'de> {
    input: &'de [u8],
    pos: usize,
    options: DecodeOptions,
    /// Containers opened but not yet complete, innermost last
    stack: Vec<Frame>,
}

impl<'de> Decoder<'de> {
    /// Create a decoder with default options.
    pub fn new(input: &'de [u8]) -> Self {
        Self::with_options(input, DecodeOptions::default())
    }

    /// Create a decoder with the given options.
    pub fn with_options(input: &'de [u8], options: DecodeOptions) -> Self {
        Self {
            input,
            pos: 0,
            options,
            stack: Vec::new(),
        }
    }

    /// Current cursor offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the cursor.
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Decodes one complete value.
    ///
    /// Fails without returning anything partial if the input ends early at
    /// any depth or holds an unsupported tag.
    pub fn decode_value(&mut self) -> Result<Value, DecodeError> {
        self.stack.clear();

        loop {
            let mut value = match self.read_item()? {
                Item::Value(value) => value,
                Item::Open(frame) => {
                    trace!(
                        "decode: open {:?} at depth {}",
                        frame,
                        self.stack.len() + 1
                    );
                    self.stack.push(frame);
                    continue;
                }
            };

            // Hand the value to the innermost container; every container it
            // completes becomes the value handed to the next one out.
            loop {
                let Some(mut frame) = self.stack.pop() else {
                    return Ok(value);
                };
                if frame.push(value) {
                    trace!("decode: close container at depth {}", self.stack.len() + 1);
                    value = frame.into_value();
                } else {
                    self.stack.push(frame);
                    break;
                }
            }
        }
    }

    /// Reads one tag and whatever it fully determines.
    fn read_item(&mut self) -> Result<Item, DecodeError> {
        let tag_pos = self.pos;
        let byte = self.read_byte()?;

        let value = match Tag::classify(byte) {
            Tag::Nil => Value::Nil,
            Tag::False => Value::Bool(false),
            Tag::True => Value::Bool(true),

            Tag::PosFixInt(n) => self.integer(n as i128),
            Tag::NegFixInt(n) => self.integer(n as i128),

            Tag::UInt8 => {
                let n = self.read_byte()?;
                self.integer(n as i128)
            }
            Tag::UInt16 => {
                let n = self.read_u16()?;
                self.integer(n as i128)
            }
            Tag::UInt32 => {
                let n = self.read_u32()?;
                self.integer(n as i128)
            }
            Tag::UInt64 => {
                let n = self.read_u64()?;
                self.integer(n as i128)
            }
            Tag::Int8 => {
                let n = self.read_byte()? as i8;
                self.integer(n as i128)
            }
            Tag::Int16 => {
                let n = self.read_u16()? as i16;
                self.integer(n as i128)
            }
            Tag::Int32 => {
                let n = self.read_u32()? as i32;
                self.integer(n as i128)
            }
            Tag::Int64 => {
                let n = self.read_u64()? as i64;
                self.integer(n as i128)
            }

            Tag::Float32 => Value::Float(f64::from(f32::from_bits(self.read_u32()?))),
            Tag::Float64 => Value::Float(f64::from_bits(self.read_u64()?)),

            Tag::FixStr(len) => self.read_raw(len as usize)?,
            Tag::Str16 => {
                let len = self.read_u16()? as usize;
                self.read_raw(len)?
            }
            Tag::Str32 => {
                let len = self.read_u32()? as usize;
                self.read_raw(len)?
            }

            Tag::FixArray(len) => return self.open(ContainerKind::Array, len as usize, tag_pos),
            Tag::Array16 => {
                let len = self.read_u16()? as usize;
                return self.open(ContainerKind::Array, len, tag_pos);
            }
            Tag::Array32 => {
                let len = self.read_u32()? as usize;
                return self.open(ContainerKind::Array, len, tag_pos);
            }
            Tag::FixMap(len) => return self.open(ContainerKind::Map, len as usize, tag_pos),
            Tag::Map16 => {
                let len = self.read_u16()? as usize;
                return self.open(ContainerKind::Map, len, tag_pos);
            }
            Tag::Map32 => {
                let len = self.read_u32()? as usize;
                return self.open(ContainerKind::Map, len, tag_pos);
            }

            Tag::Unsupported(tag) => {
                return Err(DecodeError::UnsupportedTag { tag, pos: tag_pos });
            }
        };

        Ok(Item::Value(value))
    }

    /// Starts a container of `len` elements (pairs, for maps).
    fn open(&mut self, kind: ContainerKind, len: usize, tag_pos: usize) -> Result<Item, DecodeError> {
        if let Some(limit) = self.options.max_depth
            && self.stack.len() >= limit
        {
            return Err(DecodeError::DepthLimitExceeded {
                limit,
                pos: tag_pos,
            });
        }

        // Every element takes at least one byte, so the input bounds how much
        // a forged length can make us reserve.
        let item = match kind {
            ContainerKind::Array if len == 0 => Item::Value(Value::Array(Vec::new())),
            ContainerKind::Map if len == 0 => Item::Value(Value::Map(VMap::new())),
            ContainerKind::Array => Item::Open(Frame::Array {
                items: Vec::with_capacity(len.min(self.remaining())),
                remaining: len,
            }),
            ContainerKind::Map => Item::Open(Frame::Map {
                map: VMap::with_capacity(len.min(self.remaining() / 2)),
                key: None,
                remaining: len,
            }),
        };
        Ok(item)
    }

    fn integer(&self, n: i128) -> Value {
        self.options.native_int.to_value(n)
    }

    /// Read a single byte.
    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let byte = self
            .input
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.underrun(1))?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read N bytes as a slice.
    fn read_bytes(&mut self, n: usize) -> Result<&'de [u8], DecodeError> {
        if n > self.remaining() {
            return Err(self.underrun(n));
        }
        let input = self.input;
        let slice = &input[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read a u16 in big-endian.
    fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Read a u32 in big-endian.
    fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a u64 in big-endian.
    fn read_u64(&mut self) -> Result<u64, DecodeError> {
        let bytes = self.read_bytes(8)?;
        Ok(u64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    /// Copy `len` raw bytes into a new value.
    fn read_raw(&mut self, len: usize) -> Result<Value, DecodeError> {
        let bytes = self.read_bytes(len)?;
        Ok(Value::Bytes(Bytes::copy_from_slice(bytes)))
    }

    fn underrun(&self, needed: usize) -> DecodeError {
        DecodeError::BufferUnderrun {
            pos: self.pos,
            needed,
            remaining: self.remaining(),
        }
    }
}
