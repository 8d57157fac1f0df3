//! MessagePack encoder.

use std::io::Write;

use log::{debug, trace};
use rawpack_value::Value;

use crate::error::EncodeError;
use crate::tag::*;
use crate::width::write_integer;

/// Encodes values into a growing byte buffer.
///
/// Successive calls to [`encode`](Encoder::encode) append their output, so a
/// stream of concatenated values can be built in one buffer. A call that fails
/// leaves the buffer exactly as it was before the call.
#[derive(Debug, Default)]
pub struct Encoder {
    out: Vec<u8>,
}

impl Encoder {
    /// Create an encoder with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder that appends to `buf`.
    pub fn with_buffer(buf: Vec<u8>) -> Self {
        Self { out: buf }
    }

    /// Appends the encoding of `value`.
    pub fn encode(&mut self, value: &Value) -> Result<&mut Self, EncodeError> {
        let start = self.out.len();
        match write_value(&mut self.out, value) {
            Ok(()) => {
                trace!("encode: wrote {} bytes", self.out.len() - start);
                Ok(self)
            }
            Err(err) => {
                debug!("encode failed, discarding partial output: {err}");
                self.out.truncate(start);
                Err(err)
            }
        }
    }

    /// Bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Consumes the encoder and returns the buffer.
    pub fn finish(self) -> Vec<u8> {
        self.out
    }
}

/// Serializes a value into a new byte vector.
///
/// # Example
///
/// ```
/// use rawpack_msgpack::to_vec;
/// use rawpack_value::value;
///
/// let bytes = to_vec(&value!({ "compact" => true, "schema" => 0 })).unwrap();
/// assert_eq!(bytes, b"\x82\xa7compact\xc3\xa6schema\x00");
/// ```
pub fn to_vec(value: &Value) -> Result<Vec<u8>, EncodeError> {
    encode_into(value, Vec::new())
}

/// Appends the encoding of `value` to `buf` and returns it.
pub fn encode_into(value: &Value, buf: Vec<u8>) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = Encoder::with_buffer(buf);
    encoder.encode(value)?;
    Ok(encoder.finish())
}

/// Serializes a value to a writer.
///
/// The value is encoded in full before anything is written, so an encoding
/// error never leaves a partial value in the writer.
pub fn to_writer<W: Write>(writer: &mut W, value: &Value) -> Result<(), EncodeError> {
    let bytes = to_vec(value)?;
    writer.write_all(&bytes)?;
    Ok(())
}

/// Writes `value` and everything inside it, depth-first, without recursing.
fn write_value(out: &mut Vec<u8>, value: &Value) -> Result<(), EncodeError> {
    // Values still to be written, next one last
    let mut stack: Vec<&Value> = vec![value];

    while let Some(value) = stack.pop() {
        match value {
            Value::Nil => out.push(MSGPACK_NIL),
            Value::Bool(false) => out.push(MSGPACK_FALSE),
            Value::Bool(true) => out.push(MSGPACK_TRUE),
            Value::Integer(n) => write_integer(out, *n as i128)?,
            Value::Float(f) => {
                out.push(MSGPACK_FLOAT64);
                out.extend_from_slice(&f.to_bits().to_be_bytes());
            }
            Value::Bytes(bytes) => {
                write_str_len(out, bytes.len())?;
                out.extend_from_slice(bytes);
            }
            Value::Array(items) => {
                write_array_len(out, items.len())?;
                stack.extend(items.iter().rev());
            }
            Value::Map(map) => {
                write_map_len(out, map.len())?;
                let first = stack.len();
                for (k, v) in map {
                    stack.push(k);
                    stack.push(v);
                }
                stack[first..].reverse();
            }
            Value::Extension(ext) => match ext.as_to_wire() {
                Some(wire) => out.extend_from_slice(&wire.to_wire()),
                None => {
                    return Err(EncodeError::UnsupportedValue {
                        type_name: ext.type_name().to_owned(),
                    });
                }
            },
        }
    }

    Ok(())
}

/// Writes the tag and length for a byte string.
pub(crate) fn write_str_len(out: &mut Vec<u8>, len: usize) -> Result<(), EncodeError> {
    write_len(
        out,
        len,
        (MSGPACK_FIXSTR_MIN, FIX_STR_LIMIT),
        MSGPACK_STR16,
        MSGPACK_STR32,
    )
}

/// Writes the tag and length for an array.
pub(crate) fn write_array_len(out: &mut Vec<u8>, len: usize) -> Result<(), EncodeError> {
    write_len(
        out,
        len,
        (MSGPACK_FIXARRAY_MIN, FIX_CONTAINER_LIMIT),
        MSGPACK_ARRAY16,
        MSGPACK_ARRAY32,
    )
}

/// Writes the tag and pair count for a map.
pub(crate) fn write_map_len(out: &mut Vec<u8>, len: usize) -> Result<(), EncodeError> {
    write_len(
        out,
        len,
        (MSGPACK_FIXMAP_MIN, FIX_CONTAINER_LIMIT),
        MSGPACK_MAP16,
        MSGPACK_MAP32,
    )
}

/// Picks the smallest size class for `len`: fix (length in the tag), 16-bit or 32-bit.
fn write_len(
    out: &mut Vec<u8>,
    len: usize,
    (fix_base, fix_limit): (u8, usize),
    tag16: u8,
    tag32: u8,
) -> Result<(), EncodeError> {
    if len < fix_limit {
        out.push(fix_base | len as u8);
    } else if let Ok(len) = u16::try_from(len) {
        out.push(tag16);
        out.extend_from_slice(&len.to_be_bytes());
    } else if let Ok(len) = u32::try_from(len) {
        out.push(tag32);
        out.extend_from_slice(&len.to_be_bytes());
    } else {
        return Err(EncodeError::SizeTooLarge { size: len });
    }
    Ok(())
}
