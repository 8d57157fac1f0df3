//! `rawpack-msgpack` reads and writes MessagePack for [`rawpack_value::Value`].
//!
//! The codec speaks a fixed subset of MessagePack: nil, booleans, integers up
//! to 64 bits, float32 (read only) and float64, strings and arrays and maps in
//! their fix/16/32 size classes. Strings are carried as raw bytes in both
//! directions. Everything else (`bin`, `ext`, `str8`, the reserved `0xc1`) is
//! rejected with [`DecodeError::UnsupportedTag`].
//!
//! The encoder is canonical: integers use the narrowest width, floats are
//! always float64, and containers use the smallest size class.
//!
//! ```
//! use rawpack_msgpack::{from_slice, to_vec};
//! use rawpack_value::value;
//!
//! let value = value!([1, "two", { "three" => 3.0 }]);
//! let bytes = to_vec(&value).unwrap();
//! assert_eq!(from_slice(&bytes).unwrap(), value);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod error;
pub use error::*;

pub mod tag;

mod width;
pub use width::{IntWidth, NativeInt};

mod options;
pub use options::DecodeOptions;

mod decode;
pub use decode::Decoder;

mod encode;
pub use encode::*;

use rawpack_value::Value;

/// Deserializes the first value in a byte slice.
///
/// Bytes after that value are ignored; use
/// [`DecodeOptions::deny_trailing_bytes`] to reject them instead.
pub fn from_slice(input: &[u8]) -> Result<Value, DecodeError> {
    from_slice_with_options(input, DecodeOptions::default())
}

/// Deserializes one value from a byte slice with the given options.
pub fn from_slice_with_options(input: &[u8], options: DecodeOptions) -> Result<Value, DecodeError> {
    log::trace!("from_slice: {} bytes, {options:?}", input.len());
    let deny_trailing_bytes = options.deny_trailing_bytes;
    let mut decoder = Decoder::with_options(input, options);
    let result = decoder.decode_value().and_then(|value| {
        if !deny_trailing_bytes || decoder.remaining() == 0 {
            Ok(value)
        } else {
            Err(DecodeError::TrailingBytes {
                pos: decoder.position(),
                remaining: decoder.remaining(),
            })
        }
    });
    if let Err(err) = &result {
        log::debug!("decoding {} bytes failed: {err}", input.len());
    }
    result
}
