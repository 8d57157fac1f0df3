//! `rawpack-value` provides the dynamic value model that the rawpack codec
//! reads and writes.
//!
//! # Features
//!
//! - **Eight value kinds**: Nil, Bool, Integer, Float, Bytes, Array, Map, Extension
//! - **Raw bytes**: text and binary data share one [`Value::Bytes`] kind, as on the wire
//! - **Ordered maps with any key**: [`VMap`] keeps insertion order and unique keys
//! - **Host objects**: [`Extension`] carries objects of no built-in kind, which may
//!   opt into custom serialization through [`HostObject::as_to_wire`]

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod macros;

mod value;
pub use value::*;

mod map;
pub use map::*;

mod extension;
pub use extension::*;
