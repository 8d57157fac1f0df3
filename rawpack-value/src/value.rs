//! Core `Value` type.
//!
//! `Value` is the dynamically-typed unit of data the codec reads and writes.
//! Text and binary payloads share the single [`Value::Bytes`] variant, and host
//! objects without a built-in kind travel as [`Value::Extension`].

use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::mem;

use bytes::Bytes;

use crate::extension::Extension;
use crate::map::VMap;

/// Enum distinguishing the value types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    /// Nil value
    Nil,
    /// Boolean value
    Bool,
    /// Native signed integer
    Integer,
    /// 64-bit floating point
    Float,
    /// Raw bytes (text or binary)
    Bytes,
    /// Ordered sequence
    Array,
    /// Key-value mapping
    Map,
    /// Host object with no built-in kind
    Extension,
}

impl ValueType {
    /// The name of this kind, as used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::Nil => "nil",
            ValueType::Bool => "bool",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Bytes => "bytes",
            ValueType::Array => "array",
            ValueType::Map => "map",
            ValueType::Extension => "extension",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamic value: nil, booleans, integers, floats, bytes, arrays, maps or
/// host objects.
///
/// Equality is structural. Floats compare by bit pattern, so `NaN` equals
/// itself and `0.0` is distinct from `-0.0`; this keeps `Value` a lawful
/// `Eq + Hash` map key.
#[derive(Clone, Default)]
pub enum Value {
    /// The nil value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A native signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// Raw bytes, used for both text and binary data.
    Bytes(Bytes),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// An insertion-ordered mapping with unique keys.
    Map(VMap),
    /// A host object that is none of the above.
    Extension(Extension),
}

impl Value {
    /// Returns the type of this value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Nil => ValueType::Nil,
            Value::Bool(_) => ValueType::Bool,
            Value::Integer(_) => ValueType::Integer,
            Value::Float(_) => ValueType::Float,
            Value::Bytes(_) => ValueType::Bytes,
            Value::Array(_) => ValueType::Array,
            Value::Map(_) => ValueType::Map,
            Value::Extension(_) => ValueType::Extension,
        }
    }

    /// Returns the name of this value's type.
    ///
    /// For extensions this is the host object's own type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Value::Extension(ext) => ext.type_name(),
            other => other.value_type().name(),
        }
    }

    fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Map(_))
    }

    /// Returns `true` if this is the nil value.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns the boolean if this is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Integer`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number as `f64` if this is a `Float` or an `Integer`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the raw bytes if this is `Bytes`.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the bytes as UTF-8 text, if they are `Bytes` holding valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| core::str::from_utf8(b).ok())
    }

    /// Returns the elements if this is an `Array`.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the elements mutably if this is an `Array`.
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the map if this is a `Map`.
    #[must_use]
    pub fn as_map(&self) -> Option<&VMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the map mutably if this is a `Map`.
    #[must_use]
    pub fn as_map_mut(&mut self) -> Option<&mut VMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the host object handle if this is an `Extension`.
    #[must_use]
    pub fn as_extension(&self) -> Option<&Extension> {
        match self {
            Value::Extension(ext) => Some(ext),
            _ => None,
        }
    }
}

// === PartialEq, Eq ===

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Extension(a), Value::Extension(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

// === Hash ===

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value_type().hash(state);

        match self {
            Value::Nil => {}
            Value::Bool(b) => b.hash(state),
            Value::Integer(n) => n.hash(state),
            Value::Float(n) => n.to_bits().hash(state),
            Value::Bytes(b) => b.hash(state),
            Value::Array(items) => items.hash(state),
            Value::Map(map) => map.hash(state),
            Value::Extension(ext) => ext.hash(state),
        }
    }
}

// === Drop ===

impl Drop for Value {
    /// Tears nested containers down from a worklist, so dropping a deeply
    /// nested value never recurses.
    fn drop(&mut self) {
        let mut pending = match self {
            Value::Array(items) if items.iter().any(Value::is_container) => mem::take(items),
            Value::Map(map) if map.iter().any(|(k, v)| k.is_container() || v.is_container()) => {
                let mut pending = Vec::with_capacity(map.len() * 2);
                for (k, v) in mem::take(map) {
                    pending.push(k);
                    pending.push(v);
                }
                pending
            }
            _ => return,
        };

        while let Some(mut value) = pending.pop() {
            match &mut value {
                Value::Array(items) => pending.append(items),
                Value::Map(map) => {
                    for (k, v) in mem::take(map) {
                        pending.push(k);
                        pending.push(v);
                    }
                }
                _ => {}
            }
            // `value` is now childless and drops without recursing.
        }
    }
}

// === Debug ===

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => Debug::fmt(b, f),
            Value::Integer(n) => Debug::fmt(n, f),
            Value::Float(n) => Debug::fmt(n, f),
            // Text reads better than a byte list in test failures.
            Value::Bytes(b) => match core::str::from_utf8(b) {
                Ok(s) => Debug::fmt(s, f),
                Err(_) => Debug::fmt(b, f),
            },
            Value::Array(items) => f.debug_list().entries(items).finish(),
            Value::Map(map) => Debug::fmt(map, f),
            Value::Extension(ext) => Debug::fmt(ext, f),
        }
    }
}

// === From implementations ===

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Bytes(Bytes::from(s))
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(Bytes::copy_from_slice(b))
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(b))
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<VMap> for Value {
    fn from(map: VMap) -> Self {
        Value::Map(map)
    }
}

impl From<Extension> for Value {
    fn from(ext: Extension) -> Self {
        Value::Extension(ext)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Nil,
        }
    }
}

// === FromIterator implementations ===

impl FromIterator<Value> for Value {
    /// Collect into an array value.
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(Value, Value)> for Value {
    /// Collect key-value pairs into a map value.
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().collect())
    }
}
