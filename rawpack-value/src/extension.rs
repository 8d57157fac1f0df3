//! Host objects of no built-in kind, and their custom serialization capability.

use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use std::sync::Arc;

/// Custom serialization: a host object that can write its own wire bytes.
///
/// The returned bytes are copied into the output verbatim, with no tag added,
/// so they must already form a self-describing payload (normally one complete
/// MessagePack value).
pub trait ToWire {
    /// Produces this object's wire representation.
    fn to_wire(&self) -> Vec<u8>;
}

/// A host-defined object carried inside a [`Value`](crate::Value).
///
/// Only [`type_name`](HostObject::type_name) is required. Objects that support
/// custom serialization override [`as_to_wire`](HostObject::as_to_wire).
pub trait HostObject: Debug + Send + Sync {
    /// The object's type name, used in diagnostics.
    fn type_name(&self) -> &str;

    /// Returns the custom serialization capability, if this object has one.
    fn as_to_wire(&self) -> Option<&dyn ToWire> {
        None
    }
}

/// Shared handle to a [`HostObject`].
///
/// Two handles are equal only when they point at the same object.
#[derive(Clone)]
pub struct Extension(Arc<dyn HostObject>);

impl Extension {
    /// Wraps a host object.
    pub fn new<T: HostObject + 'static>(object: T) -> Self {
        Extension(Arc::new(object))
    }

    /// The wrapped object's type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.0.type_name()
    }

    /// Returns the custom serialization capability, if any.
    #[must_use]
    pub fn as_to_wire(&self) -> Option<&dyn ToWire> {
        self.0.as_to_wire()
    }

    /// Returns `true` if the object can serialize itself.
    #[must_use]
    pub fn supports_to_wire(&self) -> bool {
        self.as_to_wire().is_some()
    }

    /// Borrows the wrapped object.
    #[must_use]
    pub fn object(&self) -> &dyn HostObject {
        &*self.0
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl From<Arc<dyn HostObject>> for Extension {
    fn from(object: Arc<dyn HostObject>) -> Self {
        Extension(object)
    }
}

impl PartialEq for Extension {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Extension {}

impl Hash for Extension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl Debug for Extension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}
