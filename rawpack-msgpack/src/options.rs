use crate::width::NativeInt;

/// Options for MessagePack decoding.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Maximum container nesting depth (default: unlimited)
    ///
    /// Nesting never consumes call stack, so the limit only bounds memory
    /// and the size of accepted documents.
    pub max_depth: Option<usize>,
    /// Width of the host's native integer (default: 64-bit)
    pub native_int: NativeInt,
    /// Fail with [`DecodeError::TrailingBytes`](crate::DecodeError::TrailingBytes)
    /// when input remains after the value (default: ignore it)
    pub deny_trailing_bytes: bool,
}

impl DecodeOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject input whose containers nest deeper than `depth`.
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Decode integers into a narrower native range, falling back to floats beyond it.
    pub const fn native_int(mut self, native_int: NativeInt) -> Self {
        self.native_int = native_int;
        self
    }

    /// Reject input that holds anything after the first value.
    pub const fn deny_trailing_bytes(mut self, deny: bool) -> Self {
        self.deny_trailing_bytes = deny;
        self
    }
}
