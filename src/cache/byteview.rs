//! Byte View Module
//!
//! Immutable, copy-on-read container for cached byte payloads.

use std::fmt;
use std::sync::Arc;

use crate::cache::Value;

// == Byte View ==
/// An immutable view over a cached byte payload.
///
/// The bytes are copied in on construction and copied out on read, so no
/// caller ever holds a mutable alias of a cached entry. Cloning a view
/// shares the same read-only storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteView {
    b: Arc<[u8]>,
}

impl ByteView {
    // == Constructor ==
    /// Creates a view that owns a private copy of `bytes`.
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            b: Arc::from(bytes.to_vec()),
        }
    }

    // == Length ==
    /// Returns the payload size in bytes.
    pub fn len(&self) -> usize {
        self.b.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    // == Byte Slice ==
    /// Returns a fresh copy of the payload. Mutating it never affects the cache.
    pub fn byte_slice(&self) -> Vec<u8> {
        self.b.to_vec()
    }

    // == As String ==
    /// Returns the payload as text, replacing invalid UTF-8 sequences.
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.b).into_owned()
    }
}

impl Value for ByteView {
    fn len(&self) -> usize {
        self.b.len()
    }
}

impl fmt::Display for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.b))
    }
}
