//! Cache Module
//!
//! Provides the byte-bounded LRU store and the immutable value container.

mod byteview;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use byteview::ByteView;
pub use lru::{LruCache, OnEvicted};
pub use stats::CacheStats;
pub use store::{CacheStore, StoreSnapshot};

// == Value Trait ==
/// A cacheable value that knows its accounted size in bytes.
pub trait Value {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
