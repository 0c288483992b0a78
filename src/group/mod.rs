//! Group Module
//!
//! A group is a named cache namespace pairing one bounded store with one
//! getter. Lookups are served from the store; misses are loaded through the
//! getter and written back.
//!
//! Concurrent misses on the same key are not coalesced: every caller that
//! misses invokes the getter, and the last write wins.

mod getter;
mod registry;

use std::fmt;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::cache::{ByteView, CacheStats, CacheStore};
use crate::error::{CacheError, Result};

pub use getter::{Getter, GetterFunc};
pub use registry::Registry;

// == Group ==
/// A named cache namespace.
pub struct Group {
    name: String,
    getter: Box<dyn Getter>,
    main_cache: CacheStore,
    stats: Mutex<CacheStats>,
}

impl Group {
    // == Constructor ==
    /// Creates an unregistered group. Use `Registry::new_group` to make it
    /// reachable by name.
    ///
    /// # Arguments
    /// * `name` - Namespace name
    /// * `cache_bytes` - Byte bound of the store (0 = unbounded)
    /// * `getter` - Source consulted on a miss
    pub fn new(name: impl Into<String>, cache_bytes: u64, getter: impl Getter + 'static) -> Self {
        Self {
            name: name.into(),
            getter: Box::new(getter),
            main_cache: CacheStore::new(cache_bytes),
            stats: Mutex::new(CacheStats::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // == Get ==
    /// Returns the value for `key`, loading and caching it on a miss.
    ///
    /// Empty keys are rejected before the store is touched. Getter errors
    /// are returned unchanged and leave the store as it was.
    pub fn get(&self, key: &str) -> Result<ByteView> {
        if key.is_empty() {
            return Err(CacheError::EmptyKey);
        }

        if let Some(value) = self.main_cache.get(key) {
            self.stats.lock().record_hit();
            debug!(group = %self.name, key, "cache hit");
            return Ok(value);
        }

        self.stats.lock().record_miss();
        debug!(group = %self.name, key, "cache miss");
        self.load(key)
    }

    // == Load ==
    /// Single place where a value is fetched from outside the store.
    fn load(&self, key: &str) -> Result<ByteView> {
        self.get_locally(key)
    }

    fn get_locally(&self, key: &str) -> Result<ByteView> {
        let bytes = self.getter.get(key).map_err(|err| {
            self.stats.lock().record_load_error();
            warn!(group = %self.name, key, error = %err, "getter failed");
            CacheError::Load(err)
        })?;

        let value = ByteView::new(&bytes);
        self.populate_cache(key, value.clone());
        self.stats.lock().record_load();
        Ok(value)
    }

    fn populate_cache(&self, key: &str, value: ByteView) {
        self.main_cache.add(key, value);
    }

    // == Stats ==
    /// Returns a snapshot of this group's counters and store usage.
    pub fn stats(&self) -> CacheStats {
        let stats = self.stats.lock().clone();
        stats.with_store(self.main_cache.snapshot())
    }

    // == Cached Keys ==
    /// Keys resident in the store, most recently used first.
    pub fn cached_keys(&self) -> Vec<String> {
        self.main_cache.keys()
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("name", &self.name)
            .field("main_cache", &self.main_cache)
            .finish_non_exhaustive()
    }
}
