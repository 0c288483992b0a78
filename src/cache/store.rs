//! Cache Store Module
//!
//! Concurrency-safe byte-bounded store combining the LRU cache with a mutex.

use parking_lot::Mutex;

use crate::cache::{ByteView, LruCache};

// == Store Snapshot ==
/// Point-in-time view of a store's bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    /// Resident entries
    pub entries: usize,
    /// Accounted bytes (keys + values)
    pub used_bytes: u64,
    /// Configured bound, 0 = unbounded
    pub max_bytes: u64,
    /// Entries evicted since creation
    pub evictions: u64,
}

#[derive(Debug, Default)]
struct Inner {
    /// Created on first add
    lru: Option<LruCache<ByteView>>,
    evictions: u64,
}

// == Cache Store ==
/// Byte-bounded LRU store of `ByteView`s.
///
/// Every operation holds the store lock for its full duration, so operations
/// on one store are linearized.
#[derive(Debug)]
pub struct CacheStore {
    max_bytes: u64,
    inner: Mutex<Inner>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store bounded to `max_bytes` (0 = unbounded).
    pub fn new(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            inner: Mutex::new(Inner::default()),
        }
    }

    // == Get ==
    /// Retrieves a value and marks it most recently used.
    pub fn get(&self, key: &str) -> Option<ByteView> {
        let mut inner = self.inner.lock();
        inner.lru.as_mut()?.get(key).cloned()
    }

    // == Add ==
    /// Inserts or replaces a value, evicting least recently used entries
    /// until the byte bound holds.
    pub fn add(&self, key: impl Into<String>, value: ByteView) {
        let max_bytes = self.max_bytes;
        let mut inner = self.inner.lock();
        let evicted = inner
            .lru
            .get_or_insert_with(|| LruCache::new(max_bytes))
            .add(key.into(), value);
        inner.evictions += evicted as u64;
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.inner.lock().lru.as_ref().map_or(0, LruCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Keys ==
    /// Resident keys from most to least recently used.
    pub fn keys(&self) -> Vec<String> {
        self.inner
            .lock()
            .lru
            .as_ref()
            .map(LruCache::keys)
            .unwrap_or_default()
    }

    // == Snapshot ==
    pub fn snapshot(&self) -> StoreSnapshot {
        let inner = self.inner.lock();
        let (entries, used_bytes) = inner
            .lru
            .as_ref()
            .map_or((0, 0), |lru| (lru.len(), lru.used_bytes()));
        StoreSnapshot {
            entries,
            used_bytes,
            max_bytes: self.max_bytes,
            evictions: inner.evictions,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(100);
        assert!(store.is_empty());
        assert_eq!(store.get("missing"), None);
        assert_eq!(store.snapshot().max_bytes, 100);
    }

    #[test]
    fn test_store_add_and_get() {
        let store = CacheStore::new(100);
        store.add("key1", ByteView::new(b"value1"));

        assert_eq!(store.get("key1").map(|v| v.as_string()), Some("value1".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot().used_bytes, 10);
    }

    #[test]
    fn test_store_counts_evictions() {
        let store = CacheStore::new(8);
        store.add("a", ByteView::new(b"111"));
        store.add("b", ByteView::new(b"222"));
        store.add("c", ByteView::new(b"333"));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.entries, 2);
        assert_eq!(snapshot.evictions, 1);
        assert_eq!(store.keys(), vec!["c".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_store_concurrent_adds_respect_bound() {
        let store = Arc::new(CacheStore::new(64));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..50 {
                        store.add(format!("t{}k{}", t, i), ByteView::new(b"payload"));
                        let _ = store.get(&format!("t{}k{}", t, i / 2));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(store.snapshot().used_bytes <= 64);
    }
}
