//! Cache Statistics Module
//!
//! Tracks group performance metrics including hits, misses, loads and evictions.

use serde::Serialize;

use crate::cache::StoreSnapshot;

// == Cache Stats ==
/// Tracks cache performance metrics for one group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups served from the store
    pub hits: u64,
    /// Lookups that fell through to the loader
    pub misses: u64,
    /// Successful loader calls
    pub loads: u64,
    /// Failed loader calls
    pub load_errors: u64,
    /// Entries evicted due to the byte bound
    pub evictions: u64,
    /// Current number of entries in the store
    pub total_entries: usize,
    /// Accounted bytes currently resident
    pub used_bytes: u64,
    /// Configured byte bound, 0 = unbounded
    pub max_bytes: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_load(&mut self) {
        self.loads += 1;
    }

    pub fn record_load_error(&mut self) {
        self.load_errors += 1;
    }

    // == Apply Snapshot ==
    /// Copies store-owned bookkeeping into these stats.
    pub fn with_store(mut self, snapshot: StoreSnapshot) -> Self {
        self.evictions = snapshot.evictions;
        self.total_entries = snapshot.entries;
        self.used_bytes = snapshot.used_bytes;
        self.max_bytes = snapshot.max_bytes;
        self
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.loads, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_record_loads() {
        let mut stats = CacheStats::new();
        stats.record_load();
        stats.record_load_error();
        stats.record_load_error();
        assert_eq!(stats.loads, 1);
        assert_eq!(stats.load_errors, 2);
    }

    #[test]
    fn test_with_store() {
        let stats = CacheStats::new().with_store(StoreSnapshot {
            entries: 3,
            used_bytes: 42,
            max_bytes: 100,
            evictions: 7,
        });
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.used_bytes, 42);
        assert_eq!(stats.max_bytes, 100);
        assert_eq!(stats.evictions, 7);
    }
}
