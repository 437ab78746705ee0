//! Cache Statistics Module
//!
//! Tracks write and eviction counters for the user cache.

use serde::Serialize;

// == Cache Stats ==
/// Counters maintained by the store under its write lock.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of puts that created a new entry
    pub inserts: u64,
    /// Number of puts that replaced an existing entry
    pub overwrites: u64,
    /// Number of entries removed by eviction ticks
    pub evictions: u64,
    /// Number of eviction ticks run, whether or not they evicted
    pub eviction_ticks: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Eviction Rate ==
    /// Fraction of ticks that evicted an entry, or 0.0 before the first tick.
    pub fn eviction_rate(&self) -> f64 {
        if self.eviction_ticks == 0 {
            0.0
        } else {
            self.evictions as f64 / self.eviction_ticks as f64
        }
    }

    pub fn record_insert(&mut self) {
        self.inserts += 1;
    }

    pub fn record_overwrite(&mut self) {
        self.overwrites += 1;
    }

    pub fn record_tick(&mut self) {
        self.eviction_ticks += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.inserts, 0);
        assert_eq!(stats.overwrites, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.eviction_ticks, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_eviction_rate_no_ticks() {
        let stats = CacheStats::new();
        assert_eq!(stats.eviction_rate(), 0.0);
    }

    #[test]
    fn test_eviction_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_tick();
        stats.record_eviction();
        stats.record_tick();
        stats.record_tick();
        stats.record_tick();
        assert_eq!(stats.eviction_rate(), 0.25);
    }

    #[test]
    fn test_write_counters() {
        let mut stats = CacheStats::new();
        stats.record_insert();
        stats.record_insert();
        stats.record_overwrite();
        assert_eq!(stats.inserts, 2);
        assert_eq!(stats.overwrites, 1);
    }

    #[test]
    fn test_set_total_entries() {
        let mut stats = CacheStats::new();
        stats.set_total_entries(42);
        assert_eq!(stats.total_entries, 42);
    }
}
