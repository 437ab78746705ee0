//! Cache Store Module
//!
//! Id-keyed user storage with a soft size threshold enforced one entry per eviction tick.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{CacheStats, EvictionPolicy, InsertionOrder, UserRecord};

// == Eviction Tick ==
/// Outcome of a single eviction tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvictionTick {
    /// Id removed by this tick, if the store was over threshold
    pub evicted: Option<u64>,
    /// Number of entries left after the tick
    pub size_after: usize,
}

// == Cache Store ==
/// User storage with threshold-driven eviction.
///
/// The store never rejects a write. Its size may exceed the threshold until
/// enough ticks have run, since each tick removes at most one entry.
#[derive(Debug)]
pub struct CacheStore {
    /// Id to record storage
    entries: HashMap<u64, Arc<UserRecord>>,
    /// First-insertion order, maintained only under the FIFO policy
    order: InsertionOrder,
    /// Victim selection
    policy: EvictionPolicy,
    /// Size above which a tick evicts
    threshold: usize,
    /// Write and eviction counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `threshold` - Size above which an eviction tick removes one entry
    /// * `policy` - How the evicted entry is chosen
    pub fn new(threshold: usize, policy: EvictionPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            policy,
            threshold,
            stats: CacheStats::new(),
        }
    }

    // == Put ==
    /// Inserts or silently overwrites the record at `id`.
    pub fn put(&mut self, id: u64, record: UserRecord) {
        let previous = self.entries.insert(id, Arc::new(record));

        if previous.is_some() {
            self.stats.record_overwrite();
        } else {
            if self.policy == EvictionPolicy::Fifo {
                self.order.record_insert(id);
            }
            self.stats.record_insert();
        }

        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the record at `id`, or None if absent.
    pub fn get(&self, id: u64) -> Option<Arc<UserRecord>> {
        self.entries.get(&id).cloned()
    }

    // == Contains ==
    pub fn contains(&self, id: u64) -> bool {
        self.entries.contains_key(&id)
    }

    // == Evict Tick ==
    /// Runs one eviction tick.
    ///
    /// Removes exactly one entry when the size exceeds the threshold and
    /// leaves the store untouched otherwise.
    pub fn evict_tick(&mut self) -> EvictionTick {
        self.stats.record_tick();

        let evicted = if self.entries.len() > self.threshold {
            self.select_victim()
        } else {
            None
        };

        if let Some(id) = evicted {
            self.entries.remove(&id);
            self.stats.record_eviction();
            self.stats.set_total_entries(self.entries.len());
        }

        EvictionTick {
            evicted,
            size_after: self.entries.len(),
        }
    }

    fn select_victim(&mut self) -> Option<u64> {
        match self.policy {
            EvictionPolicy::Arbitrary => self.entries.keys().next().copied(),
            EvictionPolicy::Fifo => self.order.pop_oldest(),
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
