//! Bounded Cache Handle
//!
//! Shared, lock-protected access to a [`CacheStore`].

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore, EvictionPolicy, EvictionTick, UserRecord};

// == Bounded Cache ==
/// Cloneable handle to one user cache.
///
/// Writers (`put`, `evict_tick`) take the lock exclusively; readers (`get`,
/// `size`, `stats`) share it. Every clone refers to the same store.
#[derive(Debug, Clone)]
pub struct BoundedCache {
    inner: Arc<RwLock<CacheStore>>,
}

impl BoundedCache {
    /// Creates an empty cache with the given threshold and policy.
    pub fn new(threshold: usize, policy: EvictionPolicy) -> Self {
        Self::from_store(CacheStore::new(threshold, policy))
    }

    /// Wraps an existing store.
    pub fn from_store(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn put(&self, id: u64, record: UserRecord) {
        self.inner.write().await.put(id, record);
    }

    pub async fn get(&self, id: u64) -> Option<Arc<UserRecord>> {
        self.inner.read().await.get(id)
    }

    pub async fn size(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Runs one eviction tick under the write lock.
    pub async fn evict_tick(&self) -> EvictionTick {
        self.inner.write().await.evict_tick()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn threshold(&self) -> usize {
        self.inner.read().await.threshold()
    }

    pub async fn policy(&self) -> EvictionPolicy {
        self.inner.read().await.policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64) -> UserRecord {
        UserRecord::new(id, format!("User {}", id), format!("user{}@example.com", id))
    }

    #[test]
    fn test_put_then_get_blocking() {
        let cache = BoundedCache::new(10, EvictionPolicy::Arbitrary);
        let user = record(5);

        tokio_test::block_on(cache.put(5, user.clone()));
        let found = tokio_test::block_on(cache.get(5));

        assert_eq!(found.as_deref(), Some(&user));
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let cache = BoundedCache::new(10, EvictionPolicy::Arbitrary);
        let other = cache.clone();

        cache.put(1, record(1)).await;

        assert_eq!(other.size().await, 1);
        assert!(other.get(1).await.is_some());
    }

    #[tokio::test]
    async fn test_size_counts_distinct_puts() {
        let cache = BoundedCache::new(1000, EvictionPolicy::Arbitrary);
        for id in 0..25 {
            cache.put(id, record(id)).await;
        }
        cache.put(3, record(3)).await;

        assert_eq!(cache.size().await, 25);
    }

    #[tokio::test]
    async fn test_evict_tick_scenario() {
        let cache = BoundedCache::new(3, EvictionPolicy::Arbitrary);
        for id in 1..=4 {
            cache.put(id, record(id)).await;
        }
        assert_eq!(cache.size().await, 4);

        let tick = cache.evict_tick().await;
        assert_eq!(cache.size().await, 3);

        let mut missing = Vec::new();
        for id in 1..=4 {
            if cache.get(id).await.is_none() {
                missing.push(id);
            }
        }
        assert_eq!(missing.len(), 1);
        assert_eq!(tick.evicted, Some(missing[0]));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_disjoint_puts_lose_nothing() {
        let cache = BoundedCache::new(usize::MAX, EvictionPolicy::Arbitrary);
        let writers = 8u64;
        let per_writer = 250u64;

        let handles: Vec<_> = (0..writers)
            .map(|w| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    for i in 0..per_writer {
                        let id = w * per_writer + i;
                        cache.put(id, record(id)).await;
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.size().await, (writers * per_writer) as usize);
        assert_eq!(cache.stats().await.inserts, writers * per_writer);
    }

    #[tokio::test]
    async fn test_accessors() {
        let cache = BoundedCache::new(42, EvictionPolicy::Fifo);
        assert_eq!(cache.threshold().await, 42);
        assert_eq!(cache.policy().await, EvictionPolicy::Fifo);
    }
}
