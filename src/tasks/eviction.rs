//! Eviction Task
//!
//! Background task that runs one eviction tick per interval until cancelled.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::BoundedCache;

/// Shortest accepted tick period
pub const MIN_EVICTION_PERIOD: Duration = Duration::from_millis(1);

/// Longest accepted tick period (one day)
pub const MAX_EVICTION_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// Spawns a background task that periodically trims the cache.
///
/// The first tick fires one `interval` after spawning. Each tick takes the
/// cache's write lock and evicts at most one entry, so a cache far over its
/// threshold shrinks by one entry per interval. The interval is clamped to
/// [`MIN_EVICTION_PERIOD`]..=[`MAX_EVICTION_PERIOD`].
///
/// # Arguments
/// * `cache` - Handle to the cache to trim
/// * `interval` - Time between eviction ticks
/// * `shutdown` - Token that stops the task when cancelled
///
/// # Returns
/// A JoinHandle that completes once the task has observed cancellation.
///
/// # Example
/// ```ignore
/// let cache = BoundedCache::new(10_000, EvictionPolicy::Arbitrary);
/// let shutdown = CancellationToken::new();
/// let handle = spawn_eviction_task(cache.clone(), Duration::from_secs(5), shutdown.clone());
/// // Later, during shutdown:
/// shutdown.cancel();
/// handle.await?;
/// ```
pub fn spawn_eviction_task(
    cache: BoundedCache,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    let period = interval.clamp(MIN_EVICTION_PERIOD, MAX_EVICTION_PERIOD);

    tokio::spawn(async move {
        info!("Starting eviction task with interval of {:?}", period);

        let now = Instant::now();
        let first_tick = now.checked_add(period).unwrap_or(now);
        let mut ticker = interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    info!("Eviction task received shutdown signal, stopping");
                    break;
                }
                _ = ticker.tick() => {
                    let tick = cache.evict_tick().await;

                    match tick.evicted {
                        Some(id) => info!(
                            "Eviction tick: removed user {}, {} entries remain",
                            id, tick.size_after
                        ),
                        None => debug!("Eviction tick: {} entries, under threshold", tick.size_after),
                    }
                }
            }
        }
    })
}
