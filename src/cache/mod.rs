//! Cache Module
//!
//! Provides the in-memory user cache with a soft size threshold and tick-based eviction.

mod bounded;
mod order;
mod policy;
mod record;
mod stats;
mod store;


// Re-export public types
pub use bounded::BoundedCache;
pub use order::InsertionOrder;
pub use policy::EvictionPolicy;
pub use record::UserRecord;
pub use stats::CacheStats;
pub use store::{CacheStore, EvictionTick};

// == Public Constants ==
/// Default size above which an eviction tick removes an entry
pub const DEFAULT_THRESHOLD: usize = 10_000;
