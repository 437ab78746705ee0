//! User Cache - an HTTP service around a soft-bounded in-memory user cache
//!
//! Users are stored by id; a background task evicts one entry per tick while
//! the cache is over its threshold.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::BoundedCache;
pub use config::Config;
pub use tasks::spawn_eviction_task;
