//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Eviction: trims the user cache by one entry per tick while it is over threshold

mod eviction;

pub use eviction::{spawn_eviction_task, MAX_EVICTION_PERIOD, MIN_EVICTION_PERIOD};
