//! Response DTOs for the user cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, EvictionPolicy};

/// Response body for the batch user endpoint (GET /api/users)
#[derive(Debug, Clone, Serialize)]
pub struct CreateUsersResponse {
    /// Always "success"
    pub status: String,
    /// Number of users written
    pub count: usize,
    /// Human readable summary
    pub message: String,
}

impl CreateUsersResponse {
    pub fn new(count: usize) -> Self {
        Self {
            status: "success".to_string(),
            count,
            message: format!("Created {} users", count),
        }
    }
}

/// Response body for the stats endpoint (GET /api/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Current number of cached users
    pub cache_size: usize,
    /// Size above which eviction ticks remove entries
    pub threshold: usize,
    /// Active eviction policy
    pub policy: EvictionPolicy,
    pub inserts: u64,
    pub overwrites: u64,
    pub evictions: u64,
    pub eviction_ticks: u64,
    /// Fraction of ticks that evicted an entry
    pub eviction_rate: f64,
    /// API requests served by the user endpoints
    pub request_count: u64,
    /// Seconds since the service started
    pub uptime_secs: u64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(
        stats: CacheStats,
        threshold: usize,
        policy: EvictionPolicy,
        request_count: u64,
        uptime_secs: u64,
    ) -> Self {
        Self {
            cache_size: stats.total_entries,
            threshold,
            policy,
            inserts: stats.inserts,
            overwrites: stats.overwrites,
            evictions: stats.evictions,
            eviction_ticks: stats.eviction_ticks,
            eviction_rate: stats.eviction_rate(),
            request_count,
            uptime_secs,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
