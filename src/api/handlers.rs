//! API Handlers
//!
//! HTTP request handlers for each user cache endpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use tracing::debug;

use crate::cache::{BoundedCache, UserRecord};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{CreateUsersQuery, CreateUsersResponse, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds the cache handle plus the counters reported by `/api/stats`.
#[derive(Clone)]
pub struct AppState {
    /// Shared user cache
    pub cache: BoundedCache,
    /// Requests served by the user endpoints
    pub requests: Arc<AtomicU64>,
    /// Service start time
    pub started_at: Instant,
    /// Largest accepted batch size
    pub max_batch_size: usize,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: BoundedCache, max_batch_size: usize) -> Self {
        Self {
            cache,
            requests: Arc::new(AtomicU64::new(0)),
            started_at: Instant::now(),
            max_batch_size,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Initializes the cache with the configured threshold and policy.
    pub fn from_config(config: &Config) -> Self {
        let cache = BoundedCache::new(config.cache_threshold, config.eviction_policy);
        Self::new(cache, config.max_batch_size)
    }

    fn count_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>User Cache</title></head>
<body>
  <h1>User Cache Service</h1>
  <h2>API Endpoints</h2>
  <ul>
    <li><a href="/api/users?count=100">Create 100 Users</a></li>
    <li><a href="/api/users/1">Look up user 1</a></li>
    <li><a href="/api/stats">Cache Statistics</a></li>
    <li><a href="/health">Health</a></li>
  </ul>
</body>
</html>
"#;

/// Handler for GET /
///
/// Serves an index page linking the endpoints.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handler for GET /api/users
///
/// Creates users `1..=count` and stores each one in the cache, overwriting
/// any previous record under the same id.
pub async fn create_users_handler(
    State(state): State<AppState>,
    Query(query): Query<CreateUsersQuery>,
) -> Result<Json<CreateUsersResponse>> {
    if let Some(error_msg) = query.validate(state.max_batch_size) {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let count = query.count();
    for id in 1..=count as u64 {
        state.cache.put(id, UserRecord::sample(id)).await;
    }
    debug!("Stored batch of {} users", count);

    state.count_request();

    Ok(Json(CreateUsersResponse::new(count)))
}

/// Handler for GET /api/users/:id
///
/// Returns the cached record for `id`.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Arc<UserRecord>>> {
    state.count_request();

    let record = state.cache.get(id).await.ok_or(ApiError::NotFound(id))?;

    Ok(Json(record))
}

/// Handler for GET /api/stats
///
/// Returns cache counters and service uptime.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    let threshold = state.cache.threshold().await;
    let policy = state.cache.policy().await;

    Json(StatsResponse::new(
        stats,
        threshold,
        policy,
        state.requests.load(Ordering::Relaxed),
        state.started_at.elapsed().as_secs(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
