//! API Routes
//!
//! Configures the Axum router with all user cache endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_users_handler, get_user_handler, health_handler, index_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Index page
/// - `GET /api/users?count=N` - Create and cache users `1..=N`
/// - `GET /api/users/:id` - Look up a cached user
/// - `GET /api/stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/users", get(create_users_handler))
        .route("/api/users/:id", get(get_user_handler))
        .route("/api/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{BoundedCache, EvictionPolicy};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let cache = BoundedCache::new(100, EvictionPolicy::Arbitrary);
        create_router(AppState::new(cache, 1000))
    }

    async fn status_of(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_endpoint() {
        assert_eq!(status_of("/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        assert_eq!(status_of("/api/stats").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_users_endpoint() {
        assert_eq!(status_of("/api/users?count=5").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        assert_eq!(status_of("/api/users/77").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_user_bad_id() {
        assert_eq!(status_of("/api/users/abc").await, StatusCode::BAD_REQUEST);
    }
}
