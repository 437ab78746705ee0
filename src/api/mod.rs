//! API Module
//!
//! HTTP handlers and routing for the user cache REST API.
//!
//! # Endpoints
//! - `GET /` - Index page
//! - `GET /api/users?count=N` - Create and cache a batch of users
//! - `GET /api/users/:id` - Look up a cached user
//! - `GET /api/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
