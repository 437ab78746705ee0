//! Request and Response models for the user cache API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CreateUsersQuery, DEFAULT_USER_COUNT};
pub use responses::{CreateUsersResponse, ErrorResponse, HealthResponse, StatsResponse};
