//! Request DTOs for the user cache API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Number of users created when `count` is omitted
pub const DEFAULT_USER_COUNT: usize = 100;

/// Query string for the batch user endpoint (GET /api/users)
///
/// # Fields
/// - `count`: How many users to create, ids `1..=count`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUsersQuery {
    /// Optional batch size
    #[serde(default)]
    pub count: Option<usize>,
}

impl CreateUsersQuery {
    /// Requested batch size, or the default.
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_USER_COUNT)
    }

    /// Validates the request against the configured batch limit.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self, max_batch_size: usize) -> Option<String> {
        let count = self.count();
        if count > max_batch_size {
            return Some(format!(
                "count {} exceeds maximum batch size of {}",
                count, max_batch_size
            ));
        }
        None
    }
}
