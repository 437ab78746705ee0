//! User Record Module
//!
//! Defines the user record stored in the cache.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// == User Record ==
/// A stored user entity.
///
/// Records are immutable once inserted; the store hands them out behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Open-ended metadata, string keys to arbitrary JSON values
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl UserRecord {
    // == Constructor ==
    /// Creates a record with empty metadata, timestamped now.
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
            metadata: Map::new(),
        }
    }

    // == Sample ==
    /// Builds the record the batch endpoint stores for `id`.
    ///
    /// Metadata carries a fixed role, an active flag and a random score in `0..100`.
    pub fn sample(id: u64) -> Self {
        let score: u32 = rand::thread_rng().gen_range(0..100);

        Self::new(id, format!("User {}", id), format!("user{}@example.com", id))
            .with_metadata("role", "user")
            .with_metadata("active", true)
            .with_metadata("score", score)
    }

    // == With Metadata ==
    /// Adds a metadata entry, replacing any previous value under `key`.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
