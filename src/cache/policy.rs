//! Eviction Policy Module
//!
//! Selects which entry an over-threshold eviction tick removes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

// == Eviction Policy ==
/// Victim selection for eviction ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// Whatever id the map iteration yields first. Unspecified, and not LRU.
    #[default]
    Arbitrary,
    /// Oldest inserted id still present. Overwrites keep their original slot.
    Fifo,
}

impl EvictionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionPolicy::Arbitrary => "arbitrary",
            EvictionPolicy::Fifo => "fifo",
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvictionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arbitrary" => Ok(EvictionPolicy::Arbitrary),
            "fifo" => Ok(EvictionPolicy::Fifo),
            other => Err(format!("unknown eviction policy: {}", other)),
        }
    }
}
