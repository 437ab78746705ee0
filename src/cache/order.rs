//! Insertion Order Module
//!
//! Tracks the order in which ids first entered the cache, for FIFO eviction.

use std::collections::VecDeque;

// == Insertion Order ==
/// Queue of cached ids by first insertion.
///
/// - Front = oldest insertion
/// - Back = newest insertion
///
/// Overwriting an id does not move it.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    order: VecDeque<u64>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record Insert ==
    /// Appends a newly inserted id. Callers only pass ids not already tracked.
    pub fn record_insert(&mut self, id: u64) {
        self.order.push_back(id);
    }

    // == Pop Oldest ==
    /// Returns and removes the oldest id, or None if empty.
    pub fn pop_oldest(&mut self) -> Option<u64> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<u64> {
        self.order.front().copied()
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
