// SPDX-License-Identifier: MPL-2.0
//! Bounded storage for diagnostic events.
//!
//! The log is a ring: once capacity is reached, pushing a new event evicts
//! the oldest one, keeping memory use flat no matter how chatty the
//! notification traffic gets.

use std::collections::VecDeque;

use super::events::DiagnosticEvent;

/// Default number of retained events.
pub const DEFAULT_LOG_CAPACITY: usize = 1000;

/// A capacity-bounded, chronologically ordered event log.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: VecDeque<DiagnosticEvent>,
    capacity: usize,
}

impl EventLog {
    /// Creates a log retaining at most `capacity` events (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an event, evicting the oldest when at capacity.
    pub fn push(&mut self, event: DiagnosticEvent) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Iterates over retained events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Returns the number of retained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the log holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the maximum number of retained events.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discards all retained events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}
