//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with age tracking.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A stored payload and the instant it was inserted.
///
/// Entries are never mutated; re-adding a key replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, opaque to the cache
    pub value: Vec<u8>,
    /// Insertion instant (monotonic)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with `created_at`.
    pub fn new(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long the entry has existed at `now`.
    ///
    /// Saturates to zero if `now` precedes the insertion instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry outlived `interval`.
    ///
    /// Boundary condition: an entry whose age equals `interval` exactly is
    /// still fresh; it turns stale once the age is strictly greater.
    pub fn is_stale(&self, interval: Duration, now: Instant) -> bool {
        self.age(now) > interval
    }
}
