//! Cache Store Module
//!
//! Main storage engine: a HashMap of time-stamped entries plus the expiry rules.
//!
//! Every operation takes the current instant explicitly so the expiry
//! arithmetic stays deterministic; locking lives one layer up.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage whose entries expire `interval` after insertion.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Maximum age an entry may reach before it is stale
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with the given expiry interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
        }
    }

    // == Add ==
    /// Inserts or overwrites `key`, stamping the entry with `now`.
    ///
    /// Overwriting resets the entry's age.
    pub fn add(&mut self, key: &str, value: Vec<u8>, now: Instant) {
        self.entries
            .insert(key.to_string(), CacheEntry::new(value, now));
    }

    // == Get ==
    /// Retrieves the payload for `key` if it is still fresh at `now`.
    ///
    /// A stale entry is removed on the spot and reported as a miss.
    pub fn get(&mut self, key: &str, now: Instant) -> Option<Vec<u8>> {
        let entry = self.entries.get(key)?;

        if entry.is_stale(self.interval, now) {
            self.entries.remove(key);
            return None;
        }

        Some(entry.value.clone())
    }

    // == Reap Stale ==
    /// Removes every entry that is stale at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap_stale(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let interval = self.interval;
        self.entries.retain(|_, entry| !entry.is_stale(interval, now));
        before - self.entries.len()
    }

    // == Contains Key ==
    /// Returns true if `key` is physically stored, stale or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Interval ==
    /// Returns the configured expiry interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries, including stale ones not yet reaped.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
