//! Cache Module
//!
//! Provides an in-memory byte cache with time-based expiry and a background reaper.

mod entry;
mod expiring;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use store::CacheStore;
