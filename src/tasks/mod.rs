//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: sweeps stale cache entries on a fixed period

mod reaper;

pub use reaper::spawn_reaper_task;
