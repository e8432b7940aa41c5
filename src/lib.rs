//! Pokedex - An interactive PokeAPI client
//!
//! Browses location areas, explores encounters, and catches creatures.
//! Remote responses are kept in a time-expiring cache with a background reaper.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::ExpiringCache;
pub use config::Config;
pub use error::{CacheError, PokedexError, Result};
pub use repl::{Repl, Session};
