//! Error types for the pokedex client
//!
//! Provides unified error handling using thiserror.

use reqwest::StatusCode;
use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while constructing an expiring cache.
///
/// Lookups never fail: a miss is reported as `None`, not as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Interval or reap period is zero
    #[error("Invalid cache configuration: {0}")]
    InvalidConfig(String),

    /// No tokio runtime to host the reaper task
    #[error("Cannot start cache reaper outside a tokio runtime")]
    NoRuntime,
}

// == Pokedex Error Enum ==
/// Unified error type for the fetch layer and the REPL.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache could not be built
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote service answered with a non-success status
    #[error("Request failed with status: {0}")]
    Status(StatusCode),

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command was invoked without its argument
    #[error("Missing required parameter ({0})")]
    MissingArgument(&'static str),

    /// Input did not match any command
    #[error("Unknown command")]
    UnknownCommand(String),

    /// Creature cannot be encountered where the player stands
    #[error("{0} is not in the current area")]
    NotInArea(String),

    /// Creature has not been caught yet
    #[error("{0} is not caught yet!")]
    NotCaught(String),
}

// == Result Type Alias ==
/// Convenience Result type for the pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
