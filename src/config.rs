//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Location the player starts in
pub const DEFAULT_START_LOCATION: &str = "canalave-city-area";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum age of a cached response in milliseconds
    pub cache_interval_ms: u64,
    /// Delay between cache sweeps in milliseconds; None = same as the interval
    pub reap_period_ms: Option<u64>,
    /// Root URL of the remote catalog
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,
    /// Location area the session starts in
    pub start_location: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL_MS` - Cache entry lifetime (default: 5000)
    /// - `POKEDEX_REAP_PERIOD_MS` - Sweep frequency (default: the cache interval)
    /// - `POKEAPI_BASE_URL` - Remote catalog root (default: https://pokeapi.co/api/v2/)
    /// - `POKEDEX_HTTP_TIMEOUT_SECS` - HTTP timeout (default: 10)
    /// - `POKEDEX_START_LOCATION` - Starting area (default: canalave-city-area)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            cache_interval_ms: parse_var("POKEDEX_CACHE_INTERVAL_MS")
                .unwrap_or(defaults.cache_interval_ms),
            reap_period_ms: parse_var("POKEDEX_REAP_PERIOD_MS"),
            base_url: env::var("POKEAPI_BASE_URL").unwrap_or(defaults.base_url),
            http_timeout_secs: parse_var("POKEDEX_HTTP_TIMEOUT_SECS")
                .unwrap_or(defaults.http_timeout_secs),
            start_location: env::var("POKEDEX_START_LOCATION")
                .unwrap_or(defaults.start_location),
        }
    }

    /// Cache entry lifetime.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_millis(self.cache_interval_ms)
    }

    /// Reaper sweep period, falling back to the cache interval.
    pub fn reap_period(&self) -> Duration {
        Duration::from_millis(self.reap_period_ms.unwrap_or(self.cache_interval_ms))
    }

    /// HTTP request timeout.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_ms: 5000,
            reap_period_ms: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout_secs: 10,
            start_location: DEFAULT_START_LOCATION.to_string(),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
