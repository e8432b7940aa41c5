//! PokeAPI Client
//!
//! Cached HTTP access to the remote catalog. Every GET consults the
//! expiring cache first, keyed by the full request URL.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::ExpiringCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaEncounter, LocationAreaPage, Pokemon};

/// HTTP client for the PokeAPI catalog with a response cache in front of it.
#[derive(Debug)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    cache: ExpiringCache,
}

impl PokeApiClient {
    /// Creates a client that owns `cache`.
    ///
    /// `base_url` may be given with or without a trailing slash.
    pub fn new(base_url: &str, cache: ExpiringCache, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    /// Creates a client and its cache from configuration.
    ///
    /// Must be called from within a tokio runtime.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = ExpiringCache::from_config(config)?;
        Self::new(&config.base_url, cache, config.http_timeout())
    }

    /// The response cache backing this client.
    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    /// Stops the cache's background reaper.
    pub async fn shutdown(&self) {
        self.cache.shutdown().await;
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    // == Raw Fetch ==
    /// Returns the body at `url`, from the cache when possible.
    ///
    /// Only successful responses are cached; an error status is returned as
    /// `PokedexError::Status` and the next call will hit the network again.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "Cache hit");
            return Ok(body);
        }

        debug!(url, "Cache miss, fetching");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status(status));
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone()).await;

        Ok(body)
    }

    /// Fetches `url` and decodes it as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Endpoints ==
    /// Lists location areas, starting from the first page unless `page_url` is given.
    pub async fn list_location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.endpoint("location-area/"),
        };
        self.fetch_json(&url).await
    }

    /// Fetches one location area with its encounters.
    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        self.fetch_json(&self.endpoint(&format!("location-area/{}", name)))
            .await
    }

    /// Fetches a creature's details.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch_json(&self.endpoint(&format!("pokemon/{}", name)))
            .await
    }

    /// Lists the location areas where a creature can be encountered.
    pub async fn pokemon_encounters(&self, name: &str) -> Result<Vec<LocationAreaEncounter>> {
        self.fetch_json(&self.endpoint(&format!("pokemon/{}/encounters", name)))
            .await
    }
}
