//! Expiring Cache Module
//!
//! Thread-safe handle that pairs a `CacheStore` with its background reaper.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::CacheError;
use crate::tasks::spawn_reaper_task;

// == Expiring Cache ==
/// Concurrent byte cache whose entries expire a fixed interval after insertion.
///
/// Stale entries are removed two ways: lazily by the `get` that finds them,
/// and eagerly by a reaper task started at construction. A single mutex
/// guards the whole mapping and is never held across an await on I/O.
///
/// After [`shutdown`](Self::shutdown) the cache keeps serving `add` and
/// `get`; only background sweeping stops, and lazy expiry still keeps stale
/// values from being returned. Dropping the cache also stops the reaper.
#[derive(Debug)]
pub struct ExpiringCache {
    /// Entry storage shared with the reaper
    store: Arc<Mutex<CacheStore>>,
    /// Maximum age of a returned entry
    interval: Duration,
    /// Delay between reaper sweeps
    reap_period: Duration,
    /// Stop signal observed by the reaper
    shutdown_tx: watch::Sender<bool>,
    /// Reaper handle, taken on shutdown
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates a cache that sweeps once per `interval`.
    ///
    /// See [`with_reap_period`](Self::with_reap_period) for the error cases.
    pub fn new(interval: Duration) -> Result<Self, CacheError> {
        Self::with_reap_period(interval, interval)
    }

    /// Creates a cache with independent expiry interval and sweep period.
    ///
    /// `interval` bounds how old a returned entry may be; `reap_period`
    /// only controls how long stale entries may linger in memory when
    /// nobody reads them.
    ///
    /// # Errors
    /// - `CacheError::InvalidConfig` if either duration is zero
    /// - `CacheError::NoRuntime` if called outside a tokio runtime
    pub fn with_reap_period(interval: Duration, reap_period: Duration) -> Result<Self, CacheError> {
        if interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "interval must be greater than zero".to_string(),
            ));
        }
        if reap_period.is_zero() {
            return Err(CacheError::InvalidConfig(
                "reap period must be greater than zero".to_string(),
            ));
        }
        Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let reaper = spawn_reaper_task(store.clone(), reap_period, shutdown_rx);

        info!(
            "Expiring cache created: interval={}ms, reap_period={}ms",
            interval.as_millis(),
            reap_period.as_millis()
        );

        Ok(Self {
            store,
            interval,
            reap_period,
            shutdown_tx,
            reaper: Mutex::new(Some(reaper)),
        })
    }

    /// Creates a cache from the interval and reap period in `config`.
    pub fn from_config(config: &Config) -> Result<Self, CacheError> {
        Self::with_reap_period(config.cache_interval(), config.reap_period())
    }

    // == Add ==
    /// Inserts or overwrites `key`, stamping it with the current time.
    pub async fn add(&self, key: &str, value: Vec<u8>) {
        let mut store = self.store.lock().await;
        store.add(key, value, Instant::now());
    }

    // == Get ==
    /// Returns the payload for `key` if present and not older than the interval.
    ///
    /// A stale entry is deleted by this call and reported as a miss.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut store = self.store.lock().await;
        store.get(key, Instant::now())
    }

    // == Contains Key ==
    /// Returns true if `key` is physically stored, without applying lazy expiry.
    ///
    /// Lets callers observe the reaper independently of `get`.
    pub async fn contains_key(&self, key: &str) -> bool {
        self.store.lock().await.contains_key(key)
    }

    /// Number of entries held, including stale ones not yet reaped.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    /// Maximum age of a returned entry.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Delay between reaper sweeps.
    pub fn reap_period(&self) -> Duration {
        self.reap_period
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to finish.
    ///
    /// Safe to call more than once; later calls return immediately.
    pub async fn shutdown(&self) {
        self.shutdown_tx.send_replace(true);

        let handle = self.reaper.lock().await.take();
        if let Some(handle) = handle {
            // A JoinError here means the task panicked or was aborted; either way it is gone
            let _ = handle.await;
            debug!("Cache reaper joined");
        }
    }

    /// Returns true once [`shutdown`](Self::shutdown) has been requested.
    pub fn is_shut_down(&self) -> bool {
        *self.shutdown_tx.borrow()
    }
}
