//! Stale Entry Reaper
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps stale cache entries.
///
/// The task wakes every `reap_period`, takes the store's lock, and removes
/// every entry older than the store's interval. The lock is held only for
/// the sweep itself.
///
/// The task stops when `shutdown` receives a value or its sender is
/// dropped. Must be called from within a tokio runtime.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `reap_period` - Delay between sweeps; must be non-zero
/// * `shutdown` - Stop signal observed while waiting for the next sweep
///
/// # Returns
/// A JoinHandle that resolves once the task has stopped.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(Duration::from_secs(5))));
/// let (stop_tx, stop_rx) = watch::channel(false);
/// let handle = spawn_reaper_task(store.clone(), Duration::from_secs(5), stop_rx);
/// // Later, during shutdown:
/// stop_tx.send_replace(true);
/// handle.await.ok();
/// ```
pub fn spawn_reaper_task(
    store: Arc<Mutex<CacheStore>>,
    reap_period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting cache reaper with period of {}ms",
            reap_period.as_millis()
        );

        let mut ticker = time::interval_at(Instant::now() + reap_period, reap_period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                // Either a stop value arrived or the owning cache was dropped
                _ = shutdown.changed() => break,
            }

            let removed = {
                let mut guard = store.lock().await;
                guard.reap_stale(Instant::now())
            };

            if removed > 0 {
                info!("Cache reaper: removed {} stale entries", removed);
            } else {
                debug!("Cache reaper: no stale entries found");
            }
        }

        info!("Cache reaper stopped");
    })
}
