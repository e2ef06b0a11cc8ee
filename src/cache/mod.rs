//! In-memory job data cache
//!
//! Serves the job collection and per-job detail records with single-flight
//! fetching, a freshness window, and change notifications for consumers that
//! want to react to refreshed data.

mod service;
mod subscribers;

use std::sync::Arc;
use std::time::Duration;

use crate::client::JobRecord;
use crate::config::CacheSettings;

pub use service::JobDataCache;
#[allow(unused_imports)]
pub use service::CacheStatus;
#[allow(unused_imports)]
pub use subscribers::Subscription;

/// A fetched job collection, shared between the cache and its readers.
pub type JobList = Arc<Vec<JobRecord>>;

/// Default cache timings
pub struct CacheTtl;

impl CacheTtl {
    /// Collection is served without refetching for this long
    pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(10 * 60); // 10 min

    /// Background preload waits this long before fetching
    pub const PRELOAD_DELAY: Duration = Duration::from_secs(1);
}

/// Tunables for a [`JobDataCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    pub freshness_window: Duration,
    pub preload_delay: Duration,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            freshness_window: CacheTtl::FRESHNESS_WINDOW,
            preload_delay: CacheTtl::PRELOAD_DELAY,
        }
    }
}

impl From<&CacheSettings> for CacheOptions {
    fn from(settings: &CacheSettings) -> Self {
        Self {
            freshness_window: settings.freshness_window(),
            preload_delay: settings.preload_delay(),
        }
    }
}
