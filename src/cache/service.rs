//! Job data cache with single-flight collection fetches

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Local;
use futures::future::{BoxFuture, FutureExt, Shared};
use log::{debug, error, info, warn};
use rand::seq::SliceRandom;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::subscribers::{Listener, Subscribers, Subscription};
use super::{CacheOptions, JobList};
use crate::client::{JobRecord, JobSource};
use crate::error::{ApiError, ApiResult};

/// One outstanding collection fetch; every concurrent caller awaits a clone.
type PendingFetch = Shared<BoxFuture<'static, ApiResult<JobList>>>;

/// Observable lifecycle of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Nothing fetched yet, or cleared
    Empty,
    /// A collection fetch is outstanding
    Fetching,
    /// Collection present and inside the freshness window
    Ready,
    /// Collection present but older than the freshness window
    Stale,
}

impl std::fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CacheStatus::Empty => "empty",
            CacheStatus::Fetching => "fetching",
            CacheStatus::Ready => "ready",
            CacheStatus::Stale => "stale",
        };
        f.write_str(label)
    }
}

/// A complete collection from one successful fetch.
struct Snapshot {
    jobs: JobList,
    fetched_at: Instant,
}

#[derive(Default)]
struct CacheState {
    snapshot: Option<Snapshot>,
    details: HashMap<String, JobRecord>,
    in_flight: Option<PendingFetch>,
    /// Bumped by `clear()`; fetches started under an older generation do
    /// not write back.
    generation: u64,
}

struct Inner {
    source: Arc<dyn JobSource>,
    options: CacheOptions,
    state: Mutex<CacheState>,
    subscribers: Arc<Subscribers>,
}

/// In-memory cache of the job collection and per-job details.
///
/// Cloning is cheap and every clone shares the same state, so one cache can be
/// handed to each component that reads jobs.
///
/// All state is behind a lock that is never held across an `.await`. The
/// collection fetch runs on its own task, so a caller that stops waiting does
/// not cancel it.
#[derive(Clone)]
pub struct JobDataCache {
    inner: Arc<Inner>,
}

impl JobDataCache {
    /// Create a cache over `source` with default timings.
    pub fn new(source: Arc<dyn JobSource>) -> Self {
        Self::with_options(source, CacheOptions::default())
    }

    pub fn with_options(source: Arc<dyn JobSource>, options: CacheOptions) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                options,
                state: Mutex::new(CacheState::default()),
                subscribers: Arc::new(Subscribers::default()),
            }),
        }
    }

    /// Get the full job collection.
    ///
    /// Serves the cached collection while it is fresh unless `force_refresh`
    /// is set. Otherwise joins the fetch already in flight, or starts one.
    /// A failed fetch leaves the previous collection in place.
    pub async fn fetch_all_jobs(&self, force_refresh: bool) -> ApiResult<JobList> {
        let pending = {
            let mut state = self.inner.lock_state();

            if !force_refresh
                && let Some(snapshot) = &state.snapshot
                && self.inner.is_fresh(snapshot)
            {
                debug!("Using cached job data ({} jobs)", snapshot.jobs.len());
                return Ok(Arc::clone(&snapshot.jobs));
            }

            match state.in_flight.clone() {
                Some(pending) => {
                    debug!("Job data fetch already in flight, waiting");
                    pending
                }
                None => self.inner.start_fetch(&mut state),
            }
        };

        pending.await
    }

    /// Pick up to `count` distinct jobs uniformly at random.
    ///
    /// Returns an empty list when the collection cannot be fetched.
    pub async fn get_featured_jobs(&self, count: usize) -> Vec<JobRecord> {
        match self.fetch_all_jobs(false).await {
            Ok(jobs) => sample_jobs(&jobs, count),
            Err(err) => {
                error!("Error getting featured jobs: {}", err);
                Vec::new()
            }
        }
    }

    /// Get one job by id.
    ///
    /// Checks the detail index, then the cached collection, then asks the
    /// detail source. `force_refresh` skips both local lookups.
    pub async fn fetch_job_details(&self, job_id: &str, force_refresh: bool) -> ApiResult<JobRecord> {
        let generation = {
            let mut state = self.inner.lock_state();

            if !force_refresh {
                if let Some(job) = state.details.get(job_id) {
                    debug!("Using cached details for job {}", job_id);
                    return Ok(job.clone());
                }

                let from_collection = state
                    .snapshot
                    .as_ref()
                    .and_then(|s| s.jobs.iter().find(|job| job.job_id == job_id))
                    .cloned();
                if let Some(job) = from_collection {
                    debug!("Found job {} in cached collection", job_id);
                    state.details.insert(job_id.to_string(), job.clone());
                    return Ok(job);
                }
            }

            state.generation
        };

        debug!("Fetching details for job {}", job_id);
        let job = self.inner.source.fetch_job(job_id).await.inspect_err(|err| {
            if err.is_not_found() {
                debug!("Job {} not found at source", job_id);
            } else {
                warn!("Error fetching job {}: {}", job_id, err);
            }
        })?;

        let mut state = self.inner.lock_state();
        if state.generation == generation {
            state.details.insert(job_id.to_string(), job.clone());
        }
        Ok(job)
    }

    /// Register a listener for refreshed collections.
    ///
    /// The listener runs after each successful collection fetch, never on a
    /// cache hit. It stays registered until the returned handle is
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&JobList) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        self.inner.subscribers.add(listener)
    }

    /// Fetch the collection in the background after the preload delay.
    ///
    /// Failures are logged. The handle may be ignored.
    pub fn preload(&self) -> JoinHandle<()> {
        let cache = self.clone();
        let delay = self.inner.options.preload_delay;
        info!("Preloading job data in background");

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(err) = cache.fetch_all_jobs(false).await {
                error!("Error preloading job data: {}", err);
            }
        })
    }

    /// Drop the collection, the detail index and any in-flight marker.
    /// Listeners stay registered.
    pub fn clear(&self) {
        let mut state = self.inner.lock_state();
        state.snapshot = None;
        state.details.clear();
        state.in_flight = None;
        state.generation += 1;
        info!("Job cache cleared");
    }

    pub fn status(&self) -> CacheStatus {
        let state = self.inner.lock_state();
        if state.in_flight.is_some() {
            return CacheStatus::Fetching;
        }
        match &state.snapshot {
            None => CacheStatus::Empty,
            Some(snapshot) if self.inner.is_fresh(snapshot) => CacheStatus::Ready,
            Some(_) => CacheStatus::Stale,
        }
    }

    /// Time since the cached collection was fetched.
    pub fn age(&self) -> Option<Duration> {
        let state = self.inner.lock_state();
        state.snapshot.as_ref().map(|s| s.fetched_at.elapsed())
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }

    #[cfg(test)]
    pub fn options(&self) -> CacheOptions {
        self.inner.options
    }
}

impl Inner {
    fn lock_state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_fresh(&self, snapshot: &Snapshot) -> bool {
        snapshot.fetched_at.elapsed() < self.options.freshness_window
    }

    /// Spawn the collection fetch and record it as in flight.
    fn start_fetch(self: &Arc<Self>, state: &mut CacheState) -> PendingFetch {
        let generation = state.generation;
        let task = tokio::spawn(Arc::clone(self).run_fetch(generation));

        let inner = Arc::clone(self);
        let pending = async move {
            match task.await {
                Ok(outcome) => outcome,
                Err(join_err) => {
                    inner.release_in_flight(generation);
                    Err(ApiError::Network(format!("job fetch task failed: {}", join_err)))
                }
            }
        }
        .boxed()
        .shared();

        state.in_flight = Some(pending.clone());
        pending
    }

    async fn run_fetch(self: Arc<Self>, generation: u64) -> ApiResult<JobList> {
        info!("Fetching fresh job data");

        let fetched = match self.source.fetch_jobs().await {
            Ok(jobs) => jobs,
            Err(err) => {
                warn!("Error fetching jobs: {}", err);
                self.release_in_flight(generation);
                return Err(err);
            }
        };

        let cached_on = Local::now().date_naive();
        let jobs: JobList = Arc::new(
            fetched
                .into_iter()
                .map(|job| job.with_cached_on(cached_on))
                .collect(),
        );

        let committed = {
            let mut state = self.lock_state();
            if state.generation == generation {
                state.snapshot = Some(Snapshot {
                    jobs: Arc::clone(&jobs),
                    fetched_at: Instant::now(),
                });
                state.in_flight = None;
                true
            } else {
                false
            }
        };

        if committed {
            info!("Cached {} jobs", jobs.len());
            self.subscribers.notify(&jobs);
        } else {
            debug!("Cache cleared during fetch, not storing {} jobs", jobs.len());
        }

        Ok(jobs)
    }

    fn release_in_flight(&self, generation: u64) {
        let mut state = self.lock_state();
        if state.generation == generation {
            state.in_flight = None;
        }
    }
}

fn sample_jobs(jobs: &[JobRecord], count: usize) -> Vec<JobRecord> {
    let mut rng = rand::thread_rng();
    jobs.choose_multiple(&mut rng, count).cloned().collect()
}
