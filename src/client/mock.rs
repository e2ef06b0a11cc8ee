//! Mock job source for testing
//!
//! Provides a scripted implementation of [`JobSource`] for unit testing the
//! cache without making real HTTP calls.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Semaphore};

use super::models::{JobRecord, ResearchSite};
use super::{JobSource, ResearchSource};
use crate::error::{ApiError, ApiResult};

/// Mock job source for testing.
///
/// Configure responses via builder methods, keep a clone for assertions, and
/// hand the other clone to the code under test.
///
/// # Example
/// ```ignore
/// let mock = MockJobSource::new().with_jobs(vec![JobRecord::new("1", "Dev")]).await;
/// let cache = JobDataCache::new(Arc::new(mock.clone()));
/// cache.fetch_all_jobs(false).await?;
/// assert_eq!(mock.call_counts().await.fetch_jobs, 1);
/// ```
#[derive(Clone, Default)]
pub struct MockJobSource {
    /// Collection returned by fetch_jobs
    jobs: Arc<Mutex<Vec<JobRecord>>>,
    /// Records returned by fetch_job, keyed by id
    details: Arc<Mutex<HashMap<String, JobRecord>>>,
    /// Errors returned by the next fetch_jobs calls, consumed in order
    list_errors: Arc<Mutex<VecDeque<ApiError>>>,
    /// Errors returned by the next fetch_job calls, consumed in order
    detail_errors: Arc<Mutex<VecDeque<ApiError>>>,
    /// Holds fetch_jobs open until a permit is released
    gate: Option<Arc<Semaphore>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks source call counts for test verification
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CallCounts {
    pub fetch_jobs: usize,
    pub fetch_job: usize,
}

impl CallCounts {
    /// Get total number of source calls made.
    pub fn total(&self) -> usize {
        self.fetch_jobs + self.fetch_job
    }
}

impl MockJobSource {
    /// Create a new mock source with an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the collection returned from fetch_jobs.
    pub async fn with_jobs(self, jobs: Vec<JobRecord>) -> Self {
        self.set_jobs(jobs).await;
        self
    }

    /// Configure a record returned from fetch_job.
    pub async fn with_detail(self, job: JobRecord) -> Self {
        self.details.lock().await.insert(job.job_id.clone(), job);
        self
    }

    /// Hold every fetch_jobs call until a permit is added to the returned gate.
    pub fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    /// Replace the collection returned from later fetch_jobs calls.
    pub async fn set_jobs(&self, jobs: Vec<JobRecord>) {
        *self.jobs.lock().await = jobs;
    }

    /// Queue an error for the next fetch_jobs call.
    pub async fn fail_next_list(&self, error: ApiError) {
        self.list_errors.lock().await.push_back(error);
    }

    /// Queue an error for the next fetch_job call.
    pub async fn fail_next_detail(&self, error: ApiError) {
        self.detail_errors.lock().await.push_back(error);
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }
}

#[async_trait]
impl JobSource for MockJobSource {
    async fn fetch_jobs(&self) -> ApiResult<Vec<JobRecord>> {
        self.call_count.lock().await.fetch_jobs += 1;

        if let Some(ref gate) = self.gate {
            gate.acquire()
                .await
                .map_err(|_| ApiError::Network("mock gate closed".to_string()))?
                .forget();
        }

        if let Some(err) = self.list_errors.lock().await.pop_front() {
            return Err(err);
        }

        Ok(self.jobs.lock().await.clone())
    }

    async fn fetch_job(&self, job_id: &str) -> ApiResult<JobRecord> {
        self.call_count.lock().await.fetch_job += 1;

        if let Some(err) = self.detail_errors.lock().await.pop_front() {
            return Err(err);
        }

        self.details
            .lock()
            .await
            .get(job_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(job_id.to_string()))
    }
}

/// Mock research source: a fixed site list or one queued failure.
#[derive(Clone, Default)]
pub struct MockResearchSource {
    sites: Arc<Mutex<Vec<ResearchSite>>>,
    next_error: Arc<Mutex<Option<ApiError>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockResearchSource {
    pub async fn with_sites(self, sites: Vec<ResearchSite>) -> Self {
        *self.sites.lock().await = sites;
        self
    }

    pub async fn fail_next(&self, error: ApiError) {
        *self.next_error.lock().await = Some(error);
    }

    pub async fn calls(&self) -> usize {
        *self.calls.lock().await
    }
}

#[async_trait]
impl ResearchSource for MockResearchSource {
    async fn fetch_sites(&self) -> ApiResult<Vec<ResearchSite>> {
        *self.calls.lock().await += 1;

        if let Some(err) = self.next_error.lock().await.take() {
            return Err(err);
        }

        Ok(self.sites.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_jobs() {
        let mock = MockJobSource::new()
            .with_jobs(vec![JobRecord::new("1", "Dev"), JobRecord::new("2", "Ops")])
            .await;

        let jobs = mock.fetch_jobs().await.unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(mock.call_counts().await.fetch_jobs, 1);
    }

    #[tokio::test]
    async fn test_mock_errors_consumed_in_order() {
        let mock = MockJobSource::new();
        mock.fail_next_list(ApiError::Timeout).await;

        assert_eq!(mock.fetch_jobs().await.unwrap_err(), ApiError::Timeout);
        assert!(mock.fetch_jobs().await.is_ok());
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_detail_not_found() {
        let mock = MockJobSource::new()
            .with_detail(JobRecord::new("7", "Known"))
            .await;

        assert_eq!(mock.fetch_job("7").await.unwrap().job_id, "7");
        assert!(mock.fetch_job("8").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_mock_research_failure_then_sites() {
        let mock = MockResearchSource::default()
            .with_sites(vec![ResearchSite::new("1", "Marine Biology REU")])
            .await;
        mock.fail_next(ApiError::Timeout).await;

        assert_eq!(mock.fetch_sites().await.unwrap_err(), ApiError::Timeout);
        assert_eq!(mock.fetch_sites().await.unwrap().len(), 1);
        assert_eq!(mock.calls().await, 2);
    }
}
