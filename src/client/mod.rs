//! Listing gateway clients

use async_trait::async_trait;

use crate::error::ApiResult;

pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use http::{HttpJobSource, HttpResearchSource};
#[cfg(test)]
pub use mock::{MockJobSource, MockResearchSource};
pub use models::{JobRecord, ResearchSite};

/// Where the cache gets its data from.
///
/// One implementation talks to the listing gateway over HTTP; tests use
/// [`MockJobSource`].
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Fetch the full job collection.
    async fn fetch_jobs(&self) -> ApiResult<Vec<JobRecord>>;

    /// Fetch a single job by identifier.
    ///
    /// Returns `ApiError::NotFound` when the source answers with no match.
    async fn fetch_job(&self, job_id: &str) -> ApiResult<JobRecord>;
}

/// Where research opportunity listings come from.
#[async_trait]
pub trait ResearchSource: Send + Sync {
    /// Fetch every research site.
    async fn fetch_sites(&self) -> ApiResult<Vec<ResearchSite>>;
}
