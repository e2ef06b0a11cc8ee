//! HTTP sources backed by the listing gateways

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::models::{Envelope, JobRecord, ResearchSite};
use super::{JobSource, ResearchSource};
use crate::error::{ApiError, ApiResult};

/// Path of the listing endpoint under a gateway base URL
const READING_PATH: &str = "/reading";

/// One gateway base URL plus the shared request/decode logic.
#[derive(Clone)]
struct Gateway {
    http: HttpClient,
    base_url: String,
}

impl Gateway {
    fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn reading_url(&self) -> String {
        format!("{}{}", self.base_url, READING_PATH)
    }

    /// GET the reading endpoint and decode the `body` envelope.
    async fn get_records<T: DeserializeOwned>(
        &self,
        query: &[(&str, &str)],
    ) -> ApiResult<Vec<T>> {
        let url = self.reading_url();
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            s if s.is_success() => {
                let body = response.text().await.map_err(ApiError::from)?;
                let envelope: Envelope = serde_json::from_str(&body).map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                envelope.into_records().map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse record: {}", e))
                })
            }
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg))
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg))
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg))
            }
            _ => Err(ApiError::UnexpectedStatus(status.as_u16())),
        }
    }
}

/// Job listing gateway client
#[derive(Clone)]
pub struct HttpJobSource {
    gateway: Gateway,
}

impl HttpJobSource {
    /// Create a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        Ok(Self {
            gateway: Gateway::new(base_url, timeout)?,
        })
    }
}

#[async_trait]
impl JobSource for HttpJobSource {
    async fn fetch_jobs(&self) -> ApiResult<Vec<JobRecord>> {
        self.gateway.get_records(&[]).await
    }

    async fn fetch_job(&self, job_id: &str) -> ApiResult<JobRecord> {
        self.gateway
            .get_records::<JobRecord>(&[("id", job_id)])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(job_id.to_string()))
    }
}

/// Research opportunity gateway client
#[derive(Clone)]
pub struct HttpResearchSource {
    gateway: Gateway,
}

impl HttpResearchSource {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        Ok(Self {
            gateway: Gateway::new(base_url, timeout)?,
        })
    }
}

#[async_trait]
impl ResearchSource for HttpResearchSource {
    async fn fetch_sites(&self) -> ApiResult<Vec<ResearchSite>> {
        self.gateway.get_records(&[]).await
    }
}
