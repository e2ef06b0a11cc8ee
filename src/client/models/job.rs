//! Job record model
//!
//! Records come from a listings dataset whose exporters are not consistent
//! about types: ids may be strings or numbers, and salaries may arrive as
//! numeric strings. Deserialization normalizes those and keeps any field it
//! does not know about, so a record re-serializes to what the gateway sent.

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Unique job identifier
    #[serde(alias = "id", deserialize_with = "id_from_string_or_number")]
    pub job_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_salary: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_salary: Option<f64>,

    /// ISO currency code (e.g. "USD")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Pay period (e.g. "YEARLY", "HOURLY")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_period: Option<String>,

    /// Work type (e.g. "Full-time", "Contract")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_work_type: Option<String>,

    /// Experience level (e.g. "Entry level", "Mid-Senior level")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_experience_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_posting_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub views: Option<u64>,

    /// Listing timestamp (Unix epoch milliseconds)
    #[serde(
        default,
        deserialize_with = "lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub listed_time: Option<i64>,

    /// Local date the record entered the cache
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_on: Option<NaiveDate>,

    /// Fields the gateway sent that this model does not name
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobRecord {
    /// Minimal record with only an id and a title.
    pub fn new(job_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            title: Some(title.into()),
            company_name: None,
            location: None,
            description: None,
            min_salary: None,
            max_salary: None,
            currency: None,
            pay_period: None,
            formatted_work_type: None,
            formatted_experience_level: None,
            job_posting_url: None,
            application_url: None,
            views: None,
            listed_time: None,
            cached_on: None,
            extra: Map::new(),
        }
    }

    /// Stamp the date this record was cached.
    pub fn with_cached_on(mut self, date: NaiveDate) -> Self {
        self.cached_on = Some(date);
        self
    }
}

/// Gateway response wrapper: `{"body": [...]}`, shared by every listing.
///
/// A `body` that is not an array (missing, null, or a string the gateway
/// failed to unwrap) is read as an empty collection.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub body: Value,
}

impl Envelope {
    pub fn into_records<T: DeserializeOwned>(self) -> Result<Vec<T>, serde_json::Error> {
        match self.body {
            Value::Array(items) => items.into_iter().map(serde_json::from_value).collect(),
            _ => Ok(Vec::new()),
        }
    }
}

pub(super) fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("invalid id: {other}"))),
    }
}

/// Numbers pass through; numeric strings are parsed; anything else is absent.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64)),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    })
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|v| v as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}
