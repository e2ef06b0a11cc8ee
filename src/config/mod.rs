//! Configuration management for jobboard

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Default listing gateway (the `/reading` endpoint hangs off this base)
pub const DEFAULT_API_BASE_URL: &str =
    "https://ixmv8lw2lj.execute-api.us-east-2.amazonaws.com/linkedinDB";

/// Default research opportunity gateway (also serves `/reading`)
pub const DEFAULT_RESEARCH_BASE_URL: &str =
    "https://lan4l8uk4f.execute-api.us-east-2.amazonaws.com/test";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Listing gateway settings
    #[serde(default)]
    pub api: ApiSettings,

    /// Job data cache settings
    #[serde(default)]
    pub cache: CacheSettings,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Listing gateway settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the listing gateway
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Base URL of the research opportunity gateway
    #[serde(default = "default_research_base_url")]
    pub research_base_url: String,

    /// Per-request timeout enforced by the HTTP client
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Job data cache settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// How long a fetched collection is served without refetching
    #[serde(default = "default_freshness_minutes")]
    pub freshness_minutes: u64,

    /// Delay before the background preload fires
    #[serde(default = "default_preload_delay_ms")]
    pub preload_delay_ms: u64,
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Jobs shown per page by `list`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Jobs sampled by `featured`
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_research_base_url() -> String {
    DEFAULT_RESEARCH_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_freshness_minutes() -> u64 {
    10
}

fn default_preload_delay_ms() -> u64 {
    1000
}

fn default_page_size() -> usize {
    10
}

fn default_featured_count() -> usize {
    3
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            research_base_url: default_research_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            freshness_minutes: default_freshness_minutes(),
            preload_delay_ms: default_preload_delay_ms(),
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            featured_count: default_featured_count(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl CacheSettings {
    pub fn freshness_window(&self) -> Duration {
        Duration::from_secs(self.freshness_minutes.saturating_mul(60))
    }

    pub fn preload_delay(&self) -> Duration {
        Duration::from_millis(self.preload_delay_ms)
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".jobboard").join("config.yaml"))
    }

    /// Resolve the config path from an optional override.
    pub fn resolve_path(explicit: Option<&str>) -> Result<PathBuf> {
        match explicit {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing file at the default location yields the built-in defaults;
    /// a missing explicit path is an error.
    pub fn load_at(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    log::debug!("No config at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Apply a base URL override (CLI flag or `JOBBOARD_API_URL`).
    pub fn with_api_url(mut self, api_url: Option<&str>) -> Self {
        if let Some(url) = api_url {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    /// Apply a research gateway override (CLI flag or `JOBBOARD_RESEARCH_URL`).
    pub fn with_research_url(mut self, research_url: Option<&str>) -> Self {
        if let Some(url) = research_url {
            self.api.research_base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    /// Reject settings the cache and pager cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api.base_url must not be empty".to_string()).into());
        }
        if self.api.research_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "api.research_base_url must not be empty".to_string(),
            )
            .into());
        }
        if self.cache.freshness_minutes == 0 {
            return Err(ConfigError::Invalid(
                "cache.freshness_minutes must be at least 1".to_string(),
            )
            .into());
        }
        if self.preferences.page_size == 0 {
            return Err(ConfigError::Invalid(
                "preferences.page_size must be at least 1".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
