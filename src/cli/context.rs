//! Command execution context
//!
//! Loads configuration once and wires the gateway client into the job data
//! cache, so handlers only deal with their own command.

use std::sync::Arc;

use crate::cache::{CacheOptions, JobDataCache};
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{HttpJobSource, HttpResearchSource, ResearchSource};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, cache, and runtime options.
pub struct CommandContext {
    /// Loaded and validated configuration, overrides applied
    pub config: Config,
    /// Job data cache backed by the listing gateway
    pub cache: JobDataCache,
    /// Research opportunity gateway
    pub research: Arc<dyn ResearchSource>,
    /// Output format preference
    pub format: OutputFormat,
    /// Whether reads should bypass fresh cached data
    pub refresh: bool,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads config from `--config` (or the default location), applies the
    /// `--api-url`/`--research-url` overrides, re-validates, and builds the
    /// HTTP sources and the job cache.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or is invalid, or the HTTP
    /// client cannot be built.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?
            .with_api_url(opts.api_url_ref())
            .with_research_url(opts.research_url_ref());
        config.validate()?;

        log::debug!(
            "Using gateway {} (timeout {}s)",
            config.api.base_url,
            config.api.timeout_secs
        );

        let source = HttpJobSource::new(&config.api.base_url, config.api.timeout())?;
        let cache = JobDataCache::with_options(Arc::new(source), CacheOptions::from(&config.cache));
        let research =
            HttpResearchSource::new(&config.api.research_base_url, config.api.timeout())?;

        Ok(Self {
            config,
            cache,
            research: Arc::new(research),
            format: opts.format,
            refresh: opts.refresh,
        })
    }
}
