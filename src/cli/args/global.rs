//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.jobboard/config.yaml)
    pub config: Option<String>,

    /// Listing gateway base URL override
    pub api_url: Option<String>,

    /// Research gateway base URL override
    pub research_url: Option<String>,

    /// Bypass fresh cached data and fetch from the gateway
    pub refresh: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            research_url: cli.research_url.clone(),
            refresh: cli.refresh,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API URL override as `Option<&str>`.
    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Get research URL override as `Option<&str>`.
    pub fn research_url_ref(&self) -> Option<&str> {
        self.research_url.as_deref()
    }
}
