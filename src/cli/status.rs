//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::{Config, DEFAULT_API_BASE_URL, DEFAULT_RESEARCH_BASE_URL};
use crate::error::Result;
use crate::output::json;

/// Resolved configuration as reported by `status --format json`
#[derive(Debug, Serialize)]
struct StatusReport {
    config_path: String,
    config_file_found: bool,
    #[serde(flatten)]
    config: Config,
}

/// Run the status command to display the resolved configuration
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    let found = path.exists();
    let config = Config::load_at(opts.config_ref())?
        .with_api_url(opts.api_url_ref())
        .with_research_url(opts.research_url_ref());

    if opts.format == OutputFormat::Json {
        let report = StatusReport {
            config_path: path.display().to_string(),
            config_file_found: found,
            config,
        };
        println!("{}", json::format_json(&report)?);
        return Ok(());
    }

    println!("{}\n", "Job Board Configuration Status".bold());

    if found {
        println!("Config file: {}", path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }
    println!();

    if config.api.base_url == DEFAULT_API_BASE_URL {
        println!("{} Gateway: {}", "✓".green(), config.api.base_url);
    } else {
        println!(
            "{} Gateway: {} {}",
            "○".dimmed(),
            config.api.base_url.cyan(),
            "(custom)".dimmed()
        );
    }
    if config.api.research_base_url == DEFAULT_RESEARCH_BASE_URL {
        println!(
            "{} Research gateway: {}",
            "✓".green(),
            config.api.research_base_url
        );
    } else {
        println!(
            "{} Research gateway: {} {}",
            "○".dimmed(),
            config.api.research_base_url.cyan(),
            "(custom)".dimmed()
        );
    }
    println!("{} Request timeout: {}s", "✓".green(), config.api.timeout_secs);
    println!(
        "{} Cache freshness: {} min",
        "✓".green(),
        config.cache.freshness_minutes
    );
    println!(
        "{} Preload delay: {} ms",
        "✓".green(),
        config.cache.preload_delay_ms
    );
    println!(
        "{} Page size: {}, featured jobs: {}",
        "✓".green(),
        config.preferences.page_size,
        config.preferences.featured_count
    );
    println!();

    Ok(())
}
