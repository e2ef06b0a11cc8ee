//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::client::{JobRecord, ResearchSite};
use crate::error::Result;
use crate::models::{JobDisplay, PrettyJob, PrettyResearchSite, ResearchSiteDisplay};

pub mod formatters;
pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

impl Formattable for [JobRecord] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => {
                let rows: Vec<JobDisplay> = self.iter().map(JobDisplay::from).collect();
                Ok(table::format_table(&rows))
            }
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Pretty => {
                if self.is_empty() {
                    return Ok("No jobs found.".to_string());
                }
                let cards: Vec<String> = self
                    .iter()
                    .map(|job| PrettyJob::summary(job).format_text())
                    .collect();
                Ok(cards.join("\n\n"))
            }
        }
    }
}

impl Formattable for JobRecord {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(&[JobDisplay::from(self)])),
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Pretty => Ok(PrettyJob::detail(self).format_text()),
        }
    }
}

impl Formattable for [ResearchSite] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => {
                let rows: Vec<ResearchSiteDisplay> =
                    self.iter().map(ResearchSiteDisplay::from).collect();
                Ok(table::format_table(&rows))
            }
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Pretty => {
                if self.is_empty() {
                    return Ok("No research sites found.".to_string());
                }
                let cards: Vec<String> = self
                    .iter()
                    .map(|site| PrettyResearchSite(site).format_text())
                    .collect();
                Ok(cards.join("\n\n"))
            }
        }
    }
}

/// Format and print data to stdout
pub fn print<T: Formattable + ?Sized>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output);
    Ok(())
}
