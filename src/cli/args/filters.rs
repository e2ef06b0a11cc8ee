//! Filter argument types for CLI commands

use clap::Args;

use crate::filter::{JobFilter, ResearchFilter};

/// Filter arguments for the job list command.
///
/// Locations accept both repeated flags and comma-separated values:
/// - `--location CA --location NY` (repeated)
/// - `--location CA,NY` (comma-separated)
#[derive(Args, Debug, Default, Clone)]
pub struct JobFilterArgs {
    /// Filter by title (substring match, case-insensitive)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Filter by company name (substring match, case-insensitive)
    #[arg(long, short = 'c')]
    pub company: Option<String>,

    /// Filter by location (e.g. state code); any listed value matches
    #[arg(long, short = 'l', value_delimiter = ',')]
    pub location: Vec<String>,

    /// Minimum salary the job must offer
    #[arg(long)]
    pub min_salary: Option<f64>,

    /// Maximum salary the job may offer
    #[arg(long)]
    pub max_salary: Option<f64>,

    /// Filter by experience level (e.g. "entry", "mid-senior")
    #[arg(long, short = 'e')]
    pub experience: Option<String>,

    /// Filter by work type (e.g. "full-time", "contract")
    #[arg(long, short = 'w')]
    pub work_type: Option<String>,
}

impl JobFilterArgs {
    /// Convert CLI args to a job filter.
    pub fn to_filter(&self) -> JobFilter {
        JobFilter {
            search: self.search.clone(),
            company: self.company.clone(),
            locations: trimmed(&self.location),
            min_salary: self.min_salary,
            max_salary: self.max_salary,
            experience: self.experience.clone(),
            work_type: self.work_type.clone(),
        }
    }
}

/// Filter arguments for the research opportunity list command.
#[derive(Args, Debug, Default, Clone)]
pub struct ResearchFilterArgs {
    /// Filter by site title (substring match, case-insensitive)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Filter by institution (substring match, case-insensitive)
    #[arg(long, short = 'i')]
    pub institution: Option<String>,

    /// Filter by state/territory code; any listed value matches
    #[arg(long, short = 'l', value_delimiter = ',')]
    pub state: Vec<String>,

    /// Filter by research area (substring match, case-insensitive)
    #[arg(long, short = 'd')]
    pub discipline: Option<String>,
}

impl ResearchFilterArgs {
    /// Convert CLI args to a research filter.
    pub fn to_filter(&self) -> ResearchFilter {
        ResearchFilter {
            search: self.search.clone(),
            institution: self.institution.clone(),
            states: trimmed(&self.state),
            discipline: self.discipline.clone(),
        }
    }
}

fn trimmed(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
