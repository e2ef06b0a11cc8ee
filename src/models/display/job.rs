//! Job display models

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::common::{or_dash, truncate_string};
use crate::client::JobRecord;
use crate::output::formatters::{format_listed_date, format_salary_range};

/// Characters of description shown by the pretty format
const DESCRIPTION_PREVIEW_LEN: usize = 200;

/// Job row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct JobDisplay {
    #[tabled(rename = "JOB ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "COMPANY")]
    pub company: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    #[tabled(rename = "SALARY")]
    pub salary: String,

    #[tabled(rename = "TYPE")]
    pub work_type: String,
}

impl From<&JobRecord> for JobDisplay {
    fn from(job: &JobRecord) -> Self {
        Self {
            id: job.job_id.clone(),
            title: truncate_string(&or_dash(job.title.as_deref()), 48),
            company: truncate_string(&or_dash(job.company_name.as_deref()), 32),
            location: or_dash(job.location.as_deref()),
            salary: format_salary_range(
                job.min_salary,
                job.max_salary,
                job.currency.as_deref(),
                job.pay_period.as_deref(),
            ),
            work_type: or_dash(job.formatted_work_type.as_deref()),
        }
    }
}

/// Multi-line human-readable rendering of one job.
pub struct PrettyJob<'a> {
    job: &'a JobRecord,
    full_description: bool,
}

impl<'a> PrettyJob<'a> {
    /// Summary card: description cut to a preview.
    pub fn summary(job: &'a JobRecord) -> Self {
        Self {
            job,
            full_description: false,
        }
    }

    /// Detail view: full description, links, and counters.
    pub fn detail(job: &'a JobRecord) -> Self {
        Self {
            job,
            full_description: true,
        }
    }

    pub fn format_text(&self) -> String {
        let job = self.job;
        let mut lines = Vec::new();

        lines.push(format!(
            "{} {}",
            or_dash(job.title.as_deref()).bold(),
            format!("({})", job.job_id).dimmed()
        ));
        lines.push(format!(
            "{} - {}",
            or_dash(job.company_name.as_deref()).bold(),
            or_dash(job.location.as_deref())
        ));
        lines.push(format!(
            "Salary: {}",
            format_salary_range(
                job.min_salary,
                job.max_salary,
                job.currency.as_deref(),
                job.pay_period.as_deref(),
            )
        ));

        if self.full_description {
            lines.push(format!(
                "Type: {}    Experience: {}",
                or_dash(job.formatted_work_type.as_deref()),
                or_dash(job.formatted_experience_level.as_deref())
            ));
            lines.push(format!(
                "Listed: {}    Views: {}",
                format_listed_date(job.listed_time),
                job.views
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "--".to_string())
            ));
        }

        if let Some(ref description) = job.description {
            lines.push(String::new());
            if self.full_description {
                lines.push(description.trim().to_string());
            } else {
                lines.push(truncate_string(description.trim(), DESCRIPTION_PREVIEW_LEN));
            }
        }

        let links: Vec<(&str, &String)> = [
            ("Posting", job.job_posting_url.as_ref()),
            ("Apply", job.application_url.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect();

        if !links.is_empty() {
            lines.push(String::new());
            for (label, url) in links {
                lines.push(format!("{}: {}", label, url.cyan()));
            }
        }

        lines.join("\n")
    }
}
