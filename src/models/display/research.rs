//! Research opportunity display models

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::common::{or_dash, truncate_string};
use crate::client::ResearchSite;

/// Research site row for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ResearchSiteDisplay {
    #[tabled(rename = "SITE ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "INSTITUTION")]
    pub institution: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    #[tabled(rename = "DISCIPLINE")]
    pub discipline: String,
}

impl From<&ResearchSite> for ResearchSiteDisplay {
    fn from(site: &ResearchSite) -> Self {
        Self {
            id: site.id.clone(),
            title: truncate_string(&or_dash(site.title.as_deref()), 48),
            institution: truncate_string(&or_dash(site.institution.as_deref()), 32),
            location: or_dash(site.location().as_deref()),
            discipline: truncate_string(&or_dash(site.discipline.as_deref()), 32),
        }
    }
}

/// Multi-line card for one research site.
pub struct PrettyResearchSite<'a>(pub &'a ResearchSite);

impl PrettyResearchSite<'_> {
    pub fn format_text(&self) -> String {
        let site = self.0;
        let not_specified = |value: Option<&str>| value.unwrap_or("Not specified").to_string();

        let mut lines = vec![
            format!(
                "{} {}",
                or_dash(site.title.as_deref()).bold(),
                format!("({})", site.id).dimmed()
            ),
            format!(
                "{} - {}",
                or_dash(site.institution.as_deref()).bold(),
                or_dash(site.location().as_deref())
            ),
            format!("Department: {}", not_specified(site.department.as_deref())),
            format!("Discipline: {}", not_specified(site.discipline.as_deref())),
            format!(
                "Contact: {} | {}",
                not_specified(site.contact_name.as_deref()),
                site.contact_email.as_deref().unwrap_or("Not available")
            ),
        ];

        if let Some(ref url) = site.url {
            lines.push(format!("Website: {}", url.cyan()));
        }

        lines.join("\n")
    }
}
