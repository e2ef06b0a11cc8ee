//! Research opportunity (REU site) model
//!
//! The research gateway exports spreadsheet columns as-is, so field names
//! arrive title-cased with spaces ("Institution State/Territory"). They are
//! read under those names and written back out in snake case.

use serde::{Deserialize, Serialize};

use super::job::id_from_string_or_number;

/// A single research experience site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchSite {
    #[serde(
        rename(deserialize = "Id"),
        alias = "id",
        deserialize_with = "id_from_string_or_number"
    )]
    pub id: String,

    #[serde(
        default,
        rename(deserialize = "Title"),
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,

    #[serde(
        default,
        rename(deserialize = "Institution"),
        skip_serializing_if = "Option::is_none"
    )]
    pub institution: Option<String>,

    #[serde(
        default,
        rename(deserialize = "Institution City"),
        skip_serializing_if = "Option::is_none"
    )]
    pub city: Option<String>,

    /// State or territory code (e.g. "CA", "PR")
    #[serde(
        default,
        rename(deserialize = "Institution State/Territory"),
        skip_serializing_if = "Option::is_none"
    )]
    pub state: Option<String>,

    #[serde(
        default,
        rename(deserialize = "Institution Department"),
        skip_serializing_if = "Option::is_none"
    )]
    pub department: Option<String>,

    /// Research areas, used as the discipline filter
    #[serde(
        default,
        rename(deserialize = "Research Areas"),
        skip_serializing_if = "Option::is_none"
    )]
    pub discipline: Option<String>,

    #[serde(
        default,
        rename(deserialize = "Research Topics/Keywords"),
        skip_serializing_if = "Option::is_none"
    )]
    pub keywords: Option<String>,

    #[serde(
        default,
        rename(deserialize = "Site Website"),
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,

    #[serde(
        default,
        rename(deserialize = "Primary Contact Name"),
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_name: Option<String>,

    #[serde(
        default,
        rename(deserialize = "Primary Contact Email"),
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_email: Option<String>,
}

impl ResearchSite {
    /// Minimal site with only an id and a title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            institution: None,
            city: None,
            state: None,
            department: None,
            discipline: None,
            keywords: None,
            url: None,
            contact_name: None,
            contact_email: None,
        }
    }

    /// "City, ST" with whichever parts are present.
    pub fn location(&self) -> Option<String> {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        }
    }
}
