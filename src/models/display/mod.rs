//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod common;
mod job;
mod research;

pub use job::{JobDisplay, PrettyJob};
pub use research::{PrettyResearchSite, ResearchSiteDisplay};
