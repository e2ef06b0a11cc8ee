//! Display models for CLI output

pub mod display;

pub use display::{JobDisplay, PrettyJob, PrettyResearchSite, ResearchSiteDisplay};
