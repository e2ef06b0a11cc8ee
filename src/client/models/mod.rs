//! Job listing API data models

mod job;
mod research;

pub use job::{Envelope, JobRecord};
pub use research::ResearchSite;
