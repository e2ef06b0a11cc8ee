//! Job list filtering and page arithmetic

use serde::Serialize;

use crate::client::{JobRecord, ResearchSite};

/// Page numbers shown at once by the pager
pub const PAGES_PER_WINDOW: usize = 10;

/// Criteria for narrowing the job list. Unset criteria match everything;
/// set criteria are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    /// Substring of the title (case-insensitive)
    pub search: Option<String>,
    /// Substring of the company name (case-insensitive)
    pub company: Option<String>,
    /// Location must contain one of these (e.g. state codes)
    pub locations: Vec<String>,
    /// Job's minimum salary must be at least this
    pub min_salary: Option<f64>,
    /// Job's maximum salary must be at most this
    pub max_salary: Option<f64>,
    /// Substring of the experience level (case-insensitive)
    pub experience: Option<String>,
    /// Substring of the work type (case-insensitive)
    pub work_type: Option<String>,
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}

impl JobFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, job: &JobRecord) -> bool {
        if let Some(ref search) = self.search
            && !contains_ci(job.title.as_deref(), search)
        {
            return false;
        }

        if let Some(ref company) = self.company
            && !contains_ci(job.company_name.as_deref(), company)
        {
            return false;
        }

        if !self.locations.is_empty() {
            let Some(ref location) = job.location else {
                return false;
            };
            if !self.locations.iter().any(|code| location.contains(code.as_str())) {
                return false;
            }
        }

        if let Some(min) = self.min_salary
            && !job.min_salary.is_some_and(|salary| salary >= min)
        {
            return false;
        }

        if let Some(max) = self.max_salary
            && !job.max_salary.is_some_and(|salary| salary <= max)
        {
            return false;
        }

        if let Some(ref experience) = self.experience
            && !contains_ci(job.formatted_experience_level.as_deref(), experience)
        {
            return false;
        }

        if let Some(ref work_type) = self.work_type
            && !contains_ci(job.formatted_work_type.as_deref(), work_type)
        {
            return false;
        }

        true
    }

    /// Keep the jobs that match, in their original order.
    pub fn apply<'a>(&self, jobs: &'a [JobRecord]) -> Vec<&'a JobRecord> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}

/// Criteria for narrowing research opportunities, combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResearchFilter {
    /// Substring of the site title (case-insensitive)
    pub search: Option<String>,
    /// Substring of the institution name (case-insensitive)
    pub institution: Option<String>,
    /// State/territory must contain one of these codes
    pub states: Vec<String>,
    /// Substring of the research areas (case-insensitive)
    pub discipline: Option<String>,
}

impl ResearchFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, site: &ResearchSite) -> bool {
        if !self.states.is_empty() {
            let Some(ref state) = site.state else {
                return false;
            };
            if !self.states.iter().any(|code| state.contains(code.as_str())) {
                return false;
            }
        }

        if let Some(ref institution) = self.institution
            && !contains_ci(site.institution.as_deref(), institution)
        {
            return false;
        }

        if let Some(ref discipline) = self.discipline
            && !contains_ci(site.discipline.as_deref(), discipline)
        {
            return false;
        }

        if let Some(ref search) = self.search
            && !contains_ci(site.title.as_deref(), search)
        {
            return false;
        }

        true
    }

    pub fn apply<'a>(&self, sites: &'a [ResearchSite]) -> Vec<&'a ResearchSite> {
        sites.iter().filter(|site| self.matches(site)).collect()
    }
}

/// One page of results plus the pager window around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually shown
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// First page number in the visible pager window
    pub window_start: usize,
    /// Last page number in the visible pager window
    pub window_end: usize,
}

impl<T> Page<T> {
    pub fn has_previous_window(&self) -> bool {
        self.window_start > 1
    }

    pub fn has_next_window(&self) -> bool {
        self.window_end < self.total_pages
    }
}

/// Slice `items` into 1-based page `page` of `per_page` items.
///
/// Page numbers outside `1..=total_pages` are clamped. An empty list yields a
/// single empty page 1 with zero total pages.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    let slice = if start < total_items {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    let window_start = ((page - 1) / PAGES_PER_WINDOW) * PAGES_PER_WINDOW + 1;
    let window_end = (window_start + PAGES_PER_WINDOW - 1).min(total_pages.max(1));

    Page {
        items: slice,
        page,
        per_page,
        total_items,
        total_pages,
        window_start,
        window_end,
    }
}
