//! Pagination argument types for CLI commands

use clap::Args;

/// Page selection for `list`.
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Page number (1-indexed)
    #[arg(long, short = 'p', default_value_t = 1, hide_default_value = true)]
    pub page: usize,

    /// Jobs per page (defaults to preferences.page_size)
    #[arg(long, short = 'n')]
    pub per_page: Option<usize>,
}

impl PaginationArgs {
    /// Resolve the page size against the configured default.
    pub fn per_page_or(&self, default: usize) -> usize {
        self.per_page.filter(|n| *n > 0).unwrap_or(default)
    }
}
