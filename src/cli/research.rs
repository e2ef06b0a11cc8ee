//! Research opportunity commands

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat, PaginationArgs, ResearchFilterArgs};
use crate::client::{ResearchSite, ResearchSource};
use crate::error::{ApiResult, Result};
use crate::filter::{Page, ResearchFilter, paginate};
use crate::output::formatters::format_page_footer;
use crate::output::{self, json};

/// Run the research site list command
pub async fn list(
    ctx: &CommandContext,
    filters: &ResearchFilterArgs,
    pagination: &PaginationArgs,
) -> Result<()> {
    let per_page = pagination.per_page_or(ctx.config.preferences.page_size);
    let page = load_page(
        ctx.research.as_ref(),
        &filters.to_filter(),
        pagination.page,
        per_page,
    )
    .await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&page)?),
        format => {
            output::print(page.items.as_slice(), format)?;
            if page.total_pages > 0 {
                println!("\n{}", format_page_footer(&page, "sites").dimmed());
            }
        }
    }

    Ok(())
}

/// Fetch all sites, filter them, and cut out the requested page.
async fn load_page(
    source: &dyn ResearchSource,
    filter: &ResearchFilter,
    page: usize,
    per_page: usize,
) -> ApiResult<Page<ResearchSite>> {
    let sites = source.fetch_sites().await.inspect_err(|err| {
        log::warn!("Error fetching research sites: {}", err);
    })?;

    let matched: Vec<ResearchSite> = if filter.is_empty() {
        sites
    } else {
        let total = sites.len();
        let matched: Vec<ResearchSite> = filter.apply(&sites).into_iter().cloned().collect();
        log::debug!("{} of {} research sites match the filter", matched.len(), total);
        matched
    };

    Ok(paginate(&matched, page, per_page))
}
