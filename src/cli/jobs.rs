//! Job browsing commands

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use colored::Colorize;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::cache::{JobDataCache, JobList};
use crate::cli::{CommandContext, JobFilterArgs, OutputFormat, PaginationArgs};
use crate::client::JobRecord;
use crate::error::{ApiResult, Result};
use crate::filter::{JobFilter, Page, paginate};
use crate::output::formatters::{format_age, format_page_footer};
use crate::output::{self, json};

/// Run the job list command
pub async fn list(
    ctx: &CommandContext,
    filters: &JobFilterArgs,
    pagination: &PaginationArgs,
) -> Result<()> {
    let per_page = pagination.per_page_or(ctx.config.preferences.page_size);
    let page = load_page(
        &ctx.cache,
        &filters.to_filter(),
        pagination.page,
        per_page,
        ctx.refresh,
    )
    .await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&page)?),
        format => {
            output::print(page.items.as_slice(), format)?;
            if page.total_pages > 0 {
                println!("\n{}", format_page_footer(&page, "jobs").dimmed());
            }
        }
    }

    Ok(())
}

/// Run the featured jobs command
pub async fn featured(ctx: &CommandContext, count: Option<usize>) -> Result<()> {
    let count = count.unwrap_or(ctx.config.preferences.featured_count);

    if ctx.refresh
        && let Err(err) = ctx.cache.fetch_all_jobs(true).await
    {
        log::warn!("Refresh before sampling failed: {}", err);
    }

    let jobs = ctx.cache.get_featured_jobs(count).await;
    output::print(jobs.as_slice(), ctx.format)
}

/// Run the job detail command
pub async fn show(ctx: &CommandContext, job_id: &str) -> Result<()> {
    let job = ctx.cache.fetch_job_details(job_id, ctx.refresh).await?;
    output::print(&job, ctx.format)
}

/// Run the watch command.
///
/// Preloads the collection, then force-refreshes every `interval` seconds and
/// prints one line per collection the cache announces. Stops after `times`
/// refreshes, or on Ctrl-C.
pub async fn watch(ctx: &CommandContext, interval: u64, times: Option<u32>) -> Result<()> {
    let period = Duration::from_secs(interval.max(1));
    let format = ctx.format;

    if format != OutputFormat::Json {
        eprintln!(
            "{}",
            format!("Refreshing every {}s, Ctrl-C to stop", period.as_secs()).dimmed()
        );
    }

    watch_loop(&ctx.cache, period, times, |jobs| {
        println!("{}", watch_line(jobs, format));
    })
    .await;

    Ok(())
}

/// Drive the cache until the refresh limit or Ctrl-C, handing every announced
/// collection to `emit`.
///
/// The first refresh comes one `period` after the preload starts. On exit the
/// cache is cleared so a fetch still in flight cannot announce into a closed
/// watch.
async fn watch_loop<F>(cache: &JobDataCache, period: Duration, times: Option<u32>, mut emit: F)
where
    F: FnMut(&JobList),
{
    let (tx, mut rx) = mpsc::unbounded_channel::<JobList>();
    let subscription = cache.subscribe(move |jobs| {
        let _ = tx.send(Arc::clone(jobs));
    });
    log::debug!("Watching with {} listener(s)", cache.subscriber_count());

    let preload = cache.preload();
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    let mut refreshes: u32 = 0;

    loop {
        tokio::select! {
            Some(jobs) = rx.recv() => emit(&jobs),
            _ = ticker.tick() => {
                log::debug!("Cache {} before refresh", cache.status());
                if let Err(err) = cache.fetch_all_jobs(true).await {
                    log::warn!("Watch refresh failed: {}", err);
                    let kept = match cache.age() {
                        Some(age) => format!("keeping data from {} ago", format_age(age)),
                        None => "no data cached".to_string(),
                    };
                    eprintln!("{} Refresh failed: {} ({})", "✗".red(), err, kept);
                }

                while let Ok(jobs) = rx.try_recv() {
                    emit(&jobs);
                }

                refreshes += 1;
                if times.is_some_and(|limit| refreshes >= limit) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    preload.abort();
    subscription.unsubscribe();
    cache.clear();
}

/// Fetch the collection, filter it, and cut out the requested page.
async fn load_page(
    cache: &JobDataCache,
    filter: &JobFilter,
    page: usize,
    per_page: usize,
    refresh: bool,
) -> ApiResult<Page<JobRecord>> {
    let jobs = cache.fetch_all_jobs(refresh).await?;
    let matched: Vec<JobRecord> = if filter.is_empty() {
        jobs.to_vec()
    } else {
        let matched: Vec<JobRecord> = filter.apply(&jobs).into_iter().cloned().collect();
        log::debug!("{} of {} jobs match the filter", matched.len(), jobs.len());
        matched
    };
    Ok(paginate(&matched, page, per_page))
}

fn watch_line(jobs: &JobList, format: OutputFormat) -> String {
    let now = Local::now();
    let cached_on = jobs.first().and_then(|job| job.cached_on);

    match format {
        OutputFormat::Json => serde_json::json!({
            "timestamp": now.to_rfc3339(),
            "jobs": jobs.len(),
            "cached_on": cached_on,
        })
        .to_string(),
        _ => format!("[{}] {} jobs refreshed", now.format("%H:%M:%S"), jobs.len()),
    }
}
