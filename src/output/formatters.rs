//! Reusable formatting utilities for CLI output
//!
//! Salary, date, duration, and pager helpers shared by the display models
//! and the command handlers.

use std::time::Duration;

use chrono::{DateTime, Local, Utc};

use crate::filter::Page;

/// Group the integer part of `amount` with commas, dropping decimals.
fn group_thousands(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a salary amount in its currency.
///
/// # Example output
/// - `$85,000` (USD)
/// - `85,000 EUR`
pub fn format_salary(amount: f64, currency: Option<&str>) -> String {
    let grouped = group_thousands(amount);
    match currency {
        Some("USD") | None => format!("${}", grouped),
        Some(code) => format!("{} {}", grouped, code),
    }
}

/// Format a salary range with its pay period.
///
/// Returns "N/A" when neither bound is known.
///
/// # Example output
/// `$85,000 - $120,000 YEARLY`
pub fn format_salary_range(
    min: Option<f64>,
    max: Option<f64>,
    currency: Option<&str>,
    pay_period: Option<&str>,
) -> String {
    let range = match (min, max) {
        (Some(lo), Some(hi)) => format!(
            "{} - {}",
            format_salary(lo, currency),
            format_salary(hi, currency)
        ),
        (Some(lo), None) => format!("from {}", format_salary(lo, currency)),
        (None, Some(hi)) => format!("up to {}", format_salary(hi, currency)),
        (None, None) => return "N/A".to_string(),
    };

    match pay_period {
        Some(period) if !period.is_empty() => format!("{} {}", range, period),
        _ => range,
    }
}

/// Format Unix timestamp (milliseconds) as a local `MM/DD/YYYY` date.
///
/// Returns "N/A" if the timestamp is missing or invalid.
pub fn format_listed_date(timestamp_ms: Option<i64>) -> String {
    timestamp_ms
        .filter(|ms| *ms > 0)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.with_timezone(&Local).format("%m/%d/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Format an elapsed duration to a human-readable string.
///
/// # Example output
/// - `2h 15m 30s` (hours, minutes, seconds)
/// - `5m 10s` (minutes, seconds)
/// - `45s` (seconds only)
pub fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

/// One-line pager summary: `Page 2 of 3 (30 jobs)  1 [2] 3`, with `<`/`>`
/// when more page windows exist on either side.
pub fn format_page_footer<T>(page: &Page<T>, noun: &str) -> String {
    let pages: Vec<String> = (page.window_start..=page.window_end)
        .map(|n| {
            if n == page.page {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect();

    let mut pager = pages.join(" ");
    if page.has_previous_window() {
        pager = format!("< {}", pager);
    }
    if page.has_next_window() {
        pager = format!("{} >", pager);
    }

    format!(
        "Page {} of {} ({} {})  {}",
        page.page, page.total_pages, page.total_items, noun, pager
    )
}
