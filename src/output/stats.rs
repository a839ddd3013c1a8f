//! Statistics gathered over one crawl run
//!
//! The coordinator records every dequeued URL's outcome here; the fetch list
//! doubles as a trace of the crawl for inspection and tests.

use crate::state::PageOutcome;
use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Duration;

/// Crawl statistics summary
#[derive(Debug, Clone, Default)]
pub struct CrawlStats {
    /// HTML pages fetched with status 200 and mined
    pub pages_processed: u32,

    /// Every URL passed to fetch, in the order it was fetched
    pub fetched: Vec<String>,

    /// Count of dequeued URLs by outcome
    pub outcomes: HashMap<PageOutcome, u64>,

    /// Links pushed onto the frontier, repeats included
    pub links_enqueued: u64,

    /// Total emails and phones found
    pub emails_found: usize,
    pub phones_found: usize,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl CrawlStats {
    /// Records the outcome of one dequeued URL
    pub fn record(&mut self, url: &str, outcome: PageOutcome) {
        if outcome.was_fetched() {
            self.fetched.push(url.to_string());
        }
        if outcome.counts_toward_budget() {
            self.pages_processed += 1;
        }
        *self.outcomes.entry(outcome).or_insert(0) += 1;
    }

    /// Returns how many dequeued URLs ended with `outcome`
    pub fn count(&self, outcome: PageOutcome) -> u64 {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    pub fn fetch_errors(&self) -> u64 {
        self.count(PageOutcome::FetchFailed)
    }

    pub fn http_errors(&self) -> u64 {
        self.count(PageOutcome::HttpError)
    }

    pub fn non_html_skipped(&self) -> u64 {
        self.count(PageOutcome::NonHtml)
    }

    pub fn duplicates_skipped(&self) -> u64 {
        self.count(PageOutcome::Duplicate)
    }
}

/// Writes statistics in a human-readable block
pub fn write_statistics<W: Write>(out: &mut W, stats: &CrawlStats) -> io::Result<()> {
    writeln!(out, "=== Crawl Statistics ===\n")?;

    writeln!(out, "Overview:")?;
    writeln!(out, "  Pages processed: {}", stats.pages_processed)?;
    writeln!(out, "  Requests sent: {}", stats.fetched.len())?;
    writeln!(out, "  Links enqueued: {}", stats.links_enqueued)?;
    writeln!(out, "  Emails found: {}", stats.emails_found)?;
    writeln!(out, "  Phones found: {}", stats.phones_found)?;
    writeln!(out, "  Elapsed: {:.2}s", stats.elapsed.as_secs_f64())?;
    writeln!(out)?;

    writeln!(out, "URLs by Outcome:")?;
    // Sort outcomes by count (descending)
    let mut outcome_counts: Vec<_> = stats.outcomes.iter().collect();
    outcome_counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));

    for (outcome, count) in outcome_counts {
        writeln!(out, "  {}: {}", outcome, count)?;
    }

    let errors = stats.fetch_errors() + stats.http_errors();
    if errors > 0 {
        writeln!(out)?;
        writeln!(
            out,
            "Errors: {} ({} network, {} HTTP status)",
            errors,
            stats.fetch_errors(),
            stats.http_errors()
        )?;
    }

    Ok(())
}

/// Prints statistics to stderr, keeping stdout free for the JSON result
pub fn print_statistics(stats: &CrawlStats) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    if let Err(e) = write_statistics(&mut handle, stats) {
        tracing::warn!("Failed to print statistics: {}", e);
    }
}
