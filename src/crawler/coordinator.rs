//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that owns all per-run state:
//! - The FIFO frontier, seeded with the start URL
//! - The visited set of canonical URLs
//! - The contact accumulator
//! - The page budget counter
//!
//! Each dequeued URL goes through fetch, classify, extract and discover. No
//! per-page failure escapes the loop; a run always ends with a result.

use crate::config::Config;
use crate::crawler::discover::discover_links;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::crawler::frontier::{CrawlTarget, Frontier};
use crate::crawler::parser::PageDocument;
use crate::extract::ContactExtractor;
use crate::output::{CrawlReport, CrawlResult, CrawlStats};
use crate::state::{ContactSet, PageOutcome, VisitedSet};
use crate::url::{authority, canonicalize, parse_seed};
use crate::{CrawlError, UrlError};
use reqwest::Client;
use std::time::Instant;
use url::Url;

/// An HTML page that passed classification and is ready to be mined
struct FetchedPage {
    final_url: String,
    body: String,
}

/// Main crawler coordinator structure
///
/// A coordinator drives exactly one crawl; `run` consumes it.
pub struct Coordinator {
    config: Config,
    client: Client,
    extractor: ContactExtractor,
    seed: String,
    base_domain: String,
    frontier: Frontier,
    visited: VisitedSet,
    contacts: ContactSet,
    stats: CrawlStats,
}

impl Coordinator {
    /// Creates a new coordinator for a crawl starting at `seed`
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(CrawlError)` - The seed is not an absolute http(s) URL, or the
    ///   HTTP client could not be built
    pub fn new(seed: &str, config: Config) -> Result<Self, CrawlError> {
        let seed_url = parse_seed(seed)?;
        let base_domain = authority(&seed_url).ok_or(UrlError::MissingDomain)?;

        let client = build_http_client(&config.user_agent, config.crawler.timeout())?;
        let extractor = ContactExtractor::new()?;

        Ok(Self {
            config,
            client,
            extractor,
            seed: seed.to_string(),
            base_domain,
            frontier: Frontier::with_seed(seed_url),
            visited: VisitedSet::new(),
            contacts: ContactSet::new(),
            stats: CrawlStats::default(),
        })
    }

    /// The host (and port, if explicit) links must match to be followed
    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    /// Runs the crawl loop until the frontier drains or the budget is spent
    pub async fn run(mut self) -> CrawlReport {
        let max_pages = self.config.crawler.max_pages;
        let start_time = Instant::now();

        tracing::info!(
            "Starting crawl of {} (domain {}, max {} pages)",
            self.seed,
            self.base_domain,
            max_pages
        );

        while self.stats.pages_processed < max_pages {
            let Some(target) = self.frontier.pop() else {
                tracing::info!("Frontier is empty, crawl complete");
                break;
            };

            let (outcome, page) = self.process_target(&target).await;

            if outcome.marks_visited() {
                self.visited.insert(target.as_str());
            }
            if let Some(page) = page {
                self.handle_page(&target.url, &page.final_url, &page.body);
            }

            self.stats.record(target.as_str(), outcome);
        }

        if !self.frontier.is_empty() {
            tracing::info!(
                "Page budget of {} reached with {} URLs left in frontier",
                max_pages,
                self.frontier.len()
            );
        }

        self.stats.emails_found = self.contacts.emails().len();
        self.stats.phones_found = self.contacts.phones().len();
        self.stats.elapsed = start_time.elapsed();

        tracing::info!(
            "Crawl completed: {} pages processed, {} emails and {} phones found in {:?}",
            self.stats.pages_processed,
            self.stats.emails_found,
            self.stats.phones_found,
            self.stats.elapsed
        );

        CrawlReport {
            result: CrawlResult::from_contacts(self.seed, self.contacts),
            stats: self.stats,
        }
    }

    /// Fetches and classifies a single dequeued URL
    ///
    /// The body comes back only for pages that are to be mined.
    async fn process_target(&self, target: &CrawlTarget) -> (PageOutcome, Option<FetchedPage>) {
        let url_str = target.as_str();

        if self.visited.contains(url_str) {
            tracing::debug!("Skipping already visited URL: {}", url_str);
            return (PageOutcome::Duplicate, None);
        }

        tracing::info!("Processing: {}", url_str);

        match fetch_url(&self.client, url_str).await {
            Ok(FetchResult::Page { final_url, body }) => {
                (PageOutcome::Processed, Some(FetchedPage { final_url, body }))
            }

            Ok(FetchResult::ContentMismatch {
                status_code,
                content_type,
            }) => {
                tracing::debug!(
                    "Skipping non-HTML content at {} (status {}, type '{}')",
                    url_str,
                    status_code,
                    content_type
                );
                (PageOutcome::NonHtml, None)
            }

            Ok(FetchResult::HttpStatus { status_code }) => {
                tracing::warn!("Status {} for {}", status_code, url_str);
                (PageOutcome::HttpError, None)
            }

            Err(e) => {
                tracing::error!("Error fetching {}: {}", url_str, e);
                (PageOutcome::FetchFailed, None)
            }
        }
    }

    /// Mines a fetched HTML page for contacts and new links
    ///
    /// Links resolve against the URL that was requested, not the post-redirect
    /// URL, so the frontier stays anchored to the seed's host.
    fn handle_page(&mut self, page_url: &Url, final_url: &str, body: &str) {
        if final_url != page_url.as_str() {
            tracing::debug!("{} redirected to {}", page_url, final_url);
        }

        let document = PageDocument::parse(body);

        let counts = self.extractor.extract(&document, &mut self.contacts);
        tracing::debug!(
            "Found {} new emails and {} new phones on {}",
            counts.new_emails,
            counts.new_phones,
            page_url
        );

        let links: Vec<CrawlTarget> =
            discover_links(&document, page_url, &self.base_domain, &self.visited)
                .map(CrawlTarget::from)
                .collect();

        let added = self.frontier.extend(links);
        self.stats.links_enqueued += added as u64;

        tracing::debug!(
            "Enqueued {} links from {} ({} in frontier)",
            added,
            canonicalize(page_url.as_str()),
            self.frontier.len()
        );
    }
}

/// Crawls a site from `seed` and returns the contacts found
///
/// This is the main entry point for one crawl. It will:
/// 1. Validate the seed and derive the base domain
/// 2. Build the HTTP client
/// 3. Run the fetch/extract/discover loop within the page budget
/// 4. Return the accumulated result and statistics
///
/// # Example
///
/// ```no_run
/// use site_contacts::config::Config;
/// use site_contacts::crawler::crawl_site;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = crawl_site("https://example.com/", Config::default()).await?;
/// println!("{}", report.result.to_json(false)?);
/// # Ok(())
/// # }
/// ```
pub async fn crawl_site(seed: &str, config: Config) -> Result<CrawlReport, CrawlError> {
    let coordinator = Coordinator::new(seed, config)?;
    Ok(coordinator.run().await)
}
