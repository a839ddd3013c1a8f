//! Crawler module for single-site traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a bounded timeout
//! - HTML parsing into a queryable document
//! - In-domain link discovery
//! - The FIFO frontier
//! - Overall crawl coordination

mod coordinator;
mod discover;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{crawl_site, Coordinator};
pub use discover::{discover_links, is_non_navigational};
pub use fetcher::{build_http_client, fetch_url, is_html, user_agent_string, FetchError, FetchResult};
pub use frontier::{CrawlTarget, Frontier};
pub use parser::{Anchor, PageDocument};
