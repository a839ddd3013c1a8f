use serde::Deserialize;
use std::time::Duration;

/// Pages fetched per crawl when not configured
pub const DEFAULT_MAX_PAGES: u32 = 50;

/// Per-fetch deadline in seconds when not configured
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Main configuration structure for Site-Contacts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

impl Config {
    /// Replaces crawler limits with any values given on the command line
    pub fn with_overrides(mut self, max_pages: Option<u32>, timeout_seconds: Option<u64>) -> Self {
        if let Some(max_pages) = max_pages {
            self.crawler.max_pages = max_pages;
        }
        if let Some(timeout_seconds) = timeout_seconds {
            self.crawler.timeout_seconds = timeout_seconds;
        }
        self
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of HTML pages processed in one crawl
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u32,

    /// Deadline for each fetch (seconds)
    #[serde(rename = "timeout-seconds", default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl CrawlerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default = "default_contact_url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: default_contact_url(),
        }
    }
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_crawler_name() -> String {
    "ContactParser".to_string()
}

fn default_crawler_version() -> String {
    "1.0".to_string()
}

fn default_contact_url() -> String {
    "http://example.com".to_string()
}
