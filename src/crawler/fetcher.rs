//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the crawler's identifier and timeout
//! - GET requests with Content-Type classification
//! - Error classification (timeout, connection, other)
//!
//! A response with any status is a successful fetch; only transport-level
//! failures surface as `FetchError`.

use crate::config::UserAgentConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Result of a fetch that produced an HTTP response
#[derive(Debug)]
pub enum FetchResult {
    /// HTML page returned with status 200
    Page {
        /// Final URL after redirects
        final_url: String,
        /// Page body content
        body: String,
    },

    /// Page is not HTML (Content-Type mismatch), whatever its status
    ContentMismatch {
        /// The HTTP status code
        status_code: u16,
        /// The actual Content-Type received
        content_type: String,
    },

    /// HTML response with a status other than 200
    HttpStatus {
        /// The HTTP status code
        status_code: u16,
    },
}

/// Transport-level failure: no usable response was received
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("HTTP error for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

impl FetchError {
    fn classify(url: &str, error: reqwest::Error) -> Self {
        let url = url.to_string();
        if error.is_timeout() {
            Self::Timeout { url }
        } else if error.is_connect() {
            Self::Connect { url, source: error }
        } else {
            Self::Request { url, source: error }
        }
    }

    /// Returns the URL the failed request was for
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url }
            | Self::Connect { url, .. }
            | Self::Request { url, .. }
            | Self::Body { url, .. } => url,
        }
    }
}

/// Formats the client identifier sent as the User-Agent header
///
/// Format: `Mozilla/5.0 (compatible; CrawlerName/Version; +ContactURL)`
pub fn user_agent_string(config: &UserAgentConfig) -> String {
    format!(
        "Mozilla/5.0 (compatible; {}/{}; +{})",
        config.crawler_name, config.crawler_version, config.contact_url
    )
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Deadline for each whole request, connect to last body byte
///
/// # Example
///
/// ```no_run
/// use site_contacts::config::UserAgentConfig;
/// use site_contacts::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent_string(config))
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Returns true if a Content-Type header value denotes HTML
pub fn is_html(content_type: &str) -> bool {
    content_type.to_lowercase().contains("text/html")
}

/// Fetches a URL and classifies the response
///
/// # Flow
///
/// | Condition | Result |
/// |-----------|--------|
/// | Network, DNS or timeout failure | `Err(FetchError)` |
/// | Content-Type not HTML (any status) | `ContentMismatch` |
/// | HTML, status != 200 | `HttpStatus` |
/// | HTML, status 200 | `Page` with the body |
///
/// The body is only downloaded for the last case.
pub async fn fetch_url(client: &Client, url: &str) -> Result<FetchResult, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::classify(url, e))?;

    let status = response.status();
    let final_url = response.url().to_string();

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_lowercase();

    if !is_html(&content_type) {
        return Ok(FetchResult::ContentMismatch {
            status_code: status.as_u16(),
            content_type,
        });
    }

    if status != StatusCode::OK {
        return Ok(FetchResult::HttpStatus {
            status_code: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    Ok(FetchResult::Page { final_url, body })
}
