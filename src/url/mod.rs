//! URL handling module for Site-Contacts
//!
//! This module provides canonicalization (the crawl's dedup key), domain
//! scoping against the seed's host, and relative-link resolution.

mod domain;
mod normalize;

use crate::UrlError;
use url::Url;

// Re-export main functions
pub use domain::{authority, is_internal};
pub use normalize::{canonical_url, canonicalize};

/// Resolves a possibly-relative href against the URL of the page it appeared on
///
/// Absolute hrefs pass through unchanged; scheme-relative (`//host/path`) and
/// path-relative (`../a`, `b`, `/c`) hrefs are joined against `base` using the
/// standard relative-URL resolution rules.
///
/// # Examples
///
/// ```
/// use site_contacts::url::resolve;
/// use url::Url;
///
/// let base = Url::parse("https://x.com/home").unwrap();
/// assert_eq!(resolve(&base, "/about").unwrap().as_str(), "https://x.com/about");
/// assert_eq!(resolve(&base, "//cdn.x.com/a").unwrap().as_str(), "https://cdn.x.com/a");
/// ```
pub fn resolve(base: &Url, href: &str) -> Result<Url, UrlError> {
    base.join(href.trim())
        .map_err(|e| UrlError::Parse(format!("{} (relative to {}): {}", href, base, e)))
}

/// Parses and validates the seed URL a crawl starts from
///
/// The seed must be an absolute `http` or `https` URL with a host, since the
/// host becomes the crawl's base domain.
pub fn parse_seed(seed: &str) -> Result<Url, UrlError> {
    let url = Url::parse(seed.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}
