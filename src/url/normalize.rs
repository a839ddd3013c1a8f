use url::Url;

/// Returns the canonical form of a parsed URL: scheme, host and path only
///
/// Query string and fragment are dropped, so `/a?utm=1` and `/a#top` collapse
/// onto `/a`. Query-driven pages may be under-crawled as a result, but
/// tracking-parameter loops cannot grow the frontier.
pub fn canonical_url(url: &Url) -> Url {
    let mut canonical = url.clone();
    canonical.set_query(None);
    canonical.set_fragment(None);
    canonical
}

/// Canonicalizes a URL string into the crawl's dedup key
///
/// Strings that do not parse as absolute URLs are cut at the first `?` or `#`.
/// The function is idempotent: `canonicalize(&canonicalize(u)) == canonicalize(u)`.
///
/// # Examples
///
/// ```
/// use site_contacts::url::canonicalize;
///
/// assert_eq!(canonicalize("https://x.com/a?b=1#c"), "https://x.com/a");
/// assert_eq!(canonicalize("https://x.com"), "https://x.com/");
/// ```
pub fn canonicalize(url_str: &str) -> String {
    match Url::parse(url_str) {
        Ok(url) => canonical_url(&url).into(),
        Err(_) => match url_str.find(['?', '#']) {
            Some(idx) => url_str[..idx].to_string(),
            None => url_str.to_string(),
        },
    }
}
