use url::{ParseError, Url};

/// Returns the authority (`host[:port]`) of a URL, the value a crawl scopes on
///
/// The host is lowercase, as the URL parser normalizes it. Default ports are
/// omitted, so `https://x.com:443/` and `https://x.com/` share an authority.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_contacts::url::authority;
///
/// let url = Url::parse("https://EXAMPLE.com/path").unwrap();
/// assert_eq!(authority(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(authority(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn authority(url: &Url) -> Option<String> {
    let host = url.host_str().filter(|h| !h.is_empty())?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Checks whether a URL belongs to the crawl's base domain
///
/// A URL is internal when it has no host at all (a relative reference) or when
/// its authority equals `base_domain` exactly. Subdomains, including `www.`,
/// are treated as foreign.
pub fn is_internal(url: &str, base_domain: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => match authority(&parsed) {
            Some(auth) => auth == base_domain,
            None => true,
        },
        Err(ParseError::RelativeUrlWithoutBase) | Err(ParseError::EmptyHost) => true,
        Err(_) => false,
    }
}
