//! Link discovery for a fetched page
//!
//! For every anchor in document order, discovery:
//! 1. Skips non-navigational hrefs (`#`, `javascript:`, `mailto:`, `tel:`)
//! 2. Resolves the href against the page's own URL
//! 3. Keeps only `http`/`https` results
//! 4. Canonicalizes (drops query and fragment)
//! 5. Keeps the link if it is on the base domain and not yet visited

use crate::crawler::parser::{Anchor, PageDocument};
use crate::state::VisitedSet;
use crate::url::{canonical_url, is_internal, resolve};
use url::Url;

/// Href prefixes that never lead to another page
const NON_NAVIGATIONAL_PREFIXES: &[&str] = &["#", "javascript:", "mailto:", "tel:"];

/// Returns true if an href should not be followed
pub fn is_non_navigational(href: &str) -> bool {
    NON_NAVIGATIONAL_PREFIXES
        .iter()
        .any(|prefix| href.starts_with(prefix))
}

/// Lazily yields the canonical in-domain, unvisited links on a page
///
/// The iterator borrows `visited` and is consumed once; repeated links within
/// the page are all yielded, since dedup happens when they are dequeued.
///
/// # Example
///
/// ```
/// use site_contacts::crawler::{discover_links, PageDocument};
/// use site_contacts::state::VisitedSet;
/// use url::Url;
///
/// let page = PageDocument::parse(r#"<a href="/about">About</a><a href="https://other.com/">Ext</a>"#);
/// let url = Url::parse("https://x.com/home").unwrap();
/// let visited = VisitedSet::new();
///
/// let links: Vec<Url> = discover_links(&page, &url, "x.com", &visited).collect();
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].as_str(), "https://x.com/about");
/// ```
pub fn discover_links<'a>(
    page: &PageDocument,
    page_url: &'a Url,
    base_domain: &'a str,
    visited: &'a VisitedSet,
) -> impl Iterator<Item = Url> + 'a {
    page.anchors()
        .into_iter()
        .filter_map(move |anchor| follow(&anchor, page_url, base_domain, visited))
}

fn follow(anchor: &Anchor, page_url: &Url, base_domain: &str, visited: &VisitedSet) -> Option<Url> {
    let href = anchor.href.trim();
    if is_non_navigational(href) {
        return None;
    }

    let absolute = match resolve(page_url, href) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("Discarding unresolvable link: {}", e);
            return None;
        }
    };

    if absolute.scheme() != "http" && absolute.scheme() != "https" {
        return None;
    }

    if !is_internal(absolute.as_str(), base_domain) {
        tracing::trace!("Discarding external link: {}", absolute);
        return None;
    }

    let canonical = canonical_url(&absolute);
    if visited.contains(canonical.as_str()) {
        return None;
    }

    Some(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://x.com/home").unwrap()
    }

    fn discover(html: &str, visited: &VisitedSet) -> Vec<String> {
        let page = PageDocument::parse(html);
        let url = page_url();
        discover_links(&page, &url, "x.com", visited)
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_relative_link_resolves_against_page() {
        let links = discover(r#"<a href="/about">About</a>"#, &VisitedSet::new());
        assert_eq!(links, vec!["https://x.com/about"]);
    }

    #[test]
    fn test_external_link_is_discarded() {
        let links = discover(r#"<a href="https://other.com/page">Ext</a>"#, &VisitedSet::new());
        assert!(links.is_empty());
    }

    #[test]
    fn test_subdomain_link_is_discarded() {
        let links = discover(r#"<a href="https://www.x.com/page">www</a>"#, &VisitedSet::new());
        assert!(links.is_empty());
    }

    #[test]
    fn test_non_navigational_hrefs_skipped() {
        let links = discover(
            r##"<a href="#top">Top</a>
                <a href="javascript:void(0)">JS</a>
                <a href="mailto:a@x.com">Mail</a>
                <a href="tel:+15551234567">Call</a>"##,
            &VisitedSet::new(),
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_other_schemes_skipped() {
        let links = discover(
            r#"<a href="ftp://x.com/file">FTP</a><a href="data:text/html,hi">Data</a>"#,
            &VisitedSet::new(),
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_links_are_canonicalized() {
        let links = discover(
            r#"<a href="/pricing?utm_source=nav#plans">Pricing</a>"#,
            &VisitedSet::new(),
        );
        assert_eq!(links, vec!["https://x.com/pricing"]);
    }

    #[test]
    fn test_visited_links_are_filtered() {
        let mut visited = VisitedSet::new();
        visited.insert("https://x.com/about");

        let links = discover(
            r#"<a href="/about?ref=footer">About</a><a href="/team">Team</a>"#,
            &visited,
        );
        assert_eq!(links, vec!["https://x.com/team"]);
    }

    #[test]
    fn test_document_order_and_repeats() {
        let links = discover(
            r#"<a href="/b">B</a><a href="/a">A</a><a href="/b#again">B</a>"#,
            &VisitedSet::new(),
        );
        assert_eq!(
            links,
            vec!["https://x.com/b", "https://x.com/a", "https://x.com/b"]
        );
    }

    #[test]
    fn test_absolute_internal_link() {
        let links = discover(r#"<a href="https://x.com/contact">C</a>"#, &VisitedSet::new());
        assert_eq!(links, vec!["https://x.com/contact"]);
    }

    #[test]
    fn test_is_non_navigational() {
        assert!(is_non_navigational("#"));
        assert!(is_non_navigational("javascript:alert(1)"));
        assert!(!is_non_navigational("/page"));
        assert!(!is_non_navigational("https://x.com/#section"));
    }
}
