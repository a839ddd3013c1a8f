//! Frontier queue driving breadth-first traversal
//!
//! The frontier is a plain FIFO. Membership is not checked on enqueue, so it
//! may hold several entries for the same canonical URL; the coordinator drops
//! the repeats when they are dequeued.

use std::collections::VecDeque;
use url::Url;

/// A URL waiting to be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    /// The URL to fetch
    pub url: Url,
}

impl CrawlTarget {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

}

impl From<Url> for CrawlTarget {
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}

/// FIFO queue of crawl targets
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<CrawlTarget>,
}

impl Frontier {
    /// Creates a frontier holding only the seed
    pub fn with_seed(seed: Url) -> Self {
        let mut frontier = Self::default();
        frontier.push(CrawlTarget::new(seed));
        frontier
    }

    pub fn push(&mut self, target: CrawlTarget) {
        self.queue.push_back(target);
    }

    /// Appends every target in order, returning how many were added
    pub fn extend<I>(&mut self, targets: I) -> usize
    where
        I: IntoIterator<Item = CrawlTarget>,
    {
        let before = self.queue.len();
        self.queue.extend(targets);
        self.queue.len() - before
    }

    /// Removes the oldest target
    pub fn pop(&mut self) -> Option<CrawlTarget> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(path: &str) -> CrawlTarget {
        CrawlTarget::new(Url::parse(&format!("https://example.com{}", path)).unwrap())
    }

    #[test]
    fn test_with_seed() {
        let frontier = Frontier::with_seed(Url::parse("https://example.com/").unwrap());
        assert_eq!(frontier.len(), 1);
        assert!(!frontier.is_empty());
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::default();
        frontier.push(target("/a"));
        frontier.push(target("/b"));
        frontier.extend(vec![target("/c"), target("/d")]);

        let order: Vec<String> = std::iter::from_fn(|| frontier.pop())
            .map(|t| t.url.path().to_string())
            .collect();
        assert_eq!(order, vec!["/a", "/b", "/c", "/d"]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let mut frontier = Frontier::default();
        let added = frontier.extend(vec![target("/a"), target("/a")]);
        assert_eq!(added, 2);
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_target_keeps_query() {
        let t = CrawlTarget::from(Url::parse("https://example.com/p?q=1").unwrap());
        assert_eq!(t.as_str(), "https://example.com/p?q=1");
    }

    #[test]
    fn test_pop_empty() {
        let mut frontier = Frontier::default();
        assert!(frontier.pop().is_none());
    }
}
