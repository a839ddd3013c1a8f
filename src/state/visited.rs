use std::collections::HashSet;

use crate::url::canonicalize;

/// Set of canonical URLs a crawl has already settled
///
/// Every insert and lookup goes through `canonicalize`, so callers may pass raw
/// URLs. The crawl loop is the only writer, which keeps the
/// check-then-insert sequence free of races.
#[derive(Debug, Default, Clone)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a URL as visited
    ///
    /// Returns `true` if the canonical form was not already present.
    pub fn insert(&mut self, url: &str) -> bool {
        self.urls.insert(canonicalize(url))
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(&canonicalize(url))
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
