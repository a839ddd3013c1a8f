/// Outcome definitions for URLs taken off the frontier
use std::fmt;

/// Represents what happened to a URL once it was dequeued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageOutcome {
    /// HTML page with status 200, mined for contacts and links
    Processed,

    /// Canonical URL was already visited when dequeued; never fetched
    Duplicate,

    /// Response Content-Type is not HTML
    NonHtml,

    /// HTML response with a status other than 200
    HttpError,

    /// Network, DNS or timeout failure
    FetchFailed,
}

impl PageOutcome {
    /// Returns true if the URL is recorded in the visited set after this outcome
    ///
    /// Non-200 HTML responses are left unvisited, so a later link to the same
    /// URL fetches it again.
    pub fn marks_visited(&self) -> bool {
        matches!(self, Self::Processed | Self::NonHtml | Self::FetchFailed)
    }

    /// Returns true if this outcome consumes one unit of the page budget
    pub fn counts_toward_budget(&self) -> bool {
        matches!(self, Self::Processed)
    }

    /// Returns true if a fetch was attempted for this URL
    pub fn was_fetched(&self) -> bool {
        !matches!(self, Self::Duplicate)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Duplicate => "duplicate",
            Self::NonHtml => "non_html",
            Self::HttpError => "http_error",
            Self::FetchFailed => "fetch_failed",
        }
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
