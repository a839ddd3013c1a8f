//! Output module for crawl results
//!
//! This module handles:
//! - The `CrawlResult` handed back to callers (`{url, emails, phones}`)
//! - Rendering results as JSON
//! - Recording and printing crawl statistics

pub mod stats;

pub use stats::{print_statistics, write_statistics, CrawlStats};

use crate::state::ContactSet;
use crate::CrawlError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contacts found by one crawl
///
/// Emails and phones have set semantics; they are emitted sorted so repeated
/// runs over the same site produce identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlResult {
    /// The seed URL, as given
    pub url: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

impl CrawlResult {
    /// Snapshots the accumulated contacts of a finished crawl
    pub fn from_contacts(seed: impl Into<String>, contacts: ContactSet) -> Self {
        let (emails, phones) = contacts.into_sorted();
        Self {
            url: seed.into(),
            emails,
            phones,
        }
    }

    /// Renders the result as JSON, indented unless `compact` is set
    pub fn to_json(&self, compact: bool) -> Result<String, CrawlError> {
        let json = if compact {
            serde_json::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        Ok(json)
    }

    /// Writes the JSON rendering to a file, with a trailing newline
    pub fn write_json(&self, path: &Path, compact: bool) -> Result<(), CrawlError> {
        let mut json = self.to_json(compact)?;
        json.push('\n');
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Everything a crawl run produces
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub result: CrawlResult,
    pub stats: CrawlStats,
}
