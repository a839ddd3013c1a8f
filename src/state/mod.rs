//! State module for tracking crawl progress
//!
//! This module provides the state a single crawl run owns.
//!
//! # Components
//!
//! - `VisitedSet`: canonical URLs already dequeued and settled
//! - `ContactSet`: emails and phones accumulated across all pages
//! - `PageOutcome`: what happened to one dequeued URL

mod contacts;
mod page_outcome;
mod visited;

// Re-export main types
pub use contacts::ContactSet;
pub use page_outcome::PageOutcome;
pub use visited::VisitedSet;
