//! Configuration module for Site-Contacts
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every key is optional; a missing file is equivalent to an empty one.
//!
//! # Example
//!
//! ```no_run
//! use site_contacts::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawl.toml")).unwrap();
//! println!("Crawler will fetch at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, UserAgentConfig, DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECONDS};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
