//! Site-Contacts main entry point
//!
//! This is the command-line interface for the Site-Contacts crawler.

use anyhow::Context;
use clap::Parser;
use site_contacts::config::{load_config, validate, Config};
use site_contacts::crawler::crawl_site;
use site_contacts::output::print_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Contacts: collect emails and phone numbers from one website
///
/// Site-Contacts crawls breadth-first from the given URL, stays on its host,
/// and prints the contacts found as JSON.
#[derive(Parser, Debug)]
#[command(name = "site-contacts")]
#[command(version = "1.0.0")]
#[command(about = "Crawl one website and extract contact information", long_about = None)]
struct Cli {
    /// URL to start crawling from
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of HTML pages to process
    #[arg(short = 'n', long, value_name = "N")]
    max_pages: Option<u32>,

    /// Per-request timeout in seconds
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Write the JSON result to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Print crawl statistics to stderr when done
    #[arg(long)]
    stats: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    let config = config.with_overrides(cli.max_pages, cli.timeout);
    validate(&config).context("invalid crawl settings")?;

    let report = crawl_site(&cli.url, config)
        .await
        .with_context(|| format!("cannot crawl {}", cli.url))?;

    match &cli.output {
        Some(path) => {
            report
                .result
                .write_json(path, cli.compact)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Result written to: {}", path.display());
        }
        None => println!("{}", report.result.to_json(cli.compact)?),
    }

    if cli.stats {
        print_statistics(&report.stats);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the JSON result.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_contacts=info,warn"),
            1 => EnvFilter::new("site_contacts=debug,info"),
            2 => EnvFilter::new("site_contacts=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
