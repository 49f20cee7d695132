//! Lectern main entry point
//!
//! Command-line interface for the archive-to-corpus scraper.

use clap::Parser;
use lectern::config::load_config;
use lectern::fetch::SessionMode;
use lectern::logsink::LogSink;
use lectern::pipeline::run_scrape;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Lectern: an archive-to-corpus scraper
///
/// Lectern crawls a content site's archive, extracts one structured
/// document per page, deduplicates by URL and by content fingerprint, and
/// saves each accepted document as a paired text/metadata file.
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(version)]
#[command(about = "Archive-to-corpus scraper", long_about = None)]
struct Cli {
    /// Path to TOML adapter configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Reuse one fetch session for the whole run instead of a fresh
    /// session per URL
    #[arg(long)]
    batch: bool,

    /// Validate config and show what would be crawled without fetching
    #[arg(long)]
    dry_run: bool,

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

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let mode = if cli.batch {
        SessionMode::Shared
    } else {
        SessionMode::Isolated
    };
    tracing::info!("Session mode: {:?}", mode);

    let sink = LogSink::open(Path::new(&config.output.log_path))?;
    let report = run_scrape(&config, mode, &sink).await?;

    // Exit code stays 0 after a completed sequence even with per-URL
    // failures; the summary line is the audit surface.
    tracing::info!(
        "Run complete: {} stored, {} rejected, {} errors",
        report.stored,
        report.rejected(),
        report.errors()
    );

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("lectern=info,warn"),
            1 => EnvFilter::new("lectern=debug,info"),
            2 => EnvFilter::new("lectern=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be
/// crawled
fn handle_dry_run(config: &lectern::config::Config) {
    println!("=== Lectern Dry Run ===\n");

    println!("Archive:");
    println!("  Name: {}", config.archive.name);
    println!("  Base URL: {}", config.archive.base_url);
    println!("  Listing path: {}", config.archive.listing_path);
    println!("  Listing pages: {}", config.archive.page_count);
    println!("  Link prefixes: {:?}", config.archive.link_prefixes);
    if !config.archive.link_excludes.is_empty() {
        println!("  Link excludes: {:?}", config.archive.link_excludes);
    }

    println!("\nExtraction:");
    println!("  Kind: {:?}", config.extract.kind);
    println!("  Minimum words: {}", config.extract.min_words);
    if let Some(selector) = &config.extract.expand_selector {
        println!("  Expand selector: {}", selector);
        println!("  Settle: {}ms", config.extract.settle_ms);
    }

    println!("\nCrawler:");
    println!("  Fetch timeout: {}s", config.crawler.fetch_timeout_secs);
    println!("  Courtesy delay: {}ms", config.crawler.courtesy_delay_ms);
    println!("  User agent: {}", config.crawler.user_agent);

    println!("\nOutput:");
    println!("  Corpus directory: {}", config.output.corpus_dir);
    println!("  Log file: {}", config.output.log_path);

    println!("\n✓ Configuration is valid");
}
