//! Lectern: an archive-to-corpus scraper
//!
//! This crate crawls a content site's archive, discovers per-document URLs,
//! extracts structured documents, deduplicates them by URL and by content
//! fingerprint, and persists each accepted document as a paired text/metadata
//! file.

pub mod config;
pub mod discover;
pub mod document;
pub mod extract;
pub mod fetch;
pub mod fingerprint;
pub mod logsink;
pub mod pipeline;
pub mod store;
pub mod url;

use thiserror::Error;

/// Main error type for lectern operations
#[derive(Debug, Error)]
pub enum LecternError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] fetch::FetchError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] discover::DiscoveryError),

    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Result type alias for lectern operations
pub type Result<T> = std::result::Result<T, LecternError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use document::ExtractedDocument;
pub use fingerprint::fingerprint;
pub use logsink::LogSink;
pub use pipeline::{CrawlOutcome, CrawlPipeline, RunReport};
