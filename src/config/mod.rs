//! Configuration module
//!
//! Loads, parses, and validates the TOML adapter configuration that selects
//! the archive to crawl, the extractor variant, and the output corpus.
//!
//! # Example
//!
//! ```no_run
//! use lectern::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sermons.toml")).unwrap();
//! println!("Corpus: {}", config.output.corpus_dir);
//! ```

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{
    ArchiveConfig, Config, CrawlerConfig, ExtractConfig, ExtractorKind, OutputConfig,
};
pub use validation::validate;
