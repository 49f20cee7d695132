//! URL handling for candidate documents
//!
//! This module normalizes discovered hrefs into candidate URLs and decides
//! which ones belong to the archive being scraped.

mod matcher;
mod normalize;

pub use matcher::LinkMatcher;
pub use normalize::normalize_candidate;
