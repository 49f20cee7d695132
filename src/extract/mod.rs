//! Per-page content extraction
//!
//! Extractors turn one rendered page into a body plus metadata fields. Each
//! site adapter supplies its own [`PageExtractor`] variant; adding a new
//! site means adding a new variant, never branching inside an existing one.
//!
//! Extractors never fail: a page the strategy cannot make sense of yields an
//! empty body, and the pipeline treats that as a rejection. Thresholds
//! (minimum word counts) are enforced by the pipeline, not here; the
//! extractor only reports what it found.

mod article;
mod sermon;

pub use article::ArticleExtractor;
pub use sermon::SermonExtractor;

use crate::config::{ExtractConfig, ExtractorKind};
use crate::fetch::RenderedPage;
use std::collections::BTreeMap;

/// What an extractor found on one page
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Resolved title, may be empty if no strategy matched
    pub title: String,

    /// Newline-joined body text, empty when nothing usable was found
    pub body: String,

    /// Adapter-specific metadata fields
    pub fields: BTreeMap<String, String>,
}

impl Extraction {
    /// An extraction carrying no usable content
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Strategy turning a rendered page into an [`Extraction`]
pub trait PageExtractor {
    fn extract(&self, page: &RenderedPage) -> Extraction;
}

/// Builds the extractor variant selected by the adapter configuration
pub fn build_extractor(config: &ExtractConfig) -> Box<dyn PageExtractor> {
    match config.kind {
        ExtractorKind::Sermon => Box::new(SermonExtractor::new(config.title_suffix.clone())),
        ExtractorKind::Article => Box::new(ArticleExtractor::new()),
    }
}
