//! Extracted document model
//!
//! An [`ExtractedDocument`] is what the pipeline moves between extraction,
//! deduplication, and persistence. Its word count and fingerprint are pure
//! functions of the body, computed once at construction.

use crate::extract::Extraction;
use crate::fingerprint::fingerprint;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

/// Title used when no extraction strategy could resolve one
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// A structured document extracted from one rendered page
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Document title, never empty (falls back to [`UNKNOWN_TITLE`])
    pub title: String,

    /// Newline-joined paragraphs or lines
    pub body: String,

    /// Adapter-specific fields (date, author, scripture), missing → ""
    pub fields: BTreeMap<String, String>,

    /// The candidate URL this document was extracted from
    pub url: Url,

    /// Whitespace-delimited token count of the body
    pub word_count: usize,

    /// 64-hex-char SHA-256 digest of the body bytes
    pub fingerprint: String,
}

impl ExtractedDocument {
    /// Builds a document from an extraction result and its source URL
    pub fn new(extraction: Extraction, url: Url) -> Self {
        let Extraction { title, body, fields } = extraction;

        let title = if title.trim().is_empty() {
            UNKNOWN_TITLE.to_string()
        } else {
            title
        };
        let word_count = body.split_whitespace().count();
        let fingerprint = fingerprint(&body);

        Self {
            title,
            body,
            fields,
            url,
            word_count,
            fingerprint,
        }
    }

    /// Borrows the document as its on-disk metadata shape
    pub fn metadata(&self) -> DocumentMetadata<'_> {
        DocumentMetadata {
            title: &self.title,
            fields: &self.fields,
            url: self.url.as_str(),
            word_count: self.word_count,
            hash: &self.fingerprint,
        }
    }
}

/// Serialized form of the `.json` half of a stored record
///
/// Key order is stable: title first, then the adapter fields in key order,
/// then url, word_count, and hash.
#[derive(Debug, Serialize)]
pub struct DocumentMetadata<'a> {
    pub title: &'a str,
    #[serde(flatten)]
    pub fields: &'a BTreeMap<String, String>,
    pub url: &'a str,
    pub word_count: usize,
    pub hash: &'a str,
}
