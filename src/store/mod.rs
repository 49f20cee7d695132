//! Corpus persistence
//!
//! Each accepted document becomes a [`StoredRecord`]: a `.txt` file holding
//! the raw body and a `.json` file holding the metadata, sharing a base name
//! derived from the sanitized title and the fingerprint prefix. Records are
//! immutable once written; the pipeline never updates or deletes them.
//!
//! The two writes are not transactionally atomic with each other. A crash
//! between them leaves an orphaned `.txt` without metadata, which consumers
//! must treat as not fully saved; no reconciliation pass repairs it.

mod filename;
mod index;

pub use filename::{base_name, sanitize_title};
pub use index::CorpusIndex;

use crate::document::ExtractedDocument;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while persisting or scanning the corpus
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create corpus directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to scan corpus directory {path}: {source}")]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize metadata for '{title}': {source}")]
    Serialize {
        title: String,
        source: serde_json::Error,
    },
}

/// The on-disk file pair representing one accepted document
#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub base: String,
    pub text_path: PathBuf,
    pub metadata_path: PathBuf,
}

/// Writes documents into one corpus directory
pub struct CorpusStore {
    dir: PathBuf,
}

impl CorpusStore {
    /// Opens a corpus directory, creating it if absent
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persists a document as a text/metadata file pair
    ///
    /// The base filename is deterministic in (title, fingerprint), so saving
    /// identical content twice produces the identical paths.
    pub fn save(&self, document: &ExtractedDocument) -> Result<StoredRecord, StoreError> {
        let base = base_name(&document.title, &document.fingerprint);
        let text_path = self.dir.join(format!("{}.txt", base));
        let metadata_path = self.dir.join(format!("{}.json", base));

        fs::write(&text_path, &document.body).map_err(|source| StoreError::Write {
            path: text_path.clone(),
            source,
        })?;

        let metadata =
            serde_json::to_string_pretty(&document.metadata()).map_err(|source| {
                StoreError::Serialize {
                    title: document.title.clone(),
                    source,
                }
            })?;
        fs::write(&metadata_path, metadata).map_err(|source| StoreError::Write {
            path: metadata_path.clone(),
            source,
        })?;

        tracing::debug!("Wrote record pair {}", base);

        Ok(StoredRecord {
            base,
            text_path,
            metadata_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Extraction;
    use std::collections::BTreeMap;
    use tempfile::TempDir;
    use url::Url;

    fn document(title: &str, body: &str) -> ExtractedDocument {
        ExtractedDocument::new(
            Extraction {
                title: title.to_string(),
                body: body.to_string(),
                fields: BTreeMap::from([
                    ("date".to_string(), "March 3, 2020".to_string()),
                    ("scripture".to_string(), "John 1:1".to_string()),
                ]),
            },
            Url::parse("https://example.org/sermons/90-21").unwrap(),
        )
    }

    #[test]
    fn test_save_writes_text_and_metadata_pair() {
        let dir = TempDir::new().unwrap();
        let store = CorpusStore::open(dir.path()).unwrap();

        let doc = document("The Word Made Flesh", "In the beginning was the Word.");
        let record = store.save(&doc).unwrap();

        assert_eq!(
            std::fs::read_to_string(&record.text_path).unwrap(),
            "In the beginning was the Word."
        );
        let metadata = std::fs::read_to_string(&record.metadata_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&metadata).unwrap();
        assert_eq!(value["title"], "The Word Made Flesh");
        assert_eq!(value["date"], "March 3, 2020");
        assert_eq!(value["scripture"], "John 1:1");
        assert_eq!(value["url"], "https://example.org/sermons/90-21");
        assert_eq!(value["word_count"], 6);
        assert_eq!(value["hash"], serde_json::json!(doc.fingerprint));
    }

    #[test]
    fn test_identical_content_yields_identical_base_name() {
        let dir = TempDir::new().unwrap();
        let store = CorpusStore::open(dir.path()).unwrap();

        let first = store.save(&document("Same Title", "same body")).unwrap();
        let second = store.save(&document("Same Title", "same body")).unwrap();
        assert_eq!(first.base, second.base);
        assert_eq!(first.text_path, second.text_path);
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("corpus").join("sermons");
        let store = CorpusStore::open(&nested).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_raw_body_is_written_without_header() {
        let dir = TempDir::new().unwrap();
        let store = CorpusStore::open(dir.path()).unwrap();

        let record = store.save(&document("T", "first line\nsecond line")).unwrap();
        let text = std::fs::read_to_string(&record.text_path).unwrap();
        assert!(text.starts_with("first line"));
    }
}
