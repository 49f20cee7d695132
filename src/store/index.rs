//! On-disk dedup check against an existing corpus

use super::StoreError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Answers "has this fingerprint already been saved" by scanning the corpus
/// directory for a filename containing the fingerprint prefix
///
/// Each call is a full directory scan, O(files). That is acceptable while
/// corpora stay in the low thousands of records; callers targeting larger
/// corpora should build an in-memory set of known fingerprints once per run
/// and expose the same `contains` contract.
pub struct CorpusIndex {
    dir: PathBuf,
}

impl CorpusIndex {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Tests whether any stored filename contains `fingerprint_prefix`
    ///
    /// A nonexistent directory simply means nothing has been saved yet.
    pub fn contains(&self, fingerprint_prefix: &str) -> Result<bool, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(source) => {
                return Err(StoreError::Scan {
                    path: self.dir.clone(),
                    source,
                })
            }
        };

        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Scan {
                path: self.dir.clone(),
                source,
            })?;
            if entry
                .file_name()
                .to_string_lossy()
                .contains(fingerprint_prefix)
            {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
