//! Base-filename derivation for stored records

use crate::fingerprint::filename_prefix;

/// Maximum length of the sanitized title prefix
const TITLE_MAX_LEN: usize = 60;

/// Sanitizes a title for filesystem use
///
/// Alphanumerics, underscores, and hyphens are kept; every other character
/// becomes an underscore. The result is truncated to 60 characters.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .take(TITLE_MAX_LEN)
        .collect()
}

/// Derives the base filename for a (title, fingerprint) pair
///
/// Deterministic and independent of crawl order: reruns with identical
/// content produce identical filenames, which is what makes the on-disk
/// dedup check by filename substring possible.
pub fn base_name(title: &str, fingerprint: &str) -> String {
    format!("{}_{}", sanitize_title(title), filename_prefix(fingerprint))
}
