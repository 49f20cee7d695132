use crate::UrlError;
use url::Url;

/// Normalizes an href into a candidate URL
///
/// # Normalization Steps
///
/// 1. Trim whitespace; reject empty and fragment-only hrefs
/// 2. Reject non-navigational schemes (javascript:, mailto:, tel:, data:)
/// 3. Resolve relative hrefs against the archive base URL
/// 4. Require http or https after resolution
/// 5. Strip the fragment
/// 6. Strip the entire query string (listing pages carry pagination and
///    tracking state there, never document identity)
///
/// Candidate equality is exact string match on the normalized form.
///
/// # Examples
///
/// ```
/// use lectern::url::normalize_candidate;
/// use url::Url;
///
/// let base = Url::parse("https://example.org/").unwrap();
/// let url = normalize_candidate("/sermons/90-21?ref=archive#top", &base).unwrap();
/// assert_eq!(url.as_str(), "https://example.org/sermons/90-21");
/// ```
pub fn normalize_candidate(href: &str, base: &Url) -> Result<Url, UrlError> {
    let href = href.trim();

    if href.is_empty() {
        return Err(UrlError::Malformed("empty href".to_string()));
    }

    // Same-page anchors are never documents
    if href.starts_with('#') {
        return Err(UrlError::Malformed(format!("fragment-only href: {}", href)));
    }

    for scheme in ["javascript:", "mailto:", "tel:", "data:"] {
        if href.starts_with(scheme) {
            return Err(UrlError::InvalidScheme(scheme.trim_end_matches(':').to_string()));
        }
    }

    let mut url = base
        .join(href)
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    url.set_fragment(None);
    url.set_query(None);

    Ok(url)
}
