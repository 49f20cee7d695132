//! Link discovery
//!
//! Produces the complete, ordered, deduplicated set of candidate document
//! URLs before any document is fetched. Two variants exist: a single-page
//! listing and a paginated listing. Both accumulate into one sorted set so
//! reruns over identical input pages process documents in the same sequence.

mod listing;
mod paginated;

pub use listing::ListingDiscoverer;
pub use paginated::PaginatedDiscoverer;

use crate::config::ArchiveConfig;
use crate::fetch::{FetchError, PageFetcher};
use crate::logsink::LogSink;
use crate::url::{normalize_candidate, LinkMatcher};
use crate::ConfigError;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use thiserror::Error;
use url::Url;

/// Errors that terminate the discovery phase
///
/// Individual paginated-listing pages failing is not one of these; those
/// are logged and skipped. Discovery only fails when the archive surface
/// itself never becomes reachable.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Failed to load listing page {url}: {source}")]
    Listing {
        url: String,
        #[source]
        source: FetchError,
    },
}

/// Strategy producing the candidate URL sequence for one archive
pub trait LinkDiscoverer {
    fn discover<F: PageFetcher>(
        &self,
        fetcher: &mut F,
        sink: &LogSink,
    ) -> impl std::future::Future<Output = Result<Vec<Url>, DiscoveryError>>;
}

/// Discoverer variant selected by the archive configuration
pub enum Discoverer {
    Listing(ListingDiscoverer),
    Paginated(PaginatedDiscoverer),
}

impl Discoverer {
    /// Builds the discoverer described by `config` (page-count 1 selects
    /// the single-page variant)
    pub fn from_config(config: &ArchiveConfig) -> Result<Self, ConfigError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;
        let listing_url = base
            .join(&config.listing_path)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid listing-path: {}", e)))?;
        let matcher = LinkMatcher::new(
            config.link_prefixes.clone(),
            config.link_excludes.clone(),
        );

        if config.page_count <= 1 {
            Ok(Self::Listing(ListingDiscoverer::new(
                listing_url,
                base,
                matcher,
            )))
        } else {
            Ok(Self::Paginated(PaginatedDiscoverer::new(
                listing_url,
                base,
                matcher,
                config.page_count,
                config.page_query.clone(),
            )))
        }
    }
}

impl LinkDiscoverer for Discoverer {
    async fn discover<F: PageFetcher>(
        &self,
        fetcher: &mut F,
        sink: &LogSink,
    ) -> Result<Vec<Url>, DiscoveryError> {
        match self {
            Self::Listing(d) => d.discover(fetcher, sink).await,
            Self::Paginated(d) => d.discover(fetcher, sink).await,
        }
    }
}

/// Collects every anchor on `html` whose normalized URL passes the matcher
/// into `found`
///
/// Normalization failures (javascript:, mailto:, fragments, malformed
/// hrefs) are simply skipped.
pub(crate) fn collect_matching_links(
    html: &str,
    base: &Url,
    matcher: &LinkMatcher,
    found: &mut BTreeSet<Url>,
) {
    let document = Html::parse_document(html);
    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return,
    };

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Ok(url) = normalize_candidate(href, base) else {
            continue;
        };
        if matcher.matches(url.path()) {
            found.insert(url);
        }
    }
}
