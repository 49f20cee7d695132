//! Single-page listing discovery

use super::{collect_matching_links, DiscoveryError, LinkDiscoverer};
use crate::fetch::{FetchDirectives, PageFetcher};
use crate::logsink::LogSink;
use crate::url::LinkMatcher;
use std::collections::BTreeSet;
use url::Url;

/// Discovers candidate URLs from one rendered archive page
///
/// The archive page failing to load is catastrophic here: with no listing
/// there is nothing to crawl, so the error terminates the run.
pub struct ListingDiscoverer {
    listing_url: Url,
    base: Url,
    matcher: LinkMatcher,
}

impl ListingDiscoverer {
    pub fn new(listing_url: Url, base: Url, matcher: LinkMatcher) -> Self {
        Self {
            listing_url,
            base,
            matcher,
        }
    }
}

impl LinkDiscoverer for ListingDiscoverer {
    async fn discover<F: PageFetcher>(
        &self,
        fetcher: &mut F,
        sink: &LogSink,
    ) -> Result<Vec<Url>, DiscoveryError> {
        let page = fetcher
            .fetch(&self.listing_url, &FetchDirectives::default())
            .await
            .map_err(|source| DiscoveryError::Listing {
                url: self.listing_url.to_string(),
                source,
            })?;

        let mut found = BTreeSet::new();
        collect_matching_links(&page.html, &self.base, &self.matcher, &mut found);

        sink.log(format!(
            "Collected {} candidate URLs from {}",
            found.len(),
            self.listing_url
        ));

        Ok(found.into_iter().collect())
    }
}
