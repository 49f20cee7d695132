//! Paginated listing discovery

use super::{collect_matching_links, DiscoveryError, LinkDiscoverer};
use crate::fetch::{FetchDirectives, PageFetcher};
use crate::logsink::LogSink;
use crate::url::LinkMatcher;
use std::collections::BTreeSet;
use url::Url;

/// Discovers candidate URLs across a fixed range of listing pages
///
/// One running set accumulates across all pages. A page that fails to load
/// is logged and skipped; discovery continues with the next page index
/// rather than aborting the whole phase.
pub struct PaginatedDiscoverer {
    listing_url: Url,
    base: Url,
    matcher: LinkMatcher,
    page_count: u32,
    page_query: String,
}

impl PaginatedDiscoverer {
    pub fn new(
        listing_url: Url,
        base: Url,
        matcher: LinkMatcher,
        page_count: u32,
        page_query: String,
    ) -> Self {
        Self {
            listing_url,
            base,
            matcher,
            page_count,
            page_query,
        }
    }

    /// Listing URL for one page index
    fn page_url(&self, page_num: u32) -> Url {
        let mut url = self.listing_url.clone();
        url.query_pairs_mut()
            .append_pair(&self.page_query, &page_num.to_string());
        url
    }
}

impl LinkDiscoverer for PaginatedDiscoverer {
    async fn discover<F: PageFetcher>(
        &self,
        fetcher: &mut F,
        sink: &LogSink,
    ) -> Result<Vec<Url>, DiscoveryError> {
        let mut found = BTreeSet::new();

        for page_num in 1..=self.page_count {
            let url = self.page_url(page_num);
            match fetcher.fetch(&url, &FetchDirectives::default()).await {
                Ok(page) => {
                    collect_matching_links(&page.html, &self.base, &self.matcher, &mut found);
                    sink.log(format!(
                        "Collected {} candidate URLs so far (page {}/{})",
                        found.len(),
                        page_num,
                        self.page_count
                    ));
                }
                Err(e) => {
                    sink.log(format!("Error on page {}: {}", page_num, e));
                }
            }
        }

        Ok(found.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchError, RenderedPage};
    use std::collections::HashMap;
    use tempfile::TempDir;

    struct PageMapFetcher {
        pages: HashMap<String, String>,
    }

    impl PageFetcher for PageMapFetcher {
        async fn fetch(
            &mut self,
            url: &Url,
            _directives: &FetchDirectives,
        ) -> Result<RenderedPage, FetchError> {
            match self.pages.get(url.as_str()) {
                Some(html) => Ok(RenderedPage {
                    url: url.clone(),
                    html: html.clone(),
                }),
                None => Err(FetchError::Transport {
                    url: url.to_string(),
                    message: "no such page".to_string(),
                }),
            }
        }
    }

    fn discoverer(page_count: u32) -> PaginatedDiscoverer {
        let base = Url::parse("https://www.example.org/").unwrap();
        PaginatedDiscoverer::new(
            base.join("/read").unwrap(),
            base,
            LinkMatcher::new(vec!["/read/articles/".to_string()], vec![]),
            page_count,
            "page".to_string(),
        )
    }

    fn sink(dir: &TempDir) -> LogSink {
        LogSink::open(&dir.path().join("test.log")).unwrap()
    }

    #[test]
    fn test_page_url_carries_page_number() {
        let url = discoverer(3).page_url(2);
        assert_eq!(url.as_str(), "https://www.example.org/read?page=2");
    }

    #[tokio::test]
    async fn test_accumulates_across_pages() {
        let dir = TempDir::new().unwrap();
        let mut fetcher = PageMapFetcher {
            pages: HashMap::from([
                (
                    "https://www.example.org/read?page=1".to_string(),
                    r#"<a href="/read/articles/one">1</a>"#.to_string(),
                ),
                (
                    "https://www.example.org/read?page=2".to_string(),
                    r#"<a href="/read/articles/two">2</a>
                       <a href="/read/articles/one">dup</a>"#
                        .to_string(),
                ),
            ]),
        };

        let urls = discoverer(2)
            .discover(&mut fetcher, &sink(&dir))
            .await
            .unwrap();
        assert_eq!(urls.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_page_is_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        // Page 2 of 3 is missing
        let mut fetcher = PageMapFetcher {
            pages: HashMap::from([
                (
                    "https://www.example.org/read?page=1".to_string(),
                    r#"<a href="/read/articles/one">1</a>"#.to_string(),
                ),
                (
                    "https://www.example.org/read?page=3".to_string(),
                    r#"<a href="/read/articles/three">3</a>"#.to_string(),
                ),
            ]),
        };

        let urls = discoverer(3)
            .discover(&mut fetcher, &sink(&dir))
            .await
            .unwrap();
        let urls: Vec<String> = urls.iter().map(|u| u.to_string()).collect();
        assert_eq!(
            urls,
            vec![
                "https://www.example.org/read/articles/one",
                "https://www.example.org/read/articles/three",
            ]
        );
    }
}
