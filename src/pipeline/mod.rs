//! Crawl pipeline orchestration
//!
//! Iterates the discovered candidate sequence once, strictly sequentially:
//! fetch, extract, two-level dedup, store. Faults are isolated per URL; the
//! run only ends after the full sequence is exhausted, except that a corpus
//! write failure aborts immediately (a corrupt output directory cannot be
//! safely continued from).

mod outcome;
mod report;

pub use outcome::CrawlOutcome;
pub use report::RunReport;

use crate::config::Config;
use crate::discover::{Discoverer, LinkDiscoverer};
use crate::document::ExtractedDocument;
use crate::extract::{build_extractor, PageExtractor};
use crate::fetch::{FetchDirectives, HttpFetcher, PageFetcher, SessionMode};
use crate::fingerprint::filename_prefix;
use crate::logsink::LogSink;
use crate::store::{CorpusIndex, CorpusStore, StoreError};
use crate::LecternError;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Pipeline knobs derived from the adapter configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Expand/settle instructions passed on every document fetch
    pub directives: FetchDirectives,

    /// Minimum body word count for acceptance (inclusive)
    pub min_words: usize,

    /// Fixed pause after each stored document
    pub courtesy_delay: Duration,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            directives: FetchDirectives {
                expand_selector: config.extract.expand_selector.clone(),
                settle: Duration::from_millis(config.extract.settle_ms),
            },
            min_words: config.extract.min_words,
            courtesy_delay: Duration::from_millis(config.crawler.courtesy_delay_ms),
        }
    }
}

/// The crawl-extract-dedup-persist pipeline
///
/// Owns the fetch session and the in-run dedup sets for one run. The sets
/// grow monotonically and are discarded with the pipeline; cross-run dedup
/// goes through the [`CorpusIndex`] instead.
pub struct CrawlPipeline<'a, F: PageFetcher> {
    fetcher: F,
    extractor: Box<dyn PageExtractor>,
    store: CorpusStore,
    index: CorpusIndex,
    sink: &'a LogSink,
    config: PipelineConfig,
    seen_urls: HashSet<String>,
    seen_fingerprints: HashSet<String>,
}

impl<'a, F: PageFetcher> CrawlPipeline<'a, F> {
    pub fn new(
        fetcher: F,
        extractor: Box<dyn PageExtractor>,
        store: CorpusStore,
        index: CorpusIndex,
        sink: &'a LogSink,
        config: PipelineConfig,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            store,
            index,
            sink,
            config,
            seen_urls: HashSet::new(),
            seen_fingerprints: HashSet::new(),
        }
    }

    /// Processes the full candidate sequence and returns the outcome counts
    ///
    /// Only a persistence failure escapes this loop.
    pub async fn run(&mut self, urls: &[Url]) -> Result<RunReport, StoreError> {
        let total = urls.len();
        let mut report = RunReport::new();

        for (idx, url) in urls.iter().enumerate() {
            let outcome = self.process(idx + 1, total, url).await?;
            report.record(outcome);

            // Courtesy delay: bound the request rate against the site
            if outcome.is_stored() {
                tokio::time::sleep(self.config.courtesy_delay).await;
            }
        }

        Ok(report)
    }

    /// Runs one URL through the state machine to its terminal outcome
    async fn process(
        &mut self,
        seq: usize,
        total: usize,
        url: &Url,
    ) -> Result<CrawlOutcome, StoreError> {
        if !self.seen_urls.insert(url.as_str().to_string()) {
            self.sink
                .log(format!("[{}/{}] Skipped duplicate URL: {}", seq, total, url));
            return Ok(CrawlOutcome::RejectedDuplicateUrl);
        }

        let page = match self.fetcher.fetch(url, &self.config.directives).await {
            Ok(page) => page,
            Err(e) if e.is_timeout() => {
                self.sink
                    .log(format!("[{}/{}] TIMEOUT for: {}", seq, total, url));
                return Ok(CrawlOutcome::TimedOut);
            }
            Err(e) => {
                self.sink
                    .log(format!("[{}/{}] ERROR for: {} -> {}", seq, total, url, e));
                return Ok(CrawlOutcome::Failed);
            }
        };

        let extraction = self.extractor.extract(&page);
        let document = ExtractedDocument::new(extraction, url.clone());

        if document.word_count < self.config.min_words {
            self.sink.log(format!(
                "[{}/{}] No content or too short for: {}",
                seq, total, url
            ));
            return Ok(CrawlOutcome::RejectedShort);
        }

        if !self.seen_fingerprints.insert(document.fingerprint.clone()) {
            self.sink.log(format!(
                "[{}/{}] Skipped duplicate content hash: {}",
                seq, total, document.title
            ));
            return Ok(CrawlOutcome::RejectedDuplicateContent);
        }

        if self.index.contains(filename_prefix(&document.fingerprint))? {
            self.sink.log(format!(
                "[{}/{}] Already downloaded: {}",
                seq, total, document.title
            ));
            return Ok(CrawlOutcome::RejectedAlreadyStored);
        }

        let record = self.store.save(&document)?;
        tracing::debug!("Stored {} at {}", url, record.text_path.display());
        self.sink.log(format!(
            "[{}/{}] Saved: {} ({}, {} words)",
            seq,
            total,
            document.title,
            document.fields.get("date").map(String::as_str).unwrap_or(""),
            document.word_count
        ));

        Ok(CrawlOutcome::Stored)
    }
}

/// Runs a complete scrape: discovery, then the pipeline, logging the final
/// summary through `sink`
///
/// This is the main library entry point; the session mode decides whether
/// the HTTP fetcher is rebuilt per URL or reused for the whole run.
pub async fn run_scrape(
    config: &Config,
    mode: SessionMode,
    sink: &LogSink,
) -> Result<RunReport, LecternError> {
    let mut fetcher = HttpFetcher::new(
        mode,
        Duration::from_secs(config.crawler.fetch_timeout_secs),
        config.crawler.user_agent.clone(),
    );

    let discoverer = Discoverer::from_config(&config.archive)?;
    let urls = discoverer.discover(&mut fetcher, sink).await?;
    sink.log(format!(
        "Found {} candidate URLs. Starting download...",
        urls.len()
    ));

    let extractor = build_extractor(&config.extract);
    let store = CorpusStore::open(&config.output.corpus_dir)?;
    let index = CorpusIndex::new(&config.output.corpus_dir);

    let mut pipeline = CrawlPipeline::new(
        fetcher,
        extractor,
        store,
        index,
        sink,
        PipelineConfig::from(config),
    );
    let report = pipeline.run(&urls).await?;

    sink.log(format!(
        "Finished {} scrape. {}",
        config.archive.name,
        report.summary_line()
    ));

    Ok(report)
}
