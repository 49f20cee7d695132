//! End-to-end pipeline tests over scripted pages and tempfile corpora

mod common;

use common::{body_of_words, sermon_page, ScriptedFetcher};
use lectern::config::{ExtractConfig, ExtractorKind};
use lectern::extract::build_extractor;
use lectern::fetch::FetchDirectives;
use lectern::logsink::LogSink;
use lectern::pipeline::{CrawlPipeline, PipelineConfig, RunReport};
use lectern::store::{CorpusIndex, CorpusStore};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use url::Url;

fn extract_config(min_words: usize) -> ExtractConfig {
    ExtractConfig {
        kind: ExtractorKind::Sermon,
        min_words,
        expand_selector: None,
        settle_ms: 0,
        title_suffix: None,
    }
}

fn pipeline_config(min_words: usize) -> PipelineConfig {
    PipelineConfig {
        directives: FetchDirectives::default(),
        min_words,
        courtesy_delay: Duration::ZERO,
    }
}

fn make_pipeline<'a>(
    fetcher: ScriptedFetcher,
    corpus_dir: &Path,
    sink: &'a LogSink,
    min_words: usize,
) -> CrawlPipeline<'a, ScriptedFetcher> {
    CrawlPipeline::new(
        fetcher,
        build_extractor(&extract_config(min_words)),
        CorpusStore::open(corpus_dir).unwrap(),
        CorpusIndex::new(corpus_dir),
        sink,
        pipeline_config(min_words),
    )
}

fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

async fn run_one(
    corpus_dir: &Path,
    log_dir: &Path,
    pages: HashMap<String, String>,
    urls: &[&str],
    min_words: usize,
) -> RunReport {
    let sink = LogSink::open(&log_dir.join("run.log")).unwrap();
    let fetcher = ScriptedFetcher::new(pages);
    let mut pipeline = make_pipeline(fetcher, corpus_dir, &sink, min_words);
    let urls: Vec<Url> = urls.iter().map(|u| Url::parse(u).unwrap()).collect();
    pipeline.run(&urls).await.unwrap()
}

#[tokio::test]
async fn test_duplicate_url_and_duplicate_content() {
    let corpus = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();

    let url_a = "https://example.org/sermons/a";
    let url_b = "https://example.org/sermons/b";
    let body = body_of_words(150);

    // urlB serves content identical to urlA; urlA appears twice in the
    // candidate sequence
    let pages = HashMap::from([
        (url_a.to_string(), sermon_page("Sermon A", &body)),
        (url_b.to_string(), sermon_page("Sermon A", &body)),
    ]);

    let sink = LogSink::open(&logs.path().join("run.log")).unwrap();
    let fetcher = ScriptedFetcher::new(pages);
    let fetch_log = fetcher.fetch_log();
    let mut pipeline = make_pipeline(fetcher, corpus.path(), &sink, 100);

    let urls: Vec<Url> = [url_a, url_b, url_a]
        .iter()
        .map(|u| Url::parse(u).unwrap())
        .collect();
    let report = pipeline.run(&urls).await.unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.stored, 1);
    assert_eq!(report.duplicate_content, 1);
    assert_eq!(report.duplicate_url, 1);

    // The repeated urlA was never fetched a second time
    assert_eq!(*fetch_log.borrow(), vec![url_a.to_string(), url_b.to_string()]);

    // Exactly one record pair on disk
    assert_eq!(file_count(corpus.path()), 2);
}

#[tokio::test]
async fn test_minimum_length_boundary_is_inclusive() {
    let corpus = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();

    let url_99 = "https://example.org/sermons/ninety-nine";
    let url_100 = "https://example.org/sermons/one-hundred";
    let pages = HashMap::from([
        (url_99.to_string(), sermon_page("Just Short", &body_of_words(99))),
        (url_100.to_string(), sermon_page("Just Enough", &body_of_words(100))),
    ]);

    let report = run_one(corpus.path(), logs.path(), pages, &[url_99, url_100], 100).await;

    assert_eq!(report.too_short, 1);
    assert_eq!(report.stored, 1);
    assert_eq!(file_count(corpus.path()), 2);
}

#[tokio::test]
async fn test_rerun_rejects_already_stored_content() {
    let corpus = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();

    let url = "https://example.org/sermons/a";
    let pages = HashMap::from([(url.to_string(), sermon_page("Sermon A", &body_of_words(150)))]);

    let first = run_one(corpus.path(), logs.path(), pages.clone(), &[url], 100).await;
    assert_eq!(first.stored, 1);
    assert_eq!(file_count(corpus.path()), 2);

    // Fresh pipeline, fresh in-run sets, same corpus directory
    let second = run_one(corpus.path(), logs.path(), pages, &[url], 100).await;
    assert_eq!(second.stored, 0);
    assert_eq!(second.already_stored, 1);
    assert_eq!(file_count(corpus.path()), 2);
}

#[tokio::test]
async fn test_fetch_failure_is_isolated_per_url() {
    let corpus = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();

    let dead = "https://example.org/sermons/unreachable";
    let live = "https://example.org/sermons/alive";
    let pages = HashMap::from([(live.to_string(), sermon_page("Alive", &body_of_words(120)))]);

    let report = run_one(corpus.path(), logs.path(), pages, &[dead, live], 100).await;

    assert_eq!(report.failed, 1);
    assert_eq!(report.stored, 1);
}

#[tokio::test]
async fn test_empty_extraction_is_rejected_short() {
    let corpus = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();

    let url = "https://example.org/sermons/empty";
    let pages = HashMap::from([(
        url.to_string(),
        "<html><body><div>no paragraphs at all</div></body></html>".to_string(),
    )]);

    let report = run_one(corpus.path(), logs.path(), pages, &[url], 100).await;

    assert_eq!(report.too_short, 1);
    assert_eq!(file_count(corpus.path()), 0);
}

#[tokio::test]
async fn test_every_outcome_is_logged_with_index_and_total() {
    let corpus = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    let log_path = logs.path().join("run.log");

    let url_a = "https://example.org/sermons/a";
    let pages = HashMap::from([(url_a.to_string(), sermon_page("A", &body_of_words(150)))]);

    let sink = LogSink::open(&log_path).unwrap();
    let fetcher = ScriptedFetcher::new(pages);
    let mut pipeline = make_pipeline(fetcher, corpus.path(), &sink, 100);
    let urls: Vec<Url> = [url_a, url_a].iter().map(|u| Url::parse(u).unwrap()).collect();
    pipeline.run(&urls).await.unwrap();

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("[1/2] Saved: A"));
    assert!(log.contains("[2/2] Skipped duplicate URL:"));
}
