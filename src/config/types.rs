use serde::Deserialize;

/// Main configuration structure for one site adapter
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub archive: ArchiveConfig,
    pub extract: ExtractConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

/// Archive/listing surface configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveConfig {
    /// Short adapter name used in log lines (e.g. "gty-sermons")
    pub name: String,

    /// Absolute base URL links are resolved against
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the archive/listing page, relative to the base URL
    #[serde(rename = "listing-path")]
    pub listing_path: String,

    /// Number of listing pages; 1 selects single-page discovery
    #[serde(rename = "page-count", default = "default_page_count")]
    pub page_count: u32,

    /// Query parameter carrying the page number for paginated listings
    #[serde(rename = "page-query", default = "default_page_query")]
    pub page_query: String,

    /// Path prefixes a document URL must start with
    #[serde(rename = "link-prefixes")]
    pub link_prefixes: Vec<String>,

    /// Path substrings that disqualify a URL (e.g. the listing itself)
    #[serde(rename = "link-excludes", default)]
    pub link_excludes: Vec<String>,
}

/// Extractor variant selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// Long-form DOM fallback-chain extraction
    Sermon,
    /// Short-form line-oriented extraction
    Article,
}

/// Extraction configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    pub kind: ExtractorKind,

    /// Minimum whitespace-delimited token count for acceptance (inclusive)
    #[serde(rename = "min-words")]
    pub min_words: usize,

    /// Lazy-content reveal control to activate once before extraction
    #[serde(rename = "expand-selector", default)]
    pub expand_selector: Option<String>,

    /// Settle interval after the expand interaction, in milliseconds
    #[serde(rename = "settle-ms", default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Site suffix stripped from the `<title>` fallback (e.g. "| Site Name")
    #[serde(rename = "title-suffix", default)]
    pub title_suffix: Option<String>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Per-fetch timeout in seconds
    #[serde(rename = "fetch-timeout-secs", default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Courtesy delay between successive fetches, in milliseconds
    #[serde(rename = "courtesy-delay-ms", default = "default_courtesy_delay_ms")]
    pub courtesy_delay_ms: u64,

    /// User agent sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: default_fetch_timeout_secs(),
            courtesy_delay_ms: default_courtesy_delay_ms(),
            user_agent: default_user_agent(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the text/metadata file pairs
    #[serde(rename = "corpus-dir")]
    pub corpus_dir: String,

    /// Path of the operational log file
    #[serde(rename = "log-path")]
    pub log_path: String,
}

fn default_page_count() -> u32 {
    1
}

fn default_page_query() -> String {
    "page".to_string()
}

fn default_settle_ms() -> u64 {
    600
}

fn default_fetch_timeout_secs() -> u64 {
    60
}

fn default_courtesy_delay_ms() -> u64 {
    1000
}

fn default_user_agent() -> String {
    format!("lectern/{}", env!("CARGO_PKG_VERSION"))
}
