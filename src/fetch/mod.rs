//! Page fetching
//!
//! The pipeline talks to the web through the [`PageFetcher`] capability:
//! navigate to a URL with a bounded timeout and hand back the rendered DOM
//! as HTML. The crate ships [`HttpFetcher`], a plain HTTP implementation; a
//! headless-browser-backed implementation would satisfy the same contract
//! and additionally honor the one-shot expand directive.

mod http;

pub use http::HttpFetcher;

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors produced by a fetch attempt
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    Http { url: String, status: u16 },

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl FetchError {
    /// True when the fetch exceeded its time bound
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Session handling for the whole run, selected once at start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// A fresh fetch session per URL: highest isolation, highest overhead
    Isolated,
    /// One long-lived session reused across all URLs
    Shared,
}

/// Per-adapter instructions carried on every fetch call
///
/// `expand_selector` names a lazy-content reveal control (e.g. an "expand
/// transcript" button) that should be activated at most once before the
/// page settles for `settle`. Fetchers that cannot interact with the page
/// skip the directive.
#[derive(Debug, Clone, Default)]
pub struct FetchDirectives {
    pub expand_selector: Option<String>,
    pub settle: Duration,
}

/// A fetched page: final URL plus rendered HTML
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub url: Url,
    pub html: String,
}

/// Capability to navigate to a URL and return the rendered page
///
/// `&mut self` because shared-mode implementations own session state that a
/// fetch may tear down or rebuild.
pub trait PageFetcher {
    fn fetch(
        &mut self,
        url: &Url,
        directives: &FetchDirectives,
    ) -> impl Future<Output = Result<RenderedPage, FetchError>>;
}
