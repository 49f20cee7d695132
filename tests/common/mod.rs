//! Shared helpers for integration tests
#![allow(dead_code)]

use lectern::fetch::{FetchDirectives, FetchError, PageFetcher, RenderedPage};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use url::Url;

/// In-memory fetcher serving pre-scripted HTML per URL
///
/// Records every fetch so tests can assert which URLs were actually hit.
pub struct ScriptedFetcher {
    pages: HashMap<String, String>,
    pub fetched: Rc<RefCell<Vec<String>>>,
}

impl ScriptedFetcher {
    pub fn new(pages: HashMap<String, String>) -> Self {
        Self {
            pages,
            fetched: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Handle to the fetch recording shared with the fetcher
    pub fn fetch_log(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.fetched)
    }
}

impl PageFetcher for ScriptedFetcher {
    async fn fetch(
        &mut self,
        url: &Url,
        _directives: &FetchDirectives,
    ) -> Result<RenderedPage, FetchError> {
        self.fetched.borrow_mut().push(url.to_string());
        match self.pages.get(url.as_str()) {
            Some(html) => Ok(RenderedPage {
                url: url.clone(),
                html: html.clone(),
            }),
            None => Err(FetchError::Transport {
                url: url.to_string(),
                message: "no scripted page".to_string(),
            }),
        }
    }
}

/// Sermon-shaped page with the given title and body paragraph
pub fn sermon_page(title: &str, body: &str) -> String {
    format!(
        r#"<html><head><title>{title}</title></head><body>
        <h1 class="sermon-title">{title}</h1>
        <div class="sermon-date">March 3, 2020</div>
        <div class="sermon-detail-container"><p>{body}</p></div>
        </body></html>"#
    )
}

/// A body with exactly `n` whitespace-delimited tokens
pub fn body_of_words(n: usize) -> String {
    (0..n)
        .map(|i| format!("word{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}
