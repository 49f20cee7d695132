//! Long-form sermon extractor
//!
//! Works through fallback chains: a primary, site-specific structural
//! selector first, then a looser heuristic when the page structure is
//! inconsistent. Title: `h1.sermon-title`, else the `<title>` tag with the
//! configured site suffix stripped. Date: `div.sermon-date`, else a
//! month-name date pattern anywhere in the detail container's text. Body:
//! paragraphs under the detail container, else every paragraph on the page.

use super::{Extraction, PageExtractor};
use crate::fetch::RenderedPage;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::BTreeMap;

const TITLE_SELECTOR: &str = "h1.sermon-title";
const DATE_SELECTOR: &str = "div.sermon-date";
const SCRIPTURE_SELECTOR: &str = "a.sermon-scripture-link";
const DETAIL_SELECTOR: &str = "div.sermon-detail-container";

const DATE_PATTERN: &str = r"(January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s+\d{4}";

pub struct SermonExtractor {
    title_suffix: Option<String>,
    date_pattern: Regex,
}

impl SermonExtractor {
    pub fn new(title_suffix: Option<String>) -> Self {
        Self {
            title_suffix,
            date_pattern: Regex::new(DATE_PATTERN).expect("month-name date pattern is valid"),
        }
    }

    fn title(&self, document: &Html) -> String {
        if let Some(title) = select_first_text(document, TITLE_SELECTOR) {
            return title;
        }

        if let Some(mut title) = select_first_text(document, "title") {
            if let Some(suffix) = &self.title_suffix {
                title = title.replace(suffix.as_str(), "").trim().to_string();
            }
            if !title.is_empty() {
                return title;
            }
        }

        String::new()
    }

    fn date(&self, document: &Html) -> String {
        if let Some(date) = select_first_text(document, DATE_SELECTOR) {
            return date;
        }

        // Free-text fallback over the detail container
        if let Some(detail) = select_first_text(document, DETAIL_SELECTOR) {
            if let Some(m) = self.date_pattern.find(&detail) {
                return m.as_str().to_string();
            }
        }

        String::new()
    }

    fn scripture(&self, document: &Html) -> String {
        select_first_text(document, SCRIPTURE_SELECTOR).unwrap_or_default()
    }

    fn body(&self, document: &Html) -> String {
        let p_selector = match Selector::parse("p") {
            Ok(s) => s,
            Err(_) => return String::new(),
        };

        // Paragraphs under the detail container, else all paragraphs
        let paragraphs: Vec<String> = match Selector::parse(DETAIL_SELECTOR)
            .ok()
            .and_then(|sel| document.select(&sel).next())
        {
            Some(container) => container
                .select(&p_selector)
                .map(element_text)
                .filter(|t| !t.is_empty())
                .collect(),
            None => document
                .select(&p_selector)
                .map(element_text)
                .filter(|t| !t.is_empty())
                .collect(),
        };

        paragraphs.join("\n")
    }
}

impl PageExtractor for SermonExtractor {
    fn extract(&self, page: &RenderedPage) -> Extraction {
        let document = Html::parse_document(&page.html);

        let body = self.body(&document);
        let fields = BTreeMap::from([
            ("date".to_string(), self.date(&document)),
            ("scripture".to_string(), self.scripture(&document)),
        ]);

        Extraction {
            title: self.title(&document),
            body,
            fields,
        }
    }
}

/// Text of the first element matching `selector`, whitespace-collapsed at
/// the edges, None when absent or empty
fn select_first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| element_text(el))
        .filter(|t| !t.is_empty())
}

fn element_text(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
