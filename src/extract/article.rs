//! Short-form article extractor
//!
//! Line-oriented: reads the rendered main-content text as a sequence of
//! lines instead of querying structure. Layout handled:
//!
//! ```text
//! FEATURE ARTICLE          (optional category marker)
//! Grace in Trials          (title)
//! ===============          (optional underline separator)
//! Charles Stanley          (author)
//! March 3, 2020            (date)
//! ...body lines...
//! Share this article       (sentinel, body ends before it)
//! ```
//!
//! Lines of 20 characters or fewer inside the body are dropped as
//! navigational noise.

use super::{Extraction, PageExtractor};
use crate::fetch::RenderedPage;
use scraper::{Html, Selector};
use std::collections::BTreeMap;

const CATEGORY_MARKERS: &[&str] = &["FEATURE ARTICLE", "DAILY DEVOTION"];
const SENTINELS: &[&str] = &[
    "Share this",
    "Looking for a daily reminder",
    "Explore Other Articles",
];
const NOISE_MAX_LEN: usize = 20;
const MIN_LINES: usize = 3;

#[derive(Debug, Default)]
pub struct ArticleExtractor;

impl ArticleExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl PageExtractor for ArticleExtractor {
    fn extract(&self, page: &RenderedPage) -> Extraction {
        let lines = main_text_lines(&page.html);
        if lines.len() < MIN_LINES {
            return Extraction::empty();
        }

        let mut idx = 0;
        if CATEGORY_MARKERS.contains(&lines[idx].as_str()) {
            idx += 1;
        }
        if idx >= lines.len() {
            return Extraction::empty();
        }

        let title = lines[idx].clone();
        idx += 1;

        // Markdown-style underline under the title
        if idx < lines.len() && lines[idx].chars().all(|c| c == '=') {
            idx += 1;
        }

        let mut author = String::new();
        let mut date = String::new();
        if idx < lines.len() {
            author = lines[idx].clone();
            idx += 1;
        }
        if idx < lines.len() {
            date = lines[idx].clone();
            idx += 1;
        }

        let mut content = Vec::new();
        for line in &lines[idx..] {
            if SENTINELS.iter().any(|s| line.contains(s)) {
                break;
            }
            if line.chars().count() > NOISE_MAX_LEN {
                content.push(line.clone());
            }
        }

        Extraction {
            title,
            body: content.join("\n"),
            fields: BTreeMap::from([
                ("author".to_string(), author),
                ("date".to_string(), date),
            ]),
        }
    }
}

/// Trimmed, non-empty text lines of the page's `<main>` element, in document
/// order; empty when the page has no `<main>`
fn main_text_lines(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = match Selector::parse("main") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let Some(main) = document.select(&selector).next() else {
        return Vec::new();
    };

    main.text()
        .flat_map(|chunk| chunk.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
