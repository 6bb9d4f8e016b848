//! Full-text article extraction.
//!
//! Fetches the article page and pulls a title plus a plain-text body out
//! of the HTML: unwanted subtrees (navigation, ads, scripts) are dropped,
//! then the configured content selectors are tried in priority order,
//! falling back to `<body>` when none of them match anything substantial.
//! The body comes out with one paragraph per line.

mod config;

use std::sync::Arc;

use scraper::{ElementRef, Html, Selector};

use crate::app::{GazetteError, Result};
use crate::domain::Article;
use crate::fetcher::Fetcher;

pub use config::ExtractorConfig;

// Subtrees that never contribute readable text.
const SKIP_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "svg", "iframe", "form", "button",
];

// Elements that end a paragraph when closed.
const BLOCK_TAGS: &[&str] = &[
    "p",
    "div",
    "section",
    "article",
    "li",
    "ul",
    "ol",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "blockquote",
    "pre",
    "table",
    "tr",
    "figcaption",
];

pub struct Extractor {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    content_selectors: Vec<Selector>,
    remove_selectors: Vec<Selector>,
    min_text_length: usize,
    body_selector: Selector,
    title_selector: Selector,
    og_title_selector: Selector,
    h1_selector: Selector,
}

impl Extractor {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, config: ExtractorConfig) -> Self {
        Self {
            fetcher,
            content_selectors: parse_selectors(&config.content_selectors),
            remove_selectors: parse_selectors(&config.remove_selectors),
            min_text_length: config.min_text_length,
            body_selector: Selector::parse("body").expect("valid selector"),
            title_selector: Selector::parse("title").expect("valid selector"),
            og_title_selector: Selector::parse("meta[property=\"og:title\"]")
                .expect("valid selector"),
            h1_selector: Selector::parse("h1").expect("valid selector"),
        }
    }

    /// Fetches `url` and extracts its article. A network or extraction
    /// failure is returned as-is; there is no retry and no partial result.
    pub async fn extract(&self, url: &str) -> Result<Article> {
        let body = self.fetcher.fetch(url).await?;
        let html = String::from_utf8_lossy(&body);
        self.extract_from_html(url, &html)
    }

    pub fn extract_from_html(&self, url: &str, html: &str) -> Result<Article> {
        let mut doc = Html::parse_document(html);

        for selector in &self.remove_selectors {
            let ids: Vec<_> = doc.select(selector).map(|el| el.id()).collect();
            for id in ids {
                if let Some(mut node) = doc.tree.get_mut(id) {
                    node.detach();
                }
            }
        }

        let title = self.extract_title(&doc, url);

        let content = self
            .content_selectors
            .iter()
            .filter_map(|selector| doc.select(selector).next())
            .map(paragraphs_of)
            .find(|text| text.len() >= self.min_text_length)
            .or_else(|| doc.select(&self.body_selector).next().map(paragraphs_of))
            .unwrap_or_default();

        if content.is_empty() {
            return Err(GazetteError::Extract(format!(
                "no readable content at {url}"
            )));
        }

        Ok(Article {
            title,
            text: content,
        })
    }

    fn extract_title(&self, doc: &Html, url: &str) -> String {
        let og_title = doc
            .select(&self.og_title_selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(normalize_line);

        let title = og_title
            .or_else(|| {
                doc.select(&self.title_selector)
                    .next()
                    .map(|el| normalize_line(&el.text().collect::<String>()))
            })
            .or_else(|| {
                doc.select(&self.h1_selector)
                    .next()
                    .map(|el| normalize_line(&el.text().collect::<String>()))
            })
            .filter(|t| !t.is_empty());

        title.unwrap_or_else(|| url.to_string())
    }
}

fn parse_selectors(raw: &[String]) -> Vec<Selector> {
    raw.iter()
        .filter_map(|s| match Selector::parse(s) {
            Ok(selector) => Some(selector),
            Err(e) => {
                tracing::warn!(selector = %s, error = %e, "skipping invalid CSS selector");
                None
            }
        })
        .collect()
}

/// Readable text under `el`, one paragraph per line, whitespace
/// normalized within each paragraph.
fn paragraphs_of(el: ElementRef) -> String {
    let mut raw = String::new();
    collect_text(el, &mut raw);

    let paragraphs: Vec<String> = raw
        .lines()
        .map(normalize_line)
        .filter(|line| !line.is_empty())
        .collect();

    paragraphs.join("\n")
}

fn normalize_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(el: ElementRef, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            // Source newlines are layout, not paragraph breaks.
            for ch in text.chars() {
                out.push(if ch == '\n' || ch == '\r' { ' ' } else { ch });
            }
        } else if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            if SKIP_TAGS.contains(&name) {
                continue;
            }
            if name == "br" {
                out.push('\n');
                continue;
            }
            collect_text(child_el, out);
            if BLOCK_TAGS.contains(&name) {
                out.push('\n');
            }
        }
    }
}
