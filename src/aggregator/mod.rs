//! Turns the configured feeds into the "new articles" listing.
//!
//! Each feed is fetched and parsed, then filtered down to entries whose
//! link is neither in the read log nor in the saved queue. Feeds that
//! fail, or end up with nothing new, simply drop out of the listing.

use std::sync::Arc;

use feed_rs::parser;
use html_escape::decode_html_entities;
use tokio::sync::Semaphore;

use crate::app::{GazetteError, Result};
use crate::domain::{ArticleRef, FeedSection, ReadLog, SavedQueue};
use crate::fetcher::Fetcher;

pub const DEFAULT_WORKERS: usize = 10;

const UNKNOWN_SOURCE: &str = "Unknown Source";

pub struct Aggregator {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    semaphore: Arc<Semaphore>,
}

impl Aggregator {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self::with_workers(fetcher, DEFAULT_WORKERS)
    }

    pub fn with_workers(fetcher: Arc<dyn Fetcher + Send + Sync>, workers: usize) -> Self {
        Self {
            fetcher,
            semaphore: Arc::new(Semaphore::new(workers)),
        }
    }

    /// Fetches every feed (concurrently, bounded by the worker count) and
    /// assembles the per-feed sections in the order the sources were given.
    /// Blocks until all feeds have resolved. Feeds that fail to fetch or
    /// parse are logged and skipped rather than aborting the listing.
    pub async fn aggregate(
        &self,
        sources: &[String],
        read_log: &ReadLog,
        saved: &SavedQueue,
    ) -> Vec<FeedSection> {
        let mut handles = Vec::with_capacity(sources.len());

        for url in sources {
            let fetcher = self.fetcher.clone();
            let semaphore = self.semaphore.clone();
            let url = url.clone();

            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await.expect("Semaphore closed");
                let body = fetcher.fetch(&url).await;
                (url, body)
            }));
        }

        let mut sections = Vec::new();
        for handle in handles {
            let (url, body) = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("Task join error: {}", e);
                    continue;
                }
            };

            let body = match body {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "failed to fetch feed, skipping");
                    continue;
                }
            };

            match build_section(&body, read_log, saved) {
                Ok(Some(section)) => sections.push(section),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "failed to parse feed, skipping");
                }
            }
        }

        sections
    }
}

/// Parses one feed body into a section of unread, unsaved entries.
/// Returns `None` when nothing in the feed is selectable, so empty
/// sections never reach the listing.
pub fn build_section(
    body: &[u8],
    read_log: &ReadLog,
    saved: &SavedQueue,
) -> Result<Option<FeedSection>> {
    let feed = parser::parse(body).map_err(|e| GazetteError::FeedParse(e.to_string()))?;

    let feed_title = feed
        .title
        .map(|t| decode_html_entities(&t.content).to_string())
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());

    let articles: Vec<ArticleRef> = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let link = entry.links.first().map(|l| l.href.clone())?;
            if read_log.contains(&link) || saved.contains(&link) {
                return None;
            }
            let title = entry
                .title
                .map(|t| decode_html_entities(&t.content).to_string())
                .unwrap_or_default();
            Some(ArticleRef { title, link })
        })
        .collect();

    if articles.is_empty() {
        return Ok(None);
    }

    Ok(Some(FeedSection {
        feed_title,
        articles,
    }))
}

/// The flattened selection view: all articles across all sections, in
/// section order then per-section order. Index `i` here is listing
/// number `i + 1`.
pub fn flatten(sections: &[FeedSection]) -> Vec<ArticleRef> {
    sections
        .iter()
        .flat_map(|section| section.articles.iter().cloned())
        .collect()
}
