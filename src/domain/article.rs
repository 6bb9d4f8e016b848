use serde::{Deserialize, Serialize};

/// Assumed reading speed for the "N min read" estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// A feed entry as listed in a session: title plus the article link.
///
/// Only the link is ever persisted; titles are re-fetched with the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRef {
    pub title: String,
    pub link: String,
}

impl ArticleRef {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }
}

/// One feed's worth of selectable entries, in feed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSection {
    pub feed_title: String,
    pub articles: Vec<ArticleRef>,
}

/// A fully extracted article: page title and plain-text body.
///
/// The body holds one paragraph per line; blank paragraphs are already
/// dropped by the extractor.
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub text: String,
}

impl Article {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn reading_minutes(&self) -> usize {
        reading_minutes(self.word_count())
    }
}

/// Estimated reading time in minutes, never less than one.
pub fn reading_minutes(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE).max(1)
}
