use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use url::Url;

use crate::app::{GazetteError, Result};
use crate::config::Config;
use crate::domain::{ReadLog, SavedQueue};
use crate::store::Store;

pub const FEEDS_FILE: &str = "feeds.txt";
pub const READ_FILE: &str = "read_articles.txt";
pub const SAVED_FILE: &str = "saved_articles.txt";
pub const CONFIG_FILE: &str = "config.txt";

/// Flat-file persistence: three newline-delimited URL files plus a
/// `key=value` config file, all resolved against one data directory.
///
/// There is no cross-file transactionality: marking an article read and
/// removing it from the saved queue are independent writes. The read log
/// is always written first; an interruption leaves at worst a URL that is
/// both read and saved.
pub struct FlatFileStore {
    dir: PathBuf,
}

impl FlatFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn feeds_path(&self) -> PathBuf {
        self.dir.join(FEEDS_FILE)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Non-empty trimmed lines of `path`; a missing file reads as empty.
    fn load_lines(path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// Scoped open-append-close; the line is on disk before this returns.
    fn append_line(path: &Path, value: &str) -> Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{value}")?;
        file.sync_data()?;
        Ok(())
    }
}

impl Store for FlatFileStore {
    fn load_feeds(&self) -> Result<Vec<String>> {
        let path = self.feeds_path();
        if !path.exists() {
            return Err(GazetteError::FeedListMissing(path));
        }

        let feeds = Self::load_lines(&path)?
            .into_iter()
            .filter(|line| match Url::parse(line) {
                Ok(_) => true,
                Err(e) => {
                    tracing::warn!(line = %line, error = %e, "skipping unparseable feed URL");
                    false
                }
            })
            .collect();

        Ok(feeds)
    }

    fn load_read_log(&self) -> Result<ReadLog> {
        Ok(ReadLog::from_lines(Self::load_lines(
            &self.path(READ_FILE),
        )?))
    }

    fn load_saved(&self) -> Result<SavedQueue> {
        Ok(SavedQueue::from_lines(Self::load_lines(
            &self.path(SAVED_FILE),
        )?))
    }

    fn load_config(&self) -> Result<Config> {
        let path = self.path(CONFIG_FILE);
        if !path.exists() {
            return Ok(Config::default());
        }
        Ok(Config::parse(&fs::read_to_string(path)?))
    }

    fn append_read(&self, url: &str) -> Result<()> {
        Self::append_line(&self.path(READ_FILE), url)
    }

    fn append_saved(&self, url: &str) -> Result<()> {
        Self::append_line(&self.path(SAVED_FILE), url)
    }

    fn rewrite_saved(&self, links: &[String]) -> Result<()> {
        let content: String = links.iter().map(|link| format!("{link}\n")).collect();
        fs::write(self.path(SAVED_FILE), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Spacing;
    use tempfile::TempDir;

    fn store() -> (TempDir, FlatFileStore) {
        let dir = TempDir::new().unwrap();
        let store = FlatFileStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_missing_state_files_read_as_empty() {
        let (_dir, store) = store();
        assert!(store.load_read_log().unwrap().is_empty());
        assert!(store.load_saved().unwrap().is_empty());
    }

    #[test]
    fn test_missing_feeds_file_is_an_error() {
        let (_dir, store) = store();
        assert!(matches!(
            store.load_feeds(),
            Err(GazetteError::FeedListMissing(_))
        ));
    }

    #[test]
    fn test_load_feeds_skips_junk_lines() {
        let (dir, store) = store();
        fs::write(
            dir.path().join(FEEDS_FILE),
            "https://example.com/feed.xml\n\nnot a url\n  https://other.com/rss  \n",
        )
        .unwrap();

        let feeds = store.load_feeds().unwrap();
        assert_eq!(
            feeds,
            vec!["https://example.com/feed.xml", "https://other.com/rss"]
        );
    }

    #[test]
    fn test_append_read_creates_and_appends() {
        let (dir, store) = store();
        store.append_read("https://example.com/a").unwrap();
        store.append_read("https://example.com/b").unwrap();

        let content = fs::read_to_string(dir.path().join(READ_FILE)).unwrap();
        assert_eq!(content, "https://example.com/a\nhttps://example.com/b\n");
    }

    #[test]
    fn test_read_log_round_trip_preserves_order() {
        let (_dir, store) = store();
        store.append_read("https://example.com/first").unwrap();
        store.append_read("https://example.com/second").unwrap();

        let log = store.load_read_log().unwrap();
        let urls: Vec<&str> = log.iter().collect();
        assert_eq!(
            urls,
            vec!["https://example.com/first", "https://example.com/second"]
        );
    }

    #[test]
    fn test_rewrite_saved_overwrites() {
        let (dir, store) = store();
        store.append_saved("https://example.com/x").unwrap();
        store.append_saved("https://example.com/y").unwrap();

        store
            .rewrite_saved(&["https://example.com/y".to_string()])
            .unwrap();

        let content = fs::read_to_string(dir.path().join(SAVED_FILE)).unwrap();
        assert_eq!(content, "https://example.com/y\n");
    }

    #[test]
    fn test_rewrite_saved_empty_list_truncates() {
        let (dir, store) = store();
        store.append_saved("https://example.com/x").unwrap();
        store.rewrite_saved(&[]).unwrap();

        let content = fs::read_to_string(dir.path().join(SAVED_FILE)).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_load_config_missing_file_is_default() {
        let (_dir, store) = store();
        let config = store.load_config().unwrap();
        assert_eq!(config.spacing, Spacing::Single);
    }

    #[test]
    fn test_load_config_from_file() {
        let (dir, store) = store();
        fs::write(dir.path().join(CONFIG_FILE), "spacing=double\n").unwrap();
        let config = store.load_config().unwrap();
        assert_eq!(config.spacing, Spacing::Double);
    }
}
