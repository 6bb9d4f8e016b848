use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GazetteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Article extraction error: {0}")]
    Extract(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Feed list not found: {}", .0.display())]
    FeedListMissing(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pager error: {0}")]
    Pager(String),
}

pub type Result<T> = std::result::Result<T, GazetteError>;
