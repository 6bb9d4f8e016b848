//! # Gazette
//!
//! A terminal RSS article reader with flat-file bookkeeping.
//!
//! ## Architecture
//!
//! ```text
//! Store ─┐
//!        ├→ Aggregator → listing → Session ← input
//! Fetcher┤                           │
//!        └→ Extractor → article ─────┤
//!                                    └→ Pager
//! ```
//!
//! A session loads the feed list and the read/saved state from plain
//! text files, then loops over a four-way menu: read something new, read
//! something saved, re-read something old, or exit. Listings and article
//! bodies are handed to an external full-screen viewer; read and saved
//! URLs go back to the text files as they change.
//!
//! ## Quick Start
//!
//! ```bash
//! # One feed URL per line
//! echo https://blog.rust-lang.org/feed.xml > feeds.txt
//!
//! gazette
//! ```
//!
//! State lives next to `feeds.txt`: `read_articles.txt` (append-only),
//! `saved_articles.txt` (order-preserving queue) and an optional
//! `config.txt` with `key=value` lines.

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires together store, fetcher,
/// aggregator and extractor; [`GazetteError`](app::GazetteError) is the
/// crate-wide error type.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Session configuration loaded from `config.txt`.
///
/// Recognized keys: `spacing` (`single`/`double`) and `spinner`
/// (named style or `random`). Unknown keys are ignored.
pub mod config;

/// Core domain models.
///
/// - [`ArticleRef`](domain::ArticleRef): a listed feed entry
/// - [`Article`](domain::Article): extracted title + body text
/// - [`ReadLog`](domain::ReadLog) / [`SavedQueue`](domain::SavedQueue):
///   the two durable URL collections
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait over raw URL retrieval
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Feed aggregation: per-feed sections of unread, unsaved entries plus
/// the flattened globally-numbered selection view.
pub mod aggregator;

/// Full-text article extraction from the linked page.
pub mod extractor;

/// External full-screen viewer invocation.
pub mod pager;

/// Download spinner styles.
pub mod progress;

/// The interactive menu loop and its workflows.
pub mod session;

/// Flat-file persistence layer.
///
/// - [`Store`](store::Store): trait defining the state operations
/// - [`FlatFileStore`](store::FlatFileStore): newline-delimited text
///   files in one data directory
pub mod store;
