//! # Tweetmoji - Tweet ingestion and emoji aggregation service
//!
//! Tweetmoji ingests short text posts ("tweets"), extracts every emoji each
//! post contains, persists both the tweet and its emojis, and serves an
//! aggregate count of emoji usage across all stored tweets.
//!
//! Tweetmoji provides:
//! - Two-pass emoji extraction: escaped `\UXXXXXXXX` code-point sequences
//!   and literal Unicode symbols
//! - Timestamp normalization for the classic Ruby date layout
//! - SQLite-backed storage behind a small storage trait
//! - An HTTP API and CLI for ingestion and aggregate queries

pub mod config;
pub mod counts;
pub mod emoji;
pub mod ingest;
pub mod server;
pub mod storage;
pub mod timestamp;
pub mod tweet;

// Re-exports for convenient access
pub use counts::{CountsReader, EmojiCount};
pub use emoji::EmojiExtractor;
pub use ingest::Ingestor;
pub use storage::{SqliteStore, TableNames, TweetStore};
pub use tweet::{Tweet, TweetMetadata};

/// Result type alias for Tweetmoji operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Tweetmoji operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Timestamp parse error: {0}")]
    Timestamp(String),

    #[error("Duplicate tweet: {0}")]
    DuplicateTweet(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
