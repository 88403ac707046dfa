//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - tweets(id, username, tweet_content, created_at, metadata)
//! - emojis(tweet_id, emoji)
//!
//! The pipeline depends only on the [`TweetStore`] trait; table names are
//! supplied at store construction instead of living in a global constant.

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStore, StoreStats};

use crate::Result;
use crate::tweet::TweetRecord;

/// Table names used by a store, supplied at construction time.
#[derive(Debug, Clone)]
pub struct TableNames {
    pub tweets: String,
    pub emojis: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            tweets: "tweets".to_string(),
            emojis: "emojis".to_string(),
        }
    }
}

/// The operations the ingestion pipeline and the aggregation reader need
/// from a storage engine.
pub trait TweetStore: Send + Sync {
    /// Insert a tweet row. Fails with [`crate::Error::DuplicateTweet`] when
    /// a row with the same id already exists.
    fn insert_tweet(&self, record: &TweetRecord) -> Result<()>;

    /// Insert one (tweet, emoji) occurrence. Fails on a duplicate pair.
    fn insert_emoji(&self, tweet_id: &str, emoji: &str) -> Result<()>;

    /// The (emoji, tweet count) pairs, grouped by emoji, materialized at
    /// call time in engine-defined order.
    fn emoji_counts(&self) -> Result<Vec<(String, i64)>>;
}
