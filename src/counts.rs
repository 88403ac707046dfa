//! Aggregate emoji counts
//!
//! Read-only view over stored emoji occurrences: for each emoji, the number
//! of tweets containing it. Computed on demand, never stored.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::storage::TweetStore;

/// A pair of an emoji and the count of tweets containing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: i64,
}

/// Reads aggregate emoji counts from a store.
pub struct CountsReader {
    store: Arc<dyn TweetStore>,
}

impl CountsReader {
    pub fn new(store: Arc<dyn TweetStore>) -> Self {
        Self { store }
    }

    /// The (emoji, count) pairs for all stored tweets, grouped by emoji.
    ///
    /// Row order is storage-engine-defined; callers must not assume one.
    /// Fails with a query error when the underlying read fails, in which
    /// case nothing is returned.
    pub fn results(&self) -> Result<Vec<EmojiCount>> {
        let mut results = Vec::new();
        for (emoji, count) in self.store.emoji_counts()? {
            results.push(EmojiCount { emoji, count });
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStore;
    use crate::tweet::TweetRecord;

    fn record(id: &str) -> TweetRecord {
        TweetRecord {
            id: id.to_string(),
            username: "ada".to_string(),
            content: String::new(),
            created_at: 1534608765,
            metadata: "{}".to_string(),
        }
    }

    #[test]
    fn test_counts_group_by_emoji_across_tweets() {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        store.insert_tweet(&record("1")).unwrap();
        store.insert_tweet(&record("2")).unwrap();
        store.insert_emoji("1", "128512").unwrap();
        store.insert_emoji("2", "128512").unwrap();
        store.insert_emoji("2", "169").unwrap();

        let reader = CountsReader::new(store as Arc<dyn TweetStore>);
        let mut results = reader.results().unwrap();
        results.sort_by(|a, b| a.emoji.cmp(&b.emoji));

        assert_eq!(
            results,
            vec![
                EmojiCount {
                    emoji: "128512".to_string(),
                    count: 2
                },
                EmojiCount {
                    emoji: "169".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_empty_store_yields_empty_results() {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        let reader = CountsReader::new(store as Arc<dyn TweetStore>);
        assert!(reader.results().unwrap().is_empty());
    }
}
