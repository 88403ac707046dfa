//! Tweet ingestion pipeline
//!
//! Orchestrates metadata encoding, timestamp normalization and emoji
//! extraction, then persists the tweet row followed by one row per emoji.

use std::sync::Arc;

use crate::Result;
use crate::emoji::EmojiExtractor;
use crate::storage::TweetStore;
use crate::timestamp;
use crate::tweet::{MAX_METADATA_LEN, Tweet, TweetRecord};

/// Coordinates the ingestion of tweets into a store.
///
/// Each call to [`Ingestor::ingest`] is a self-contained unit of work;
/// concurrency safety is the storage engine's concern.
pub struct Ingestor {
    store: Arc<dyn TweetStore>,
    extractor: EmojiExtractor,
}

impl Ingestor {
    /// Build an ingestor over a store. Fails only if the extractor's escape
    /// pattern cannot be compiled.
    pub fn new(store: Arc<dyn TweetStore>) -> Result<Self> {
        Ok(Self {
            store,
            extractor: EmojiExtractor::new()?,
        })
    }

    /// Ingest one tweet: write the tweet row, then one row per emoji.
    ///
    /// A timestamp failure or a duplicate id aborts before the emojis are
    /// touched. An extraction failure leaves the already-written tweet row
    /// in place with zero emoji rows. A failed emoji write is logged and
    /// skipped; the remaining emojis are still written.
    pub fn ingest(&self, tweet: &Tweet) -> Result<()> {
        let mut metadata = tweet.encoded_metadata();
        if metadata.len() >= MAX_METADATA_LEN {
            tracing::info!(
                id = %tweet.id,
                len = metadata.len(),
                "metadata exceeds bound, storing placeholder"
            );
            metadata = " ".to_string();
        }

        let created_at = timestamp::parse_created_at(&tweet.metadata.created_at)?;

        self.store.insert_tweet(&TweetRecord {
            id: tweet.id.clone(),
            username: tweet.username.clone(),
            content: tweet.content.clone(),
            created_at,
            metadata,
        })?;

        // TODO: reconcile tweet rows left without emoji rows when extraction
        // fails here.
        let extraction = self.extractor.extract(&tweet.content)?;
        for emoji in &extraction.emojis {
            if let Err(e) = self.store.insert_emoji(&tweet.id, emoji) {
                tracing::error!(id = %tweet.id, emoji = %emoji, error = %e, "skipping emoji row");
            }
        }

        Ok(())
    }
}
