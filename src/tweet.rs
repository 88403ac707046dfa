//! Tweet types and metadata encoding
//!
//! The wire format keeps the field names of the upstream tweet feed:
//! `id`, `username`, `tweet_content` and a `metadata` object with `media`,
//! `hashtags`, `created_date` and `retweet_data`.

use serde::{Deserialize, Serialize};

/// Maximum byte length of an encoded metadata blob. Anything at or past the
/// bound is stored as a single-space placeholder instead.
pub const MAX_METADATA_LEN: usize = 1000;

/// Structured metadata submitted alongside a tweet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TweetMetadata {
    /// Media reference (URL or attachment id)
    pub media: String,
    /// Hashtag text
    pub hashtags: String,
    /// Creation date in Ruby date layout, e.g. `Sat Aug 18 09:12:45 -0700 2018`
    #[serde(rename = "created_date")]
    pub created_at: String,
    /// Reference to the retweeted tweet, if any
    pub retweet_data: String,
}

/// A tweet as submitted by the caller.
///
/// Tweets are immutable once ingested; the pipeline never updates or
/// deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    /// Unique tweet identifier
    pub id: String,
    /// Author name
    pub username: String,
    /// Text body the emojis are extracted from
    #[serde(rename = "tweet_content")]
    pub content: String,
    /// Structured metadata
    pub metadata: TweetMetadata,
}

impl Tweet {
    /// Encode this tweet's metadata to its canonical JSON form.
    ///
    /// Never fails the caller: an encoding failure is logged and yields an
    /// empty string, so ingestion always proceeds with *some* value.
    pub fn encoded_metadata(&self) -> String {
        match serde_json::to_string(&self.metadata) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(id = %self.id, error = %e, "unable to encode tweet metadata");
                String::new()
            }
        }
    }
}

/// A tweet row ready for storage: timestamp normalized, metadata bounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetRecord {
    pub id: String,
    pub username: String,
    pub content: String,
    /// Creation time as epoch seconds
    pub created_at: i64,
    /// Encoded metadata blob (possibly the `" "` placeholder)
    pub metadata: String,
}
