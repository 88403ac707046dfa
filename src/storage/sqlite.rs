//! SQLite storage implementation

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, ErrorCode, OptionalExtension, params};

use super::{TableNames, TweetStore, schema};
use crate::tweet::TweetRecord;
use crate::{Error, Result};

/// SQLite-backed store for tweets and their emoji occurrences.
///
/// The connection is serialized behind a mutex so one store can be shared
/// across request handlers; every call is an independent unit of work.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    tables: TableNames,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path, tables: TableNames) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
            tables,
        };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database with default table names (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Self::open_in_memory_with(TableNames::default())
    }

    /// Open an in-memory database with explicit table names
    pub fn open_in_memory_with(tables: TableNames) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
            tables,
        };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        let conn = self.conn();
        for stmt in schema::all_schema_statements(&self.tables) {
            conn.execute(&stmt, [])?;
        }
        Ok(())
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock only means another thread panicked mid-call; the
        // connection itself is still usable.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Fetch a stored tweet row by id
    pub fn get_tweet(&self, id: &str) -> Result<Option<TweetRecord>> {
        let conn = self.conn();
        let sql = format!(
            "SELECT id, username, tweet_content, created_at, metadata FROM {} WHERE id = ?1",
            self.tables.tweets
        );
        conn.query_row(&sql, [id], |row| {
            Ok(TweetRecord {
                id: row.get(0)?,
                username: row.get(1)?,
                content: row.get(2)?,
                created_at: row.get(3)?,
                metadata: row.get(4)?,
            })
        })
        .optional()
        .map_err(Into::into)
    }

    /// The emojis stored for one tweet
    pub fn emojis_for_tweet(&self, id: &str) -> Result<Vec<String>> {
        let conn = self.conn();
        let sql = format!(
            "SELECT emoji FROM {} WHERE tweet_id = ?1 ORDER BY emoji",
            self.tables.emojis
        );
        let mut stmt = conn.prepare(&sql)?;
        let emojis: Vec<String> = stmt
            .query_map([id], |row| row.get(0))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(emojis)
    }

    /// Count all tweet rows
    pub fn count_tweets(&self) -> Result<usize> {
        let conn = self.conn();
        let sql = format!("SELECT COUNT(*) FROM {}", self.tables.tweets);
        let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Count all emoji occurrence rows
    pub fn count_emojis(&self) -> Result<usize> {
        let conn = self.conn();
        let sql = format!("SELECT COUNT(*) FROM {}", self.tables.emojis);
        let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            tweets: self.count_tweets()?,
            emojis: self.count_emojis()?,
        })
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(err, rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation)
}

impl TweetStore for SqliteStore {
    fn insert_tweet(&self, record: &TweetRecord) -> Result<()> {
        let conn = self.conn();
        let sql = format!(
            "INSERT INTO {} (id, username, tweet_content, created_at, metadata) VALUES (?1, ?2, ?3, ?4, ?5)",
            self.tables.tweets
        );
        conn.execute(
            &sql,
            params![
                record.id,
                record.username,
                record.content,
                record.created_at,
                record.metadata,
            ],
        )
        .map_err(|e| {
            if is_constraint_violation(&e) {
                Error::DuplicateTweet(record.id.clone())
            } else {
                e.into()
            }
        })?;
        Ok(())
    }

    fn insert_emoji(&self, tweet_id: &str, emoji: &str) -> Result<()> {
        let conn = self.conn();
        let sql = format!(
            "INSERT INTO {} (tweet_id, emoji) VALUES (?1, ?2)",
            self.tables.emojis
        );
        conn.execute(&sql, params![tweet_id, emoji])?;
        Ok(())
    }

    fn emoji_counts(&self) -> Result<Vec<(String, i64)>> {
        let conn = self.conn();
        let sql = format!(
            "SELECT emoji, COUNT(tweet_id) AS count FROM {} GROUP BY emoji",
            self.tables.emojis
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| Error::Query(format!("retrieve emoji counts: {e}")))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(|e| Error::Query(format!("retrieve emoji counts: {e}")))?;

        let mut counts = Vec::new();
        for row in rows {
            counts.push(row.map_err(|e| Error::Query(format!("scan emoji count row: {e}")))?);
        }
        Ok(counts)
    }
}

/// Row totals for a store
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub tweets: usize,
    pub emojis: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Tweets: {}", self.tweets)?;
        write!(f, "  Emoji occurrences: {}", self.emojis)
    }
}
