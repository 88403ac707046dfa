//! Database schema definitions

use super::TableNames;

/// SQL to create the tweets table
pub fn create_tweets_table(table: &str) -> String {
    format!(
        r#"
CREATE TABLE IF NOT EXISTS {table} (
    id TEXT PRIMARY KEY,
    username TEXT NOT NULL,
    tweet_content TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    metadata TEXT NOT NULL
)
"#
    )
}

/// SQL to create the emojis table
///
/// The composite key collapses repeated emojis within one tweet to a single
/// stored occurrence.
pub fn create_emojis_table(table: &str) -> String {
    format!(
        r#"
CREATE TABLE IF NOT EXISTS {table} (
    tweet_id TEXT NOT NULL,
    emoji TEXT NOT NULL,
    PRIMARY KEY (tweet_id, emoji)
)
"#
    )
}

/// SQL to create indexes
pub fn create_indexes(tables: &TableNames) -> Vec<String> {
    vec![format!(
        "CREATE INDEX IF NOT EXISTS idx_{0}_emoji ON {0}(emoji)",
        tables.emojis
    )]
}

/// All schema creation statements
pub fn all_schema_statements(tables: &TableNames) -> Vec<String> {
    let mut stmts = vec![
        create_tweets_table(&tables.tweets),
        create_emojis_table(&tables.emojis),
    ];
    stmts.extend(create_indexes(tables));
    stmts
}
