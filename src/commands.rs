//! CLI command implementations

use std::path::{Path, PathBuf};
use std::sync::Arc;

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use tweetmoji::config::{self, TweetmojiConfig};
use tweetmoji::counts::CountsReader;
use tweetmoji::ingest::Ingestor;
use tweetmoji::storage::{SqliteStore, TableNames, TweetStore};
use tweetmoji::tweet::Tweet;

#[derive(Tabled)]
struct EmojiRow {
    #[tabled(rename = "Emoji")]
    emoji: String,
    #[tabled(rename = "Tweets")]
    count: i64,
}

/// Resolve the database path: flag, then config file, then the default.
pub fn resolve_database(flag: Option<PathBuf>, config: Option<&TweetmojiConfig>) -> PathBuf {
    flag.or_else(|| {
        config
            .and_then(|c| c.database.clone())
            .map(PathBuf::from)
    })
    .unwrap_or_else(config::default_database_path)
}

pub fn run_init(force: bool) -> anyhow::Result<()> {
    let path = config::default_config_path();
    let config = TweetmojiConfig {
        database: Some(config::default_database_path().display().to_string()),
        ..Default::default()
    };
    config::write_config(&path, &config, force)?;
    println!("{} wrote {}", "✓".green(), path.display());
    Ok(())
}

pub fn run_ingest(file: Option<PathBuf>, database: &Path, tables: TableNames) -> anyhow::Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    let tweet: Tweet = serde_json::from_str(&raw)?;

    config::ensure_db_dir(database)?;
    let store: Arc<dyn TweetStore> = Arc::new(SqliteStore::open(database, tables)?);
    Ingestor::new(store)?.ingest(&tweet)?;

    println!(
        "{} stored tweet {} by {}",
        "✓".green(),
        tweet.id.bold(),
        tweet.username
    );
    Ok(())
}

pub fn run_emojis(database: &Path, tables: TableNames) -> anyhow::Result<()> {
    let store: Arc<dyn TweetStore> = Arc::new(SqliteStore::open(database, tables)?);
    let results = CountsReader::new(store).results()?;
    if results.is_empty() {
        println!("No emojis stored yet.");
        return Ok(());
    }

    let rows: Vec<EmojiRow> = results
        .into_iter()
        .map(|c| EmojiRow {
            emoji: c.emoji,
            count: c.count,
        })
        .collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    Ok(())
}

pub fn run_stats(database: &Path, tables: TableNames) -> anyhow::Result<()> {
    let store = SqliteStore::open(database, tables)?;
    println!("{}", store.stats()?);
    Ok(())
}
