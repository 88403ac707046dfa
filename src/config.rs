use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::storage::TableNames;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TweetmojiConfig {
    pub database: Option<String>,
    pub port: Option<u16>,
    pub tweets_table: Option<String>,
    pub emojis_table: Option<String>,
}

impl TweetmojiConfig {
    /// Table names from the config, falling back to the defaults.
    pub fn table_names(&self) -> TableNames {
        let defaults = TableNames::default();
        TableNames {
            tweets: self.tweets_table.clone().unwrap_or(defaults.tweets),
            emojis: self.emojis_table.clone().unwrap_or(defaults.emojis),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("tweetmoji.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("tweetmoji.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<TweetmojiConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: TweetmojiConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &TweetmojiConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
