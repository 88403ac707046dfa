//! Tweetmoji CLI - tweet ingestion service and emoji query tools

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tweetmoji::config;

mod commands;

#[derive(Parser)]
#[command(name = "tweetmoji")]
#[command(version = "0.1.0")]
#[command(about = "Tweet ingestion and emoji aggregation service")]
#[command(long_about = r#"
Tweetmoji stores tweets, extracts the emojis they contain, and serves
aggregate counts of emoji usage:
  • POST tweets over HTTP or pipe them in from the command line
  • Extraction covers literal symbols and \UXXXXXXXX escape sequences
  • Counts are grouped per emoji across every stored tweet

Example usage:
  tweetmoji serve --port 8080
  tweetmoji ingest --file tweet.json
  tweetmoji emojis
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Run the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Ingest one tweet from a JSON file (or stdin)
    Ingest {
        /// Path to a JSON file containing the tweet (stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Print aggregate emoji counts
    Emojis {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Show statistics about the stored tweets
    Stats {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = config::load_config(cli.config.as_deref())?;
    let tables = config.as_ref().map(|c| c.table_names()).unwrap_or_default();

    match cli.command {
        Commands::Init { force } => commands::run_init(force),

        Commands::Serve { port, database } => {
            let port = port
                .or_else(|| config.as_ref().and_then(|c| c.port))
                .unwrap_or(8080);
            let database = commands::resolve_database(database, config.as_ref());
            config::ensure_db_dir(&database)?;

            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(tweetmoji::server::start_server(port, database, tables))
        }

        Commands::Ingest { file, database } => {
            let database = commands::resolve_database(database, config.as_ref());
            commands::run_ingest(file, &database, tables)
        }

        Commands::Emojis { database } => {
            let database = commands::resolve_database(database, config.as_ref());
            commands::run_emojis(&database, tables)
        }

        Commands::Stats { database } => {
            let database = commands::resolve_database(database, config.as_ref());
            commands::run_stats(&database, tables)
        }
    }
}
