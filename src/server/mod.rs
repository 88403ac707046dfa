use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::counts::CountsReader;
use crate::ingest::Ingestor;
use crate::storage::{SqliteStore, TableNames, TweetStore};

pub mod routes;

/// Server state
pub struct AppState {
    pub ingestor: Ingestor,
    pub counts: CountsReader,
}

pub async fn start_server(
    port: u16,
    database_path: PathBuf,
    tables: TableNames,
) -> anyhow::Result<()> {
    let store: Arc<dyn TweetStore> = Arc::new(SqliteStore::open(&database_path, tables)?);
    let state = Arc::new(AppState {
        ingestor: Ingestor::new(Arc::clone(&store))?,
        counts: CountsReader::new(store),
    });

    let app = Router::new()
        .route("/_healthcheck", get(routes::healthcheck))
        .route("/tweets/create", post(routes::create_tweet))
        .route("/tweets/emojis", get(routes::emoji_results))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);
    println!("🌍 Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
