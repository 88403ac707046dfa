use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use std::sync::Arc;

use crate::Error;
use crate::counts::EmojiCount;
use crate::server::AppState;
use crate::tweet::Tweet;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct EmojiResults {
    pub emojis: Vec<EmojiCount>,
}

pub async fn healthcheck() -> StatusCode {
    StatusCode::OK
}

pub async fn create_tweet(
    State(state): State<Arc<AppState>>,
    Json(tweet): Json<Tweet>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    state.ingestor.ingest(&tweet).map_err(|e| {
        tracing::error!(id = %tweet.id, username = %tweet.username, error = %e, "store tweet");
        let status = match e {
            Error::DuplicateTweet(_) => StatusCode::CONFLICT,
            Error::Timestamp(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorResponse { error: e.to_string() }))
    })?;

    tracing::info!(id = %tweet.id, username = %tweet.username, "stored tweet");
    Ok(StatusCode::OK)
}

pub async fn emoji_results(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EmojiResults>, (StatusCode, Json<ErrorResponse>)> {
    let emojis = state.counts.results().map_err(|e| {
        tracing::error!(error = %e, "get emoji results");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error: e.to_string() }),
        )
    })?;

    Ok(Json(EmojiResults { emojis }))
}
