use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use farelink_core::search::{SearchRequest, SearchResponse};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights/search", post(search_flights))
        .route("/v1/health", get(health))
}

async fn search_flights(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let response = state.service.search_flights(&request).await?;
    Ok(Json(response))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
