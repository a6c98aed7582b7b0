use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::models::Recommendation;
use crate::services::recommendations;
use crate::store::CatalogStats;

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Get all catalog titles, in catalog order (feeds the UI's title picker)
pub async fn get_titles(State(state): State<AppState>) -> Json<Vec<String>> {
    let titles = state
        .store
        .catalog
        .titles()
        .map(str::to_string)
        .collect();
    Json(titles)
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub title: String,
    /// Result count; absent or zero falls back to the configured default
    #[serde(default)]
    pub k: Option<usize>,
}

/// Get the top-k catalog items most similar to a title
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let k = match params.k {
        Some(k) if k > 0 => k,
        _ => state.default_top_k,
    };
    let recs = recommendations::recommend(
        &state.store,
        state.ranker.as_ref(),
        &params.title,
        k,
    )?;
    Ok(Json(recs))
}

/// Get catalog summary aggregates for the market-analysis dashboard
pub async fn get_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(state.store.catalog.stats())
}
