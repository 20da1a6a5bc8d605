//! Healthcheck endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::cms::HealthSummary;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub entry_count: usize,
    pub distinct_author_count: usize,
}

pub async fn healthcheck(State(state): State<AppState>) -> Json<HealthResponse> {
    let HealthSummary {
        entry_count,
        distinct_author_count,
    } = state.store().health_summary().await;

    Json(HealthResponse {
        status: "ok",
        entry_count,
        distinct_author_count,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(healthcheck))
}
