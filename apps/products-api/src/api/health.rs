//! Readiness endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Ready only when the database answers a ping
async fn ready(State(state): State<AppState>) -> Result<Json<ReadyResponse>, StatusCode> {
    database::postgres::check_health(&state.db)
        .await
        .map_err(|e| {
            tracing::warn!("Readiness check failed: {e}");
            StatusCode::SERVICE_UNAVAILABLE
        })?;

    Ok(Json(ReadyResponse {
        status: "ready",
        service: state.config.app.name,
        version: state.config.app.version,
    }))
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
