use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::adapters::http::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health
/// Always 200; `status` is `degraded` when the database does not answer.
async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let connected = app_state.waitlist_use_cases.database_healthy().await;

    Json(HealthResponse {
        status: if connected { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if connected {
            "connected"
        } else {
            "disconnected"
        },
    })
}
