use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{app_json::AppJson, app_state::AppState, client_metadata::RequestClient},
    app_error::AppResult,
    use_cases::analytics::TrackEventInput,
};

#[derive(Deserialize)]
struct TrackPayload {
    #[serde(default)]
    event: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    metadata: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct TrackResponse {
    success: bool,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/track", post(track))
}

/// POST /api/analytics/track
async fn track(
    State(app_state): State<AppState>,
    RequestClient(client): RequestClient,
    AppJson(payload): AppJson<TrackPayload>,
) -> AppResult<impl IntoResponse> {
    app_state
        .analytics_use_cases
        .track(
            TrackEventInput {
                event: payload.event,
                role: payload.role,
                metadata: payload.metadata,
            },
            client,
        )
        .await?;

    Ok(Json(TrackResponse { success: true }))
}
