//! Public survey submission and signup counters.

use std::collections::BTreeMap;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{app_json::AppJson, app_state::AppState, client_metadata::RequestClient},
    app_error::AppResult,
    domain::entities::survey_response::SurveyAnswer,
    use_cases::waitlist::{SUBMIT_SUCCESS_MESSAGE, SubmitWaitlistInput, WaitlistStats},
};

#[derive(Deserialize)]
struct SubmitPayload {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    responses: Option<BTreeMap<String, SurveyAnswer>>,
}

#[derive(Serialize)]
struct SubmitResponse {
    success: bool,
    message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", get(stats).post(submit))
}

/// POST /api/waitlist
async fn submit(
    State(app_state): State<AppState>,
    RequestClient(client): RequestClient,
    AppJson(payload): AppJson<SubmitPayload>,
) -> AppResult<impl IntoResponse> {
    let input = SubmitWaitlistInput {
        email: payload.email.unwrap_or_default(),
        role: payload.role.unwrap_or_default(),
        responses: payload.responses.unwrap_or_default(),
    };

    app_state.waitlist_use_cases.submit(input, client).await?;

    Ok(Json(SubmitResponse {
        success: true,
        message: SUBMIT_SUCCESS_MESSAGE,
    }))
}

/// GET /api/waitlist
async fn stats(State(app_state): State<AppState>) -> AppResult<Json<WaitlistStats>> {
    let stats = app_state.waitlist_use_cases.stats().await?;
    Ok(Json(stats))
}
