//! Internal dashboard data: user listing and CSV export.

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppResult,
    domain::entities::{survey_response::SurveyResponse, waitlist_user::WaitlistUserWithResponses},
};

#[derive(Serialize)]
struct UsersResponse {
    users: Vec<AdminUser>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdminUser {
    id: Uuid,
    email: String,
    role: String,
    created_at: DateTime<Utc>,
    responses: Vec<AdminSurveyResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdminSurveyResponse {
    question_id: String,
    answer: String,
    is_multiple_choice: bool,
}

impl From<SurveyResponse> for AdminSurveyResponse {
    fn from(r: SurveyResponse) -> Self {
        AdminSurveyResponse {
            question_id: r.question_id,
            answer: r.answer,
            is_multiple_choice: r.is_multiple_choice,
        }
    }
}

impl From<WaitlistUserWithResponses> for AdminUser {
    fn from(entry: WaitlistUserWithResponses) -> Self {
        AdminUser {
            id: entry.user.id,
            email: entry.user.email,
            role: entry.user.role,
            created_at: entry.user.created_at,
            responses: entry.responses.into_iter().map(Into::into).collect(),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/export", get(export))
}

/// GET /api/admin/users
async fn list_users(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = app_state.waitlist_use_cases.list_users().await?;
    Ok(Json(UsersResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/admin/export
/// Downloads every response as `waitlist-<timestamp>.csv`.
async fn export(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let export = app_state.waitlist_use_cases.export_csv(Utc::now()).await?;
    let disposition = format!("attachment; filename=\"{}\"", export.filename);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.body,
    ))
}
