use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    app_error::{AppError, AppResult},
    application::{
        csv_export::{export_filename, render_waitlist_csv},
        validators::is_valid_email,
    },
    domain::entities::{
        analytics_event::{EMAIL_SUBMITTED, NewAnalyticsEvent},
        client_metadata::ClientMetadata,
        creator_role::CreatorRole,
        survey_response::{NewSurveyResponse, SurveyAnswer, flatten_answers},
        waitlist_user::{NewWaitlistUser, WaitlistUser, WaitlistUserWithResponses},
    },
    use_cases::analytics::AnalyticsRepo,
};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Successfully added to waitlist";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "This email is already on the waitlist";

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Upsert the user by email and replace all of their survey responses with `responses`.
    /// Either everything is stored or an error is returned.
    async fn save_submission(
        &self,
        user: &NewWaitlistUser,
        responses: &[NewSurveyResponse],
    ) -> AppResult<WaitlistUser>;

    /// Number of users per stored role, read in one pass.
    async fn count_by_role(&self) -> AppResult<Vec<(String, i64)>>;

    /// All users with their responses, most recent signup first.
    async fn list_with_responses(&self) -> AppResult<Vec<WaitlistUserWithResponses>>;

    async fn ping(&self) -> AppResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct SubmitWaitlistInput {
    pub email: String,
    pub role: String,
    pub responses: BTreeMap<String, SurveyAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistStats {
    pub total: i64,
    pub by_role: BTreeMap<String, i64>,
}

#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    analytics: Arc<dyn AnalyticsRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, analytics: Arc<dyn AnalyticsRepo>) -> Self {
        Self { repo, analytics }
    }

    /// Store a survey submission: upsert the user, replace their answers and log
    /// an `email_submitted` event.
    #[instrument(
        name = "waitlist_submit",
        skip(self, input, client),
        fields(role = %input.role),
        err(Display)
    )]
    pub async fn submit(
        &self,
        input: SubmitWaitlistInput,
        client: ClientMetadata,
    ) -> AppResult<WaitlistUser> {
        let email = input.email.trim();
        if email.is_empty() || input.role.trim().is_empty() {
            return Err(AppError::InvalidInput("Email and role are required".into()));
        }
        if !is_valid_email(email) {
            return Err(AppError::InvalidInput("Invalid email format".into()));
        }
        let role: CreatorRole = input.role.parse().map_err(AppError::InvalidInput)?;
        if input.responses.keys().any(|q| q.trim().is_empty()) {
            return Err(AppError::InvalidInput(
                "Question identifiers must not be empty".into(),
            ));
        }

        let rows = flatten_answers(&input.responses);
        let new_user = NewWaitlistUser {
            email: email.to_string(),
            role,
            client,
        };

        let user = self
            .repo
            .save_submission(&new_user, &rows)
            .await
            .map_err(|err| match err {
                AppError::Conflict(_) => AppError::Conflict(DUPLICATE_EMAIL_MESSAGE.into()),
                other => other,
            })?;

        self.analytics
            .record(&NewAnalyticsEvent {
                event: EMAIL_SUBMITTED.to_string(),
                role: Some(role.as_str().to_string()),
                metadata: Some(serde_json::json!({
                    "email": user.email,
                    "responseCount": input.responses.len(),
                })),
                ip_address: new_user.client.ip_address.clone(),
                user_agent: new_user.client.user_agent.clone(),
            })
            .await?;

        info!(user_id = %user.id, response_rows = rows.len(), "Waitlist submission stored");
        Ok(user)
    }

    /// Total signups and the split per role.
    #[instrument(name = "waitlist_stats", skip(self), err(Display))]
    pub async fn stats(&self) -> AppResult<WaitlistStats> {
        let by_role: BTreeMap<String, i64> = self.repo.count_by_role().await?.into_iter().collect();
        let total = by_role.values().sum();
        Ok(WaitlistStats { total, by_role })
    }

    #[instrument(name = "admin_users", skip(self), err(Display))]
    pub async fn list_users(&self) -> AppResult<Vec<WaitlistUserWithResponses>> {
        self.repo.list_with_responses().await
    }

    #[instrument(name = "admin_export", skip(self), err(Display))]
    pub async fn export_csv(&self, now: DateTime<Utc>) -> AppResult<CsvExport> {
        let users = self.repo.list_with_responses().await?;
        info!(users = users.len(), "Exporting waitlist");
        Ok(CsvExport {
            filename: export_filename(now),
            body: render_waitlist_csv(&users),
        })
    }

    pub async fn database_healthy(&self) -> bool {
        self.repo.ping().await.is_ok()
    }
}
