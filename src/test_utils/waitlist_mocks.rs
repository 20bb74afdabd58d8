//! In-memory mock implementations for the waitlist and analytics repositories.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{
        analytics_event::{AnalyticsEvent, NewAnalyticsEvent},
        survey_response::{NewSurveyResponse, SurveyResponse},
        waitlist_user::{NewWaitlistUser, WaitlistUser, WaitlistUserWithResponses},
    },
    use_cases::{analytics::AnalyticsRepo, waitlist::WaitlistRepo},
};

/// In-memory implementation of WaitlistRepo for testing.
///
/// Users are kept in insertion order; responses in a flat list like the table.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub users: Mutex<Vec<WaitlistUser>>,
    pub responses: Mutex<Vec<SurveyResponse>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with users and their responses.
    pub fn with_users(entries: Vec<(WaitlistUser, Vec<SurveyResponse>)>) -> Self {
        let mut users = Vec::new();
        let mut responses = Vec::new();
        for (user, user_responses) in entries {
            users.push(user);
            responses.extend(user_responses);
        }
        Self {
            users: Mutex::new(users),
            responses: Mutex::new(responses),
        }
    }

    /// Get all users in insertion order (for test assertions).
    pub fn get_all_users(&self) -> Vec<WaitlistUser> {
        self.users.lock().unwrap().clone()
    }

    pub fn responses_for(&self, user_id: Uuid) -> Vec<SurveyResponse> {
        self.responses
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.waitlist_user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn total_responses(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn save_submission(
        &self,
        user: &NewWaitlistUser,
        responses: &[NewSurveyResponse],
    ) -> AppResult<WaitlistUser> {
        let mut users = self.users.lock().unwrap();
        let now = chrono::Utc::now();

        let stored = match users.iter().position(|u| u.email == user.email) {
            Some(idx) => {
                let existing = &mut users[idx];
                existing.role = user.role.as_str().to_string();
                existing.ip_address = user.client.ip_address.clone();
                existing.user_agent = user.client.user_agent.clone();
                existing.referrer = user.client.referrer.clone();
                existing.updated_at = now;
                existing.clone()
            }
            None => {
                let created = WaitlistUser {
                    id: Uuid::new_v4(),
                    email: user.email.clone(),
                    role: user.role.as_str().to_string(),
                    ip_address: user.client.ip_address.clone(),
                    user_agent: user.client.user_agent.clone(),
                    referrer: user.client.referrer.clone(),
                    created_at: now,
                    updated_at: now,
                };
                users.push(created.clone());
                created
            }
        };

        let mut stored_responses = self.responses.lock().unwrap();
        stored_responses.retain(|r| r.waitlist_user_id != stored.id);
        stored_responses.extend(responses.iter().map(|r| SurveyResponse {
            id: Uuid::new_v4(),
            waitlist_user_id: stored.id,
            question_id: r.question_id.clone(),
            answer: r.answer.clone(),
            is_multiple_choice: r.is_multiple_choice,
            created_at: now,
        }));

        Ok(stored)
    }

    async fn count_by_role(&self) -> AppResult<Vec<(String, i64)>> {
        let mut counts: HashMap<String, i64> = HashMap::new();
        for user in self.users.lock().unwrap().iter() {
            *counts.entry(user.role.clone()).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }

    async fn list_with_responses(&self) -> AppResult<Vec<WaitlistUserWithResponses>> {
        let users = self.users.lock().unwrap();
        let responses = self.responses.lock().unwrap();

        // Latest insert wins ties on created_at, like a serial id would.
        let mut ordered: Vec<WaitlistUser> = users.iter().rev().cloned().collect();
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(ordered
            .into_iter()
            .map(|user| {
                let user_responses = responses
                    .iter()
                    .filter(|r| r.waitlist_user_id == user.id)
                    .cloned()
                    .collect();
                WaitlistUserWithResponses {
                    user,
                    responses: user_responses,
                }
            })
            .collect())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
enum Failure {
    Conflict,
    Database,
}

/// Repo whose writes (and, for `database()`, reads) always fail.
pub struct FailingWaitlistRepo {
    failure: Failure,
}

impl FailingWaitlistRepo {
    /// Writes hit a unique violation the upsert did not absorb.
    pub fn conflict() -> Self {
        Self {
            failure: Failure::Conflict,
        }
    }

    /// Every call fails like a lost database connection.
    pub fn database() -> Self {
        Self {
            failure: Failure::Database,
        }
    }

    fn read_result<T: Default>(&self) -> AppResult<T> {
        match self.failure {
            Failure::Conflict => Ok(T::default()),
            Failure::Database => Err(AppError::Database("Database operation failed".into())),
        }
    }
}

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn save_submission(
        &self,
        _user: &NewWaitlistUser,
        _responses: &[NewSurveyResponse],
    ) -> AppResult<WaitlistUser> {
        match self.failure {
            Failure::Conflict => Err(AppError::Conflict(
                "A record with this value already exists".into(),
            )),
            Failure::Database => Err(AppError::Database("Database operation failed".into())),
        }
    }

    async fn count_by_role(&self) -> AppResult<Vec<(String, i64)>> {
        self.read_result()
    }

    async fn list_with_responses(&self) -> AppResult<Vec<WaitlistUserWithResponses>> {
        self.read_result()
    }

    async fn ping(&self) -> AppResult<()> {
        self.read_result()
    }
}

/// In-memory implementation of AnalyticsRepo for testing.
#[derive(Default)]
pub struct InMemoryAnalyticsRepo {
    pub events: Mutex<Vec<AnalyticsEvent>>,
}

impl InMemoryAnalyticsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all events in the order they were recorded.
    pub fn get_all(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalyticsRepo for InMemoryAnalyticsRepo {
    async fn record(&self, event: &NewAnalyticsEvent) -> AppResult<AnalyticsEvent> {
        let stored = AnalyticsEvent {
            id: Uuid::new_v4(),
            event: event.event.clone(),
            role: event.role.clone(),
            metadata: event.metadata.clone(),
            ip_address: event.ip_address.clone(),
            user_agent: event.user_agent.clone(),
            created_at: chrono::Utc::now(),
        };
        self.events.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}
