//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` creates an `AppState` backed by in-memory repositories.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::{survey_response::SurveyResponse, waitlist_user::WaitlistUser},
    infra::config::AppConfig,
    test_utils::{InMemoryAnalyticsRepo, InMemoryWaitlistRepo},
    use_cases::{
        analytics::{AnalyticsRepo, AnalyticsUseCases},
        waitlist::{WaitlistRepo, WaitlistUseCases},
    },
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let user = create_test_user(|u| u.email = "a@example.com".to_string());
///
/// let app_state = TestAppStateBuilder::new()
///     .with_user(user, vec![])
///     .build();
/// ```
#[derive(Default)]
pub struct TestAppStateBuilder {
    users: Vec<(WaitlistUser, Vec<SurveyResponse>)>,
    waitlist_repo: Option<Arc<dyn WaitlistRepo>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user and their stored responses.
    pub fn with_user(mut self, user: WaitlistUser, responses: Vec<SurveyResponse>) -> Self {
        self.users.push((user, responses));
        self
    }

    /// Replace the waitlist repo (e.g. with a failing one). Seeded users are ignored.
    pub fn with_waitlist_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.waitlist_repo = Some(repo);
        self
    }

    /// Build with in-memory repos and hand them back for assertions.
    pub fn build_with_mocks(
        self,
    ) -> (
        AppState,
        Arc<InMemoryWaitlistRepo>,
        Arc<InMemoryAnalyticsRepo>,
    ) {
        let waitlist_repo = Arc::new(InMemoryWaitlistRepo::with_users(self.users));
        let analytics_repo = Arc::new(InMemoryAnalyticsRepo::new());
        let app_state = assemble(waitlist_repo.clone(), analytics_repo.clone());
        (app_state, waitlist_repo, analytics_repo)
    }

    pub fn build(self) -> AppState {
        let waitlist_repo: Arc<dyn WaitlistRepo> = match self.waitlist_repo {
            Some(repo) => repo,
            None => Arc::new(InMemoryWaitlistRepo::with_users(self.users)),
        };
        assemble(waitlist_repo, Arc::new(InMemoryAnalyticsRepo::new()))
    }
}

fn assemble(waitlist_repo: Arc<dyn WaitlistRepo>, analytics_repo: Arc<dyn AnalyticsRepo>) -> AppState {
    let waitlist_use_cases = Arc::new(WaitlistUseCases::new(
        waitlist_repo,
        analytics_repo.clone(),
    ));
    let analytics_use_cases = Arc::new(AnalyticsUseCases::new(analytics_repo));

    // Create minimal config for testing
    let config = Arc::new(AppConfig {
        database_url: SecretString::new("postgres://test@localhost/test".into()),
        bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        db_max_connections: 1,
        db_acquire_timeout_secs: 1,
        run_migrations: false,
        log_file: String::new(),
    });

    AppState {
        config,
        waitlist_use_cases,
        analytics_use_cases,
    }
}
