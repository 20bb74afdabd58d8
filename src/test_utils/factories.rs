//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::{survey_response::SurveyResponse, waitlist_user::WaitlistUser};

/// Create a test waitlist user with sensible defaults.
pub fn create_test_user(overrides: impl FnOnce(&mut WaitlistUser)) -> WaitlistUser {
    let mut user = WaitlistUser {
        id: Uuid::new_v4(),
        email: "user@example.com".to_string(),
        role: "photographer".to_string(),
        ip_address: "127.0.0.1".to_string(),
        user_agent: "test-agent".to_string(),
        referrer: None,
        created_at: test_datetime(),
        updated_at: test_datetime(),
    };
    overrides(&mut user);
    user
}

/// Create a test survey response with sensible defaults.
pub fn create_test_response(
    waitlist_user_id: Uuid,
    overrides: impl FnOnce(&mut SurveyResponse),
) -> SurveyResponse {
    let mut response = SurveyResponse {
        id: Uuid::new_v4(),
        waitlist_user_id,
        question_id: "pricing".to_string(),
        answer: "$10/month".to_string(),
        is_multiple_choice: false,
        created_at: test_datetime(),
    };
    overrides(&mut response);
    response
}

/// Fixed timestamp for reproducible tests: 2025-01-01 12:00:00 UTC.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}
