use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Event name recorded whenever the survey form is submitted.
pub const EMAIL_SUBMITTED: &str = "email_submitted";

/// Append-only funnel event. Never updated or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub id: Uuid,
    pub event: String,
    pub role: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub ip_address: String,
    pub user_agent: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalyticsEvent {
    pub event: String,
    pub role: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub ip_address: String,
    pub user_agent: String,
}
