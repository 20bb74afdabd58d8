use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{
    client_metadata::ClientMetadata, creator_role::CreatorRole, survey_response::SurveyResponse,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistUser {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub ip_address: String,
    pub user_agent: String,
    pub referrer: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user together with the snapshot of their last survey submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistUserWithResponses {
    pub user: WaitlistUser,
    pub responses: Vec<SurveyResponse>,
}

/// Upsert payload for a submission. Email is the identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistUser {
    pub email: String,
    pub role: CreatorRole,
    pub client: ClientMetadata,
}
