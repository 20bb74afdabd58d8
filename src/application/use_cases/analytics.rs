use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{
        analytics_event::{AnalyticsEvent, NewAnalyticsEvent},
        client_metadata::ClientMetadata,
    },
};

#[async_trait]
pub trait AnalyticsRepo: Send + Sync {
    /// Append an event. Existing events are never touched.
    async fn record(&self, event: &NewAnalyticsEvent) -> AppResult<AnalyticsEvent>;
}

#[derive(Debug, Clone, Default)]
pub struct TrackEventInput {
    pub event: Option<String>,
    pub role: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Clone)]
pub struct AnalyticsUseCases {
    repo: Arc<dyn AnalyticsRepo>,
}

impl AnalyticsUseCases {
    pub fn new(repo: Arc<dyn AnalyticsRepo>) -> Self {
        Self { repo }
    }

    #[instrument(
        name = "analytics_track",
        skip(self, input, client),
        fields(event = ?input.event),
        err(Display)
    )]
    pub async fn track(
        &self,
        input: TrackEventInput,
        client: ClientMetadata,
    ) -> AppResult<AnalyticsEvent> {
        let event = input
            .event
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::InvalidInput("Event is required".into()))?;

        // Blank role means "not picked yet". Any other value is kept as sent.
        let role = input.role.filter(|r| !r.trim().is_empty());

        let metadata = input.metadata.filter(|m| !m.is_null());

        let stored = self
            .repo
            .record(&NewAnalyticsEvent {
                event: event.to_string(),
                role,
                metadata,
                ip_address: client.ip_address,
                user_agent: client.user_agent,
            })
            .await?;

        debug!(event_id = %stored.id, "Analytics event recorded");
        Ok(stored)
    }
}
