use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::analytics_event::{AnalyticsEvent, NewAnalyticsEvent},
    use_cases::analytics::AnalyticsRepo,
};

#[derive(sqlx::FromRow, Debug)]
struct AnalyticsEventDb {
    id: Uuid,
    event: String,
    role: Option<String>,
    metadata: Option<serde_json::Value>,
    ip_address: String,
    user_agent: String,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl AnalyticsRepo for PostgresPersistence {
    async fn record(&self, event: &NewAnalyticsEvent) -> AppResult<AnalyticsEvent> {
        let row = sqlx::query_as::<_, AnalyticsEventDb>(
            r#"
            INSERT INTO waitlist_analytics (id, event, role, metadata, ip_address, user_agent)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, event, role, metadata, ip_address, user_agent, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&event.event)
        .bind(event.role.as_deref())
        .bind(&event.metadata)
        .bind(&event.ip_address)
        .bind(&event.user_agent)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(AnalyticsEvent {
            id: row.id,
            event: row.event,
            role: row.role,
            metadata: row.metadata,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            created_at: row.created_at,
        })
    }
}
