use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::{
        survey_response::{NewSurveyResponse, SurveyResponse},
        waitlist_user::{NewWaitlistUser, WaitlistUser, WaitlistUserWithResponses},
    },
    use_cases::waitlist::WaitlistRepo,
};

// Waitlist user as stored in the db.
#[derive(sqlx::FromRow, Debug)]
struct WaitlistUserDb {
    id: Uuid,
    email: String,
    role: String,
    ip_address: String,
    user_agent: String,
    referrer: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<WaitlistUserDb> for WaitlistUser {
    fn from(row: WaitlistUserDb) -> Self {
        WaitlistUser {
            id: row.id,
            email: row.email,
            role: row.role,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            referrer: row.referrer,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow, Debug)]
struct SurveyResponseDb {
    id: Uuid,
    waitlist_user_id: Uuid,
    question_id: String,
    answer: String,
    is_multiple_choice: bool,
    created_at: DateTime<Utc>,
}

impl From<SurveyResponseDb> for SurveyResponse {
    fn from(row: SurveyResponseDb) -> Self {
        SurveyResponse {
            id: row.id,
            waitlist_user_id: row.waitlist_user_id,
            question_id: row.question_id,
            answer: row.answer,
            is_multiple_choice: row.is_multiple_choice,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn save_submission(
        &self,
        user: &NewWaitlistUser,
        responses: &[NewSurveyResponse],
    ) -> AppResult<WaitlistUser> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        let rec = sqlx::query_as::<_, WaitlistUserDb>(
            r#"
            INSERT INTO waitlist_users (id, email, role, ip_address, user_agent, referrer)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (email) DO UPDATE
            SET role = EXCLUDED.role,
                ip_address = EXCLUDED.ip_address,
                user_agent = EXCLUDED.user_agent,
                referrer = EXCLUDED.referrer,
                updated_at = NOW()
            RETURNING id, email, role, ip_address, user_agent, referrer, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(&user.client.ip_address)
        .bind(&user.client.user_agent)
        .bind(user.client.referrer.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::from)?;

        sqlx::query("DELETE FROM survey_responses WHERE waitlist_user_id = $1")
            .bind(rec.id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::from)?;

        if !responses.is_empty() {
            let ids: Vec<Uuid> = responses.iter().map(|_| Uuid::new_v4()).collect();
            let question_ids: Vec<&str> =
                responses.iter().map(|r| r.question_id.as_str()).collect();
            let answers: Vec<&str> = responses.iter().map(|r| r.answer.as_str()).collect();
            let multiple: Vec<bool> = responses.iter().map(|r| r.is_multiple_choice).collect();

            sqlx::query(
                r#"
                INSERT INTO survey_responses
                    (id, waitlist_user_id, question_id, answer, is_multiple_choice, position)
                SELECT r.id, $1, r.question_id, r.answer, r.is_multiple_choice, r.position::int
                FROM UNNEST($2::uuid[], $3::text[], $4::text[], $5::bool[])
                    WITH ORDINALITY AS r(id, question_id, answer, is_multiple_choice, position)
                "#,
            )
            .bind(rec.id)
            .bind(&ids)
            .bind(&question_ids)
            .bind(&answers)
            .bind(&multiple)
            .execute(&mut *tx)
            .await
            .map_err(AppError::from)?;
        }

        tx.commit().await.map_err(AppError::from)?;

        Ok(rec.into())
    }

    async fn count_by_role(&self) -> AppResult<Vec<(String, i64)>> {
        sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT role, COUNT(*) AS count
            FROM waitlist_users
            GROUP BY role
            ORDER BY role ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn list_with_responses(&self) -> AppResult<Vec<WaitlistUserWithResponses>> {
        // Both reads see the same snapshot.
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(AppError::from)?;

        let users = sqlx::query_as::<_, WaitlistUserDb>(
            r#"
            SELECT id, email, role, ip_address, user_agent, referrer, created_at, updated_at
            FROM waitlist_users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(AppError::from)?;

        let responses = sqlx::query_as::<_, SurveyResponseDb>(
            r#"
            SELECT id, waitlist_user_id, question_id, answer, is_multiple_choice, created_at
            FROM survey_responses
            ORDER BY waitlist_user_id, position
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(AppError::from)?;

        tx.commit().await.map_err(AppError::from)?;

        let mut by_user: HashMap<Uuid, Vec<SurveyResponse>> = HashMap::new();
        for row in responses {
            by_user
                .entry(row.waitlist_user_id)
                .or_default()
                .push(row.into());
        }

        Ok(users
            .into_iter()
            .map(|row| {
                let responses = by_user.remove(&row.id).unwrap_or_default();
                WaitlistUserWithResponses {
                    user: row.into(),
                    responses,
                }
            })
            .collect())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
