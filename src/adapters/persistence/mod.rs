use sqlx::{PgPool, error::ErrorKind};

use crate::app_error::AppError;

pub mod analytics_event;
pub mod waitlist_user;

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    tracing::warn!(
                        constraint = ?db_err.constraint(),
                        "Unique constraint violated"
                    );
                    AppError::Conflict("A record with this value already exists".into())
                }
                ErrorKind::ForeignKeyViolation => {
                    AppError::InvalidInput("Referenced record not found".into())
                }
                ErrorKind::NotNullViolation => {
                    AppError::InvalidInput("Required field is missing".into())
                }
                _ => {
                    // Log the actual error for debugging, but don't expose details
                    tracing::error!(error = ?err, "Database error");
                    AppError::Database("Database operation failed".into())
                }
            },
            _ => {
                tracing::error!(error = ?err, "Database error");
                AppError::Database("Database operation failed".into())
            }
        }
    }
}
