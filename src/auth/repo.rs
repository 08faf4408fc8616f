use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::error::AppError;

/// User record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String, // stored exactly as protect() produced it
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Insert a new user. Callers normalize the email first; a duplicate
    /// surfaces as [`AppError::EmailTaken`] via the UNIQUE constraint.
    pub async fn create(
        db: &SqlitePool,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, first_name, last_name)
            VALUES (?, ?, ?, ?)
            RETURNING id, email, password, first_name, last_name
            "#,
        )
        .bind(email)
        .bind(password)
        .bind(first_name)
        .bind(last_name)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Find a user by (already normalized) email. Exact match only.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, first_name, last_name
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }
}
