//! Password-reset tokens: single use, time boxed.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{DbError, Result};

#[tracing::instrument(skip(pool))]
pub async fn create(
    pool: &PgPool,
    user_id: i32,
    token: Uuid,
    expires_at: DateTime<Utc>,
) -> Result<()> {
    sqlx::query("INSERT INTO reset_tokens (token, user_id, expires_at) VALUES ($1, $2, $3)")
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .execute(pool)
        .await
        .map_err(DbError::from)?;
    Ok(())
}

/// Burns a token and returns its user id. `None` when the token is unknown,
/// expired or already used; the update and the check are one statement, so
/// two concurrent resets cannot both consume it.
#[tracing::instrument(skip(pool))]
pub async fn consume(pool: &PgPool, token: Uuid) -> Result<Option<i32>> {
    let user_id: Option<i32> = sqlx::query_scalar(
        "UPDATE reset_tokens SET used = TRUE
         WHERE token = $1 AND NOT used AND expires_at > now()
         RETURNING user_id",
    )
    .bind(token)
    .fetch_optional(pool)
    .await
    .map_err(DbError::from)?;

    Ok(user_id)
}
