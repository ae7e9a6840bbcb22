use sqlx::PgPool;

use crate::error::{DbError, Result};

/// Deletes a tour; its payment cascades with it.
#[tracing::instrument(skip(pool))]
pub async fn delete(pool: &PgPool, tour_id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM tours WHERE tour_id = $1")
        .bind(tour_id)
        .execute(pool)
        .await
        .map_err(DbError::from)?;

    Ok(result.rows_affected() > 0)
}
