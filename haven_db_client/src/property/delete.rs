use sqlx::PgPool;

use crate::error::Result;

/// Deletes a listing; the location and information rows cascade with it.
/// Returns false when no such listing existed.
#[tracing::instrument(skip(pool))]
pub async fn delete(pool: &PgPool, property_id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM properties WHERE property_id = $1")
        .bind(property_id)
        .execute(pool)
        .await
        .map_err(crate::error::DbError::from)?;

    Ok(result.rows_affected() > 0)
}
