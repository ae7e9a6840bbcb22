use model::tour::{Tour, UpdateTourRequest};
use sqlx::PgPool;

use super::COLUMNS;
use crate::error::Result;

#[tracing::instrument(skip(pool, request))]
pub async fn update(
    pool: &PgPool,
    tour_id: i32,
    request: &UpdateTourRequest,
) -> Result<Option<Tour>> {
    let sql = format!(
        "UPDATE tours SET
            name = COALESCE($2, name),
            email = COALESCE($3, email),
            phone = COALESCE($4, phone),
            date = COALESCE($5, date),
            time = COALESCE($6, time),
            updated_at = now()
         WHERE tour_id = $1
         RETURNING {COLUMNS}"
    );

    let tour = sqlx::query_as::<_, Tour>(&sql)
        .bind(tour_id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(request.date)
        .bind(&request.time)
        .fetch_optional(pool)
        .await?;

    Ok(tour)
}

/// Records the owner's accept/reject decision on a tour request.
#[tracing::instrument(skip(pool))]
pub async fn set_accepted(pool: &PgPool, tour_id: i32, accepted: bool) -> Result<Option<Tour>> {
    let sql = format!(
        "UPDATE tours SET is_accepted = $2, updated_at = now()
         WHERE tour_id = $1
         RETURNING {COLUMNS}"
    );
    let tour = sqlx::query_as::<_, Tour>(&sql)
        .bind(tour_id)
        .bind(accepted)
        .fetch_optional(pool)
        .await?;
    Ok(tour)
}
