use model::property::{Property, UpdatePropertyRequest};
use sqlx::PgPool;

use super::COLUMNS;
use crate::error::Result;

/// Applies a partial update; absent fields keep their stored value. A fresh
/// image set replaces the stored one only when the caller uploaded new
/// files.
#[tracing::instrument(skip(pool, request, images))]
pub async fn update(
    pool: &PgPool,
    property_id: i32,
    request: &UpdatePropertyRequest,
    images: Option<&[String]>,
) -> Result<Option<Property>> {
    let sql = format!(
        "UPDATE properties SET
            title = COALESCE($2, title),
            description = COALESCE($3, description),
            status = COALESCE($4, status),
            property_type = COALESCE($5, property_type),
            room = COALESCE($6, room),
            price = COALESCE($7, price),
            area = COALESCE($8, area),
            amenities = COALESCE($9, amenities),
            is_available = COALESCE($10, is_available),
            images = COALESCE($11, images),
            updated_at = now()
         WHERE property_id = $1
         RETURNING {COLUMNS}"
    );

    let property = sqlx::query_as::<_, Property>(&sql)
        .bind(property_id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.status)
        .bind(request.property_type)
        .bind(request.room)
        .bind(request.price)
        .bind(&request.area)
        .bind(&request.amenities)
        .bind(request.is_available)
        .bind(images)
        .fetch_optional(pool)
        .await?;

    Ok(property)
}

/// Toggles the front-page (paid) flag.
#[tracing::instrument(skip(pool))]
pub async fn mark_paid(pool: &PgPool, property_id: i32, is_paid: bool) -> Result<Option<Property>> {
    let sql = format!(
        "UPDATE properties SET is_paid = $2, updated_at = now()
         WHERE property_id = $1
         RETURNING {COLUMNS}"
    );
    let property = sqlx::query_as::<_, Property>(&sql)
        .bind(property_id)
        .bind(is_paid)
        .fetch_optional(pool)
        .await?;
    Ok(property)
}
