use model::property::{
    CreatePropertyRequest, Property, PropertyInformation, PropertyLocation, PropertyWithDetails,
};
use sqlx::PgPool;

use super::COLUMNS;
use crate::error::{DbError, Result};

/// Creates a listing together with its location and information rows as one
/// atomic unit. On any failure no row persists; the open transaction rolls
/// back on drop.
///
/// The reference code is synthesized by the caller, which owns the retry
/// loop around [`DbError::UniqueViolation`] on
/// [`super::REFERENCE_CONSTRAINT`].
#[tracing::instrument(skip(pool, request), fields(title = %request.title))]
pub async fn create(
    pool: &PgPool,
    user_id: i32,
    request: &CreatePropertyRequest,
    images: &[String],
    reference: &str,
) -> Result<PropertyWithDetails> {
    let mut tx = pool.begin().await.map_err(DbError::from)?;

    let sql = format!(
        "INSERT INTO properties (
            title, description, status, property_type, room, price, area,
            amenities, images, reference, user_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {COLUMNS}"
    );
    let property = sqlx::query_as::<_, Property>(&sql)
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.status)
        .bind(request.property_type)
        .bind(request.room)
        .bind(request.price)
        .bind(&request.area)
        .bind(&request.amenities)
        .bind(images)
        .bind(reference)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

    let location = sqlx::query_as::<_, PropertyLocation>(
        "INSERT INTO property_locations (address, city, state, country, property_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING location_id, address, city, state, country, property_id",
    )
    .bind(&request.address)
    .bind(&request.city)
    .bind(&request.state)
    .bind(&request.country)
    .bind(property.property_id)
    .fetch_one(&mut *tx)
    .await?;

    let information = sqlx::query_as::<_, PropertyInformation>(
        "INSERT INTO property_informations (build_age, bathrooms, bedrooms, bq, property_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING information_id, build_age, bathrooms, bedrooms, bq, property_id",
    )
    .bind(request.build_age)
    .bind(request.bathrooms)
    .bind(request.bedrooms)
    .bind(request.bq)
    .bind(property.property_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await.map_err(DbError::from)?;

    tracing::info!(
        property_id = property.property_id,
        reference = %property.reference,
        "created property with location and information"
    );

    Ok(PropertyWithDetails {
        property,
        location: Some(location),
        information: Some(information),
        owner: None,
    })
}
