use std::collections::HashMap;

use model::property::{Property, PropertyInformation, PropertyLocation, PropertyWithDetails};
use model::user::PublicUser;
use sqlx::PgPool;

use super::COLUMNS;
use crate::error::Result;
use crate::user::PUBLIC_USER_COLUMNS;

/// Fetches the bare listing row, used by mutation handlers for the
/// ownership check before any write.
#[tracing::instrument(skip(pool))]
pub async fn get_basic(pool: &PgPool, property_id: i32) -> Result<Option<Property>> {
    let sql = format!("SELECT {COLUMNS} FROM properties WHERE property_id = $1");
    let property = sqlx::query_as::<_, Property>(&sql)
        .bind(property_id)
        .fetch_optional(pool)
        .await?;
    Ok(property)
}

/// Fetches one listing with its dependents and owner.
#[tracing::instrument(skip(pool))]
pub async fn get(pool: &PgPool, property_id: i32) -> Result<Option<PropertyWithDetails>> {
    let Some(property) = get_basic(pool, property_id).await? else {
        return Ok(None);
    };

    let location = sqlx::query_as::<_, PropertyLocation>(
        "SELECT location_id, address, city, state, country, property_id
         FROM property_locations WHERE property_id = $1",
    )
    .bind(property_id)
    .fetch_optional(pool)
    .await?;

    let information = sqlx::query_as::<_, PropertyInformation>(
        "SELECT information_id, build_age, bathrooms, bedrooms, bq, property_id
         FROM property_informations WHERE property_id = $1",
    )
    .bind(property_id)
    .fetch_optional(pool)
    .await?;

    let owner_sql = format!("SELECT {PUBLIC_USER_COLUMNS} FROM users WHERE user_id = $1");
    let owner = sqlx::query_as::<_, PublicUser>(&owner_sql)
        .bind(property.user_id)
        .fetch_optional(pool)
        .await?;

    Ok(Some(PropertyWithDetails {
        property,
        location,
        information,
        owner,
    }))
}

/// Lists every listing with dependents and owners, newest first. Dependents
/// are fetched in bulk and stitched in memory rather than per row.
#[tracing::instrument(skip(pool))]
pub async fn list(pool: &PgPool) -> Result<Vec<PropertyWithDetails>> {
    let sql = format!("SELECT {COLUMNS} FROM properties ORDER BY created_at DESC");
    let properties = sqlx::query_as::<_, Property>(&sql).fetch_all(pool).await?;

    assemble(pool, properties, true).await
}

/// Lists one owner's listings with dependents (no owner join; the caller is
/// the owner or already knows who is).
#[tracing::instrument(skip(pool))]
pub async fn list_by_owner(pool: &PgPool, user_id: i32) -> Result<Vec<PropertyWithDetails>> {
    let sql =
        format!("SELECT {COLUMNS} FROM properties WHERE user_id = $1 ORDER BY created_at DESC");
    let properties = sqlx::query_as::<_, Property>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    assemble(pool, properties, false).await
}

async fn assemble(
    pool: &PgPool,
    properties: Vec<Property>,
    with_owner: bool,
) -> Result<Vec<PropertyWithDetails>> {
    if properties.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = properties.iter().map(|p| p.property_id).collect();

    let locations = sqlx::query_as::<_, PropertyLocation>(
        "SELECT location_id, address, city, state, country, property_id
         FROM property_locations WHERE property_id = ANY($1)",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;
    let mut locations: HashMap<i32, PropertyLocation> = locations
        .into_iter()
        .map(|row| (row.property_id, row))
        .collect();

    let informations = sqlx::query_as::<_, PropertyInformation>(
        "SELECT information_id, build_age, bathrooms, bedrooms, bq, property_id
         FROM property_informations WHERE property_id = ANY($1)",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;
    let mut informations: HashMap<i32, PropertyInformation> = informations
        .into_iter()
        .map(|row| (row.property_id, row))
        .collect();

    let mut owners: HashMap<i32, PublicUser> = HashMap::new();
    if with_owner {
        let owner_ids: Vec<i32> = properties.iter().map(|p| p.user_id).collect();
        let owner_sql = format!("SELECT {PUBLIC_USER_COLUMNS} FROM users WHERE user_id = ANY($1)");
        let rows = sqlx::query_as::<_, PublicUser>(&owner_sql)
            .bind(&owner_ids)
            .fetch_all(pool)
            .await?;
        owners = rows.into_iter().map(|row| (row.user_id, row)).collect();
    }

    Ok(properties
        .into_iter()
        .map(|property| {
            let location = locations.remove(&property.property_id);
            let information = informations.remove(&property.property_id);
            let owner = owners.get(&property.user_id).cloned();
            PropertyWithDetails {
                property,
                location,
                information,
                owner,
            }
        })
        .collect())
}
