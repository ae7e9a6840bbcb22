use std::collections::HashMap;

use model::property::Property;
use model::tour::{Tour, TourWithProperty};
use sqlx::PgPool;

use super::COLUMNS;
use crate::error::Result;

#[tracing::instrument(skip(pool))]
pub async fn get_basic(pool: &PgPool, tour_id: i32) -> Result<Option<Tour>> {
    let sql = format!("SELECT {COLUMNS} FROM tours WHERE tour_id = $1");
    let tour = sqlx::query_as::<_, Tour>(&sql)
        .bind(tour_id)
        .fetch_optional(pool)
        .await?;
    Ok(tour)
}

#[tracing::instrument(skip(pool))]
pub async fn get(pool: &PgPool, tour_id: i32) -> Result<Option<TourWithProperty>> {
    let Some(tour) = get_basic(pool, tour_id).await? else {
        return Ok(None);
    };

    let sql = format!(
        "SELECT {} FROM properties WHERE property_id = $1",
        crate::property::COLUMNS
    );
    let property = sqlx::query_as::<_, Property>(&sql)
        .bind(tour.property_id)
        .fetch_optional(pool)
        .await?;

    Ok(Some(TourWithProperty { tour, property }))
}

#[tracing::instrument(skip(pool))]
pub async fn list(pool: &PgPool) -> Result<Vec<TourWithProperty>> {
    let sql = format!("SELECT {COLUMNS} FROM tours ORDER BY created_at DESC");
    let tours = sqlx::query_as::<_, Tour>(&sql).fetch_all(pool).await?;
    attach_properties(pool, tours).await
}

#[tracing::instrument(skip(pool))]
pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<TourWithProperty>> {
    let sql = format!("SELECT {COLUMNS} FROM tours WHERE user_id = $1 ORDER BY created_at DESC");
    let tours = sqlx::query_as::<_, Tour>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;
    attach_properties(pool, tours).await
}

async fn attach_properties(pool: &PgPool, tours: Vec<Tour>) -> Result<Vec<TourWithProperty>> {
    if tours.is_empty() {
        return Ok(Vec::new());
    }

    let property_ids: Vec<i32> = tours.iter().map(|t| t.property_id).collect();
    let sql = format!(
        "SELECT {} FROM properties WHERE property_id = ANY($1)",
        crate::property::COLUMNS
    );
    let properties: HashMap<i32, Property> = sqlx::query_as::<_, Property>(&sql)
        .bind(&property_ids)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|p| (p.property_id, p))
        .collect();

    Ok(tours
        .into_iter()
        .map(|tour| {
            let property = properties.get(&tour.property_id).cloned();
            TourWithProperty { tour, property }
        })
        .collect())
}
