//! Review persistence.

use std::collections::HashMap;

use model::property::Property;
use model::review::{CreateReviewRequest, Review, ReviewWithProperty};
use sqlx::PgPool;

use crate::error::{DbError, Result};

const COLUMNS: &str =
    "review_id, name, email, rating, message, property_id, created_at, updated_at";

#[tracing::instrument(skip(pool, request), fields(property_id = request.property_id))]
pub async fn create(pool: &PgPool, request: &CreateReviewRequest) -> Result<Review> {
    let sql = format!(
        "INSERT INTO reviews (name, email, rating, message, property_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {COLUMNS}"
    );
    let review = sqlx::query_as::<_, Review>(&sql)
        .bind(&request.name)
        .bind(&request.email)
        .bind(request.rating)
        .bind(&request.message)
        .bind(request.property_id)
        .fetch_one(pool)
        .await?;
    Ok(review)
}

#[tracing::instrument(skip(pool))]
pub async fn get(pool: &PgPool, review_id: i32) -> Result<Option<ReviewWithProperty>> {
    let sql = format!("SELECT {COLUMNS} FROM reviews WHERE review_id = $1");
    let Some(review) = sqlx::query_as::<_, Review>(&sql)
        .bind(review_id)
        .fetch_optional(pool)
        .await?
    else {
        return Ok(None);
    };

    let property_sql = format!(
        "SELECT {} FROM properties WHERE property_id = $1",
        crate::property::COLUMNS
    );
    let property = sqlx::query_as::<_, Property>(&property_sql)
        .bind(review.property_id)
        .fetch_optional(pool)
        .await?;

    Ok(Some(ReviewWithProperty { review, property }))
}

#[tracing::instrument(skip(pool))]
pub async fn list(pool: &PgPool) -> Result<Vec<ReviewWithProperty>> {
    let sql = format!("SELECT {COLUMNS} FROM reviews ORDER BY created_at DESC");
    let reviews = sqlx::query_as::<_, Review>(&sql).fetch_all(pool).await?;

    if reviews.is_empty() {
        return Ok(Vec::new());
    }

    let property_ids: Vec<i32> = reviews.iter().map(|r| r.property_id).collect();
    let property_sql = format!(
        "SELECT {} FROM properties WHERE property_id = ANY($1)",
        crate::property::COLUMNS
    );
    let properties: HashMap<i32, Property> = sqlx::query_as::<_, Property>(&property_sql)
        .bind(&property_ids)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|p| (p.property_id, p))
        .collect();

    Ok(reviews
        .into_iter()
        .map(|review| {
            let property = properties.get(&review.property_id).cloned();
            ReviewWithProperty { review, property }
        })
        .collect())
}

#[tracing::instrument(skip(pool))]
pub async fn list_by_property(pool: &PgPool, property_id: i32) -> Result<Vec<Review>> {
    let sql =
        format!("SELECT {COLUMNS} FROM reviews WHERE property_id = $1 ORDER BY created_at DESC");
    let reviews = sqlx::query_as::<_, Review>(&sql)
        .bind(property_id)
        .fetch_all(pool)
        .await?;
    Ok(reviews)
}

#[tracing::instrument(skip(pool))]
pub async fn delete(pool: &PgPool, review_id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
        .bind(review_id)
        .execute(pool)
        .await
        .map_err(DbError::from)?;
    Ok(result.rows_affected() > 0)
}
