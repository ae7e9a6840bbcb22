//! Inquiry persistence.

use std::collections::HashMap;

use model::inquiry::{Inquiry, InquiryRequest, InquiryWithProperty};
use model::property::Property;
use sqlx::PgPool;

use crate::error::{DbError, Result};

const COLUMNS: &str =
    "inquiry_id, name, email, phone, message, user_id, property_id, created_at, updated_at";

#[tracing::instrument(skip(pool, request), fields(property_id = request.property_id))]
pub async fn create(pool: &PgPool, request: &InquiryRequest) -> Result<Inquiry> {
    let sql = format!(
        "INSERT INTO inquiries (name, email, phone, message, user_id, property_id)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {COLUMNS}"
    );
    let inquiry = sqlx::query_as::<_, Inquiry>(&sql)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.message)
        .bind(request.user_id)
        .bind(request.property_id)
        .fetch_one(pool)
        .await?;
    Ok(inquiry)
}

#[tracing::instrument(skip(pool))]
pub async fn get_basic(pool: &PgPool, inquiry_id: i32) -> Result<Option<Inquiry>> {
    let sql = format!("SELECT {COLUMNS} FROM inquiries WHERE inquiry_id = $1");
    let inquiry = sqlx::query_as::<_, Inquiry>(&sql)
        .bind(inquiry_id)
        .fetch_optional(pool)
        .await?;
    Ok(inquiry)
}

#[tracing::instrument(skip(pool))]
pub async fn get(pool: &PgPool, inquiry_id: i32) -> Result<Option<InquiryWithProperty>> {
    let Some(inquiry) = get_basic(pool, inquiry_id).await? else {
        return Ok(None);
    };

    let sql = format!(
        "SELECT {} FROM properties WHERE property_id = $1",
        crate::property::COLUMNS
    );
    let property = sqlx::query_as::<_, Property>(&sql)
        .bind(inquiry.property_id)
        .fetch_optional(pool)
        .await?;

    Ok(Some(InquiryWithProperty { inquiry, property }))
}

#[tracing::instrument(skip(pool))]
pub async fn list(pool: &PgPool) -> Result<Vec<InquiryWithProperty>> {
    let sql = format!("SELECT {COLUMNS} FROM inquiries ORDER BY created_at DESC");
    let inquiries = sqlx::query_as::<_, Inquiry>(&sql).fetch_all(pool).await?;
    attach_properties(pool, inquiries).await
}

#[tracing::instrument(skip(pool))]
pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<InquiryWithProperty>> {
    let sql =
        format!("SELECT {COLUMNS} FROM inquiries WHERE user_id = $1 ORDER BY created_at DESC");
    let inquiries = sqlx::query_as::<_, Inquiry>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;
    attach_properties(pool, inquiries).await
}

#[tracing::instrument(skip(pool, request))]
pub async fn update(
    pool: &PgPool,
    inquiry_id: i32,
    request: &InquiryRequest,
) -> Result<Option<Inquiry>> {
    let sql = format!(
        "UPDATE inquiries SET
            name = $2, email = $3, phone = $4, message = $5, updated_at = now()
         WHERE inquiry_id = $1
         RETURNING {COLUMNS}"
    );
    let inquiry = sqlx::query_as::<_, Inquiry>(&sql)
        .bind(inquiry_id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.message)
        .fetch_optional(pool)
        .await?;
    Ok(inquiry)
}

#[tracing::instrument(skip(pool))]
pub async fn delete(pool: &PgPool, inquiry_id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM inquiries WHERE inquiry_id = $1")
        .bind(inquiry_id)
        .execute(pool)
        .await
        .map_err(DbError::from)?;
    Ok(result.rows_affected() > 0)
}

async fn attach_properties(
    pool: &PgPool,
    inquiries: Vec<Inquiry>,
) -> Result<Vec<InquiryWithProperty>> {
    if inquiries.is_empty() {
        return Ok(Vec::new());
    }

    let property_ids: Vec<i32> = inquiries.iter().map(|i| i.property_id).collect();
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

    Ok(inquiries
        .into_iter()
        .map(|inquiry| {
            let property = properties.get(&inquiry.property_id).cloned();
            InquiryWithProperty { inquiry, property }
        })
        .collect())
}
