//! Back-office account persistence.

use model::user::{Admin, RegisterAdminRequest};
use sqlx::PgPool;

use crate::error::Result;

pub const USERNAME_CONSTRAINT: &str = "admins_username_key";
pub const EMAIL_CONSTRAINT: &str = "admins_email_key";

const COLUMNS: &str =
    "admin_id, username, firstname, lastname, email, password, image, role, created_at, updated_at";

#[tracing::instrument(skip(pool, request, password_hash), fields(username = %request.username))]
pub async fn create(
    pool: &PgPool,
    request: &RegisterAdminRequest,
    password_hash: &str,
) -> Result<Admin> {
    let sql = format!(
        "INSERT INTO admins (username, firstname, lastname, email, password, role)
         VALUES ($1, $2, $3, $4, $5, 'admin')
         RETURNING {COLUMNS}"
    );
    let admin = sqlx::query_as::<_, Admin>(&sql)
        .bind(&request.username)
        .bind(&request.firstname)
        .bind(&request.lastname)
        .bind(&request.email)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;
    Ok(admin)
}

#[tracing::instrument(skip(pool))]
pub async fn find_by_id(pool: &PgPool, admin_id: i32) -> Result<Option<Admin>> {
    let sql = format!("SELECT {COLUMNS} FROM admins WHERE admin_id = $1");
    let admin = sqlx::query_as::<_, Admin>(&sql)
        .bind(admin_id)
        .fetch_optional(pool)
        .await?;
    Ok(admin)
}

#[tracing::instrument(skip(pool))]
pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<Admin>> {
    let sql = format!("SELECT {COLUMNS} FROM admins WHERE username = $1");
    let admin = sqlx::query_as::<_, Admin>(&sql)
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(admin)
}

#[tracing::instrument(skip(pool, password_hash))]
pub async fn update_password(pool: &PgPool, admin_id: i32, password_hash: &str) -> Result<bool> {
    let result = sqlx::query(
        "UPDATE admins SET password = $2, updated_at = now() WHERE admin_id = $1",
    )
    .bind(admin_id)
    .bind(password_hash)
    .execute(pool)
    .await
    .map_err(crate::error::DbError::from)?;
    Ok(result.rows_affected() > 0)
}

#[tracing::instrument(skip(pool))]
pub async fn set_image(pool: &PgPool, admin_id: i32, image_url: &str) -> Result<Option<Admin>> {
    let sql = format!(
        "UPDATE admins SET image = $2, updated_at = now()
         WHERE admin_id = $1
         RETURNING {COLUMNS}"
    );
    let admin = sqlx::query_as::<_, Admin>(&sql)
        .bind(admin_id)
        .bind(image_url)
        .fetch_optional(pool)
        .await?;
    Ok(admin)
}
