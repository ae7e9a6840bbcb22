//! User account persistence.

use model::user::{PublicUser, RegisterUserRequest, UpdateProfileRequest, User};
use sqlx::PgPool;

use crate::error::Result;

pub const USERNAME_CONSTRAINT: &str = "users_username_key";
pub const EMAIL_CONSTRAINT: &str = "users_email_key";

pub(crate) const COLUMNS: &str = "user_id, username, firstname, lastname, email, phone, address, \
     about, password, is_verified, image, role, created_at, updated_at";

pub(crate) const PUBLIC_USER_COLUMNS: &str = "user_id, username, firstname, lastname, email, \
     phone, address, about, is_verified, image, role";

/// Inserts a new account with an already-hashed password.
#[tracing::instrument(skip(pool, request, password_hash), fields(username = %request.username))]
pub async fn create(
    pool: &PgPool,
    request: &RegisterUserRequest,
    password_hash: &str,
) -> Result<User> {
    let sql = format!(
        "INSERT INTO users (username, firstname, lastname, email, password, role)
         VALUES ($1, $2, $3, $4, $5, 'user')
         RETURNING {COLUMNS}"
    );
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(&request.username)
        .bind(&request.firstname)
        .bind(&request.lastname)
        .bind(&request.email)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;
    Ok(user)
}

#[tracing::instrument(skip(pool))]
pub async fn find_by_id(pool: &PgPool, user_id: i32) -> Result<Option<User>> {
    let sql = format!("SELECT {COLUMNS} FROM users WHERE user_id = $1");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

#[tracing::instrument(skip(pool))]
pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>> {
    let sql = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

#[tracing::instrument(skip(pool))]
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    let sql = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

#[tracing::instrument(skip(pool, request))]
pub async fn update_profile(
    pool: &PgPool,
    user_id: i32,
    request: &UpdateProfileRequest,
) -> Result<Option<User>> {
    let sql = format!(
        "UPDATE users SET
            firstname = COALESCE($2, firstname),
            lastname = COALESCE($3, lastname),
            phone = COALESCE($4, phone),
            address = COALESCE($5, address),
            about = COALESCE($6, about),
            updated_at = now()
         WHERE user_id = $1
         RETURNING {COLUMNS}"
    );
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(user_id)
        .bind(&request.firstname)
        .bind(&request.lastname)
        .bind(&request.phone)
        .bind(&request.address)
        .bind(&request.about)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

#[tracing::instrument(skip(pool, password_hash))]
pub async fn update_password(pool: &PgPool, user_id: i32, password_hash: &str) -> Result<bool> {
    let result = sqlx::query(
        "UPDATE users SET password = $2, updated_at = now() WHERE user_id = $1",
    )
    .bind(user_id)
    .bind(password_hash)
    .execute(pool)
    .await
    .map_err(crate::error::DbError::from)?;
    Ok(result.rows_affected() > 0)
}

#[tracing::instrument(skip(pool))]
pub async fn set_verified(pool: &PgPool, user_id: i32) -> Result<Option<User>> {
    let sql = format!(
        "UPDATE users SET is_verified = TRUE, updated_at = now()
         WHERE user_id = $1
         RETURNING {COLUMNS}"
    );
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

#[tracing::instrument(skip(pool))]
pub async fn set_image(pool: &PgPool, user_id: i32, image_url: &str) -> Result<Option<User>> {
    let sql = format!(
        "UPDATE users SET image = $2, updated_at = now()
         WHERE user_id = $1
         RETURNING {COLUMNS}"
    );
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(user_id)
        .bind(image_url)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Count plus full roster, for the back-office statistics screen.
#[tracing::instrument(skip(pool))]
pub async fn count_and_list(pool: &PgPool) -> Result<(i64, Vec<PublicUser>)> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .map_err(crate::error::DbError::from)?;

    let sql = format!("SELECT {PUBLIC_USER_COLUMNS} FROM users ORDER BY created_at DESC");
    let users = sqlx::query_as::<_, PublicUser>(&sql)
        .fetch_all(pool)
        .await?;

    Ok((count, users))
}
