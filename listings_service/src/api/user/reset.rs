use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use chrono::{Duration, Utc};
use uuid::Uuid;

use model::response::GenericResponse;
use model::user::{ForgotPasswordRequest, ResetPasswordRequest};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::password::hash_password;

/// Reset links stay valid for a day.
const RESET_TOKEN_TTL_HOURS: i64 = 24;

/// Issues a single-use reset token and mails it to the account's address.
#[tracing::instrument(skip(context, request))]
pub async fn forgot_password(
    State(context): State<ApiContext>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<Response, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    let user = haven_db_client::user::find_by_email(&context.db, &request.email)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    let token = Uuid::new_v4();
    let expires_at = Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS);
    haven_db_client::reset_token::create(&context.db, user.user_id, token, expires_at).await?;

    context
        .notifier
        .send_reset_email(&user.email, &token.to_string())
        .await
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;

    Ok(GenericResponse::builder()
        .msg("Password reset link sent")
        .send(StatusCode::OK))
}

/// Burns the reset token and stores the new password.
#[tracing::instrument(skip(context, token, request))]
pub async fn reset_password(
    State(context): State<ApiContext>,
    Path(token): Path<String>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Response, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    let token: Uuid = token
        .parse()
        .map_err(|_| ApiError::Validation("Invalid or expired reset token".to_string()))?;

    let user_id = haven_db_client::reset_token::consume(&context.db, token)
        .await?
        .ok_or_else(|| ApiError::Validation("Invalid or expired reset token".to_string()))?;

    let password_hash = hash_password(&request.password)?;
    haven_db_client::user::update_password(&context.db, user_id, &password_hash).await?;

    Ok(GenericResponse::builder()
        .msg("Password reset successfully")
        .send(StatusCode::OK))
}
