use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use haven_auth::claims::{encode_access, AccessClaims};
use model::response::GenericResponse;
use model::user::LoginRequest;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::password::verify_password;

/// Exchanges user credentials for an access token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/user",
    responses(
        (status = 200, description = "Access token issued"),
        (status = 400, description = "Invalid password"),
        (status = 404, description = "Invalid username")
    ),
    tag = "Auth"
)]
#[tracing::instrument(skip(context, request))]
pub async fn login_user(
    State(context): State<ApiContext>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    let user = haven_db_client::user::find_by_username(&context.db, &request.username)
        .await?
        .ok_or(ApiError::NotFound("Invalid username"))?;

    if !verify_password(&request.password, &user.password) {
        return Err(ApiError::Validation("Invalid password".to_string()));
    }

    let claims = AccessClaims::new(
        user.user_id,
        &user.firstname,
        &user.lastname,
        &user.email,
        user.role,
    );
    let token = encode_access(&claims, &context.jwt_keys)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;

    Ok(GenericResponse::builder()
        .data(&json!({ "token": token }))
        .send(StatusCode::OK))
}

/// Exchanges admin credentials for an access token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/admin",
    responses(
        (status = 200, description = "Access token issued"),
        (status = 400, description = "Invalid password"),
        (status = 404, description = "Invalid username")
    ),
    tag = "Auth"
)]
#[tracing::instrument(skip(context, request))]
pub async fn login_admin(
    State(context): State<ApiContext>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    let admin = haven_db_client::admin::find_by_username(&context.db, &request.username)
        .await?
        .ok_or(ApiError::NotFound("Invalid username"))?;

    if !verify_password(&request.password, &admin.password) {
        return Err(ApiError::Validation("Invalid password".to_string()));
    }

    let claims = AccessClaims::new(
        admin.admin_id,
        &admin.firstname,
        &admin.lastname,
        &admin.email,
        admin.role,
    );
    let token = encode_access(&claims, &context.jwt_keys)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;

    Ok(GenericResponse::builder()
        .data(&json!({ "token": token }))
        .send(StatusCode::OK))
}
