use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use haven_auth::claims::{encode_access, AccessClaims};
use model::response::GenericResponse;
use model::user::RegisterAdminRequest;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::password::hash_password;

/// Registers a back-office account and returns an access token.
#[tracing::instrument(skip(context, request), fields(username = %request.username))]
pub async fn register_admin(
    State(context): State<ApiContext>,
    Json(request): Json<RegisterAdminRequest>,
) -> Result<Response, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    if haven_db_client::admin::find_by_username(&context.db, &request.username)
        .await?
        .is_some()
    {
        return Err(ApiError::Validation("Admin already exists".to_string()));
    }

    let password_hash = hash_password(&request.password)?;

    let admin = haven_db_client::admin::create(&context.db, &request, &password_hash)
        .await
        .map_err(|e| {
            if e.violates(haven_db_client::admin::USERNAME_CONSTRAINT)
                || e.violates(haven_db_client::admin::EMAIL_CONSTRAINT)
            {
                ApiError::Validation("Admin already exists".to_string())
            } else {
                e.into()
            }
        })?;

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
        .send(StatusCode::CREATED))
}
