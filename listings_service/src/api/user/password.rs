use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use haven_middleware::auth::AuthUser;
use model::response::GenericResponse;
use model::user::ChangePasswordRequest;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::password::{hash_password, verify_password};

/// Changes the calling user's password after checking the current one.
#[tracing::instrument(skip(context, user, request), fields(user_id = user.0.id))]
pub async fn change_password(
    State(context): State<ApiContext>,
    user: AuthUser,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Response, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    let stored = haven_db_client::user::find_by_id(&context.db, user.0.id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    if !verify_password(&request.old_password, &stored.password) {
        return Err(ApiError::Validation("Invalid password".to_string()));
    }

    let password_hash = hash_password(&request.new_password)?;
    haven_db_client::user::update_password(&context.db, user.0.id, &password_hash).await?;

    Ok(GenericResponse::builder()
        .msg("Password changed successfully")
        .send(StatusCode::OK))
}
