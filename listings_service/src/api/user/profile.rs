use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use haven_middleware::auth::AuthUser;
use model::response::GenericResponse;
use model::user::UpdateProfileRequest;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Updates the calling user's profile fields.
#[tracing::instrument(skip(context, user, request), fields(user_id = user.0.id))]
pub async fn update_profile(
    State(context): State<ApiContext>,
    user: AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Response, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    let user = haven_db_client::user::update_profile(&context.db, user.0.id, &request)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    Ok(GenericResponse::builder()
        .msg("Profile updated successfully")
        .data(&user)
        .send(StatusCode::OK))
}
