use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use haven_auth::claims::{encode_activation, ActivationClaims};
use model::response::GenericResponse;
use model::user::RegisterUserRequest;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::password::hash_password;

/// Registers a customer account and dispatches the verification email.
#[utoipa::path(
    post,
    path = "/api/v1/user",
    responses(
        (status = 200, description = "User registered, verification email sent"),
        (status = 400, description = "Invalid request or user already exists")
    ),
    tag = "User"
)]
#[tracing::instrument(skip(context, request), fields(username = %request.username))]
pub async fn register_user(
    State(context): State<ApiContext>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<Response, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    if haven_db_client::user::find_by_email(&context.db, &request.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Validation("User already exists".to_string()));
    }

    let password_hash = hash_password(&request.password)?;

    let user = haven_db_client::user::create(&context.db, &request, &password_hash)
        .await
        .map_err(|e| {
            if e.violates(haven_db_client::user::USERNAME_CONSTRAINT)
                || e.violates(haven_db_client::user::EMAIL_CONSTRAINT)
            {
                ApiError::Validation("User already exists".to_string())
            } else {
                e.into()
            }
        })?;

    let token = encode_activation(
        &ActivationClaims::new(user.user_id),
        &context.activation_keys.0,
    )
    .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;

    context
        .notifier
        .send_verification_email(&user.email, &token)
        .await
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;

    Ok(GenericResponse::builder()
        .msg("User registered successfully, please verify your email")
        .send(StatusCode::OK))
}
