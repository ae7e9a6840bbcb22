use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use haven_auth::claims::decode_activation;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Activates the account named by the emailed token.
#[tracing::instrument(skip(context, token))]
pub async fn verify_email(
    State(context): State<ApiContext>,
    Path(token): Path<String>,
) -> Result<Response, ApiError> {
    let claims = decode_activation(&token, &context.activation_keys.0).map_err(|_| {
        ApiError::Validation("Invalid or expired activation link".to_string())
    })?;

    let user = haven_db_client::user::set_verified(&context.db, claims.sub)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    Ok(GenericResponse::builder()
        .msg("Email verified successfully")
        .data(&user)
        .send(StatusCode::OK))
}
