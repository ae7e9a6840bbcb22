use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::AdminUser;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Every tour in the system. Admin only.
#[tracing::instrument(skip(context, _admin))]
pub async fn get_tours(
    State(context): State<ApiContext>,
    _admin: AdminUser,
) -> Result<Response, ApiError> {
    let tours = haven_db_client::tour::list(&context.db).await?;
    if tours.is_empty() {
        return Err(ApiError::NotFound("No tours available"));
    }

    Ok(GenericResponse::builder().data(&tours).send(StatusCode::OK))
}
