use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::{AdminUser, AuthUser};
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// The calling user's tours.
#[tracing::instrument(skip(context, user), fields(user_id = user.0.id))]
pub async fn get_user_tours(
    State(context): State<ApiContext>,
    user: AuthUser,
) -> Result<Response, ApiError> {
    let tours = haven_db_client::tour::list_by_user(&context.db, user.0.id).await?;
    if tours.is_empty() {
        return Err(ApiError::NotFound("No tour available"));
    }

    Ok(GenericResponse::builder().data(&tours).send(StatusCode::OK))
}

/// Any user's tours. Admin only.
#[tracing::instrument(skip(context, _admin))]
pub async fn view_user_tours(
    State(context): State<ApiContext>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let tours = haven_db_client::tour::list_by_user(&context.db, id).await?;
    if tours.is_empty() {
        return Err(ApiError::NotFound("No tour available"));
    }

    Ok(GenericResponse::builder().data(&tours).send(StatusCode::OK))
}
