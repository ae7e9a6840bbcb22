use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::{AdminUser, AuthUser};
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// The calling user's inquiries.
#[tracing::instrument(skip(context, user), fields(user_id = user.0.id))]
pub async fn get_user_inquiries(
    State(context): State<ApiContext>,
    user: AuthUser,
) -> Result<Response, ApiError> {
    let inquiries = haven_db_client::inquiry::list_by_user(&context.db, user.0.id).await?;
    if inquiries.is_empty() {
        return Err(ApiError::NotFound("No inquiry available"));
    }

    Ok(GenericResponse::builder()
        .data(&inquiries)
        .send(StatusCode::OK))
}

/// Any user's inquiries. Admin only.
#[tracing::instrument(skip(context, _admin))]
pub async fn view_user_inquiries(
    State(context): State<ApiContext>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let inquiries = haven_db_client::inquiry::list_by_user(&context.db, id).await?;
    if inquiries.is_empty() {
        return Err(ApiError::NotFound("No inquiry available"));
    }

    Ok(GenericResponse::builder()
        .data(&inquiries)
        .send(StatusCode::OK))
}
