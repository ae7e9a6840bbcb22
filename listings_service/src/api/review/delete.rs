use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::AdminUser;
use haven_middleware::cache;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Deletes a review. Admin only.
#[tracing::instrument(skip(context, _admin))]
pub async fn delete_review(
    State(context): State<ApiContext>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    if !haven_db_client::review::delete(&context.db, id).await? {
        return Err(ApiError::NotFound("Review not found"));
    }

    cache::invalidate(
        &context.redis,
        &[&super::detail_cache_key(id), super::LIST_CACHE_KEY],
    )
    .await;

    Ok(GenericResponse::builder()
        .msg("Review deleted successfully")
        .send(StatusCode::OK))
}
