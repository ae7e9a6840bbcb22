use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::AdminUser;
use haven_middleware::cache;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Deletes a tour; its payment cascades with it. Admin only.
#[tracing::instrument(skip(context, _admin))]
pub async fn delete_tour(
    State(context): State<ApiContext>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let existing = haven_db_client::tour::get_basic(&context.db, id)
        .await?
        .ok_or(ApiError::NotFound("Tour not found"))?;

    if !haven_db_client::tour::delete(&context.db, id).await? {
        return Err(ApiError::NotFound("Tour not found"));
    }

    cache::invalidate(
        &context.redis,
        &[&super::detail_cache_key(existing.user_id, id)],
    )
    .await;

    Ok(GenericResponse::builder()
        .msg("Tour deleted successfully")
        .send(StatusCode::OK))
}
