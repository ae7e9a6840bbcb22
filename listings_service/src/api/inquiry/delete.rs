use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::AuthUser;
use haven_middleware::cache;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Deletes an inquiry. Permitted for the inquiring user or an admin.
#[tracing::instrument(skip(context, user), fields(user_id = user.0.id))]
pub async fn delete_inquiry(
    State(context): State<ApiContext>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let AuthUser(user) = user;

    let existing = haven_db_client::inquiry::get_basic(&context.db, id)
        .await?
        .ok_or(ApiError::NotFound("Inquiry not found"))?;

    if !user.is_permitted(existing.user_id) {
        return Err(ApiError::PermissionDenied);
    }

    if !haven_db_client::inquiry::delete(&context.db, id).await? {
        return Err(ApiError::NotFound("Inquiry not found"));
    }

    cache::invalidate(
        &context.redis,
        &[&super::detail_cache_key(existing.user_id, id)],
    )
    .await;

    Ok(GenericResponse::builder()
        .msg("Inquiry deleted successfully")
        .send(StatusCode::OK))
}
