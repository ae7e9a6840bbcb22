use axum::extract::{OriginalUri, Path, State};
use axum::response::Response;

use haven_middleware::auth::AuthUser;
use haven_middleware::cache;
use model::response::GenericResponse;

use crate::api::cached_json;
use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// One inquiry with its property. Only the inquiring user or an admin may
/// see it; the cached body is scoped to the principal.
#[tracing::instrument(skip(context, user), fields(user_id = user.0.id))]
pub async fn get_inquiry(
    State(context): State<ApiContext>,
    user: AuthUser,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let AuthUser(user) = user;

    let key = cache::scoped_cache_key(user.id, &uri);
    if let Some(body) = cache::read(&context.redis, &key).await? {
        return Ok(cached_json(body));
    }

    let inquiry = haven_db_client::inquiry::get(&context.db, id)
        .await?
        .ok_or(ApiError::NotFound("Inquiry not found"))?;

    if !user.is_permitted(inquiry.inquiry.user_id) {
        return Err(ApiError::PermissionDenied);
    }

    let envelope = GenericResponse::builder().data(&inquiry);
    let body = serde_json::to_string(&envelope)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
    cache::write(&context.redis, &key, &body).await?;

    Ok(cached_json(body))
}
