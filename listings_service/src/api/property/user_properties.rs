use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::AuthUser;
use haven_middleware::cache;
use model::response::GenericResponse;

use crate::api::cached_json;
use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// The calling owner's listings. Not cached: the body is per-principal and
/// owners expect to see their own edits immediately.
#[tracing::instrument(skip(context, user), fields(user_id = user.0.id))]
pub async fn get_user_properties(
    State(context): State<ApiContext>,
    user: AuthUser,
) -> Result<Response, ApiError> {
    let properties = haven_db_client::property::list_by_owner(&context.db, user.0.id).await?;
    if properties.is_empty() {
        return Err(ApiError::NotFound("No property available"));
    }

    Ok(GenericResponse::builder()
        .data(&properties)
        .send(StatusCode::OK))
}

/// Any user's listings, read through the cache.
#[tracing::instrument(skip(context))]
pub async fn view_user_properties(
    State(context): State<ApiContext>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let key = cache::request_cache_key(&uri);
    if let Some(body) = cache::read(&context.redis, &key).await? {
        return Ok(cached_json(body));
    }

    let properties = haven_db_client::property::list_by_owner(&context.db, id).await?;
    if properties.is_empty() {
        return Err(ApiError::NotFound("No property available"));
    }

    let envelope = GenericResponse::builder().data(&properties);
    let body = serde_json::to_string(&envelope)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
    cache::write(&context.redis, &key, &body).await?;

    Ok(cached_json(body))
}
