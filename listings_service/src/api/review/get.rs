use axum::extract::{OriginalUri, Path, State};
use axum::response::Response;

use haven_middleware::cache;
use model::response::GenericResponse;

use crate::api::cached_json;
use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// One review with its listing, read through the cache.
#[tracing::instrument(skip(context))]
pub async fn get_review(
    State(context): State<ApiContext>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let key = cache::request_cache_key(&uri);
    if let Some(body) = cache::read(&context.redis, &key).await? {
        return Ok(cached_json(body));
    }

    let review = haven_db_client::review::get(&context.db, id)
        .await?
        .ok_or(ApiError::NotFound("Review not found"))?;

    let envelope = GenericResponse::builder().data(&review);
    let body = serde_json::to_string(&envelope)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
    cache::write(&context.redis, &key, &body).await?;

    Ok(cached_json(body))
}
