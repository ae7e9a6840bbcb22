use axum::extract::{OriginalUri, State};
use axum::response::Response;

use haven_middleware::cache;
use model::response::GenericResponse;

use crate::api::cached_json;
use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// All reviews with their listings, read through the cache.
#[tracing::instrument(skip(context))]
pub async fn get_reviews(
    State(context): State<ApiContext>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, ApiError> {
    let key = cache::request_cache_key(&uri);
    if let Some(body) = cache::read(&context.redis, &key).await? {
        return Ok(cached_json(body));
    }

    let reviews = haven_db_client::review::list(&context.db).await?;
    if reviews.is_empty() {
        return Err(ApiError::NotFound("No reviews available"));
    }

    let envelope = GenericResponse::builder().data(&reviews);
    let body = serde_json::to_string(&envelope)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
    cache::write(&context.redis, &key, &body).await?;

    Ok(cached_json(body))
}
