use axum::extract::{OriginalUri, State};
use axum::response::Response;

use haven_middleware::cache;
use model::response::GenericResponse;

use crate::api::cached_json;
use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// All listings with details, read through the cache.
#[utoipa::path(
    get,
    path = "/api/v1/property",
    responses(
        (status = 200, description = "All listings with location, information and owner"),
        (status = 404, description = "No properties available")
    ),
    tag = "Property"
)]
#[tracing::instrument(skip(context))]
pub async fn get_properties(
    State(context): State<ApiContext>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, ApiError> {
    let key = cache::request_cache_key(&uri);
    if let Some(body) = cache::read(&context.redis, &key).await? {
        return Ok(cached_json(body));
    }

    let properties = haven_db_client::property::list(&context.db).await?;
    if properties.is_empty() {
        return Err(ApiError::NotFound("No properties available"));
    }

    let envelope = GenericResponse::builder().data(&properties);
    let body = serde_json::to_string(&envelope)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
    cache::write(&context.redis, &key, &body).await?;

    Ok(cached_json(body))
}
