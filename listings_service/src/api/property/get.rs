use axum::extract::{OriginalUri, Path, State};
use axum::response::Response;

use haven_middleware::cache;
use model::response::GenericResponse;

use crate::api::cached_json;
use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// One listing with details, read through the cache.
#[utoipa::path(
    get,
    path = "/api/v1/property/{id}",
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 200, description = "The listing with location, information and owner"),
        (status = 404, description = "Property not found")
    ),
    tag = "Property"
)]
#[tracing::instrument(skip(context))]
pub async fn get_property(
    State(context): State<ApiContext>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let key = cache::request_cache_key(&uri);
    if let Some(body) = cache::read(&context.redis, &key).await? {
        return Ok(cached_json(body));
    }

    let property = haven_db_client::property::get(&context.db, id)
        .await?
        .ok_or(ApiError::NotFound("Property not found"))?;

    let envelope = GenericResponse::builder().data(&property);
    let body = serde_json::to_string(&envelope)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
    cache::write(&context.redis, &key, &body).await?;

    Ok(cached_json(body))
}
