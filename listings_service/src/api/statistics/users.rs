use axum::extract::{OriginalUri, State};
use axum::response::Response;
use serde_json::json;

use haven_middleware::auth::AdminUser;
use haven_middleware::cache;
use model::response::GenericResponse;

use crate::api::cached_json;
use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// User count and roster for the back office, read through the cache.
/// Admin only, so the plain path key is safe to share.
#[tracing::instrument(skip(context, _admin))]
pub async fn get_users(
    State(context): State<ApiContext>,
    _admin: AdminUser,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, ApiError> {
    let key = cache::request_cache_key(&uri);
    if let Some(body) = cache::read(&context.redis, &key).await? {
        return Ok(cached_json(body));
    }

    let (count, users) = haven_db_client::user::count_and_list(&context.db).await?;
    if users.is_empty() {
        return Err(ApiError::NotFound("No users available"));
    }

    let envelope = GenericResponse::builder().data(&json!({
        "count": count,
        "users": users,
    }));
    let body = serde_json::to_string(&envelope)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
    cache::write(&context.redis, &key, &body).await?;

    Ok(cached_json(body))
}
