use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::AdminUser;
use haven_middleware::cache;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Deletes a listing and, through the store's cascade, its location,
/// information, tours, inquiries and reviews. Admin only.
#[utoipa::path(
    delete,
    path = "/api/v1/property/{id}",
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property deleted successfully"),
        (status = 403, description = "Permission denied"),
        (status = 404, description = "Property not found")
    ),
    tag = "Property"
)]
#[tracing::instrument(skip(context, _admin))]
pub async fn delete_property(
    State(context): State<ApiContext>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let existing = haven_db_client::property::get_basic(&context.db, id)
        .await?
        .ok_or(ApiError::NotFound("Property not found"))?;

    if !haven_db_client::property::delete(&context.db, id).await? {
        return Err(ApiError::NotFound("Property not found"));
    }

    cache::invalidate(
        &context.redis,
        &[
            &super::detail_cache_key(id),
            super::LIST_CACHE_KEY,
            &super::owner_listings_cache_key(existing.user_id),
        ],
    )
    .await;

    Ok(GenericResponse::builder()
        .msg("Property deleted successfully")
        .send(StatusCode::OK))
}
