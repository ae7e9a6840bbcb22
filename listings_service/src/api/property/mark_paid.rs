use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use haven_middleware::auth::AdminUser;
use haven_middleware::cache;
use model::property::MarkPaidRequest;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Flags a listing for the front-page slider. Admin only.
#[tracing::instrument(skip(context, _admin))]
pub async fn mark_paid_property(
    State(context): State<ApiContext>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(request): Json<MarkPaidRequest>,
) -> Result<Response, ApiError> {
    let property = haven_db_client::property::mark_paid(&context.db, id, request.is_paid)
        .await?
        .ok_or(ApiError::NotFound("Property not found"))?;

    cache::invalidate(
        &context.redis,
        &[
            &super::detail_cache_key(id),
            super::LIST_CACHE_KEY,
            &super::owner_listings_cache_key(property.user_id),
        ],
    )
    .await;

    Ok(GenericResponse::builder()
        .msg("Property updated")
        .data(&property)
        .send(StatusCode::OK))
}
