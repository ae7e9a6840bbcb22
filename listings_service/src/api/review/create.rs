use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use haven_middleware::cache;
use model::response::GenericResponse;
use model::review::CreateReviewRequest;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Records a review against a listing.
#[tracing::instrument(skip(context, request), fields(property_id = request.property_id))]
pub async fn add_review(
    State(context): State<ApiContext>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<Response, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    let property = haven_db_client::property::get_basic(&context.db, request.property_id)
        .await?
        .ok_or(ApiError::NotFound("Property not found"))?;

    let review = haven_db_client::review::create(&context.db, &request).await?;

    cache::invalidate(
        &context.redis,
        &[
            super::LIST_CACHE_KEY,
            &crate::api::property::detail_cache_key(property.property_id),
        ],
    )
    .await;

    Ok(GenericResponse::builder()
        .data(&review)
        .send(StatusCode::OK))
}
