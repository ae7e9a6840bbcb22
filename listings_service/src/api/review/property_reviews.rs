use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Every review left on one listing.
#[tracing::instrument(skip(context))]
pub async fn get_property_reviews(
    State(context): State<ApiContext>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let reviews = haven_db_client::review::list_by_property(&context.db, id).await?;
    if reviews.is_empty() {
        return Err(ApiError::NotFound("No reviews available"));
    }

    Ok(GenericResponse::builder()
        .data(&reviews)
        .send(StatusCode::OK))
}
