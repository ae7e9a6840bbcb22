use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use haven_middleware::auth::AdminUser;
use haven_middleware::cache;
use model::response::GenericResponse;
use model::tour::UpdateTourRequest;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Updates a tour's contact and scheduling fields. Admin only.
#[tracing::instrument(skip(context, _admin, request))]
pub async fn update_tour(
    State(context): State<ApiContext>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateTourRequest>,
) -> Result<Response, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    let tour = haven_db_client::tour::update(&context.db, id, &request)
        .await?
        .ok_or(ApiError::NotFound("Tour not found"))?;

    cache::invalidate(
        &context.redis,
        &[&super::detail_cache_key(tour.user_id, id)],
    )
    .await;

    Ok(GenericResponse::builder().data(&tour).send(StatusCode::OK))
}
