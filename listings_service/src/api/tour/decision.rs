use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::AuthUser;
use haven_middleware::cache;
use model::auth::UserContext;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Accepts a tour request. Permitted for the booking user or an admin.
#[tracing::instrument(skip(context, user), fields(user_id = user.0.id))]
pub async fn accept_tour(
    State(context): State<ApiContext>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    decide(&context, &user.0, id, true).await
}

/// Rejects a tour request. Permitted for the booking user or an admin.
#[tracing::instrument(skip(context, user), fields(user_id = user.0.id))]
pub async fn reject_tour(
    State(context): State<ApiContext>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    decide(&context, &user.0, id, false).await
}

async fn decide(
    context: &ApiContext,
    user: &UserContext,
    tour_id: i32,
    accepted: bool,
) -> Result<Response, ApiError> {
    let existing = haven_db_client::tour::get_basic(&context.db, tour_id)
        .await?
        .ok_or(ApiError::NotFound("Tour not found"))?;

    if !user.is_permitted(existing.user_id) {
        return Err(ApiError::PermissionDenied);
    }

    let tour = haven_db_client::tour::set_accepted(&context.db, tour_id, accepted)
        .await?
        .ok_or(ApiError::NotFound("Tour not found"))?;

    cache::invalidate(
        &context.redis,
        &[&super::detail_cache_key(existing.user_id, tour_id)],
    )
    .await;

    Ok(GenericResponse::builder().data(&tour).send(StatusCode::OK))
}
