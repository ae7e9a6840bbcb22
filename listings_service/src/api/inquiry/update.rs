use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use haven_middleware::auth::AuthUser;
use haven_middleware::cache;
use model::inquiry::InquiryRequest;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Rewrites an inquiry's contact fields and message. Permitted for the
/// inquiring user or an admin.
#[tracing::instrument(skip(context, user, request), fields(user_id = user.0.id))]
pub async fn update_inquiry(
    State(context): State<ApiContext>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(request): Json<InquiryRequest>,
) -> Result<Response, ApiError> {
    let AuthUser(user) = user;
    request.validate().map_err(ApiError::Validation)?;

    let existing = haven_db_client::inquiry::get_basic(&context.db, id)
        .await?
        .ok_or(ApiError::NotFound("Inquiry not found"))?;

    if !user.is_permitted(existing.user_id) {
        return Err(ApiError::PermissionDenied);
    }

    let inquiry = haven_db_client::inquiry::update(&context.db, id, &request)
        .await?
        .ok_or(ApiError::NotFound("Inquiry not found"))?;

    cache::invalidate(
        &context.redis,
        &[&super::detail_cache_key(existing.user_id, id)],
    )
    .await;

    Ok(GenericResponse::builder()
        .data(&inquiry)
        .send(StatusCode::OK))
}
