use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::AdminUser;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Every inquiry in the system. Admin only.
#[tracing::instrument(skip(context, _admin))]
pub async fn get_inquiries(
    State(context): State<ApiContext>,
    _admin: AdminUser,
) -> Result<Response, ApiError> {
    let inquiries = haven_db_client::inquiry::list(&context.db).await?;
    if inquiries.is_empty() {
        return Err(ApiError::NotFound("No inquiry available"));
    }

    Ok(GenericResponse::builder()
        .data(&inquiries)
        .send(StatusCode::OK))
}
