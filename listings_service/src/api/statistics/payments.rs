use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::AdminUser;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Every payment with the paying user. Admin only.
#[tracing::instrument(skip(context, _admin))]
pub async fn get_payments(
    State(context): State<ApiContext>,
    _admin: AdminUser,
) -> Result<Response, ApiError> {
    let payments = haven_db_client::payment::list_with_users(&context.db).await?;
    if payments.is_empty() {
        return Err(ApiError::NotFound("No payments available"));
    }

    Ok(GenericResponse::builder()
        .data(&payments)
        .send(StatusCode::OK))
}
