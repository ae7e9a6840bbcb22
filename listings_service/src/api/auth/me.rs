use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::json;

use haven_middleware::auth::{AdminUser, AuthUser};
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// The logged-in user's profile with their listings, tours and inquiries.
#[tracing::instrument(skip(context, user), fields(user_id = user.0.id))]
pub async fn logged_user(
    State(context): State<ApiContext>,
    user: AuthUser,
) -> Result<Response, ApiError> {
    let user_id = user.0.id;

    let user = haven_db_client::user::find_by_id(&context.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    let properties = haven_db_client::property::list_by_owner(&context.db, user_id).await?;
    let tours = haven_db_client::tour::list_by_user(&context.db, user_id).await?;
    let inquiries = haven_db_client::inquiry::list_by_user(&context.db, user_id).await?;

    Ok(GenericResponse::builder()
        .data(&json!({
            "user": user,
            "properties": properties,
            "tours": tours,
            "inquiries": inquiries,
        }))
        .send(StatusCode::OK))
}

/// The logged-in admin's profile.
#[tracing::instrument(skip(context, admin), fields(admin_id = admin.0.id))]
pub async fn logged_admin(
    State(context): State<ApiContext>,
    admin: AdminUser,
) -> Result<Response, ApiError> {
    let admin = haven_db_client::admin::find_by_id(&context.db, admin.0.id)
        .await?
        .ok_or(ApiError::NotFound("Admin not found"))?;

    Ok(GenericResponse::builder()
        .data(&admin)
        .send(StatusCode::OK))
}
