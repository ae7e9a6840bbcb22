use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::AdminUser;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::api::user::photo::read_image_field;
use crate::constants::ADMIN_IMAGES_FOLDER;

/// Uploads an admin profile photo to the CDN and stores its URL.
#[tracing::instrument(skip(context, admin, multipart), fields(admin_id = admin.0.id))]
pub async fn upload_profile_photo(
    State(context): State<ApiContext>,
    admin: AdminUser,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let image = read_image_field(multipart).await?;
    let (file_name, bytes) = image.ok_or_else(|| {
        ApiError::Validation("Please upload an image".to_string())
    })?;

    let url = context
        .cloudinary
        .upload_image(&file_name, bytes, ADMIN_IMAGES_FOLDER)
        .await?;

    let admin = haven_db_client::admin::set_image(&context.db, admin.0.id, &url)
        .await?
        .ok_or(ApiError::NotFound("Admin not found"))?;

    Ok(GenericResponse::builder()
        .msg("Admin updated successfully")
        .data(&admin)
        .send(StatusCode::OK))
}
