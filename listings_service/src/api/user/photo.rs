use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::AuthUser;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::constants::USER_IMAGES_FOLDER;

/// Uploads a profile photo to the CDN and stores its URL.
#[tracing::instrument(skip(context, user, multipart), fields(user_id = user.0.id))]
pub async fn upload_profile_photo(
    State(context): State<ApiContext>,
    user: AuthUser,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let image = read_image_field(multipart).await?;
    let (file_name, bytes) = image.ok_or_else(|| {
        ApiError::Validation("Please upload an image".to_string())
    })?;

    let url = context
        .cloudinary
        .upload_image(&file_name, bytes, USER_IMAGES_FOLDER)
        .await?;

    let user = haven_db_client::user::set_image(&context.db, user.0.id, &url)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    Ok(GenericResponse::builder()
        .msg("User updated successfully")
        .data(&user)
        .send(StatusCode::OK))
}

/// Pulls the single `image` part out of a multipart body.
pub(crate) async fn read_image_field(
    mut multipart: Multipart,
) -> Result<Option<(String, Vec<u8>)>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("image").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        return Ok(Some((file_name, bytes.to_vec())));
    }
    Ok(None)
}
