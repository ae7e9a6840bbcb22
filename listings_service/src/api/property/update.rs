use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use haven_middleware::auth::AuthUser;
use haven_middleware::cache;
use model::property::UpdatePropertyRequest;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::constants::PROPERTY_IMAGES_FOLDER;

/// Updates a listing. Multipart like the create endpoint: a `payload` part
/// with the changed fields and optional replacement `images`. Permitted for
/// the owner or an admin only.
#[utoipa::path(
    put,
    path = "/api/v1/property/{id}",
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property updated successfully"),
        (status = 403, description = "Permission denied"),
        (status = 404, description = "Property not found")
    ),
    tag = "Property"
)]
#[tracing::instrument(skip(context, user, multipart), fields(user_id = user.0.id))]
pub async fn update_property(
    State(context): State<ApiContext>,
    user: AuthUser,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let AuthUser(user) = user;

    let mut request = UpdatePropertyRequest::default();
    let mut images: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "payload" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(e.to_string()))?;
                request = serde_json::from_slice(&bytes)
                    .map_err(|e| ApiError::Validation(e.to_string()))?;
            }
            "images" => {
                let file_name = field.file_name().unwrap_or("image").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(e.to_string()))?;
                images.push((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    request.validate().map_err(ApiError::Validation)?;

    let existing = haven_db_client::property::get_basic(&context.db, id)
        .await?
        .ok_or(ApiError::NotFound("Property not found"))?;

    if !user.is_permitted(existing.user_id) {
        return Err(ApiError::PermissionDenied);
    }

    let image_urls = if images.is_empty() {
        None
    } else {
        Some(
            context
                .cloudinary
                .upload_images(images, PROPERTY_IMAGES_FOLDER)
                .await?,
        )
    };

    let property =
        haven_db_client::property::update(&context.db, id, &request, image_urls.as_deref())
            .await?
            .ok_or(ApiError::NotFound("Property not found"))?;

    cache::invalidate(
        &context.redis,
        &[
            &super::detail_cache_key(id),
            super::LIST_CACHE_KEY,
            &super::owner_listings_cache_key(existing.user_id),
        ],
    )
    .await;

    Ok(GenericResponse::builder()
        .msg("Property updated successfully")
        .data(&property)
        .send(StatusCode::OK))
}
