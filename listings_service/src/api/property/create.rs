use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use haven_db_client::{property, DbError};
use haven_middleware::auth::AuthUser;
use haven_middleware::{cache, error_handler::error_handler};
use model::property::CreatePropertyRequest;
use model::response::GenericResponse;

use crate::api::context::ApiContext;
use crate::constants::{
    MAX_REFERENCE_ATTEMPTS, MIN_PROPERTY_IMAGES, PROPERTY_IMAGES_FOLDER, REFERENCE_DIGITS,
};
use crate::reference::generate_reference;

#[derive(Debug, Error)]
pub enum AddPropertyErr {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Property already added")]
    DuplicateListing,
    #[error("could not allocate a unique reference, please retry")]
    ReferenceExhausted,
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbError),
    #[error("An unknown error has occurred")]
    InternalError(#[from] anyhow::Error),
}

impl IntoResponse for AddPropertyErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AddPropertyErr::InvalidRequest(_) | AddPropertyErr::DuplicateListing => {
                StatusCode::BAD_REQUEST
            }
            AddPropertyErr::ReferenceExhausted => StatusCode::CONFLICT,
            AddPropertyErr::DatabaseError(_) | AddPropertyErr::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "AddPropertyErr",
                "Internal server error"
            );
        }

        error_handler(&self.to_string(), status_code)
    }
}

/// Creates a listing from a multipart request: a `payload` part carrying
/// the JSON fields and at least [`MIN_PROPERTY_IMAGES`] `images` parts.
/// Images go to the CDN first; the listing, its location and its
/// information rows are then written in one transaction, retrying with a
/// fresh reference code on a reference collision.
#[tracing::instrument(skip(context, user, multipart), fields(user_id = user.0.id))]
pub async fn add_property(
    State(context): State<ApiContext>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<Response, AddPropertyErr> {
    let AuthUser(user) = user;

    let mut payload: Option<CreatePropertyRequest> = None;
    let mut images: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AddPropertyErr::InvalidRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "payload" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AddPropertyErr::InvalidRequest(e.to_string()))?;
                let request = serde_json::from_slice(&bytes)
                    .map_err(|e| AddPropertyErr::InvalidRequest(e.to_string()))?;
                payload = Some(request);
            }
            "images" => {
                let file_name = field.file_name().unwrap_or("image").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AddPropertyErr::InvalidRequest(e.to_string()))?;
                images.push((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let request = payload
        .ok_or_else(|| AddPropertyErr::InvalidRequest("missing payload field".to_string()))?;
    request.validate().map_err(AddPropertyErr::InvalidRequest)?;

    if images.len() < MIN_PROPERTY_IMAGES {
        return Err(AddPropertyErr::InvalidRequest(
            "Please upload multiple images".to_string(),
        ));
    }

    let image_urls = context
        .cloudinary
        .upload_images(images, PROPERTY_IMAGES_FOLDER)
        .await?;

    let mut attempts = 0;
    let created = loop {
        attempts += 1;
        let reference = generate_reference(REFERENCE_DIGITS);

        match property::create(&context.db, user.id, &request, &image_urls, &reference).await {
            Ok(created) => break created,
            Err(e) if e.violates(property::REFERENCE_CONSTRAINT) => {
                if attempts >= MAX_REFERENCE_ATTEMPTS {
                    return Err(AddPropertyErr::ReferenceExhausted);
                }
                tracing::warn!(attempts, "reference collision, regenerating");
            }
            Err(e) if e.violates(property::DUPLICATE_LISTING_CONSTRAINT) => {
                return Err(AddPropertyErr::DuplicateListing);
            }
            Err(e) => return Err(e.into()),
        }
    };

    cache::invalidate(
        &context.redis,
        &[
            super::LIST_CACHE_KEY,
            &super::owner_listings_cache_key(user.id),
        ],
    )
    .await;

    Ok(GenericResponse::builder()
        .msg("Property added successfully")
        .data(&created)
        .send(StatusCode::CREATED))
}
