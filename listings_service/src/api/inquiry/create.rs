use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use model::inquiry::InquiryRequest;
use model::response::GenericResponse;
use notification_client::InquiryNotice;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Records an inquiry and emails the property owner through the
/// notification service.
#[utoipa::path(
    post,
    path = "/api/v1/inquiry",
    responses(
        (status = 201, description = "Inquiry submitted successfully"),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "User or property not found")
    ),
    tag = "Inquiry"
)]
#[tracing::instrument(skip(context, request), fields(property_id = request.property_id))]
pub async fn make_inquiry(
    State(context): State<ApiContext>,
    Json(request): Json<InquiryRequest>,
) -> Result<Response, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    // Resolve both ends of the inquiry up front so a dangling id is a 404
    // rather than a foreign-key error out of the insert.
    let user = haven_db_client::user::find_by_id(&context.db, request.user_id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    let property = haven_db_client::property::get_basic(&context.db, request.property_id)
        .await?
        .ok_or(ApiError::NotFound("Property not found"))?;

    let inquiry = haven_db_client::inquiry::create(&context.db, &request).await?;

    context
        .notifier
        .send_inquiry_notice(&InquiryNotice {
            user_name: user.firstname,
            reference: property.reference,
            email: user.email,
            title: property.title,
            c_email: inquiry.email.clone(),
            message: inquiry.message.clone(),
            phone: inquiry.phone.clone(),
            customer_name: inquiry.name.clone(),
        })
        .await
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;

    Ok(GenericResponse::builder()
        .msg("Inquiry submitted successfully")
        .send(StatusCode::CREATED))
}
