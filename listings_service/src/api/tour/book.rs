use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use haven_db_client::{tour, DbError};
use haven_middleware::error_handler::error_handler;
use model::response::GenericResponse;
use model::tour::BookTourRequest;

use crate::api::context::ApiContext;
use crate::constants::TOUR_BOOKING_FEE;

#[derive(Debug, Error)]
pub enum BookTourErr {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbError),
}

impl IntoResponse for BookTourErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            BookTourErr::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            BookTourErr::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "BookTourErr",
                "Internal server error"
            );
        }

        error_handler(&self.to_string(), status_code)
    }
}

/// Books a tour. The tour row and its payment row (amount = the flat
/// booking fee) are written in one transaction; a failure on either side
/// leaves nothing behind.
#[utoipa::path(
    post,
    path = "/api/v1/tour",
    responses(
        (status = 201, description = "Tour booked successfully"),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tour"
)]
#[tracing::instrument(skip(context, request), fields(property_id = request.property_id))]
pub async fn book_tour(
    State(context): State<ApiContext>,
    Json(request): Json<BookTourRequest>,
) -> Result<Response, BookTourErr> {
    request.validate().map_err(BookTourErr::InvalidRequest)?;

    let (new_tour, payment) = tour::book(&context.db, &request, TOUR_BOOKING_FEE).await?;

    tracing::info!(
        tour_id = new_tour.tour_id,
        payment_id = payment.payment_id,
        "tour booked"
    );

    Ok(GenericResponse::builder()
        .msg("Tour booked successfully")
        .data(&new_tour)
        .send(StatusCode::CREATED))
}
