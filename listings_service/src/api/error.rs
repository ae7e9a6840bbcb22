//! Shared error type for the routine handlers. The composite-write
//! handlers (property create, tour booking) carry their own enums because
//! their conflict mapping is domain-specific.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use haven_db_client::DbError;
use haven_middleware::error_handler::error_handler;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input, caught before any write.
    #[error("{0}")]
    Validation(String),
    /// The requested entity has no matching row.
    #[error("{0}")]
    NotFound(&'static str),
    /// Ownership/role check failed; zero writes performed.
    #[error("Permission denied")]
    PermissionDenied,
    /// Uniqueness violation surfaced by the store.
    #[error("{0}")]
    Conflict(String),
    /// Anything transient or unexpected; details stay in the logs.
    #[error("An unknown error has occurred")]
    Internal(#[from] anyhow::Error),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(constraint) => {
                ApiError::Conflict(format!("duplicate value violates {constraint}"))
            }
            DbError::Db(e) => ApiError::Internal(anyhow::Error::new(e)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PermissionDenied => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(error = ?self, "internal server error");
        }

        error_handler(&self.to_string(), status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_the_error_taxonomy() {
        let cases = [
            (
                ApiError::Validation("bad".to_string()).into_response(),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::NotFound("Property not found").into_response(),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::PermissionDenied.into_response(),
                StatusCode::FORBIDDEN,
            ),
            (
                ApiError::Conflict("duplicate".to_string()).into_response(),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::Internal(anyhow::anyhow!("boom")).into_response(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (response, expected) in cases {
            assert_eq!(response.status(), expected);
        }
    }
}
