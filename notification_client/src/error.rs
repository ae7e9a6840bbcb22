use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification service returned {status}")]
    RequestFailed { status: reqwest::StatusCode },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
