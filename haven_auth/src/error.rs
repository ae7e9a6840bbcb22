use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// No token was found on the request.
    #[error("missing access token")]
    MissingToken,
    /// The token failed signature or structural validation.
    #[error("invalid token")]
    InvalidToken,
    /// The token is past its expiry.
    #[error("token expired")]
    Expired,
    /// Signing a new token failed.
    #[error("unable to create token: {0}")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::InvalidToken,
        }
    }
}
