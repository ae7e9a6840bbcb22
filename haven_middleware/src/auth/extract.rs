//! Request guards. Handlers opt into authentication by taking [`AuthUser`]
//! (any valid principal) or [`AdminUser`] (admin role required) as an
//! argument; public handlers simply don't.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::Response,
};

use haven_auth::error::AuthError;
use haven_auth::JwtKeys;
use model::auth::UserContext;

use crate::error_handler::error_handler;

/// A verified principal of any role.
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserContext);

/// A verified principal holding the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub UserContext);

fn decode_principal(parts: &Parts, keys: &JwtKeys) -> Result<UserContext, Response> {
    let token = haven_auth::headers::extract_access_token_from_request_headers(&parts.headers)
        .map_err(|e| {
            tracing::trace!(error = ?e, "unable to get access token");
            error_handler("unauthorized", StatusCode::UNAUTHORIZED)
        })?;

    let claims = haven_auth::claims::decode_access(&token, keys).map_err(|e| match e {
        AuthError::Expired => error_handler("token expired", StatusCode::UNAUTHORIZED),
        _ => {
            tracing::trace!(error = ?e, "unable to decode access token");
            error_handler("unauthorized", StatusCode::UNAUTHORIZED)
        }
    })?;

    Ok(claims.into())
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        decode_principal(parts, &keys).map(AuthUser)
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let user = decode_principal(parts, &keys)?;

        if !user.is_admin() {
            tracing::trace!(user_id = user.id, "role guard rejected request");
            return Err(error_handler("Permission denied", StatusCode::FORBIDDEN));
        }

        Ok(AdminUser(user))
    }
}
