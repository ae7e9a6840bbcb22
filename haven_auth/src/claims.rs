use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use model::auth::{Role, UserContext};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::keys::JwtKeys;
use crate::Result;

/// Access tokens live for ten hours, matching the session length the
/// frontend was built around.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 36_000;

/// Activation and password-reset links stay valid for a day.
pub const ACTIVATION_TOKEN_TTL_SECS: i64 = 86_400;

/// Payload of an access token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccessClaims {
    /// Principal id (user_id or admin_id depending on role).
    pub sub: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub role: Role,
    pub exp: i64,
}

impl AccessClaims {
    pub fn new(sub: i32, firstname: &str, lastname: &str, email: &str, role: Role) -> Self {
        Self {
            sub,
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            email: email.to_string(),
            role,
            exp: Utc::now().timestamp() + ACCESS_TOKEN_TTL_SECS,
        }
    }
}

impl From<AccessClaims> for UserContext {
    fn from(claims: AccessClaims) -> Self {
        UserContext {
            id: claims.sub,
            firstname: claims.firstname,
            lastname: claims.lastname,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Payload of an email-activation token. Signed with the activation secret,
/// so an access token can never activate an account and vice versa.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActivationClaims {
    pub sub: i32,
    pub exp: i64,
}

impl ActivationClaims {
    pub fn new(user_id: i32) -> Self {
        Self {
            sub: user_id,
            exp: Utc::now().timestamp() + ACTIVATION_TOKEN_TTL_SECS,
        }
    }
}

pub fn encode_access(claims: &AccessClaims, keys: &JwtKeys) -> Result<String> {
    encode(&Header::new(Algorithm::HS256), claims, &keys.encoding)
        .map_err(AuthError::TokenCreation)
}

pub fn decode_access(token: &str, keys: &JwtKeys) -> Result<AccessClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let decoded = decode::<AccessClaims>(token, &keys.decoding, &validation)?;
    Ok(decoded.claims)
}

pub fn encode_activation(claims: &ActivationClaims, keys: &JwtKeys) -> Result<String> {
    encode(&Header::new(Algorithm::HS256), claims, &keys.encoding)
        .map_err(AuthError::TokenCreation)
}

pub fn decode_activation(token: &str, keys: &JwtKeys) -> Result<ActivationClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let decoded = decode::<ActivationClaims>(token, &keys.decoding, &validation)?;
    Ok(decoded.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> JwtKeys {
        JwtKeys::new("test-secret")
    }

    fn claims() -> AccessClaims {
        AccessClaims::new(7, "Ada", "Lovelace", "ada@example.com", Role::User)
    }

    #[test]
    fn access_token_round_trips() {
        let token = encode_access(&claims(), &keys()).unwrap();
        let decoded = decode_access(&token, &keys()).unwrap();
        assert_eq!(decoded, claims_with_exp(decoded.exp));
    }

    fn claims_with_exp(exp: i64) -> AccessClaims {
        AccessClaims { exp, ..claims() }
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut expired = claims();
        expired.exp = Utc::now().timestamp() - 120;
        let token = encode_access(&expired, &keys()).unwrap();
        assert!(matches!(
            decode_access(&token, &keys()),
            Err(AuthError::Expired)
        ));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = encode_access(&claims(), &keys()).unwrap();
        let other = JwtKeys::new("another-secret");
        assert!(matches!(
            decode_access(&token, &other),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn activation_token_round_trips() {
        let activation_keys = JwtKeys::new("activation-secret");
        let token = encode_activation(&ActivationClaims::new(3), &activation_keys).unwrap();
        assert_eq!(decode_activation(&token, &activation_keys).unwrap().sub, 3);
        // a token signed with the access secret must not activate anything
        let access_signed = encode_activation(&ActivationClaims::new(3), &keys()).unwrap();
        assert!(decode_activation(&access_signed, &activation_keys).is_err());
    }

    #[test]
    fn claims_convert_to_user_context() {
        let context: UserContext = claims().into();
        assert_eq!(context.id, 7);
        assert_eq!(context.role, Role::User);
    }
}
