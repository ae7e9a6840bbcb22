//! Token issuance and validation for the listings backend.
//!
//! Access tokens carry the principal's identity and role; activation tokens
//! are single-purpose and signed with their own secret so one can never be
//! presented as the other.

pub mod claims;
pub mod error;
pub mod headers;
pub mod keys;

pub type Result<T, E = error::AuthError> = std::result::Result<T, E>;

pub use claims::{AccessClaims, ActivationClaims};
pub use keys::JwtKeys;
