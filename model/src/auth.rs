//! Roles and the authenticated principal attached to each request.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of principal roles.
#[derive(Serialize, Deserialize, sqlx::Type, utoipa::ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Error for unrecognized role strings coming from outside the enum.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// The acting principal, decoded from the access token and attached to the
/// request as an extension by the verify middleware.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub role: Role,
}

impl UserContext {
    /// Ownership check applied before any mutating operation: the acting
    /// principal must own the resource or hold the admin role.
    pub fn is_permitted(&self, resource_owner_id: i32) -> bool {
        self.id == resource_owner_id || self.role == Role::Admin
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(id: i32, role: Role) -> UserContext {
        UserContext {
            id,
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn owner_is_permitted() {
        assert!(context(1, Role::User).is_permitted(1));
    }

    #[test]
    fn non_owner_user_is_denied() {
        assert!(!context(1, Role::User).is_permitted(2));
    }

    #[test]
    fn admin_is_permitted_on_any_resource() {
        assert!(context(1, Role::Admin).is_permitted(2));
    }

    #[test]
    fn role_round_trip() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(Role::User.to_string(), "user");
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}
