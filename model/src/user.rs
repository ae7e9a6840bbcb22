//! Users and admins, plus the account-related request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::auth::Role;
use crate::validate::{is_valid_email, require_non_empty};

const MIN_PASSWORD_LEN: usize = 6;

/// A customer account row. The password hash never serializes.
#[derive(Serialize, Deserialize, FromRow, ToSchema, Debug, Clone)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub about: Option<String>,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub is_verified: bool,
    pub image: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user row as exposed to other principals: no password column selected.
#[derive(Serialize, Deserialize, FromRow, ToSchema, Debug, Clone, PartialEq)]
pub struct PublicUser {
    pub user_id: i32,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub about: Option<String>,
    pub is_verified: bool,
    pub image: Option<String>,
    pub role: Role,
}

/// A back-office account row.
#[derive(Serialize, Deserialize, FromRow, ToSchema, Debug, Clone)]
pub struct Admin {
    pub admin_id: i32,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub image: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct RegisterUserRequest {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_non_empty("firstname", &self.firstname)?;
        require_non_empty("lastname", &self.lastname)?;
        require_non_empty("username", &self.username)?;
        if !is_valid_email(&self.email) {
            return Err("email is not a valid address".to_string());
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        Ok(())
    }
}

/// Admin registration carries the same fields and rules as user
/// registration; the role is assigned server-side, never taken from input.
pub type RegisterAdminRequest = RegisterUserRequest;

#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_non_empty("username", &self.username)?;
        require_non_empty("password", &self.password)?;
        Ok(())
    }
}

#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateProfileRequest {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub about: Option<String>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(firstname) = &self.firstname {
            require_non_empty("firstname", firstname)?;
        }
        if let Some(lastname) = &self.lastname {
            require_non_empty("lastname", lastname)?;
        }
        Ok(())
    }
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

impl ChangePasswordRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.new_password.len() < MIN_PASSWORD_LEN {
            return Err(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

impl ForgotPasswordRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !is_valid_email(&self.email) {
            return Err("email is not a valid address".to_string());
        }
        Ok(())
    }
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct ResetPasswordRequest {
    pub password: String,
}

impl ResetPasswordRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterUserRequest {
        RegisterUserRequest {
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret-password".to_string(),
        }
    }

    #[test]
    fn registration_enforces_password_length() {
        let mut req = register_request();
        req.password = "short".to_string();
        assert!(req.validate().is_err());
        assert!(register_request().validate().is_ok());
    }

    #[test]
    fn registration_rejects_bad_email() {
        let mut req = register_request();
        req.email = "nope".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn password_hash_never_serializes() {
        let user = User {
            user_id: 1,
            username: "ada".to_string(),
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            address: None,
            about: None,
            password: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            is_verified: true,
            image: None,
            role: Role::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password"));
    }
}
