use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::property::Property;
use crate::validate::{is_valid_email, require_non_empty};

#[derive(Serialize, Deserialize, FromRow, ToSchema, Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub inquiry_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub user_id: i32,
    pub property_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct InquiryWithProperty {
    #[serde(flatten)]
    pub inquiry: Inquiry,
    pub property: Option<Property>,
}

/// Create and update share the same full-body payload.
#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct InquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub user_id: i32,
    pub property_id: i32,
}

impl InquiryRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_non_empty("name", &self.name)?;
        require_non_empty("phone", &self.phone)?;
        require_non_empty("message", &self.message)?;
        if !is_valid_email(&self.email) {
            return Err("email is not a valid address".to_string());
        }
        Ok(())
    }
}
