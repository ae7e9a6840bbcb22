use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::property::Property;
use crate::validate::{is_valid_email, require_non_empty};

#[derive(Serialize, Deserialize, FromRow, ToSchema, Debug, Clone, PartialEq)]
pub struct Review {
    pub review_id: i32,
    pub name: String,
    pub email: String,
    pub rating: i32,
    pub message: String,
    pub property_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ReviewWithProperty {
    #[serde(flatten)]
    pub review: Review,
    pub property: Option<Property>,
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct CreateReviewRequest {
    pub name: String,
    pub email: String,
    pub rating: i32,
    pub message: String,
    pub property_id: i32,
}

impl CreateReviewRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_non_empty("name", &self.name)?;
        require_non_empty("message", &self.message)?;
        if !is_valid_email(&self.email) {
            return Err("email is not a valid address".to_string());
        }
        if !(1..=5).contains(&self.rating) {
            return Err("rating must be between 1 and 5".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds_are_enforced() {
        let mut req = CreateReviewRequest {
            name: "B".to_string(),
            email: "b@x.com".to_string(),
            rating: 5,
            message: "Great agent, smooth viewing".to_string(),
            property_id: 1,
        };
        assert!(req.validate().is_ok());
        req.rating = 0;
        assert!(req.validate().is_err());
        req.rating = 6;
        assert!(req.validate().is_err());
    }
}
