//! Tours and their booking payload. A tour is always created together with
//! its payment row.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::property::Property;
use crate::validate::{is_valid_email, require_non_empty};

#[derive(Serialize, Deserialize, FromRow, ToSchema, Debug, Clone, PartialEq)]
pub struct Tour {
    pub tour_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
    #[schema(value_type = String)]
    pub charges: Decimal,
    /// None until the property owner accepts or rejects the request.
    pub is_accepted: Option<bool>,
    pub user_id: i32,
    pub property_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TourWithProperty {
    #[serde(flatten)]
    pub tour: Tour,
    pub property: Option<Property>,
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct BookTourRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
    pub user_id: i32,
    pub property_id: i32,
}

impl BookTourRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_non_empty("name", &self.name)?;
        require_non_empty("phone", &self.phone)?;
        require_non_empty("time", &self.time)?;
        if !is_valid_email(&self.email) {
            return Err("email is not a valid address".to_string());
        }
        Ok(())
    }
}

#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateTourRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl UpdateTourRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }
        if let Some(email) = &self.email {
            if !is_valid_email(email) {
                return Err("email is not a valid address".to_string());
            }
        }
        if let Some(phone) = &self.phone {
            require_non_empty("phone", phone)?;
        }
        if let Some(time) = &self.time {
            require_non_empty("time", time)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookTourRequest {
        BookTourRequest {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "123".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            time: "10:00".to_string(),
            user_id: 7,
            property_id: 3,
        }
    }

    #[test]
    fn booking_payload_validates() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn booking_rejects_bad_email() {
        let mut req = request();
        req.email = "a@".to_string();
        assert!(req.validate().is_err());
    }
}
