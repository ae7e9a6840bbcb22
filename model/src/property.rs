//! Property aggregate: the listing itself plus its 1:1 location and
//! information rows, created together or not at all.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt::Display;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::user::PublicUser;
use crate::validate::require_non_empty;

/// Whether a listing is offered for rent or for sale.
#[derive(Serialize, Deserialize, sqlx::Type, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PropertyStatus {
    Rent,
    Sale,
}

#[derive(Serialize, Deserialize, sqlx::Type, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Shop,
    Office,
}

impl Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyStatus::Rent => write!(f, "rent"),
            PropertyStatus::Sale => write!(f, "sale"),
        }
    }
}

impl FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rent" => Ok(PropertyStatus::Rent),
            "sale" => Ok(PropertyStatus::Sale),
            other => Err(format!("unknown property status: {other}")),
        }
    }
}

impl Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::House => write!(f, "house"),
            PropertyType::Shop => write!(f, "shop"),
            PropertyType::Office => write!(f, "office"),
        }
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "house" => Ok(PropertyType::House),
            "shop" => Ok(PropertyType::Shop),
            "office" => Ok(PropertyType::Office),
            other => Err(format!("unknown property type: {other}")),
        }
    }
}

/// A listing row.
#[derive(Serialize, Deserialize, FromRow, ToSchema, Debug, Clone, PartialEq)]
pub struct Property {
    pub property_id: i32,
    pub title: String,
    pub description: String,
    pub status: PropertyStatus,
    pub property_type: PropertyType,
    pub room: i32,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub area: String,
    pub amenities: Vec<String>,
    pub is_available: bool,
    pub images: Vec<String>,
    /// Human-readable code, e.g. `H-2026-483920`. Unique, but synthesized
    /// without a uniqueness guarantee; collisions surface at insert time.
    pub reference: String,
    pub is_paid: bool,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 1:1 dependent of [`Property`], cascade-deleted with it.
#[derive(Serialize, Deserialize, FromRow, ToSchema, Debug, Clone, PartialEq)]
pub struct PropertyLocation {
    pub location_id: i32,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub property_id: i32,
}

/// 1:1 dependent of [`Property`], cascade-deleted with it.
#[derive(Serialize, Deserialize, FromRow, ToSchema, Debug, Clone, PartialEq)]
pub struct PropertyInformation {
    pub information_id: i32,
    pub build_age: i32,
    pub bathrooms: i32,
    pub bedrooms: i32,
    pub bq: bool,
    pub property_id: i32,
}

/// A listing with its dependents and owner, the shape detail and list
/// endpoints respond with.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PropertyWithDetails {
    #[serde(flatten)]
    pub property: Property,
    pub location: Option<PropertyLocation>,
    pub information: Option<PropertyInformation>,
    pub owner: Option<PublicUser>,
}

/// Payload for the composite create: the listing fields plus both
/// dependent groups, validated before any write.
#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct CreatePropertyRequest {
    pub title: String,
    pub description: String,
    pub status: PropertyStatus,
    pub property_type: PropertyType,
    #[serde(default = "default_room")]
    pub room: i32,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub area: String,
    pub amenities: Vec<String>,
    // location group
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    // information group
    pub build_age: i32,
    pub bathrooms: i32,
    pub bedrooms: i32,
    pub bq: bool,
}

fn default_room() -> i32 {
    1
}

impl CreatePropertyRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_non_empty("title", &self.title)?;
        require_non_empty("description", &self.description)?;
        require_non_empty("area", &self.area)?;
        require_non_empty("address", &self.address)?;
        require_non_empty("city", &self.city)?;
        require_non_empty("state", &self.state)?;
        require_non_empty("country", &self.country)?;
        if self.price <= Decimal::ZERO {
            return Err("price must be greater than zero".to_string());
        }
        if self.room < 1 {
            return Err("room must be at least 1".to_string());
        }
        if self.build_age < 0 || self.bathrooms < 0 || self.bedrooms < 0 {
            return Err("build_age, bathrooms and bedrooms must not be negative".to_string());
        }
        if self.amenities.iter().any(|a| a.trim().is_empty()) {
            return Err("amenities must not contain empty entries".to_string());
        }
        Ok(())
    }
}

/// Partial update for a listing; unset fields keep their current value.
#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdatePropertyRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<PropertyStatus>,
    pub property_type: Option<PropertyType>,
    pub room: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,
    pub area: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub is_available: Option<bool>,
}

impl UpdatePropertyRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            require_non_empty("title", title)?;
        }
        if let Some(description) = &self.description {
            require_non_empty("description", description)?;
        }
        if let Some(area) = &self.area {
            require_non_empty("area", area)?;
        }
        if let Some(price) = self.price {
            if price <= Decimal::ZERO {
                return Err("price must be greater than zero".to_string());
            }
        }
        if let Some(room) = self.room {
            if room < 1 {
                return Err("room must be at least 1".to_string());
            }
        }
        Ok(())
    }
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct MarkPaidRequest {
    pub is_paid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn request() -> CreatePropertyRequest {
        CreatePropertyRequest {
            title: "3 bedroom duplex".to_string(),
            description: "Spacious duplex with a garden".to_string(),
            status: PropertyStatus::Rent,
            property_type: PropertyType::House,
            room: 3,
            price: Decimal::new(250_000_00, 2),
            area: "450sqm".to_string(),
            amenities: vec!["parking".to_string(), "borehole".to_string()],
            address: "12 Admiralty Way".to_string(),
            city: "Lekki".to_string(),
            state: "Lagos".to_string(),
            country: "Nigeria".to_string(),
            build_age: 4,
            bathrooms: 3,
            bedrooms: 3,
            bq: true,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn zero_price_is_rejected() {
        let mut req = request();
        req.price = Decimal::ZERO;
        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_counts_are_rejected() {
        let mut req = request();
        req.bathrooms = -1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn status_and_type_parse_lowercase() {
        assert_eq!("sale".parse::<PropertyStatus>().unwrap(), PropertyStatus::Sale);
        assert_eq!("office".parse::<PropertyType>().unwrap(), PropertyType::Office);
        assert!("villa".parse::<PropertyType>().is_err());
    }

    #[test]
    fn update_rejects_empty_title() {
        let req = UpdatePropertyRequest {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
