use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::user::PublicUser;

/// Payment row, created atomically with its tour.
#[derive(Serialize, Deserialize, FromRow, ToSchema, Debug, Clone, PartialEq)]
pub struct Payment {
    pub payment_id: i32,
    #[schema(value_type = String)]
    pub amount: Decimal,
    pub tour_id: i32,
    pub user_id: i32,
    pub property_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PaymentWithUser {
    #[serde(flatten)]
    pub payment: Payment,
    pub user: Option<PublicUser>,
}
