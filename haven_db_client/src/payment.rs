//! Payment reads. Payments are only ever written inside the tour-booking
//! transaction.

use std::collections::HashMap;

use model::payment::{Payment, PaymentWithUser};
use model::user::PublicUser;
use sqlx::PgPool;

use crate::error::Result;
use crate::user::PUBLIC_USER_COLUMNS;

const COLUMNS: &str =
    "payment_id, amount, tour_id, user_id, property_id, created_at, updated_at";

#[tracing::instrument(skip(pool))]
pub async fn list_with_users(pool: &PgPool) -> Result<Vec<PaymentWithUser>> {
    let sql = format!("SELECT {COLUMNS} FROM payments ORDER BY created_at DESC");
    let payments = sqlx::query_as::<_, Payment>(&sql).fetch_all(pool).await?;

    if payments.is_empty() {
        return Ok(Vec::new());
    }

    let user_ids: Vec<i32> = payments.iter().map(|p| p.user_id).collect();
    let user_sql = format!("SELECT {PUBLIC_USER_COLUMNS} FROM users WHERE user_id = ANY($1)");
    let users: HashMap<i32, PublicUser> = sqlx::query_as::<_, PublicUser>(&user_sql)
        .bind(&user_ids)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|u| (u.user_id, u))
        .collect();

    Ok(payments
        .into_iter()
        .map(|payment| {
            let user = users.get(&payment.user_id).cloned();
            PaymentWithUser { payment, user }
        })
        .collect())
}
