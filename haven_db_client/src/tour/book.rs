use model::payment::Payment;
use model::tour::{BookTourRequest, Tour};
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::COLUMNS;
use crate::error::{DbError, Result};

/// Books a tour: inserts the tour, then its payment carrying the same
/// charge, inside one transaction. If the payment insert fails the tour
/// must not persist either; the dropped transaction rolls both back.
#[tracing::instrument(skip(pool, request), fields(property_id = request.property_id))]
pub async fn book(pool: &PgPool, request: &BookTourRequest, charges: Decimal) -> Result<(Tour, Payment)> {
    let mut tx = pool.begin().await.map_err(DbError::from)?;

    let sql = format!(
        "INSERT INTO tours (name, email, phone, date, time, charges, user_id, property_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING {COLUMNS}"
    );
    let tour = sqlx::query_as::<_, Tour>(&sql)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(request.date)
        .bind(&request.time)
        .bind(charges)
        .bind(request.user_id)
        .bind(request.property_id)
        .fetch_one(&mut *tx)
        .await?;

    let payment = sqlx::query_as::<_, Payment>(
        "INSERT INTO payments (amount, tour_id, user_id, property_id)
         VALUES ($1, $2, $3, $4)
         RETURNING payment_id, amount, tour_id, user_id, property_id, created_at, updated_at",
    )
    .bind(tour.charges)
    .bind(tour.tour_id)
    .bind(tour.user_id)
    .bind(tour.property_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await.map_err(DbError::from)?;

    tracing::info!(
        tour_id = tour.tour_id,
        payment_id = payment.payment_id,
        "booked tour with payment"
    );

    Ok((tour, payment))
}
