//! Atomicity tests for the two composite writes: property + location +
//! information, and tour + payment. Each test runs against its own database
//! with the crate migrations applied.

use chrono::NaiveDate;
use haven_db_client::{property, tour, DbError};
use model::property::{CreatePropertyRequest, PropertyStatus, PropertyType};
use model::tour::BookTourRequest;
use model::user::RegisterUserRequest;
use rust_decimal::Decimal;
use sqlx::PgPool;

async fn seed_user(pool: &PgPool) -> i32 {
    let request = RegisterUserRequest {
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "ignored".to_string(),
    };
    haven_db_client::user::create(pool, &request, "hash")
        .await
        .expect("seed user")
        .user_id
}

fn property_request() -> CreatePropertyRequest {
    CreatePropertyRequest {
        title: "3 bedroom duplex".to_string(),
        description: "Spacious duplex with a garden".to_string(),
        status: PropertyStatus::Rent,
        property_type: PropertyType::House,
        room: 3,
        price: Decimal::new(250_000_00, 2),
        area: "450sqm".to_string(),
        amenities: vec!["parking".to_string()],
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

async fn row_counts(pool: &PgPool) -> (i64, i64, i64) {
    let properties: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
        .fetch_one(pool)
        .await
        .unwrap();
    let locations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM property_locations")
        .fetch_one(pool)
        .await
        .unwrap();
    let informations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM property_informations")
        .fetch_one(pool)
        .await
        .unwrap();
    (properties, locations, informations)
}

#[sqlx::test(migrations = "./migrations")]
async fn create_property_persists_all_three_rows(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let images = vec!["https://cdn.example.com/a.jpg".to_string()];

    let created = property::create(&pool, user_id, &property_request(), &images, "H-2026-123456")
        .await
        .expect("composite create");

    assert_eq!(row_counts(&pool).await, (1, 1, 1));

    let id = created.property.property_id;
    assert_eq!(created.location.as_ref().unwrap().property_id, id);
    assert_eq!(created.information.as_ref().unwrap().property_id, id);
    assert_eq!(created.property.reference, "H-2026-123456");
    assert!(created.property.is_available);
    assert!(!created.property.is_paid);
}

#[sqlx::test(migrations = "./migrations")]
async fn failed_dependent_insert_rolls_back_everything(pool: PgPool) {
    let user_id = seed_user(&pool).await;

    // Negative bathrooms sails past this layer (validation lives above it)
    // and trips the counts CHECK on the information insert, the last step
    // of the transaction.
    let mut request = property_request();
    request.bathrooms = -1;

    let result = property::create(&pool, user_id, &request, &[], "H-2026-654321").await;
    assert!(result.is_err());
    assert_eq!(row_counts(&pool).await, (0, 0, 0));
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_reference_is_a_distinct_conflict(pool: PgPool) {
    let user_id = seed_user(&pool).await;

    property::create(&pool, user_id, &property_request(), &[], "H-2026-111111")
        .await
        .expect("first create");

    let mut second = property_request();
    second.title = "2 bedroom flat".to_string();
    let err = property::create(&pool, user_id, &second, &[], "H-2026-111111")
        .await
        .expect_err("reference collision");

    assert!(err.violates(property::REFERENCE_CONSTRAINT));
    // the failed attempt left nothing behind
    assert_eq!(row_counts(&pool).await, (1, 1, 1));
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_listing_is_a_distinct_conflict(pool: PgPool) {
    let user_id = seed_user(&pool).await;

    property::create(&pool, user_id, &property_request(), &[], "H-2026-222222")
        .await
        .expect("first create");

    let err = property::create(&pool, user_id, &property_request(), &[], "H-2026-333333")
        .await
        .expect_err("duplicate listing");

    assert!(err.violates(property::DUPLICATE_LISTING_CONSTRAINT));
    assert!(!err.violates(property::REFERENCE_CONSTRAINT));
}

#[sqlx::test(migrations = "./migrations")]
async fn deleting_a_property_cascades_its_dependents(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let created = property::create(&pool, user_id, &property_request(), &[], "H-2026-444444")
        .await
        .expect("create");

    assert!(property::delete(&pool, created.property.property_id)
        .await
        .expect("delete"));
    assert_eq!(row_counts(&pool).await, (0, 0, 0));
}

fn tour_request(user_id: i32, property_id: i32) -> BookTourRequest {
    BookTourRequest {
        name: "A".to_string(),
        email: "a@x.com".to_string(),
        phone: "123".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        time: "10:00".to_string(),
        user_id,
        property_id,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn booking_creates_tour_and_payment_together(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let property = property::create(&pool, user_id, &property_request(), &[], "H-2026-555555")
        .await
        .expect("create property");
    let property_id = property.property.property_id;

    let charges = Decimal::new(10_00, 2);
    let (tour, payment) = tour::book(&pool, &tour_request(user_id, property_id), charges)
        .await
        .expect("book tour");

    assert_eq!(tour.charges, charges);
    assert_eq!(payment.amount, charges);
    assert_eq!(payment.tour_id, tour.tour_id);
    assert_eq!(payment.user_id, user_id);
    assert_eq!(payment.property_id, property_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn failed_payment_insert_rolls_back_the_tour(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let property = property::create(&pool, user_id, &property_request(), &[], "H-2026-666666")
        .await
        .expect("create property");
    let property_id = property.property.property_id;

    // A negative charge passes the tour insert but violates the payments
    // amount CHECK, so the whole booking must vanish.
    let charges = Decimal::new(-5_00, 2);
    let result = tour::book(&pool, &tour_request(user_id, property_id), charges).await;
    assert!(result.is_err());

    let tours: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tours")
        .fetch_one(&pool)
        .await
        .unwrap();
    let payments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!((tours, payments), (0, 0));
}

#[sqlx::test(migrations = "./migrations")]
async fn reset_token_is_single_use(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let token = uuid::Uuid::new_v4();
    let expires_at = chrono::Utc::now() + chrono::Duration::hours(1);

    haven_db_client::reset_token::create(&pool, user_id, token, expires_at)
        .await
        .expect("create token");

    assert_eq!(
        haven_db_client::reset_token::consume(&pool, token)
            .await
            .expect("first consume"),
        Some(user_id)
    );
    assert_eq!(
        haven_db_client::reset_token::consume(&pool, token)
            .await
            .expect("second consume"),
        None
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn generic_db_errors_are_not_conflicts(pool: PgPool) {
    // booking against a property that does not exist fails the FK, which is
    // a plain database error, not a unique-constraint conflict
    let user_id = seed_user(&pool).await;
    let err = tour::book(
        &pool,
        &tour_request(user_id, 9999),
        Decimal::new(10_00, 2),
    )
    .await
    .expect_err("fk violation");

    assert!(matches!(err, DbError::Db(_)));
}
