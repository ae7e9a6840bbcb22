//! End-to-end tests over the real router. Each test gets its own database
//! with the workspace migrations applied; the notification service is
//! stubbed with a local listener. Endpoints that read through the cache
//! need a live redis and are covered by their handler and db-client tests
//! instead.

use axum::routing::post;
use axum::Router;
use axum_test::TestServer;
use cloudinary_client::CloudinaryClient;
use haven_auth::JwtKeys;
use listings_service::api;
use listings_service::api::context::{ActivationKeys, ApiContext};
use listings_service::config::{Config, Environment};
use notification_client::NotificationClient;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use sqlx::PgPool;
use std::sync::Arc;

async fn spawn_notification_stub() -> String {
    let app = Router::new().route("/api/v1/notification/:kind", post(|| async { "ok" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}")
}

async fn test_server(pool: PgPool) -> TestServer {
    let notification_url = spawn_notification_stub().await;

    let config = Config {
        database_url: String::new(),
        redis_url: "redis://127.0.0.1:6379".to_string(),
        port: 0,
        environment: Environment::Local,
        jwt_secret: "test-secret".to_string(),
        jwt_activation_secret: "test-activation-secret".to_string(),
        notification_service_url: notification_url.clone(),
        notification_api_key: "test-key".to_string(),
        cloudinary_cloud_name: "test".to_string(),
        cloudinary_upload_preset: "test".to_string(),
    };

    let context = ApiContext {
        db: pool,
        // never connected in these tests; mutation handlers only log when
        // invalidation cannot reach redis
        redis: redis::Client::open("redis://127.0.0.1:6379").expect("redis client"),
        jwt_keys: JwtKeys::new(&config.jwt_secret),
        activation_keys: ActivationKeys(JwtKeys::new(&config.jwt_activation_secret)),
        cloudinary: Arc::new(CloudinaryClient::new(
            &config.cloudinary_cloud_name,
            &config.cloudinary_upload_preset,
        )),
        notifier: Arc::new(NotificationClient::new(
            &config.notification_api_key,
            notification_url,
        )),
        config: Arc::new(config),
    };

    TestServer::new(api::api_router(context)).expect("test server")
}

fn register_payload(username: &str, email: &str) -> Value {
    json!({
        "firstname": "Ada",
        "lastname": "Lovelace",
        "username": username,
        "email": email,
        "password": "secret-password",
    })
}

async fn register_and_login(server: &TestServer, username: &str, email: &str) -> String {
    let register = server
        .post("/api/v1/user")
        .json(&register_payload(username, email))
        .await;
    register.assert_status_ok();

    let login = server
        .post("/api/v1/auth/user")
        .json(&json!({ "username": username, "password": "secret-password" }))
        .await;
    login.assert_status_ok();

    let body: Value = login.json();
    assert_eq!(body["error"], json!(false));
    body["data"]["token"].as_str().expect("token").to_string()
}

async fn register_admin(server: &TestServer, username: &str, email: &str) -> String {
    let response = server
        .post("/api/v1/admin")
        .json(&register_payload(username, email))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    body["data"]["token"].as_str().expect("token").to_string()
}

async fn seed_property(pool: &PgPool, token_user_id: i32) -> i32 {
    use model::property::{CreatePropertyRequest, PropertyStatus, PropertyType};

    let request = CreatePropertyRequest {
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
    };
    haven_db_client::property::create(pool, token_user_id, &request, &[], "H-2026-900001")
        .await
        .expect("seed property")
        .property
        .property_id
}

async fn user_id_by_username(pool: &PgPool, username: &str) -> i32 {
    haven_db_client::user::find_by_username(pool, username)
        .await
        .expect("query user")
        .expect("user exists")
        .user_id
}

#[sqlx::test(migrations = "../haven_db_client/migrations")]
async fn health_works(pool: PgPool) {
    let server = test_server(pool).await;
    server.get("/health").await.assert_status_ok();
}

#[sqlx::test(migrations = "../haven_db_client/migrations")]
async fn register_login_and_fetch_profile(pool: PgPool) {
    let server = test_server(pool.clone()).await;
    let token = register_and_login(&server, "ada", "ada@example.com").await;

    let me = server
        .get("/api/v1/auth/user")
        .authorization_bearer(&token)
        .await;
    me.assert_status_ok();

    let body: Value = me.json();
    assert_eq!(body["error"], json!(false));
    assert_eq!(body["data"]["user"]["username"], json!("ada"));
    // the hash must never leave the service
    assert!(body["data"]["user"].get("password").is_none());
}

#[sqlx::test(migrations = "../haven_db_client/migrations")]
async fn duplicate_registration_is_rejected(pool: PgPool) {
    let server = test_server(pool).await;

    server
        .post("/api/v1/user")
        .json(&register_payload("ada", "ada@example.com"))
        .await
        .assert_status_ok();

    let second = server
        .post("/api/v1/user")
        .json(&register_payload("other", "ada@example.com"))
        .await;
    second.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: Value = second.json();
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["msg"], json!("User already exists"));
}

#[sqlx::test(migrations = "../haven_db_client/migrations")]
async fn booking_a_tour_creates_its_payment(pool: PgPool) {
    let server = test_server(pool.clone()).await;
    register_and_login(&server, "ada", "ada@example.com").await;
    let user_id = user_id_by_username(&pool, "ada").await;
    let property_id = seed_property(&pool, user_id).await;

    let response = server
        .post("/api/v1/tour")
        .json(&json!({
            "name": "A",
            "email": "a@x.com",
            "phone": "123",
            "date": "2024-01-01",
            "time": "10:00",
            "user_id": user_id,
            "property_id": property_id,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["error"], json!(false));
    assert_eq!(body["data"]["charges"], json!("10.00"));

    let (amount, tour_id): (Decimal, i32) =
        sqlx::query_as("SELECT amount, tour_id FROM payments")
            .fetch_one(&pool)
            .await
            .expect("payment row");
    assert_eq!(amount, Decimal::new(10_00, 2));
    assert_eq!(tour_id, body["data"]["tour_id"].as_i64().unwrap() as i32);
}

#[sqlx::test(migrations = "../haven_db_client/migrations")]
async fn tour_booking_validates_input(pool: PgPool) {
    let server = test_server(pool).await;

    let response = server
        .post("/api/v1/tour")
        .json(&json!({
            "name": "A",
            "email": "not-an-email",
            "phone": "123",
            "date": "2024-01-01",
            "time": "10:00",
            "user_id": 1,
            "property_id": 1,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../haven_db_client/migrations")]
async fn missing_token_is_unauthorized(pool: PgPool) {
    let server = test_server(pool).await;
    server
        .get("/api/v1/tour/user")
        .await
        .assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../haven_db_client/migrations")]
async fn admin_routes_reject_plain_users(pool: PgPool) {
    let server = test_server(pool).await;
    let user_token = register_and_login(&server, "ada", "ada@example.com").await;

    server
        .get("/api/v1/statistics/payments")
        .authorization_bearer(&user_token)
        .await
        .assert_status(axum::http::StatusCode::FORBIDDEN);

    let admin_token = register_admin(&server, "boss", "boss@example.com").await;
    // authorized, but nothing has been paid yet
    server
        .get("/api/v1/statistics/payments")
        .authorization_bearer(&admin_token)
        .await
        .assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../haven_db_client/migrations")]
async fn tour_decisions_enforce_ownership(pool: PgPool) {
    let server = test_server(pool.clone()).await;
    let owner_token = register_and_login(&server, "ada", "ada@example.com").await;
    let other_token = register_and_login(&server, "eve", "eve@example.com").await;

    let owner_id = user_id_by_username(&pool, "ada").await;
    let property_id = seed_property(&pool, owner_id).await;

    let booked = server
        .post("/api/v1/tour")
        .json(&json!({
            "name": "A",
            "email": "a@x.com",
            "phone": "123",
            "date": "2024-01-01",
            "time": "10:00",
            "user_id": owner_id,
            "property_id": property_id,
        }))
        .await;
    booked.assert_status(axum::http::StatusCode::CREATED);
    let tour_id = booked.json::<Value>()["data"]["tour_id"].as_i64().unwrap();

    // a different principal must not decide on this tour
    server
        .put(&format!("/api/v1/tour/accept/{tour_id}"))
        .authorization_bearer(&other_token)
        .await
        .assert_status(axum::http::StatusCode::FORBIDDEN);

    // the booking user may
    let accepted = server
        .put(&format!("/api/v1/tour/accept/{tour_id}"))
        .authorization_bearer(&owner_token)
        .await;
    accepted.assert_status_ok();
    assert_eq!(
        accepted.json::<Value>()["data"]["is_accepted"],
        json!(true)
    );
}
