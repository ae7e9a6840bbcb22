use std::time::Duration;

use anyhow::Context;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::context::ApiContext;
use crate::constants::REQUEST_TIMEOUT_SECS;

pub mod admin;
pub mod auth;
pub mod context;
pub mod error;
pub mod health;
pub mod inquiry;
pub mod property;
pub mod review;
pub mod statistics;
pub mod swagger;
pub mod tour;
pub mod user;

pub async fn setup_and_serve(state: ApiContext) -> anyhow::Result<()> {
    let port = state.config.port;
    let env = state.config.environment;

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .merge(health::router())
        .layer(CorsLayer::permissive())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let bind_address = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind to address {}", bind_address))?;

    tracing::info!(
        "listings service is up and running with environment {:?} on port {}",
        &env,
        &port
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error running axum server")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "unable to listen for shutdown signal");
    }
}

/// Assembles the full API router. Public so the integration tests can run
/// the same router against their own database.
pub fn api_router(state: ApiContext) -> Router {
    Router::new()
        .nest("/api/v1/auth", auth::router())
        .nest("/api/v1/user", user::router())
        .nest("/api/v1/admin", admin::router())
        .nest("/api/v1/property", property::router())
        .nest("/api/v1/tour", tour::router())
        .nest("/api/v1/inquiry", inquiry::router())
        .nest("/api/v1/review", review::router())
        .nest("/api/v1/statistics", statistics::router())
        .with_state(state)
}

/// Replays a cached JSON body verbatim.
pub(crate) fn cached_json(body: String) -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap_or_default()
}
