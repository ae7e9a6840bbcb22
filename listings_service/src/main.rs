use anyhow::Context;
use cloudinary_client::CloudinaryClient;
use haven_auth::JwtKeys;
use listings_service::api::{self, context::{ActivationKeys, ApiContext}};
use listings_service::config::{Config, Environment};
use notification_client::NotificationClient;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_tracing(environment: Environment) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match environment {
        Environment::Local => {
            tracing_subscriber::fmt()
                .with_ansi(true)
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .pretty()
                .init();
        }
        Environment::Production | Environment::Develop => {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    init_tracing(config.environment);
    tracing::info!("initialized config");

    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 30),
        Environment::Develop => (3, 20),
        Environment::Local => (3, 10),
    };

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to havendb")?;

    tracing::info!(
        min_connections,
        max_connections,
        "initialized havendb connection"
    );

    haven_db_client::MIGRATOR
        .run(&db)
        .await
        .context("failed to run migrations")?;
    tracing::info!("migrations are up to date");

    let redis = redis::Client::open(config.redis_url.as_str())
        .context("invalid redis url")?;
    tracing::info!("initialized redis client");

    let jwt_keys = JwtKeys::new(&config.jwt_secret);
    let activation_keys = ActivationKeys(JwtKeys::new(&config.jwt_activation_secret));

    let cloudinary = CloudinaryClient::new(
        &config.cloudinary_cloud_name,
        &config.cloudinary_upload_preset,
    );
    tracing::info!("initialized cloudinary client");

    let notifier = NotificationClient::new(
        &config.notification_api_key,
        config.notification_service_url.clone(),
    );
    tracing::info!(
        notification_service_url = %config.notification_service_url,
        "initialized notification client"
    );

    api::setup_and_serve(ApiContext {
        db,
        redis,
        jwt_keys,
        activation_keys,
        config: Arc::new(config),
        cloudinary: Arc::new(cloudinary),
        notifier: Arc::new(notifier),
    })
    .await?;

    Ok(())
}
