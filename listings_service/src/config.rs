use anyhow::Context;
use std::str::FromStr;

/// The environment the service is running in, driving log formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Develop,
    Local,
}

impl Environment {
    /// Reads `ENVIRONMENT`, falling back to production so a missing
    /// variable never weakens a deployed instance.
    pub fn new_or_prod() -> Self {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|value| Environment::from_str(&value).ok())
            .unwrap_or(Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prod" | "production" => Ok(Environment::Production),
            "dev" | "develop" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// Configuration parameters for the application.
#[derive(Debug)]
pub struct Config {
    /// The connection URL for the havendb Postgres database.
    pub database_url: String,
    /// The connection URL for the response-cache redis.
    pub redis_url: String,
    /// The port to listen for HTTP requests on.
    pub port: u16,
    /// The environment we are in.
    pub environment: Environment,
    /// Secret for access tokens.
    pub jwt_secret: String,
    /// Secret for account-activation tokens, distinct from the access
    /// secret.
    pub jwt_activation_secret: String,
    /// Base URL of the external notification service.
    pub notification_service_url: String,
    /// API key sent to the notification service.
    pub notification_api_key: String,
    /// Cloudinary cloud name for image uploads.
    pub cloudinary_cloud_name: String,
    /// Cloudinary unsigned upload preset.
    pub cloudinary_upload_preset: String,
}

fn required(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{name} must be provided"))
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a number")?;

        Ok(Config {
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            port,
            environment: Environment::new_or_prod(),
            jwt_secret: required("JWT_SECRET")?,
            jwt_activation_secret: required("JWT_ACTIVATION_SECRET")?,
            notification_service_url: required("NOTIFICATION_SERVICE_URL")?,
            notification_api_key: required("NOTIFICATION_API_KEY")?,
            cloudinary_cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
            cloudinary_upload_preset: required("CLOUDINARY_UPLOAD_PRESET")?,
        })
    }
}
