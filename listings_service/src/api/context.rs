use axum::extract::FromRef;
use cloudinary_client::CloudinaryClient;
use haven_auth::JwtKeys;
use notification_client::NotificationClient;
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::Config;

/// Keys for account-activation tokens, newtyped so they can never be used
/// where access-token keys are expected.
#[derive(Clone)]
pub struct ActivationKeys(pub JwtKeys);

#[derive(Clone, FromRef)]
pub struct ApiContext {
    /// havendb connection pool.
    pub db: PgPool,
    /// Response-cache redis client.
    pub redis: redis::Client,
    /// Access-token keys.
    pub jwt_keys: JwtKeys,
    /// Activation-token keys.
    pub activation_keys: ActivationKeys,
    pub config: Arc<Config>,
    pub cloudinary: Arc<CloudinaryClient>,
    pub notifier: Arc<NotificationClient>,
}
