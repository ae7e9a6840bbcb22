//! All SQL for the listings backend.
//!
//! Free functions per entity, taking a `&PgPool` (or an open transaction for
//! the composite writes). Nothing here touches the cache; caching is a
//! read-side concern of the API layer.

pub mod admin;
pub mod error;
pub mod inquiry;
pub mod payment;
pub mod property;
pub mod reset_token;
pub mod review;
pub mod tour;
pub mod user;

pub use error::{DbError, Result};

/// Embedded migrations, run by the service at startup and by the test
/// harness per test database.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
