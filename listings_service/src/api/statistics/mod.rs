use axum::{routing::get, Router};

use crate::api::context::ApiContext;

pub mod payments;
pub mod users;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/users", get(users::get_users))
        .route("/payments", get(payments::get_payments))
}
