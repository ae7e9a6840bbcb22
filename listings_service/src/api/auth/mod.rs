use axum::{routing::get, Router};

use crate::api::context::ApiContext;

pub mod login;
pub mod me;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/user", get(me::logged_user).post(login::login_user))
        .route("/admin", get(me::logged_admin).post(login::login_admin))
}
