use axum::{
    routing::{post, put},
    Router,
};

use crate::api::context::ApiContext;

pub mod password;
pub mod photo;
pub mod register;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", post(register::register_admin))
        .route("/photo", put(photo::upload_profile_photo))
        .route("/password", put(password::change_password))
}
