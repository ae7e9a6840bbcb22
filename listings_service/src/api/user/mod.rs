use axum::{
    routing::{post, put},
    Router,
};

use crate::api::context::ApiContext;

pub mod password;
pub mod photo;
pub mod profile;
pub mod register;
pub mod reset;
pub mod verify_email;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", post(register::register_user))
        .route("/profile", put(profile::update_profile))
        .route("/photo", put(photo::upload_profile_photo))
        .route("/password", put(password::change_password))
        .route("/verify/:token", post(verify_email::verify_email))
        .route("/forgot", post(reset::forgot_password))
        .route("/reset/:token", post(reset::reset_password))
}
