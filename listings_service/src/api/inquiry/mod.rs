use axum::{routing::get, Router};

use crate::api::context::ApiContext;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
pub mod user_inquiries;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list::get_inquiries).post(create::make_inquiry))
        .route("/user", get(user_inquiries::get_user_inquiries))
        .route("/user/:id", get(user_inquiries::view_user_inquiries))
        .route(
            "/:id",
            get(get::get_inquiry)
                .put(update::update_inquiry)
                .delete(delete::delete_inquiry),
        )
}

/// Inquiry detail bodies are cached per principal.
pub(crate) fn detail_cache_key(owner_id: i32, inquiry_id: i32) -> String {
    format!("u{owner_id}:/api/v1/inquiry/{inquiry_id}")
}
