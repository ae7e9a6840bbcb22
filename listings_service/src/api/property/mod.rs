use axum::{
    routing::{get, put},
    Router,
};

use crate::api::context::ApiContext;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod mark_paid;
pub mod update;
pub mod user_properties;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/",
            get(list::get_properties).post(create::add_property),
        )
        .route("/user", get(user_properties::get_user_properties))
        .route("/user/:id", get(user_properties::view_user_properties))
        .route("/paid/:id", put(mark_paid::mark_paid_property))
        .route(
            "/:id",
            get(get::get_property)
                .put(update::update_property)
                .delete(delete::delete_property),
        )
}

/// Cache keys this module reads, writes and invalidates.
pub(crate) const LIST_CACHE_KEY: &str = "/api/v1/property";

pub(crate) fn detail_cache_key(property_id: i32) -> String {
    format!("/api/v1/property/{property_id}")
}

pub(crate) fn owner_listings_cache_key(user_id: i32) -> String {
    format!("/api/v1/property/user/{user_id}")
}
