use axum::{routing::get, Router};

use crate::api::context::ApiContext;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod property_reviews;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list::get_reviews).post(create::add_review))
        .route("/property/:id", get(property_reviews::get_property_reviews))
        .route("/:id", get(get::get_review).delete(delete::delete_review))
}

pub(crate) const LIST_CACHE_KEY: &str = "/api/v1/review";

pub(crate) fn detail_cache_key(review_id: i32) -> String {
    format!("/api/v1/review/{review_id}")
}
