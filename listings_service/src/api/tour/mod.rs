use axum::{
    routing::{get, put},
    Router,
};

use crate::api::context::ApiContext;

pub mod book;
pub mod decision;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
pub mod user_tours;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list::get_tours).post(book::book_tour))
        .route("/user", get(user_tours::get_user_tours))
        .route("/user/:id", get(user_tours::view_user_tours))
        .route("/accept/:id", put(decision::accept_tour))
        .route("/reject/:id", put(decision::reject_tour))
        .route(
            "/:id",
            get(get::get_tour)
                .put(update::update_tour)
                .delete(delete::delete_tour),
        )
}

/// Tour detail bodies are cached per principal; the key needs the owner.
pub(crate) fn detail_cache_key(owner_id: i32, tour_id: i32) -> String {
    format!("u{owner_id}:/api/v1/tour/{tour_id}")
}
