use axum::{
    routing::{get, post, put},
    Router,
};

use crate::app::AppState;

mod handlers;
pub(crate) mod types;

/// Public directory surface. List, area search and read-by-id take no
/// credential at all.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/cats", get(handlers::list_cats))
        .route("/v1/cats/area", get(handlers::cats_in_area))
        .route("/v1/cats/:id", get(handlers::get_cat))
}

pub fn protected_router() -> Router<AppState> {
    Router::new()
        .route("/v1/cats", post(handlers::create_cat))
        .route("/v1/cats/mine", get(handlers::my_cats))
        .route(
            "/v1/cats/:id",
            put(handlers::update_cat).delete(handlers::delete_cat),
        )
        .route(
            "/v1/cats/admin/:id",
            put(handlers::admin_update_cat).delete(handlers::admin_delete_cat),
        )
}
