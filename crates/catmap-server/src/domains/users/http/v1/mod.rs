use axum::{
    routing::{get, put},
    Router,
};

use crate::app::AppState;

mod handlers;
pub(crate) mod types;

/// Directory-style reads plus open registration.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/users",
            get(handlers::list_users).post(handlers::register),
        )
        .route("/v1/users/:id", get(handlers::get_user))
}

pub fn protected_router() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/users/me",
            put(handlers::update_me).delete(handlers::delete_me),
        )
        .route("/v1/users/:id/role", put(handlers::set_role))
}
