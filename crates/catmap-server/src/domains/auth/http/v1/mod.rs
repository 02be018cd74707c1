use axum::{
    routing::{get, post},
    Router,
};

use crate::app::AppState;

mod handlers;
pub(crate) mod types;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/auth/login", post(handlers::login))
}

pub fn protected_router() -> Router<AppState> {
    Router::new().route("/v1/auth/token", get(handlers::check_token))
}
