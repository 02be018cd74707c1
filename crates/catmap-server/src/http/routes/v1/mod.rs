use axum::{middleware, Router};

use crate::app::AppState;
use crate::domains::auth::core::require_identity;

pub fn router() -> Router<AppState> {
    // Protected API requires the auth middleware.
    let protected = Router::new()
        .merge(crate::domains::cats::http::v1::protected_router())
        .merge(crate::domains::users::http::v1::protected_router())
        .merge(crate::domains::uploads::http::v1::router())
        .merge(crate::domains::auth::http::v1::protected_router())
        .layer(middleware::from_fn(require_identity));

    // Public routes take anonymous callers.
    Router::new()
        .merge(crate::domains::auth::http::v1::router())
        .merge(crate::domains::cats::http::v1::router())
        .merge(crate::domains::users::http::v1::router())
        .merge(protected)
}
