use axum::{routing::post, Router};

use crate::app::AppState;

mod handlers;
pub(crate) mod types;

/// Upload requires a caller; the route joins the protected set.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/uploads", post(handlers::upload))
}
