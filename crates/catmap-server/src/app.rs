use axum::{extract::DefaultBodyLimit, Extension, Router};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::infra::media::MediaPipeline;
use catmap_core::{CatStore, UserStore};
use catmap_db::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub cats: Arc<dyn CatStore>,
    /// Present only when running against Postgres; `None` in memory mode.
    pub db: Option<PgPool>,
    pub started_at: Instant,
    pub token_secret: String,
    pub password_pepper: String,
    pub token_ttl_seconds: i64,
    pub media: Arc<dyn MediaPipeline>,
    pub config: ServerConfig,
}

pub fn build_router(state: AppState) -> Router {
    let extension_state = state.clone();
    let max_body_bytes = state.config.server.max_body_bytes;
    let schema = crate::graphql::build_schema(state.clone());
    crate::http::router()
        .with_state(state)
        .layer(Extension(extension_state))
        .layer(Extension(schema))
        .layer(DefaultBodyLimit::max(max_body_bytes))
}
