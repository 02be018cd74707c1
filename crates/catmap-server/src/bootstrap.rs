use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, Router};
use prometheus::Encoder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::app::{self, AppState};
use crate::config::MetricsConfig;
use crate::infra::media::LocalMedia;
use crate::infra::metrics;
use crate::runtime;
use crate::settings;
use catmap_core::{CatStore, UserStore};
use catmap_db::memory::{MemoryCatStore, MemoryUserStore};
use catmap_db::repo::{PgCatStore, PgUserStore};
use catmap_db::{connect_postgres_with_max, PgPool};

pub fn init_tracing() {
    runtime::init_tracing();
}

pub fn log_startup(settings: &settings::Settings) {
    tracing::info!(
        event = "server_startup",
        addr = %settings.addr,
        store_backend = if settings.is_memory_db() { "memory" } else { "postgres" },
        registration_open = settings.config.auth.registration_open,
        metrics_enabled = settings.config.metrics.enabled,
        upload_dir = %settings.config.server.upload_dir,
        server_name = ?settings.config.server.name,
        "Server configuration loaded"
    );
}

pub fn init_metrics_registry(metrics_config: &MetricsConfig) {
    if !metrics_config.enabled {
        return;
    }
    #[cfg(target_os = "linux")]
    {
        let process_collector = prometheus::process_collector::ProcessCollector::for_self();
        if prometheus::default_registry()
            .register(Box::new(process_collector))
            .is_err()
        {
            tracing::warn!("failed to register process metrics");
        }
    }
    #[cfg(not(target_os = "linux"))]
    {
        tracing::warn!("process metrics are only available on linux");
    }
}

pub struct StoreBackend {
    pub users: Arc<dyn UserStore>,
    pub cats: Arc<dyn CatStore>,
    pub db: Option<PgPool>,
}

pub async fn build_stores(settings: &settings::Settings) -> Result<StoreBackend, sqlx_core::Error> {
    if settings.is_memory_db() {
        tracing::info!(event = "store_selected", backend = "memory", "Using in-memory store");
        return Ok(StoreBackend {
            users: Arc::new(MemoryUserStore::new()),
            cats: Arc::new(MemoryCatStore::new()),
            db: None,
        });
    }
    let db = connect_postgres_with_max(&settings.db_url, settings.db_pool_max).await?;
    tracing::info!(event = "store_selected", backend = "postgres", "Connected to Postgres");
    Ok(StoreBackend {
        users: Arc::new(PgUserStore::new(db.clone())),
        cats: Arc::new(PgCatStore::new(db.clone())),
        db: Some(db),
    })
}

pub fn build_state(settings: &settings::Settings, backend: StoreBackend) -> AppState {
    AppState {
        users: backend.users,
        cats: backend.cats,
        db: backend.db,
        started_at: Instant::now(),
        token_secret: settings.token_secret.clone(),
        password_pepper: settings.password_pepper.clone(),
        token_ttl_seconds: settings.token_ttl_seconds,
        media: Arc::new(LocalMedia::new(settings.config.server.upload_dir.clone())),
        config: settings.config.clone(),
    }
}

pub fn build_app(metrics_config: &MetricsConfig, state: AppState) -> Router {
    let request_id_header = axum::http::HeaderName::from_static("x-request-id");
    let mut app = app::build_router(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("unknown");
                let matched = request
                    .extensions()
                    .get::<axum::extract::MatchedPath>()
                    .map(axum::extract::MatchedPath::as_str)
                    .unwrap_or("unmatched");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %matched,
                    request_id = %request_id,
                    user_id = tracing::field::Empty
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(CatchPanicLayer::custom(|err| {
            tracing::error!(event = "panic_recovered", error = ?err, "handler panicked");
            match axum::response::Response::builder()
                .status(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
                .body(axum::body::Body::empty())
            {
                Ok(response) => response,
                Err(err) => {
                    tracing::error!(event = "panic_response_failed", error = %err);
                    axum::response::Response::new(axum::body::Body::empty())
                }
            }
        }));
    if metrics_config.enabled {
        app = app.route_layer(middleware::from_fn(metrics::http_metrics));
        let path = metrics_config.endpoint.clone();
        app = app.route(
            &path,
            axum::routing::get(|| async {
                let encoder = prometheus::TextEncoder::new();
                let metric_families = prometheus::gather();
                let mut buffer = Vec::new();
                let body = if encoder.encode(&metric_families, &mut buffer).is_ok() {
                    String::from_utf8_lossy(&buffer).into_owned()
                } else {
                    String::new()
                };

                let content_type = encoder.format_type().to_string();
                let mut response = axum::response::Response::new(axum::body::Body::from(body));
                if let Ok(value) = axum::http::HeaderValue::from_str(&content_type) {
                    response
                        .headers_mut()
                        .insert(axum::http::header::CONTENT_TYPE, value);
                }
                response
            }),
        );
    }
    app
}

pub async fn serve(settings: &settings::Settings, app: Router) {
    let addr: SocketAddr = settings.addr;
    tracing::info!(%addr, "listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(event = "server_bind_failed", error = %err);
            return;
        }
    };
    if let Err(err) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(runtime::shutdown_signal())
    .await
    {
        tracing::error!(event = "server_failed", error = %err);
    }
}
