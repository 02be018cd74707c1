use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use crate::app::AppState;
use crate::domains::auth::core::tokens;

fn bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Rejects the request with 401 unless a valid bearer token is present.
/// On success the verified `Identity` is inserted into request extensions.
pub async fn require_identity(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let state = request
        .extensions()
        .get::<AppState>()
        .cloned()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    let token = match bearer_token(&request) {
        Some(token) => token,
        None => return Err(StatusCode::UNAUTHORIZED),
    };

    let identity = match tokens::verify(token, &state.token_secret) {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!(event = "auth_failed", reason = ?err, "Bearer token rejected");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    tracing::Span::current().record("user_id", identity.user_id.to_string());
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Lenient variant for public-but-personalizable routes (GraphQL): attaches
/// `Identity` when a valid token is present and proceeds anonymously
/// otherwise. Per-operation code demands identity where required.
pub async fn attach_identity(mut request: Request<Body>, next: Next) -> Response {
    if let Some(state) = request.extensions().get::<AppState>().cloned() {
        if let Some(token) = bearer_token(&request) {
            match tokens::verify(token, &state.token_secret) {
                Ok(identity) => {
                    tracing::Span::current().record("user_id", identity.user_id.to_string());
                    request.extensions_mut().insert(identity);
                }
                Err(err) => {
                    tracing::warn!(event = "auth_failed", reason = ?err, "Bearer token ignored");
                }
            }
        }
    }
    next.run(request).await
}
