use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};

use catmap_core::Identity;

use crate::app::AppState;
use crate::domains::auth::service::{self, LoginCommand};
use crate::domains::errors::map_service_error;

use super::types::{AuthUserResponse, LoginRequest, LoginResponse};

#[tracing::instrument(skip(state, payload))]
pub(crate) async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    let command = LoginCommand {
        user_name: payload.user_name,
        password: payload.password,
    };
    match service::login(&state, command).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(LoginResponse {
                message: "Successfully logged in",
                token: outcome.token,
                user: AuthUserResponse::from(&outcome.user),
            }),
        )
            .into_response(),
        Err(err) => map_service_error(&err),
    }
}

#[tracing::instrument(skip(state, identity))]
pub(crate) async fn check_token(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> impl IntoResponse {
    match service::current_user(&state, &identity).await {
        Ok(user) => (StatusCode::OK, Json(AuthUserResponse::from(&user))).into_response(),
        Err(err) => map_service_error(&err),
    }
}
