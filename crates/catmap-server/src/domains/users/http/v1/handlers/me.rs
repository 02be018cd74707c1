use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};

use catmap_core::Identity;

use crate::app::AppState;
use crate::domains::errors::map_service_error;
use crate::domains::users::service::{self, UpdateMeCommand};

use super::super::types::{UpdateMeRequest, UserEnvelope};
use super::helpers::user_response;

#[tracing::instrument(skip(state, identity, payload))]
pub(crate) async fn update_me(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<UpdateMeRequest>,
) -> impl IntoResponse {
    let command = UpdateMeCommand {
        user_name: payload.user_name,
        email: payload.email,
        password: payload.password,
    };
    match service::update_me(&state, &identity, command).await {
        Ok(user) => (
            StatusCode::OK,
            Json(UserEnvelope {
                message: "User updated",
                data: user_response(user),
            }),
        )
            .into_response(),
        Err(err) => map_service_error(&err),
    }
}

#[tracing::instrument(skip(state, identity))]
pub(crate) async fn delete_me(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> impl IntoResponse {
    match service::delete_me(&state, &identity).await {
        Ok(user) => (
            StatusCode::OK,
            Json(UserEnvelope {
                message: "User deleted",
                data: user_response(user),
            }),
        )
            .into_response(),
        Err(err) => map_service_error(&err),
    }
}
