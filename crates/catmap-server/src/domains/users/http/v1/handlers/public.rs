use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::app::AppState;
use crate::domains::errors::map_service_error;
use crate::domains::users::service::{self, RegisterCommand};

use super::super::types::{RegisterRequest, UserEnvelope};
use super::helpers::{public_user_response, user_response};

#[tracing::instrument(skip(state, payload))]
pub(crate) async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    let command = RegisterCommand {
        user_name: payload.user_name,
        email: payload.email,
        password: payload.password,
    };
    match service::register_user(&state, command).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(UserEnvelope {
                message: "User created",
                data: user_response(user),
            }),
        )
            .into_response(),
        Err(err) => map_service_error(&err),
    }
}

#[tracing::instrument(skip(state))]
pub(crate) async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    match service::list_users(&state).await {
        Ok(users) => {
            let users: Vec<_> = users.into_iter().map(public_user_response).collect();
            (StatusCode::OK, Json(users)).into_response()
        }
        Err(err) => map_service_error(&err),
    }
}

#[tracing::instrument(skip(state))]
pub(crate) async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match service::get_user(&state, id).await {
        Ok(user) => (StatusCode::OK, Json(public_user_response(user))).into_response(),
        Err(err) => map_service_error(&err),
    }
}
