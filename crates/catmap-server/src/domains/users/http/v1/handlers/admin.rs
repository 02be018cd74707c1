use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use catmap_core::{Identity, Role};

use crate::app::AppState;
use crate::domains::errors::{map_service_error, ServiceError};
use crate::domains::users::service::{self, SetRoleCommand};

use super::super::types::{SetRoleRequest, UserEnvelope};
use super::helpers::user_response;

#[tracing::instrument(skip(state, identity, payload))]
pub(crate) async fn set_role(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetRoleRequest>,
) -> impl IntoResponse {
    let role = match payload.role.parse::<Role>() {
        Ok(role) => role,
        Err(_) => return map_service_error(&ServiceError::BadRequest("role_invalid")),
    };
    match service::set_role(&state, &identity, id, SetRoleCommand { role }).await {
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
