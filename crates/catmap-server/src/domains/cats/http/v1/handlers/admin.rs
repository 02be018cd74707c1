use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use catmap_core::Identity;

use crate::app::AppState;
use crate::domains::cats::service;
use crate::domains::errors::map_service_error;

use super::super::types::{CatEnvelope, UpdateCatRequest};
use super::helpers::{cat_response, patch_from_request};

#[tracing::instrument(skip(state, identity, payload))]
pub(crate) async fn admin_update_cat(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCatRequest>,
) -> impl IntoResponse {
    match service::admin_update_cat(&state, &identity, id, patch_from_request(payload)).await {
        Ok(cat) => (
            StatusCode::OK,
            Json(CatEnvelope {
                message: "Cat updated",
                data: cat_response(cat),
            }),
        )
            .into_response(),
        Err(err) => map_service_error(&err),
    }
}

#[tracing::instrument(skip(state, identity))]
pub(crate) async fn admin_delete_cat(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match service::admin_delete_cat(&state, &identity, id).await {
        Ok(cat) => (
            StatusCode::OK,
            Json(CatEnvelope {
                message: "Cat deleted",
                data: cat_response(cat),
            }),
        )
            .into_response(),
        Err(err) => map_service_error(&err),
    }
}
