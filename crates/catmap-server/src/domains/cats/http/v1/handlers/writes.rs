use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use catmap_core::Identity;

use crate::app::AppState;
use crate::domains::cats::service::{self, CatDraft};
use crate::domains::errors::map_service_error;

use super::super::types::{CatEnvelope, CreateCatRequest, UpdateCatRequest};
use super::helpers::{cat_response, patch_from_request};

#[tracing::instrument(skip(state, identity, payload))]
pub(crate) async fn create_cat(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<CreateCatRequest>,
) -> impl IntoResponse {
    let draft = CatDraft {
        name: payload.name,
        weight: payload.weight,
        birthdate: payload.birthdate,
        filename: payload.filename,
        location: payload.location,
        owner_id: payload.owner_id,
    };
    match service::create_cat(&state, &identity, draft).await {
        Ok(cat) => (
            StatusCode::CREATED,
            Json(CatEnvelope {
                message: "Cat created",
                data: cat_response(cat),
            }),
        )
            .into_response(),
        Err(err) => map_service_error(&err),
    }
}

#[tracing::instrument(skip(state, identity, payload))]
pub(crate) async fn update_cat(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCatRequest>,
) -> impl IntoResponse {
    match service::update_cat(&state, &identity, id, patch_from_request(payload)).await {
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
pub(crate) async fn delete_cat(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match service::delete_cat(&state, &identity, id).await {
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
