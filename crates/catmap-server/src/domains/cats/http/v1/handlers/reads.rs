use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use catmap_core::{BoundingBox, Identity};

use crate::app::AppState;
use crate::domains::cats::service;
use crate::domains::errors::map_service_error;

use super::super::types::AreaQuery;
use super::helpers::{cat_response, cat_response_with_owner};

#[tracing::instrument(skip(state))]
pub(crate) async fn list_cats(State(state): State<AppState>) -> impl IntoResponse {
    match service::list_cats(&state).await {
        Ok(cats) => {
            let cats: Vec<_> = cats.into_iter().map(cat_response).collect();
            (StatusCode::OK, Json(cats)).into_response()
        }
        Err(err) => map_service_error(&err),
    }
}

#[tracing::instrument(skip(state))]
pub(crate) async fn cats_in_area(
    State(state): State<AppState>,
    Query(query): Query<AreaQuery>,
) -> impl IntoResponse {
    let area = BoundingBox::new(query.min_lat, query.max_lat, query.min_lng, query.max_lng);
    match service::list_cats_within(&state, area).await {
        Ok(cats) => {
            let cats: Vec<_> = cats.into_iter().map(cat_response).collect();
            (StatusCode::OK, Json(cats)).into_response()
        }
        Err(err) => map_service_error(&err),
    }
}

#[tracing::instrument(skip(state))]
pub(crate) async fn get_cat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match service::get_cat_detail(&state, id).await {
        Ok(detail) => (
            StatusCode::OK,
            Json(cat_response_with_owner(detail.cat, detail.owner)),
        )
            .into_response(),
        Err(err) => map_service_error(&err),
    }
}

#[tracing::instrument(skip(state, identity))]
pub(crate) async fn my_cats(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> impl IntoResponse {
    match service::list_my_cats(&state, &identity).await {
        Ok(cats) => {
            let cats: Vec<_> = cats.into_iter().map(cat_response).collect();
            (StatusCode::OK, Json(cats)).into_response()
        }
        Err(err) => map_service_error(&err),
    }
}
