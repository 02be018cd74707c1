use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use catmap_core::{AccessDenied, StoreError};

#[derive(Debug, Error, Clone)]
pub enum ServiceError {
    #[error("forbidden: {0}")]
    Forbidden(&'static str),
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),
    #[error("bad_request: {0}")]
    BadRequest(&'static str),
    #[error("conflict: {0}")]
    Conflict(&'static str),
    #[error("not_found")]
    NotFound,
    #[error("db_error")]
    Db,
    #[error("internal: {0}")]
    Internal(&'static str),
}

impl ServiceError {
    /// Stable machine code surfaced in response bodies.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Forbidden(code)
            | Self::Unauthorized(code)
            | Self::BadRequest(code)
            | Self::Conflict(code)
            | Self::Internal(code) => code,
            Self::NotFound => "not_found",
            Self::Db => "db_error",
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(code) => Self::Conflict(code),
            // Backend details were already logged at the store layer.
            StoreError::Backend(_) => Self::Db,
        }
    }
}

impl From<AccessDenied> for ServiceError {
    fn from(err: AccessDenied) -> Self {
        Self::Forbidden(err.code())
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

pub fn map_service_error(err: &ServiceError) -> Response {
    let status = match err {
        ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
        ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::Db | ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse { error: err.code() })).into_response()
}
