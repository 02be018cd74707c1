use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use catmap_core::{GeoPoint, Identity};

use crate::app::AppState;
use crate::domains::errors::{map_service_error, ServiceError};
use crate::infra::metrics;

use super::types::{UploadData, UploadEnvelope};

/// Accepts the first `file` part and ignores everything else in the form.
#[tracing::instrument(skip(state, identity, multipart))]
pub(crate) async fn upload(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(_) => {
                metrics::upload("failed");
                return map_service_error(&ServiceError::BadRequest("multipart_invalid"));
            }
        };
        if field.name() != Some("file") {
            continue;
        }
        let original_name = field.file_name().unwrap_or("upload.bin").to_string();
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(_) => {
                metrics::upload("failed");
                return map_service_error(&ServiceError::BadRequest("multipart_invalid"));
            }
        };
        if bytes.is_empty() {
            metrics::upload("failed");
            return map_service_error(&ServiceError::BadRequest("file_required"));
        }

        match state.media.store_upload(&original_name, bytes.to_vec()).await {
            Ok(stored) => {
                metrics::upload("ok");
                tracing::info!(
                    event = "cat_upload_accepted",
                    user_id = %identity.user_id,
                    filename = %stored.filename,
                    "Upload accepted"
                );
                let location = stored.coordinates.unwrap_or(GeoPoint::ORIGIN);
                return (
                    StatusCode::OK,
                    Json(UploadEnvelope {
                        message: "cat uploaded",
                        data: UploadData {
                            filename: stored.filename,
                            location,
                        },
                    }),
                )
                    .into_response();
            }
            Err(err) => {
                metrics::upload("failed");
                tracing::error!(event = "upload_failed", error = %err, "Upload failed");
                return map_service_error(&ServiceError::Internal("upload_failed"));
            }
        }
    }

    metrics::upload("failed");
    map_service_error(&ServiceError::BadRequest("file_required"))
}
