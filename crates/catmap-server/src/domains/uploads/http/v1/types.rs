use serde::Serialize;

use catmap_core::GeoPoint;

#[derive(Serialize)]
pub(crate) struct UploadData {
    pub filename: String,
    pub location: GeoPoint,
}

#[derive(Serialize)]
pub(crate) struct UploadEnvelope {
    pub message: &'static str,
    pub data: UploadData,
}
