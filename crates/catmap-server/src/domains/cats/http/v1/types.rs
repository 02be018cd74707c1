use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catmap_core::GeoPoint;

/// All four edges are required; a missing or non-numeric parameter fails
/// query extraction with a 400 before the service runs.
#[derive(Debug, Deserialize)]
pub(crate) struct AreaQuery {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateCatRequest {
    pub name: String,
    pub weight: f64,
    pub birthdate: String,
    pub filename: Option<String>,
    pub location: Option<GeoPoint>,
    pub owner_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateCatRequest {
    pub name: Option<String>,
    pub weight: Option<f64>,
    pub birthdate: Option<String>,
    pub filename: Option<String>,
    pub location: Option<GeoPoint>,
    pub owner_id: Option<Uuid>,
}

#[derive(Serialize)]
pub(crate) struct OwnerResponse {
    pub id: String,
    pub user_name: String,
    pub email: String,
}

#[derive(Serialize)]
pub(crate) struct CatResponse {
    pub id: String,
    pub name: String,
    pub weight: f64,
    pub birthdate: String,
    pub filename: Option<String>,
    pub location: GeoPoint,
    pub owner_id: String,
    /// Resolved on the detail read only; absent when the owner account no
    /// longer exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerResponse>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize)]
pub(crate) struct CatEnvelope {
    pub message: &'static str,
    pub data: CatResponse,
}
