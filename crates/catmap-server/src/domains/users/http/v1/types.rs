use serde::{Deserialize, Serialize};

use catmap_core::Role;

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateMeRequest {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Role arrives as a plain string so an unknown value maps to a 400 with a
/// stable code instead of a body-rejection error.
#[derive(Debug, Deserialize)]
pub(crate) struct SetRoleRequest {
    pub role: String,
}

/// Directory listing shape. Role, timestamps and anything sensitive stay
/// off the public surface.
#[derive(Serialize)]
pub(crate) struct PublicUserResponse {
    pub id: String,
    pub user_name: String,
    pub email: String,
}

#[derive(Serialize)]
pub(crate) struct UserResponse {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub role: Role,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize)]
pub(crate) struct UserEnvelope {
    pub message: &'static str,
    pub data: UserResponse,
}
