use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Role;

/// Authenticated caller, resolved from a verified bearer credential before
/// any domain code runs. Credential verification (signature, expiry) happens
/// at the transport boundary; everything past that point may trust these
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub user_name: String,
    pub role: Role,
}

impl Identity {
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
