use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Role;
use crate::geo::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    /// Argon2id hash of the peppered password. Never serialized outward;
    /// HTTP/GraphQL response types omit it entirely.
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cat {
    pub id: Uuid,
    pub name: String,
    pub weight: f64,
    pub birthdate: NaiveDate,
    pub filename: Option<String>,
    pub location: GeoPoint,
    /// Stable owner reference. Display data is joined on demand, never
    /// embedded, so it cannot go stale.
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Owner display data resolved by id for detailed responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
}

impl From<&User> for OwnerSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Partial update for a user. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

/// Partial update for a cat. `None` leaves the column untouched. The
/// lifecycle service strips `owner_id` for non-admin callers before this
/// ever reaches a store.
#[derive(Debug, Clone, Default)]
pub struct CatChanges {
    pub name: Option<String>,
    pub weight: Option<f64>,
    pub birthdate: Option<NaiveDate>,
    pub filename: Option<String>,
    pub location: Option<GeoPoint>,
    pub owner_id: Option<Uuid>,
}

impl UserChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.role.is_none()
    }
}

impl CatChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.weight.is_none()
            && self.birthdate.is_none()
            && self.filename.is_none()
            && self.location.is_none()
            && self.owner_id.is_none()
    }
}
