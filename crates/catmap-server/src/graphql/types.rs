use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use catmap_core::{Cat, GeoPoint, OwnerSummary, User};

use crate::app::AppState;
use crate::domains::cats::service;

use super::graphql_error;

#[derive(SimpleObject)]
#[graphql(name = "Location")]
pub(crate) struct LocationObject {
    pub lat: f64,
    pub lng: f64,
}

impl From<GeoPoint> for LocationObject {
    fn from(point: GeoPoint) -> Self {
        Self {
            lat: point.lat,
            lng: point.lng,
        }
    }
}

#[derive(InputObject)]
pub(crate) struct LocationInput {
    pub lat: f64,
    pub lng: f64,
}

impl From<LocationInput> for GeoPoint {
    fn from(input: LocationInput) -> Self {
        Self {
            lat: input.lat,
            lng: input.lng,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(complex, name = "Cat")]
pub(crate) struct CatObject {
    pub id: Uuid,
    pub name: String,
    pub weight: f64,
    pub birthdate: NaiveDate,
    pub filename: Option<String>,
    pub location: LocationObject,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[ComplexObject]
impl CatObject {
    /// Owner display data, joined on demand; null when the account is gone.
    async fn owner(&self, ctx: &Context<'_>) -> Result<Option<OwnerObject>> {
        let state = ctx.data::<AppState>()?;
        let owner = service::resolve_owner(state, self.owner_id)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(owner.map(OwnerObject::from))
    }
}

impl From<Cat> for CatObject {
    fn from(cat: Cat) -> Self {
        Self {
            id: cat.id,
            name: cat.name,
            weight: cat.weight,
            birthdate: cat.birthdate,
            filename: cat.filename,
            location: LocationObject::from(cat.location),
            owner_id: cat.owner_id,
            created_at: cat.created_at,
            updated_at: cat.updated_at,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Owner")]
pub(crate) struct OwnerObject {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
}

impl From<OwnerSummary> for OwnerObject {
    fn from(owner: OwnerSummary) -> Self {
        Self {
            id: owner.id,
            user_name: owner.user_name,
            email: owner.email,
        }
    }
}

/// Public profile shape; role and timestamps stay internal.
#[derive(SimpleObject)]
#[graphql(name = "User")]
pub(crate) struct UserObject {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            email: user.email,
        }
    }
}

#[derive(InputObject)]
pub(crate) struct CreateCatInput {
    pub name: String,
    pub weight: f64,
    /// Calendar date in `YYYY-MM-DD` form.
    pub birthdate: String,
    pub filename: Option<String>,
    pub location: Option<LocationInput>,
    pub owner_id: Option<Uuid>,
}

#[derive(InputObject)]
pub(crate) struct UpdateCatInput {
    pub name: Option<String>,
    pub weight: Option<f64>,
    pub birthdate: Option<String>,
    pub filename: Option<String>,
    pub location: Option<LocationInput>,
    pub owner_id: Option<Uuid>,
}

#[derive(InputObject)]
pub(crate) struct CreateUserInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[derive(InputObject)]
pub(crate) struct UpdateUserInput {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(SimpleObject)]
pub(crate) struct LoginPayload {
    pub token: String,
    pub user: UserObject,
}
