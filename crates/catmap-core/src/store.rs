use async_trait::async_trait;
use uuid::Uuid;

use crate::geo::BoundingBox;
use crate::models::{Cat, CatChanges, User, UserChanges};

/// Store fault surfaced to services. Absence of a row is never an error;
/// lookups return `None` and mutations return `None` when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Uniqueness violation, e.g. a duplicate user_name or email.
    Conflict(&'static str),
    /// Backend fault. The message is for logs only and must not reach
    /// response bodies.
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conflict(code) => write!(f, "conflict: {code}"),
            Self::Backend(message) => write!(f, "backend: {message}"),
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence port for cat records. Handed to services as an
/// `Arc<dyn CatStore>` so the whole surface runs against either Postgres or
/// the in-memory implementation.
///
/// `update_by_id` and `delete_by_id` must be atomic per call: an update
/// racing a delete resolves to exactly one winner, the loser observing
/// `None`. An update never recreates a deleted row.
#[async_trait]
pub trait CatStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Cat>>;
    async fn list_all(&self) -> StoreResult<Vec<Cat>>;
    async fn list_by_owner(&self, owner_id: Uuid) -> StoreResult<Vec<Cat>>;
    async fn list_within(&self, area: BoundingBox) -> StoreResult<Vec<Cat>>;
    async fn create(&self, cat: Cat) -> StoreResult<Cat>;
    async fn update_by_id(&self, id: Uuid, changes: CatChanges) -> StoreResult<Option<Cat>>;
    async fn delete_by_id(&self, id: Uuid) -> StoreResult<Option<Cat>>;
}

/// Persistence port for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;
    async fn find_by_user_name(&self, user_name: &str) -> StoreResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn list_all(&self) -> StoreResult<Vec<User>>;
    async fn create(&self, user: User) -> StoreResult<User>;
    async fn update_by_id(&self, id: Uuid, changes: UserChanges) -> StoreResult<Option<User>>;
    async fn delete_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;
}
