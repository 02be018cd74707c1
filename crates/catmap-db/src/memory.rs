//! In-memory store backends.
//!
//! Used when the server runs without Postgres (`CATMAP_DB_URL=memory`) and by
//! the integration tests. Every operation takes a single lock acquisition, so
//! an update racing a delete observes the row either fully present or fully
//! gone.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use catmap_core::{
    BoundingBox, Cat, CatChanges, CatStore, StoreError, StoreResult, User, UserChanges, UserStore,
};
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.user_name == user_name).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<User>> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn create(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        let clash = users.values().any(|existing| {
            existing.user_name == user.user_name || existing.email == user.email
        });
        if clash {
            return Err(StoreError::Conflict("unique_violation"));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_by_id(&self, id: Uuid, changes: UserChanges) -> StoreResult<Option<User>> {
        let mut users = self.users.write().await;
        if let Some(new_name) = changes.user_name.as_deref() {
            let clash = users
                .values()
                .any(|existing| existing.id != id && existing.user_name == new_name);
            if clash {
                return Err(StoreError::Conflict("unique_violation"));
            }
        }
        if let Some(new_email) = changes.email.as_deref() {
            let clash = users
                .values()
                .any(|existing| existing.id != id && existing.email == new_email);
            if clash {
                return Err(StoreError::Conflict("unique_violation"));
            }
        }
        let Some(user) = users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(user_name) = changes.user_name {
            user.user_name = user_name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(password_hash) = changes.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(role) = changes.role {
            user.role = role;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id))
    }
}

#[derive(Clone, Default)]
pub struct MemoryCatStore {
    cats: Arc<RwLock<HashMap<Uuid, Cat>>>,
}

impl MemoryCatStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatStore for MemoryCatStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Cat>> {
        let cats = self.cats.read().await;
        Ok(cats.get(&id).cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<Cat>> {
        let cats = self.cats.read().await;
        let mut all: Vec<Cat> = cats.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> StoreResult<Vec<Cat>> {
        let cats = self.cats.read().await;
        let mut owned: Vec<Cat> = cats
            .values()
            .filter(|cat| cat.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn list_within(&self, area: BoundingBox) -> StoreResult<Vec<Cat>> {
        let cats = self.cats.read().await;
        let mut inside: Vec<Cat> = cats
            .values()
            .filter(|cat| area.contains(cat.location))
            .cloned()
            .collect();
        inside.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(inside)
    }

    async fn create(&self, cat: Cat) -> StoreResult<Cat> {
        let mut cats = self.cats.write().await;
        cats.insert(cat.id, cat.clone());
        Ok(cat)
    }

    async fn update_by_id(&self, id: Uuid, changes: CatChanges) -> StoreResult<Option<Cat>> {
        let mut cats = self.cats.write().await;
        let Some(cat) = cats.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = changes.name {
            cat.name = name;
        }
        if let Some(weight) = changes.weight {
            cat.weight = weight;
        }
        if let Some(birthdate) = changes.birthdate {
            cat.birthdate = birthdate;
        }
        if let Some(filename) = changes.filename {
            cat.filename = Some(filename);
        }
        if let Some(location) = changes.location {
            cat.location = location;
        }
        if let Some(owner_id) = changes.owner_id {
            cat.owner_id = owner_id;
        }
        cat.updated_at = Utc::now();
        Ok(Some(cat.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> StoreResult<Option<Cat>> {
        let mut cats = self.cats.write().await;
        Ok(cats.remove(&id))
    }
}
