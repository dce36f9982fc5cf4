use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{error::AppResult, models::Profile};

/// Storage backend for saved profiles
///
/// Implementations only store and fetch whole profile documents; validation
/// and ordering live in the profile service.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, id: Uuid) -> AppResult<Option<Profile>>;

    /// Inserts or replaces a profile
    async fn put(&self, profile: &Profile) -> AppResult<()>;

    /// Returns whether a profile was deleted
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// All stored profiles, in no particular order
    async fn list(&self) -> AppResult<Vec<Profile>>;

    /// Store name for logging
    fn name(&self) -> &'static str;
}

/// Process-local profile store
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }

    async fn put(&self, profile: &Profile) -> AppResult<()> {
        self.profiles
            .write()
            .await
            .insert(profile.id, profile.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.profiles.write().await.remove(&id).is_some())
    }

    async fn list(&self) -> AppResult<Vec<Profile>> {
        Ok(self.profiles.read().await.values().cloned().collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
