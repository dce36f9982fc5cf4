use redis::AsyncCommands;
use redis::Client;
use std::fmt::Display;
use uuid::Uuid;

use crate::db::ProfileStore;
use crate::error::AppResult;
use crate::models::Profile;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Profile(Uuid),
    ProfileIndex,
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKey::Profile(id) => write!(f, "profile:{}", id),
            StoreKey::ProfileIndex => write!(f, "profiles"),
        }
    }
}

/// Creates a Redis client for profile storage
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Document write and index insert in one MULTI/EXEC
fn put_pipeline(id: Uuid, json: String) -> redis::Pipeline {
    let mut pipe = redis::pipe();
    pipe.atomic()
        .set(StoreKey::Profile(id).to_string(), json)
        .ignore()
        .sadd(StoreKey::ProfileIndex.to_string(), id.to_string())
        .ignore();
    pipe
}

/// Document delete and index removal in one MULTI/EXEC; yields the DEL count
fn delete_pipeline(id: Uuid) -> redis::Pipeline {
    let mut pipe = redis::pipe();
    pipe.atomic()
        .del(StoreKey::Profile(id).to_string())
        .srem(StoreKey::ProfileIndex.to_string(), id.to_string())
        .ignore();
    pipe
}

/// Profile store backed by Redis
///
/// Each profile is a JSON document under `profile:{id}`; the `profiles` set
/// indexes the stored ids.
#[derive(Clone)]
pub struct RedisProfileStore {
    redis_client: Client,
}

impl RedisProfileStore {
    pub fn new(redis_client: Client) -> Self {
        Self { redis_client }
    }
}

#[async_trait::async_trait]
impl ProfileStore for RedisProfileStore {
    async fn get(&self, id: Uuid) -> AppResult<Option<Profile>> {
        let mut conn = self.redis_client.get_multiplexed_async_connection().await?;
        let stored: Option<String> = conn.get(StoreKey::Profile(id).to_string()).await?;

        match stored {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, profile: &Profile) -> AppResult<()> {
        let json = serde_json::to_string(profile)?;
        let mut conn = self.redis_client.get_multiplexed_async_connection().await?;

        let _: () = put_pipeline(profile.id, json)
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, profile_id = %profile.id, "Redis put failed");
                e
            })?;

        tracing::debug!(profile_id = %profile.id, "Stored profile");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut conn = self.redis_client.get_multiplexed_async_connection().await?;
        let (removed,): (usize,) = delete_pipeline(id).query_async(&mut conn).await?;
        Ok(removed > 0)
    }

    async fn list(&self) -> AppResult<Vec<Profile>> {
        let mut conn = self.redis_client.get_multiplexed_async_connection().await?;
        let ids: Vec<String> = conn.smembers(StoreKey::ProfileIndex.to_string()).await?;

        let mut profiles = Vec::with_capacity(ids.len());
        for id in ids {
            let Ok(id) = Uuid::parse_str(&id) else {
                tracing::warn!(profile_id = %id, "Skipping malformed profile id in index");
                continue;
            };
            let stored: Option<String> = conn.get(StoreKey::Profile(id).to_string()).await?;
            match stored {
                Some(json) => profiles.push(serde_json::from_str(&json)?),
                // Indexed but gone, e.g. deleted by another writer
                None => tracing::warn!(profile_id = %id, "Profile index entry without document"),
            }
        }

        Ok(profiles)
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

// TODO: Exercise RedisProfileStore against a disposable Redis in CI instead of only testing key layout
