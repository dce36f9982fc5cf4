pub mod profile_store;
pub mod redis;

pub use profile_store::{InMemoryProfileStore, ProfileStore};
pub use self::redis::{create_redis_client, RedisProfileStore};
