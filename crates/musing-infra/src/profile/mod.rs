//! Interest profile stores - in-memory, JSON file and Redis.

mod file;
mod memory;

pub use file::FileProfileStore;
pub use memory::InMemoryProfileStore;

#[cfg(feature = "redis")]
mod redis;
#[cfg(feature = "redis")]
pub use self::redis::{RedisConfig, RedisProfileStore};
