//! Redis profile store with connection management.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use musing_core::domain::InterestSet;
use musing_core::ports::{InterestProfileStore, ProfileStoreError};

const KEY_PREFIX: &str = "user_interests";

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl RedisConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            connect_timeout: Duration::from_secs(
                std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}

/// Profiles stored as JSON arrays under `user_interests:<user id>`.
pub struct RedisProfileStore {
    conn: ConnectionManager,
}

impl RedisProfileStore {
    pub async fn new(config: RedisConfig) -> Result<Self, ProfileStoreError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| ProfileStoreError::Connection(e.to_string()))?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| ProfileStoreError::Connection("Connection timed out".to_string()))?
            .map_err(|e| ProfileStoreError::Connection(e.to_string()))?;

        tracing::info!(url = %config.url, "Connected to Redis profile store");

        Ok(Self { conn })
    }

    /// Create from environment configuration.
    pub async fn from_env() -> Result<Self, ProfileStoreError> {
        Self::new(RedisConfig::from_env()).await
    }

    fn key(user_id: &str) -> String {
        format!("{KEY_PREFIX}:{user_id}")
    }
}

#[async_trait]
impl InterestProfileStore for RedisProfileStore {
    async fn load(&self, user_id: &str) -> Result<InterestSet, ProfileStoreError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn
            .get(Self::key(user_id))
            .await
            .map_err(|e| ProfileStoreError::Operation(e.to_string()))?;

        match raw {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| ProfileStoreError::Serialization(e.to_string())),
            None => Ok(InterestSet::new()),
        }
    }

    async fn save(&self, user_id: &str, interests: &InterestSet) -> Result<(), ProfileStoreError> {
        let json = serde_json::to_string(interests)
            .map_err(|e| ProfileStoreError::Serialization(e.to_string()))?;

        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(Self::key(user_id), json)
            .await
            .map_err(|e| ProfileStoreError::Operation(e.to_string()))
    }
}
