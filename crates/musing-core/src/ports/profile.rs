//! Interest profile storage port.

use async_trait::async_trait;

use crate::domain::InterestSet;

/// Per-user interest profile persistence, keyed by the identity provider's
/// user id.
#[async_trait]
pub trait InterestProfileStore: Send + Sync {
    /// Load a user's interests. A user with no stored profile has an empty
    /// set.
    async fn load(&self, user_id: &str) -> Result<InterestSet, ProfileStoreError>;

    /// Replace a user's interests.
    async fn save(&self, user_id: &str, interests: &InterestSet) -> Result<(), ProfileStoreError>;
}

/// Profile store errors.
#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
