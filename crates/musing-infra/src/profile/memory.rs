//! In-memory profile store - the default when no persistence is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use musing_core::domain::InterestSet;
use musing_core::ports::{InterestProfileStore, ProfileStoreError};

/// Profiles in a `HashMap` behind an async `RwLock`.
///
/// Note: Data is lost on process restart.
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, InterestSet>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InterestProfileStore for InMemoryProfileStore {
    async fn load(&self, user_id: &str) -> Result<InterestSet, ProfileStoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).cloned().unwrap_or_default())
    }

    async fn save(&self, user_id: &str, interests: &InterestSet) -> Result<(), ProfileStoreError> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(user_id.to_string(), interests.clone());
        Ok(())
    }
}
