//! JSON file profile store.
//!
//! All profiles live in one JSON object, `{"<user id>": ["Interest", ...]}`.
//! The file is rewritten in full on every save.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use musing_core::domain::InterestSet;
use musing_core::ports::{InterestProfileStore, ProfileStoreError};

type Profiles = BTreeMap<String, InterestSet>;

/// Profile store persisted to a single JSON file.
pub struct FileProfileStore {
    path: PathBuf,
    // serialises read-modify-write cycles within this process
    lock: RwLock<()>,
}

impl FileProfileStore {
    /// The file is created on first save; its parent directory must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Profiles, ProfileStoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Profiles::new()),
            Err(e) => return Err(ProfileStoreError::Connection(e.to_string())),
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Profiles::new());
        }

        serde_json::from_slice(&raw).map_err(|e| ProfileStoreError::Serialization(e.to_string()))
    }

    async fn write_all(&self, profiles: &Profiles) -> Result<(), ProfileStoreError> {
        let body = serde_json::to_vec_pretty(profiles)
            .map_err(|e| ProfileStoreError::Serialization(e.to_string()))?;

        // write to a sibling file first so a crash never leaves half a document
        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, body)
            .await
            .map_err(|e| ProfileStoreError::Operation(e.to_string()))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| ProfileStoreError::Operation(e.to_string()))
    }
}

#[async_trait]
impl InterestProfileStore for FileProfileStore {
    async fn load(&self, user_id: &str) -> Result<InterestSet, ProfileStoreError> {
        let _guard = self.lock.read().await;
        let mut profiles = self.read_all().await?;
        Ok(profiles.remove(user_id).unwrap_or_default())
    }

    async fn save(&self, user_id: &str, interests: &InterestSet) -> Result<(), ProfileStoreError> {
        let _guard = self.lock.write().await;
        let mut profiles = self.read_all().await?;
        profiles.insert(user_id.to_string(), interests.clone());
        self.write_all(&profiles).await?;

        tracing::debug!(user_id = %user_id, path = %self.path.display(), "Interest profile saved");
        Ok(())
    }
}
