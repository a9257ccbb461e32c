//! Application state - shared across all handlers.

use std::sync::Arc;

use musing_core::ports::{
    InterestProfileStore, PostRepository, RateLimiter, Summarizer, TokenVerifier,
};
use musing_infra::{
    FileProfileStore, HttpSummarizer, InMemoryPostRepository, InMemoryProfileStore,
    SummaryCoordinator,
};

use crate::config::{AppConfig, ProfileStoreKind};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub profiles: Arc<dyn InterestProfileStore>,
    pub summaries: Arc<SummaryCoordinator>,
    /// `None` when sign-in is disabled; every reader is then anonymous.
    pub tokens: Option<Arc<dyn TokenVerifier>>,
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
    pub site_url: String,
}

impl AppState {
    /// State with the given ports and no sign-in or rate limiting.
    pub fn new(
        posts: Arc<dyn PostRepository>,
        profiles: Arc<dyn InterestProfileStore>,
        summarizer: Arc<dyn Summarizer>,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            posts,
            profiles,
            summaries: Arc::new(SummaryCoordinator::new(summarizer)),
            tokens: None,
            rate_limiter: None,
            site_url: site_url.into(),
        }
    }

    pub fn with_token_verifier(mut self, verifier: Arc<dyn TokenVerifier>) -> Self {
        self.tokens = Some(verifier);
        self
    }

    pub fn with_rate_limiter(mut self, limiter: Arc<dyn RateLimiter>) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }

    /// Build the application state with appropriate implementations.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::seeded());
        let profiles = Self::profile_store(&config.profile_store).await;
        let summarizer: Arc<dyn Summarizer> = Arc::new(HttpSummarizer::from_env()?);

        #[allow(unused_mut)]
        let mut state = Self::new(posts, profiles, summarizer, config.site_url.clone());

        #[cfg(feature = "auth")]
        {
            state = state.with_token_verifier(Arc::new(musing_infra::JwtTokenService::from_env()));
        }
        #[cfg(not(feature = "auth"))]
        tracing::warn!("Built without auth feature - all readers are anonymous");

        #[cfg(feature = "rate-limit")]
        {
            let limiter = musing_infra::InMemoryRateLimiter::from_env()?;
            state = state.with_rate_limiter(Arc::new(limiter));
        }

        tracing::info!("Application state initialized");
        Ok(state)
    }

    async fn profile_store(kind: &ProfileStoreKind) -> Arc<dyn InterestProfileStore> {
        match kind {
            ProfileStoreKind::Memory => {
                tracing::info!("Interest profiles kept in memory");
                Arc::new(InMemoryProfileStore::new())
            }
            ProfileStoreKind::File(path) => {
                tracing::info!(path = %path.display(), "Interest profiles stored in JSON file");
                Arc::new(FileProfileStore::new(path.clone()))
            }
            #[cfg(feature = "redis")]
            ProfileStoreKind::Redis => match musing_infra::RedisProfileStore::from_env().await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        "Failed to connect to Redis. Using in-memory profile store."
                    );
                    Arc::new(InMemoryProfileStore::new())
                }
            },
            #[cfg(not(feature = "redis"))]
            ProfileStoreKind::Redis => {
                tracing::warn!("Built without redis feature. Using in-memory profile store.");
                Arc::new(InMemoryProfileStore::new())
            }
        }
    }
}
