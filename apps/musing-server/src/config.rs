//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, bail};
use url::Url;

/// Where interest profiles are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileStoreKind {
    Memory,
    File(PathBuf),
    Redis,
}

/// Application configuration.
///
/// Adapter settings (JWT, summarizer, Redis, rate limit) are read by the
/// adapters' own `from_env` constructors.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Public base URL, used for share links.
    pub site_url: String,
    pub profile_store: ProfileStoreKind,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match var("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => 8080,
        };

        let site_url = var("SITE_URL").unwrap_or_else(|| format!("http://localhost:{port}"));
        let parsed = Url::parse(&site_url).with_context(|| format!("invalid SITE_URL {site_url:?}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("SITE_URL must be an http(s) URL, got {site_url:?}");
        }

        let profile_store = match var("PROFILE_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("memory") => ProfileStoreKind::Memory,
            Some("file") => ProfileStoreKind::File(
                var("PROFILE_STORE_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("data/interests.json")),
            ),
            Some("redis") => ProfileStoreKind::Redis,
            Some(other) => bail!("PROFILE_STORE must be memory, file or redis, got {other:?}"),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            site_url,
            profile_store,
        })
    }
}
