//! Tracing subscriber setup for the server.

use std::env;

use anyhow::bail;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,musing_server=debug,musing_infra=debug";

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, coloured; for local runs.
    Pretty,
    /// One line per event.
    Compact,
    /// Newline-delimited JSON for log shippers.
    Json,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub format: LogFormat,
    pub service_name: String,
}

impl TelemetryConfig {
    /// Read `LOG_FORMAT` and `SERVICE_NAME`. The filter itself comes from
    /// `RUST_LOG` when set.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let format = match var("LOG_FORMAT").map(|v| v.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("compact") => LogFormat::Compact,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("LOG_FORMAT must be pretty, compact or json, got {other:?}"),
        };

        Ok(Self {
            format,
            service_name: var("SERVICE_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| "musing-api".to_string()),
        })
    }
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_telemetry(config: &TelemetryConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .init(),
    }

    tracing::info!(
        service = %config.service_name,
        format = ?config.format,
        "Logging initialized"
    );
}
