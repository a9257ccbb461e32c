//! # Musing Infrastructure
//!
//! Concrete implementations of the ports defined in `musing-core`:
//! post storage, interest profile stores, the language model client and
//! identity token verification.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `auth` - JWT identity tokens
//! - `rate-limit` - Rate limiting via governor
//! - `redis` - Redis-backed interest profiles

pub mod profile;
pub mod repository;
pub mod summarizer;

#[cfg(feature = "auth")]
pub mod auth;

#[cfg(feature = "rate-limit")]
pub mod rate_limit;

// Re-exports - In-Memory
pub use profile::{FileProfileStore, InMemoryProfileStore};
pub use repository::InMemoryPostRepository;
pub use summarizer::{HttpSummarizer, SummarizerConfig, SummaryCoordinator};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};

#[cfg(feature = "rate-limit")]
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use profile::{RedisConfig, RedisProfileStore};
