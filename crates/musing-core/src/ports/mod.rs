//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod profile;
mod rate_limit;
mod repository;
mod summarizer;

pub use auth::{AuthError, TokenVerifier};
pub use profile::{InterestProfileStore, ProfileStoreError};
pub use rate_limit::{RateLimitError, RateLimitResult, RateLimiter};
pub use repository::PostRepository;
pub use summarizer::{SummarizationError, Summarizer};
