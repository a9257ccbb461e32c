//! Language model summarization port.

use async_trait::async_trait;

/// Produces a short summary of a post's content.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `content`. Callers strip markup and reject empty content
    /// before getting here.
    async fn summarize(&self, content: &str) -> Result<String, SummarizationError>;
}

/// Summarization failures. None of these reach the reader verbatim.
#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Provider returned an error: {0}")]
    Provider(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}
