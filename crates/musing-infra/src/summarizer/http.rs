//! Summarizer backed by a Gemini-style `generateContent` HTTP endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use musing_core::ports::{SummarizationError, Summarizer};
use musing_core::summary::summary_prompt;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Language model client configuration.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Without a key every call fails fast and readers see the inline error.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Whole-request timeout; there is no retry.
    pub timeout: Duration,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl SummarizerConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("SUMMARIZER_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: std::env::var("SUMMARIZER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("SUMMARIZER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(
                std::env::var("SUMMARIZER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Summarizer calling a hosted language model over HTTPS.
pub struct HttpSummarizer {
    client: HttpClient,
    config: SummarizerConfig,
}

impl HttpSummarizer {
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizationError> {
        let client = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SummarizationError::Network(e.to_string()))?;

        if config.api_key.is_none() {
            tracing::warn!("SUMMARIZER_API_KEY not set; AI summaries are disabled");
        }

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, SummarizationError> {
        Self::new(SummarizerConfig::from_env())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, content: &str) -> Result<String, SummarizationError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(SummarizationError::Provider("no API key configured".to_string()));
        };

        let prompt = summary_prompt(content);
        let request = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: &prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizationError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizationError::Provider(format!("{status}: {body}")));
        }

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| SummarizationError::MalformedResponse(e.to_string()))?;

        let summary = result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
            .unwrap_or_default();

        let summary = summary.trim();
        if summary.is_empty() {
            return Err(SummarizationError::MalformedResponse(
                "response carried no summary text".to_string(),
            ));
        }

        tracing::debug!(model = %self.config.model, chars = summary.len(), "Summary generated");
        Ok(summary.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn summarizer_for(server: &MockServer) -> HttpSummarizer {
        HttpSummarizer::new(SummarizerConfig {
            api_key: Some("test-key".to_string()),
            model: "test-model".to_string(),
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_summarize_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/test-model:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_string_contains("Summarize the following blog post content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "  Less stuff, more calm. " }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let summary = summarizer_for(&server).summarize("Owning less.").await.unwrap();
        assert_eq!(summary, "Less stuff, more calm.");
    }

    #[tokio::test]
    async fn test_provider_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let err = summarizer_for(&server).summarize("text").await.unwrap_err();
        assert!(matches!(err, SummarizationError::Provider(ref msg) if msg.contains("quota")));
    }

    #[tokio::test]
    async fn test_empty_candidates_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
            )
            .mount(&server)
            .await;

        let err = summarizer_for(&server).summarize("text").await.unwrap_err();
        assert!(matches!(err, SummarizationError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_api_key_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let summarizer = HttpSummarizer::new(SummarizerConfig {
            base_url: server.uri(),
            ..SummarizerConfig::default()
        })
        .unwrap();

        assert!(matches!(
            summarizer.summarize("text").await,
            Err(SummarizationError::Provider(_))
        ));
    }
}
