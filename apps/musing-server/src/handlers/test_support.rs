//! Fixtures for handler tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use musing_core::domain::AuthUser;
use musing_core::ports::{AuthError, SummarizationError, Summarizer, TokenVerifier};
use musing_infra::{InMemoryPostRepository, InMemoryProfileStore};

use crate::state::AppState;

pub(crate) const READER_TOKEN: &str = "reader-token";
pub(crate) const READER_ID: &str = "reader-1";

/// Accepts exactly one token.
pub(crate) struct StaticTokens;

impl TokenVerifier for StaticTokens {
    fn verify(&self, token: &str) -> Result<AuthUser, AuthError> {
        if token == READER_TOKEN {
            Ok(AuthUser::new(READER_ID)
                .with_display_name("Reader One")
                .with_email("reader@example.com"))
        } else {
            Err(AuthError::InvalidToken("unknown token".to_string()))
        }
    }
}

pub(crate) struct CannedSummarizer {
    pub reply: Result<&'static str, &'static str>,
    pub calls: AtomicUsize,
}

impl CannedSummarizer {
    pub fn new(reply: Result<&'static str, &'static str>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for CannedSummarizer {
    async fn summarize(&self, _content: &str) -> Result<String, SummarizationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .map(str::to_string)
            .map_err(|e| SummarizationError::Provider(e.to_string()))
    }
}

/// Seeded posts, empty profiles, sign-in via [`READER_TOKEN`].
pub(crate) fn test_state_with(summarizer: Arc<dyn Summarizer>) -> AppState {
    AppState::new(
        Arc::new(InMemoryPostRepository::seeded()),
        Arc::new(InMemoryProfileStore::new()),
        summarizer,
        "http://localhost:8080",
    )
    .with_token_verifier(Arc::new(StaticTokens))
}

pub(crate) fn test_state() -> AppState {
    test_state_with(CannedSummarizer::new(Ok("A short summary.")))
}

pub(crate) fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {READER_TOKEN}"))
}

/// Initialise the full route table over `state`.
macro_rules! test_app {
    ($state:expr) => {{
        let state: $crate::state::AppState = $state;
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(state.clone()))
                .configure(|cfg| $crate::handlers::configure_routes(cfg, &state)),
        )
        .await
    }};
}

pub(crate) use test_app;
