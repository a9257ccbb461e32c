//! Per-post summary bookkeeping shared by every request.
//!
//! Each post slug owns a [`SummaryTracker`]. A summary is generated at most
//! once per content value: concurrent requests for the same content wait on
//! the call already in flight, while a request for changed content supersedes
//! it and the older answer is never committed.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, watch};

use musing_core::markup::strip_markup;
use musing_core::ports::{SummarizationError, Summarizer};
use musing_core::summary::{
    NO_CONTENT_MESSAGE, SUMMARY_FAILED_MESSAGE, SummaryRequest, SummaryState, SummaryTracker,
    Ticket,
};

type Outcome = watch::Receiver<Option<SummaryState>>;

#[derive(Default)]
struct Slot {
    tracker: SummaryTracker,
    in_flight: Option<(Ticket, Outcome)>,
}

enum Step {
    Done(SummaryState),
    Run(Ticket, watch::Sender<Option<SummaryState>>),
    Wait(Ticket, Outcome),
}

pub struct SummaryCoordinator {
    summarizer: Arc<dyn Summarizer>,
    slots: RwLock<HashMap<String, Slot>>,
}

impl SummaryCoordinator {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            summarizer,
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Summarize `content` (markup allowed) on behalf of `key`.
    ///
    /// Always settles to `Ready` or `Failed`. A caller whose call was
    /// superseded still gets its own answer, but the tracker keeps the newer
    /// one.
    pub async fn summarize(&self, key: &str, content: &str) -> SummaryState {
        let plain = strip_markup(content);

        loop {
            match self.step(key, &plain).await {
                Step::Done(state) => return state,
                Step::Run(ticket, tx) => return self.run(key, &plain, ticket, tx).await,
                Step::Wait(ticket, mut rx) => {
                    let shared = rx
                        .wait_for(Option::is_some)
                        .await
                        .ok()
                        .and_then(|state| (*state).clone());
                    if let Some(state) = shared {
                        return state;
                    }

                    // the caller running it went away before answering
                    tracing::debug!(key = %key, ticket = ticket.value(), "Summary call abandoned");
                    if let Some(slot) = self.slots.write().await.get_mut(key) {
                        slot.tracker.abandon(ticket);
                    }
                }
            }
        }
    }

    async fn step(&self, key: &str, plain: &str) -> Step {
        let mut slots = self.slots.write().await;
        let slot = slots.entry(key.to_string()).or_default();

        match slot.tracker.request(plain) {
            SummaryRequest::Cached(summary) => Step::Done(SummaryState::Ready { summary }),
            SummaryRequest::NoContent => Step::Done(SummaryState::Failed {
                message: NO_CONTENT_MESSAGE.to_string(),
            }),
            SummaryRequest::Dispatch(ticket) => {
                let (tx, rx) = watch::channel(None);
                slot.in_flight = Some((ticket, rx));
                Step::Run(ticket, tx)
            }
            SummaryRequest::InFlight(ticket) => match &slot.in_flight {
                Some((running, rx)) if *running == ticket => Step::Wait(ticket, rx.clone()),
                // a closed channel sends the caller round again
                _ => {
                    slot.tracker.abandon(ticket);
                    Step::Wait(ticket, watch::channel(None).1)
                }
            },
        }
    }

    async fn run(
        &self,
        key: &str,
        plain: &str,
        ticket: Ticket,
        tx: watch::Sender<Option<SummaryState>>,
    ) -> SummaryState {
        // no lock held across the provider call
        let outcome = match self.summarizer.summarize(plain).await {
            Ok(summary) if summary.trim().is_empty() => Err(SummarizationError::MalformedResponse(
                "empty summary".to_string(),
            )),
            other => other,
        };

        let own_state = match &outcome {
            Ok(summary) => SummaryState::Ready {
                summary: summary.clone(),
            },
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Summary generation failed");
                SummaryState::Failed {
                    message: SUMMARY_FAILED_MESSAGE.to_string(),
                }
            }
        };

        let mut slots = self.slots.write().await;
        let slot = slots.entry(key.to_string()).or_default();
        if slot.tracker.resolve(ticket, outcome) {
            slot.in_flight = None;
        } else {
            tracing::debug!(key = %key, ticket = ticket.value(), "Discarded stale summary");
        }
        tx.send_replace(Some(own_state.clone()));

        own_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::{Mutex, mpsc, oneshot};

    async fn committed(coordinator: &SummaryCoordinator, key: &str) -> SummaryState {
        let slots = coordinator.slots.read().await;
        slots
            .get(key)
            .map(|slot| slot.tracker.state().clone())
            .unwrap_or_default()
    }

    struct CountingSummarizer {
        calls: AtomicUsize,
        reply: Result<&'static str, &'static str>,
    }

    impl CountingSummarizer {
        fn new(reply: Result<&'static str, &'static str>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                reply,
            })
        }
    }

    #[async_trait]
    impl Summarizer for CountingSummarizer {
        async fn summarize(&self, _content: &str) -> Result<String, SummarizationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .map(str::to_string)
                .map_err(|e| SummarizationError::Provider(e.to_string()))
        }
    }

    /// Holds each call until the test releases the answer for its content.
    struct GatedSummarizer {
        gates: Mutex<HashMap<String, oneshot::Receiver<String>>>,
        started: mpsc::UnboundedSender<String>,
    }

    #[async_trait]
    impl Summarizer for GatedSummarizer {
        async fn summarize(&self, content: &str) -> Result<String, SummarizationError> {
            let gate = self.gates.lock().await.remove(content);
            let _ = self.started.send(content.to_string());
            match gate {
                Some(rx) => rx.await.map_err(|e| SummarizationError::Network(e.to_string())),
                None => Err(SummarizationError::Provider("unexpected content".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_summary_is_generated_once_per_content() {
        let summarizer = CountingSummarizer::new(Ok("calm"));
        let coordinator = SummaryCoordinator::new(summarizer.clone());

        let first = coordinator.summarize("mindful-mornings", "<p>Breathe.</p>").await;
        let second = coordinator.summarize("mindful-mornings", "<p>Breathe.</p>").await;

        let ready = SummaryState::Ready {
            summary: "calm".to_string(),
        };
        assert_eq!(first, ready);
        assert_eq!(second, ready);
        assert_eq!(summarizer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_markup_only_content_short_circuits() {
        let summarizer = CountingSummarizer::new(Ok("unused"));
        let coordinator = SummaryCoordinator::new(summarizer.clone());

        let state = coordinator.summarize("blank", "<p> </p><br/>").await;
        assert_eq!(
            state,
            SummaryState::Failed {
                message: NO_CONTENT_MESSAGE.to_string()
            }
        );
        assert_eq!(summarizer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_is_inline_message() {
        let coordinator = SummaryCoordinator::new(CountingSummarizer::new(Err("quota")));

        let state = coordinator.summarize("slug", "Some words").await;
        assert_eq!(
            state,
            SummaryState::Failed {
                message: SUMMARY_FAILED_MESSAGE.to_string()
            }
        );
        assert_eq!(committed(&coordinator, "slug").await, state);
    }

    #[tokio::test]
    async fn test_empty_provider_answer_is_failure() {
        let coordinator = SummaryCoordinator::new(CountingSummarizer::new(Ok("   ")));

        let state = coordinator.summarize("slug", "Some words").await;
        assert!(matches!(state, SummaryState::Failed { .. }));
    }

    #[tokio::test]
    async fn test_stale_answer_is_not_committed() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let (started_tx, mut started_rx) = mpsc::unbounded_channel();

        let gates = HashMap::from([
            ("draft one".to_string(), first_rx),
            ("draft two".to_string(), second_rx),
        ]);
        let coordinator = Arc::new(SummaryCoordinator::new(Arc::new(GatedSummarizer {
            gates: Mutex::new(gates),
            started: started_tx,
        })));

        let older = tokio::spawn({
            let coordinator = coordinator.clone();
            async move { coordinator.summarize("post", "draft one").await }
        });
        assert_eq!(started_rx.recv().await.as_deref(), Some("draft one"));

        let newer = tokio::spawn({
            let coordinator = coordinator.clone();
            async move { coordinator.summarize("post", "draft two").await }
        });
        assert_eq!(started_rx.recv().await.as_deref(), Some("draft two"));

        second_tx.send("summary two".to_string()).unwrap();
        let newer_state = newer.await.unwrap();

        first_tx.send("summary one".to_string()).unwrap();
        let older_state = older.await.unwrap();

        assert_eq!(
            newer_state,
            SummaryState::Ready {
                summary: "summary two".to_string()
            }
        );
        assert_eq!(
            older_state,
            SummaryState::Ready {
                summary: "summary one".to_string()
            }
        );
        assert_eq!(committed(&coordinator, "post").await, newer_state);
    }

    /// Answers after a short delay; the first call can be told to hang.
    struct SlowSummarizer {
        calls: AtomicUsize,
        hang_first: bool,
    }

    #[async_trait]
    impl Summarizer for SlowSummarizer {
        async fn summarize(&self, _content: &str) -> Result<String, SummarizationError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.hang_first && call == 0 {
                std::future::pending::<()>().await;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok("shared".to_string())
        }
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_one_call() {
        let summarizer = Arc::new(SlowSummarizer {
            calls: AtomicUsize::new(0),
            hang_first: false,
        });
        let coordinator = SummaryCoordinator::new(summarizer.clone());

        let (first, second) = tokio::join!(
            coordinator.summarize("p", "<p>body</p>"),
            coordinator.summarize("p", "<p>body</p>"),
        );

        let ready = SummaryState::Ready {
            summary: "shared".to_string(),
        };
        assert_eq!(first, ready);
        assert_eq!(second, ready);
        assert_eq!(summarizer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancelled_call_is_retried() {
        let summarizer = Arc::new(SlowSummarizer {
            calls: AtomicUsize::new(0),
            hang_first: true,
        });
        let coordinator = Arc::new(SummaryCoordinator::new(summarizer.clone()));

        let hung = tokio::spawn({
            let coordinator = coordinator.clone();
            async move { coordinator.summarize("p", "body").await }
        });
        while summarizer.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        hung.abort();
        assert!(hung.await.is_err());

        let state = coordinator.summarize("p", "body").await;
        assert_eq!(
            state,
            SummaryState::Ready {
                summary: "shared".to_string()
            }
        );
        assert_eq!(summarizer.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unknown_key_is_idle() {
        let coordinator = SummaryCoordinator::new(CountingSummarizer::new(Ok("x")));
        assert_eq!(committed(&coordinator, "nothing").await, SummaryState::Idle);
    }
}
