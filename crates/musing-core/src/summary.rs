//! AI summary request tracking.
//!
//! A summary is requested whenever the content being viewed changes. Calls
//! to the language model can resolve out of order, so every request takes a
//! [`Ticket`] and only the latest ticket may commit its result.

use serde::Serialize;

use crate::ports::SummarizationError;

pub const SUMMARY_FAILED_MESSAGE: &str = "Sorry, we couldn't generate a summary at this time.";
pub const NO_CONTENT_MESSAGE: &str = "No content provided for summary.";

/// Build the prompt sent to the language model.
pub fn summary_prompt(content: &str) -> String {
    format!("Summarize the following blog post content in a concise manner:\n\n{content}")
}

/// Sequence number of a summary request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What the summary panel should show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummaryState {
    #[default]
    Idle,
    Pending,
    Ready { summary: String },
    Failed { message: String },
}

/// Outcome of asking the tracker for a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryRequest {
    /// The same content already has a committed summary.
    Cached(String),
    /// Nothing to summarize; the state is already `Failed`.
    NoContent,
    /// Call the summarizer and hand the result back with this ticket.
    Dispatch(Ticket),
    /// The same content is already being summarized under this ticket.
    InFlight(Ticket),
}

/// Last-request-wins bookkeeping for one summary panel.
#[derive(Debug, Default)]
pub struct SummaryTracker {
    latest: u64,
    content: Option<String>,
    state: SummaryState,
}

impl SummaryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in a summary of `content`.
    ///
    /// A dispatch or an empty-content request supersedes every earlier
    /// ticket, so an older in-flight call can never overwrite the result.
    /// Asking again for content that is still pending joins the running
    /// call instead.
    pub fn request(&mut self, content: &str) -> SummaryRequest {
        if self.content.as_deref() == Some(content) {
            match &self.state {
                SummaryState::Ready { summary } => {
                    return SummaryRequest::Cached(summary.clone());
                }
                SummaryState::Pending => return SummaryRequest::InFlight(Ticket(self.latest)),
                _ => {}
            }
        }

        self.latest += 1;
        self.content = Some(content.to_string());

        if content.trim().is_empty() {
            self.state = SummaryState::Failed {
                message: NO_CONTENT_MESSAGE.to_string(),
            };
            return SummaryRequest::NoContent;
        }

        self.state = SummaryState::Pending;
        SummaryRequest::Dispatch(Ticket(self.latest))
    }

    /// Hand back the summarizer's answer. Returns `true` when it was
    /// committed, `false` when a newer request made it stale.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<String, SummarizationError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.state = match outcome {
            Ok(summary) => SummaryState::Ready { summary },
            Err(_) => SummaryState::Failed {
                message: SUMMARY_FAILED_MESSAGE.to_string(),
            },
        };
        true
    }

    /// Forget a pending call that will never resolve, so the next request
    /// dispatches again.
    pub fn abandon(&mut self, ticket: Ticket) {
        if self.is_current(ticket) && self.state == SummaryState::Pending {
            self.state = SummaryState::Idle;
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn state(&self) -> &SummaryState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatched(req: SummaryRequest) -> Ticket {
        match req {
            SummaryRequest::Dispatch(ticket) => ticket,
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn test_prompt_embeds_content() {
        let prompt = summary_prompt("Less is more.");
        assert!(prompt.starts_with("Summarize the following blog post content"));
        assert!(prompt.ends_with("\n\nLess is more."));
    }

    #[test]
    fn test_commit_latest() {
        let mut tracker = SummaryTracker::new();
        let ticket = dispatched(tracker.request("post body"));
        assert_eq!(tracker.state(), &SummaryState::Pending);

        assert!(tracker.resolve(ticket, Ok("short".to_string())));
        assert_eq!(
            tracker.state(),
            &SummaryState::Ready {
                summary: "short".to_string()
            }
        );
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut tracker = SummaryTracker::new();
        let first = dispatched(tracker.request("draft one"));
        let second = dispatched(tracker.request("draft two"));

        assert!(tracker.resolve(second, Ok("summary two".to_string())));
        assert!(!tracker.resolve(first, Ok("summary one".to_string())));

        assert_eq!(
            tracker.state(),
            &SummaryState::Ready {
                summary: "summary two".to_string()
            }
        );
    }

    #[test]
    fn test_stale_failure_does_not_clobber_pending() {
        let mut tracker = SummaryTracker::new();
        let first = dispatched(tracker.request("a"));
        let _second = dispatched(tracker.request("b"));

        assert!(!tracker.resolve(first, Err(SummarizationError::Provider("boom".into()))));
        assert_eq!(tracker.state(), &SummaryState::Pending);
    }

    #[test]
    fn test_failure_is_inline_message() {
        let mut tracker = SummaryTracker::new();
        let ticket = dispatched(tracker.request("body"));

        assert!(tracker.resolve(ticket, Err(SummarizationError::Network("timeout".into()))));
        assert_eq!(
            tracker.state(),
            &SummaryState::Failed {
                message: SUMMARY_FAILED_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_same_content_is_summarized_once() {
        let mut tracker = SummaryTracker::new();
        let ticket = dispatched(tracker.request("body"));
        tracker.resolve(ticket, Ok("sum".to_string()));

        assert_eq!(tracker.request("body"), SummaryRequest::Cached("sum".to_string()));
        assert_eq!(tracker.latest(), 1);

        // changed content needs a fresh call
        let next = dispatched(tracker.request("new body"));
        assert_eq!(next.value(), 2);
    }

    #[test]
    fn test_pending_content_joins_running_call() {
        let mut tracker = SummaryTracker::new();
        let ticket = dispatched(tracker.request("body"));

        assert_eq!(tracker.request("body"), SummaryRequest::InFlight(ticket));
        assert_eq!(tracker.latest(), 1);

        assert!(tracker.resolve(ticket, Ok("sum".to_string())));
        assert_eq!(tracker.request("body"), SummaryRequest::Cached("sum".to_string()));
    }

    #[test]
    fn test_abandoned_call_dispatches_again() {
        let mut tracker = SummaryTracker::new();
        let first = dispatched(tracker.request("body"));
        tracker.abandon(first);

        assert_eq!(tracker.state(), &SummaryState::Idle);
        let second = dispatched(tracker.request("body"));
        assert!(second > first);
    }

    #[test]
    fn test_abandon_ignores_stale_ticket() {
        let mut tracker = SummaryTracker::new();
        let first = dispatched(tracker.request("a"));
        let _second = dispatched(tracker.request("b"));

        tracker.abandon(first);
        assert_eq!(tracker.state(), &SummaryState::Pending);
    }

    #[test]
    fn test_empty_content_fails_without_dispatch() {
        let mut tracker = SummaryTracker::new();
        let stale = dispatched(tracker.request("body"));

        assert_eq!(tracker.request("   "), SummaryRequest::NoContent);
        assert!(!tracker.resolve(stale, Ok("late".to_string())));
        assert_eq!(
            tracker.state(),
            &SummaryState::Failed {
                message: NO_CONTENT_MESSAGE.to_string()
            }
        );
    }
}
