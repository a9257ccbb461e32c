//! Post summarization - the language model client and request bookkeeping.

mod coordinator;
mod http;

pub use coordinator::SummaryCoordinator;
pub use http::{HttpSummarizer, SummarizerConfig};
