//! Search session state machine.
//!
//! A [`SearchSession`] owns everything the dashboard renders: the active
//! topic, the current result list, the selected record, and the in-flight
//! request bookkeeping. It is deliberately transport-free; the frontend
//! performs the actual fetch and feeds the outcome back in.
//!
//! # Staleness
//!
//! Every accepted submission is assigned a monotonically increasing sequence
//! number and returned as a [`SearchTicket`]. Concurrent submissions are
//! allowed, and responses may settle in any order. [`SearchSession::apply`]
//! only accepts the outcome whose ticket matches the most recently issued
//! sequence; anything older is discarded wholesale, including its notices.
//! The session is loading whenever the latest submission has not settled.

use serde_json::json;
use tracing::debug;

use crate::error::FetchError;
use crate::news::NewsItem;

/// User-facing message for a submission with no usable topic.
pub const BLANK_TOPIC_MESSAGE: &str = "Please enter a topic to search";

/// User-facing message for transport failures and error statuses.
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred, please try again.";

/// User-facing message for a response that was not a news array.
pub const BAD_SHAPE_MESSAGE: &str = "Unexpected API response format.";

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A transient, user-facing message produced by session transitions.
///
/// Notices are data, not rendering: the frontend decides how to present
/// them (NewsPulse shows them as auto-dismissing toasts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Proof that a search was accepted, carrying its sequence number and the
/// trimmed topic to fetch.
///
/// Tickets are only minted by [`SearchSession::begin_search`], so a ticket's
/// sequence can never exceed the session's issued counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    topic: String,
}

impl SearchTicket {
    /// Sequence number assigned to this submission.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The trimmed topic this submission searches for.
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

/// State for one dashboard's search lifecycle.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    topic: String,
    results: Vec<NewsItem>,
    selected: Option<NewsItem>,
    issued: u64,
    settled: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts or rejects a submission.
    ///
    /// The raw input is trimmed; a blank topic is rejected with a warning
    /// notice and no state change. An accepted topic becomes the session
    /// topic and receives the next sequence number. Current results and
    /// selection are kept on screen until the outcome arrives.
    pub fn begin_search(&mut self, raw_input: &str) -> Result<SearchTicket, Notice> {
        let topic = raw_input.trim();
        if topic.is_empty() {
            return Err(Notice::warning(BLANK_TOPIC_MESSAGE));
        }
        self.topic = topic.to_string();
        self.issued += 1;
        Ok(SearchTicket {
            seq: self.issued,
            topic: self.topic.clone(),
        })
    }

    /// Settles one submission's outcome.
    ///
    /// Outcomes for any ticket other than the most recently issued one are
    /// discarded without touching results, selection, or notices. For the
    /// current ticket, a success replaces the result list (an empty list
    /// yields an info notice) and a failure clears it (yielding an error
    /// notice). The selection is never modified here.
    pub fn apply(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<NewsItem>, FetchError>,
    ) -> Option<Notice> {
        self.settled = self.settled.max(ticket.seq);
        if ticket.seq != self.issued {
            debug!(
                "discarding stale outcome for '{}' (seq {} superseded by {})",
                ticket.topic, ticket.seq, self.issued
            );
            return None;
        }
        match outcome {
            Ok(items) => {
                let notice = if items.is_empty() {
                    Some(Notice::info(format!(
                        "No news found for \"{}\"",
                        ticket.topic
                    )))
                } else {
                    None
                };
                self.results = items;
                notice
            }
            Err(err) => {
                self.results.clear();
                let message = match err {
                    FetchError::Shape(_) => BAD_SHAPE_MESSAGE,
                    FetchError::Transport(_) | FetchError::Status(_) => FETCH_FAILED_MESSAGE,
                };
                Some(Notice::error(message))
            }
        }
    }

    /// Marks a record as selected for the detail view.
    ///
    /// Selection is by value: it stays valid even if a later search replaces
    /// the result list underneath it.
    pub fn select(&mut self, item: NewsItem) {
        self.selected = Some(item);
    }

    /// Closes the detail view.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The most recently accepted topic.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Current result list, in aggregator order.
    pub fn results(&self) -> &[NewsItem] {
        &self.results
    }

    /// The record currently shown in the detail view, if any.
    pub fn selected(&self) -> Option<&NewsItem> {
        self.selected.as_ref()
    }

    /// True while the most recent submission has not settled.
    pub fn loading(&self) -> bool {
        self.settled < self.issued
    }

    /// Current results serialized as a JSON array string, for observers that
    /// consume session state as text (the assistant's readable context).
    pub fn results_json(&self) -> String {
        json!(self.results).to_string()
    }
}
