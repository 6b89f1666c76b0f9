//! Error types for newspulse-core.
//!
//! This module defines error types used across the core library, covering
//! news fetches, history recording, and assistant runtime calls. All variants
//! carry owned strings so errors stay cheap to clone into UI state.

use thiserror::Error;

/// Errors that can occur while fetching news results.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Request never produced an HTTP response (network failure, timeout)
    #[error("Request failed: {0}")]
    Transport(String),
    /// Service responded with a non-success HTTP status
    #[error("News service returned status {0}")]
    Status(u16),
    /// Response arrived but its body was not the expected news array
    #[error("Unexpected response shape: {0}")]
    Shape(String),
}

/// Errors that can occur while recording a search to the history service.
#[derive(Debug, Clone, Error)]
pub enum HistoryError {
    /// Request never produced an HTTP response
    #[error("Request failed: {0}")]
    Transport(String),
    /// History service responded with a non-success HTTP status
    #[error("History service returned status {0}")]
    Status(u16),
}

/// Errors that can occur while calling the assistant runtime.
#[derive(Debug, Clone, Error)]
pub enum AssistantError {
    /// Request never produced an HTTP response
    #[error("Request failed: {0}")]
    Transport(String),
    /// Runtime responded with a non-success HTTP status
    #[error("Assistant runtime returned status {0}")]
    Status(u16),
    /// Runtime responded but the reply payload was malformed
    #[error("Unexpected reply shape: {0}")]
    Shape(String),
}
