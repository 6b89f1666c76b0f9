//! NewsPulse - AI news search dashboard.
//!
//! A cross-platform single-page dashboard: the user types a topic, the app
//! fetches matching news from a remote aggregator and renders them as cards,
//! with a detail overlay per story and a chat assistant layered on top.
//!
//! # Architecture
//!
//! - **State**: one `SearchSession` (from `newspulse-core`) owns the topic,
//!   results, selection, and request sequencing
//! - **Transport**: `NewsClient` and `AssistantClient` talk to the external
//!   collaborators; the UI never constructs requests itself
//! - **Notices**: session transitions emit notices rendered as toasts
//!
//! # Platform Support
//!
//! - **Web (WASM)**: browser fetch-backed HTTP
//! - **Desktop/Mobile**: hyper + rustls-backed HTTP

#![forbid(unsafe_code)]

pub mod components;
pub mod utils;
