//! # NewsPulse Core
//!
//! Platform-independent library for news search, session state, and the
//! dashboard assistant.
//!
//! This crate provides the domain logic used by the NewsPulse dashboard,
//! designed to be reusable across different frontends (web, desktop, mobile).
//! It contains no UI code and no framework dependencies.
//!
//! ## Modules
//!
//! - [`session`] - Search session state machine (results, selection, staleness)
//! - [`news`] - News record model and response-shape validation
//! - [`client`] - HTTP client for the news aggregator and history services
//! - [`assistant`] - Chat transcript types and the assistant runtime client
//! - [`config`] - Service endpoint configuration
//! - [`error`] - Error types for fetch, history, and assistant operations

#![forbid(unsafe_code)]

pub mod assistant;
pub mod client;
pub mod config;
pub mod error;
pub mod news;
pub mod session;
