//! HTTP client for the news aggregator and history services.
//!
//! This module wraps reqwest to talk to the two dashboard collaborators.
//! reqwest works on both native and WASM platforms:
//! - Native: Uses hyper with rustls-tls for HTTPS
//! - WASM: Uses browser fetch() API internally
//!
//! The HTTP client is pooled for connection reuse, so repeated searches
//! against the same services do not pay connection setup every time.

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::Endpoints;
use crate::error::{FetchError, HistoryError};
use crate::news::{parse_news_body, NewsItem};

/// Global HTTP client for connection pooling.
///
/// reqwest::Client handles connection pooling internally, so reusing a single
/// client across requests is much more efficient than creating one per
/// request. Timeouts and pool limits are native-only knobs; on WASM the
/// browser owns the connection lifecycle.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .user_agent("NewsPulse/0.1.0 (news dashboard)")
            .timeout(std::time::Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    }
    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
});

/// Shared pooled client for other core modules that issue requests.
pub(crate) fn http_client() -> &'static reqwest::Client {
    &HTTP_CLIENT
}

/// JSON body both collaborators accept: `{"topic": "..."}`.
#[derive(Debug, Serialize)]
struct TopicPayload<'a> {
    topic: &'a str,
}

/// Client for the news aggregator and the history recorder.
///
/// Holds resolved [`Endpoints`] only; the underlying HTTP client is shared
/// and pooled process-wide.
#[derive(Debug, Clone)]
pub struct NewsClient {
    endpoints: Endpoints,
}

impl NewsClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetches news records for a topic.
    ///
    /// Distinguishes three failure classes: the request never produced a
    /// response ([`FetchError::Transport`]), the service answered with a
    /// non-success status ([`FetchError::Status`]), or the body was not a
    /// news array ([`FetchError::Shape`], which also covers undecodable
    /// JSON).
    pub async fn fetch_news(&self, topic: &str) -> Result<Vec<NewsItem>, FetchError> {
        let response = http_client()
            .post(self.endpoints.news_search().clone())
            .json(&TopicPayload { topic })
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        debug!("news search for '{}' returned status {}", topic, status);
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: Value = response.json().await.map_err(|err| {
            if err.is_decode() {
                FetchError::Shape(err.to_string())
            } else {
                FetchError::Transport(err.to_string())
            }
        })?;
        parse_news_body(body)
    }

    /// Records a searched topic in the user's history.
    ///
    /// Best-effort by contract: callers fire this without blocking the
    /// search flow on it. Success is any 2xx status; the response body is
    /// ignored.
    pub async fn record_history(&self, topic: &str) -> Result<(), HistoryError> {
        let response = http_client()
            .post(self.endpoints.history().clone())
            .json(&TopicPayload { topic })
            .send()
            .await
            .map_err(|err| HistoryError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HistoryError::Status(status.as_u16()));
        }
        Ok(())
    }
}
