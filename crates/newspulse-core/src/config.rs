//! Service endpoint configuration.
//!
//! NewsPulse talks to two deployments: the news aggregator (search results)
//! and the dashboard backend (search history and the assistant runtime).
//! This module resolves the route for each operation once, up front, so the
//! rest of the crate works with already-validated [`Url`]s.

use url::Url;

/// Production news aggregator deployment.
pub const NEWS_SERVICE_BASE: &str = "https://news-aggregator-production-a8fd.up.railway.app";

/// Production dashboard backend (history + assistant runtime).
pub const DASHBOARD_SERVICE_BASE: &str = "https://news-pulse-virid.vercel.app";

/// Route on the news aggregator that performs a topic search.
pub const NEWS_SEARCH_PATH: &str = "/api/get-news";

/// Route on the dashboard backend that records a searched topic.
pub const HISTORY_PATH: &str = "/api/history";

/// Route on the dashboard backend that answers assistant chat requests.
pub const ASSISTANT_RUNTIME_PATH: &str = "/api/copilotkit";

/// Fully-resolved service endpoints.
///
/// Bases are treated as origins: the well-known route paths are joined onto
/// them at construction time, so a malformed base surfaces immediately
/// instead of on the first request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    news_search: Url,
    history: Url,
    assistant_runtime: Url,
}

impl Endpoints {
    /// Resolves all endpoints from an aggregator base and a dashboard base.
    pub fn new(news_base: &Url, dashboard_base: &Url) -> Result<Self, url::ParseError> {
        Ok(Self {
            news_search: news_base.join(NEWS_SEARCH_PATH)?,
            history: dashboard_base.join(HISTORY_PATH)?,
            assistant_runtime: dashboard_base.join(ASSISTANT_RUNTIME_PATH)?,
        })
    }

    /// Endpoint that accepts a topic and returns matching news records.
    pub fn news_search(&self) -> &Url {
        &self.news_search
    }

    /// Endpoint that records a searched topic in the user's history.
    pub fn history(&self) -> &Url {
        &self.history
    }

    /// Endpoint that answers assistant chat requests.
    pub fn assistant_runtime(&self) -> &Url {
        &self.assistant_runtime
    }
}

impl Default for Endpoints {
    /// Production endpoints. The base constants are known-valid URLs, so
    /// parsing them cannot fail.
    fn default() -> Self {
        let news_base = Url::parse(NEWS_SERVICE_BASE).expect("news service base URL is valid");
        let dashboard_base =
            Url::parse(DASHBOARD_SERVICE_BASE).expect("dashboard service base URL is valid");
        Self::new(&news_base, &dashboard_base).expect("service route paths are valid")
    }
}
