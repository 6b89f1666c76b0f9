//! End-to-end integration tests for the search lifecycle.
//!
//! These tests exercise the full workflow the dashboard drives:
//! 1. Submission: raw input → validation → ticket
//! 2. Settlement: decoded response body → shape validation → session apply
//! 3. Presentation: result list, selection, notices, loading flag
//!
//! The HTTP layer itself is exercised only down to body parsing; the two
//! collaborators are external services with no test doubles in this repo.

use newspulse_core::assistant::{ChatMessage, ReadableContext, RESULTS_CONTEXT_DESCRIPTION};
use newspulse_core::error::FetchError;
use newspulse_core::news::{parse_news_body, NewsItem};
use newspulse_core::session::{NoticeKind, SearchSession};
use serde_json::json;

// ============================================================================
// Test Fixtures
// ============================================================================

fn record(id: &str, title: &str, content: &str) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    }
}

/// A response body the aggregator could plausibly return for "climate change".
fn climate_body() -> serde_json::Value {
    json!([
        {
            "id": "cc-101",
            "title": "Heatwave records fall across three continents",
            "content": "Meteorological agencies confirmed new seasonal records this week."
        },
        {
            "id": "cc-102",
            "title": "Carbon capture pilot clears funding round",
            "content": "The project aims to store a megaton of CO2 per year by 2030."
        }
    ])
}

// ============================================================================
// Full Search Lifecycle
// ============================================================================

#[test]
fn test_search_select_and_clear_flow() {
    let mut session = SearchSession::new();

    let ticket = session.begin_search("climate change").unwrap();
    assert!(session.loading());

    let items = parse_news_body(climate_body()).unwrap();
    let notice = session.apply(&ticket, Ok(items));
    assert!(notice.is_none());
    assert!(!session.loading());
    assert_eq!(session.results().len(), 2);

    let picked = session.results()[1].clone();
    session.select(picked);
    assert_eq!(session.selected().unwrap().id, "cc-102");
    assert!(session.selected().unwrap().content.contains("megaton"));

    session.clear_selection();
    assert!(session.selected().is_none());
    assert_eq!(session.results().len(), 2);
}

#[test]
fn test_single_record_search_shows_and_closes_detail() {
    let mut session = SearchSession::new();
    let ticket = session.begin_search("climate change").unwrap();

    let items = parse_news_body(json!([{"id": "1", "title": "A", "content": "B"}])).unwrap();
    session.apply(&ticket, Ok(items));
    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results()[0].title, "A");

    session.select(session.results()[0].clone());
    assert_eq!(session.selected().unwrap().content, "B");

    session.clear_selection();
    assert!(session.selected().is_none());
}

#[test]
fn test_malformed_body_surfaces_format_notice() {
    let mut session = SearchSession::new();
    let ticket = session.begin_search("climate change").unwrap();

    let outcome = parse_news_body(json!({"error": "rate limited"}));
    assert!(matches!(outcome, Err(FetchError::Shape(_))));

    let notice = session.apply(&ticket, outcome).unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Unexpected API response format.");
    assert!(session.results().is_empty());
    assert!(!session.loading());
}

#[test]
fn test_failed_fetch_then_retry_recovers() {
    let mut session = SearchSession::new();

    let ticket = session.begin_search("grid storage").unwrap();
    let notice = session
        .apply(&ticket, Err(FetchError::Transport("dns failure".into())))
        .unwrap();
    assert_eq!(notice.message, "An error occurred, please try again.");
    assert!(session.results().is_empty());

    // Same topic, new submission. Nothing about the failure blocks a retry.
    let ticket = session.begin_search("grid storage").unwrap();
    session.apply(&ticket, Ok(vec![record("g-1", "Recovered", "ok")]));
    assert!(!session.loading());
    assert_eq!(session.results()[0].title, "Recovered");
}

#[test]
fn test_rapid_resubmission_keeps_only_latest_outcome() {
    let mut session = SearchSession::new();

    let first = session.begin_search("solar").unwrap();
    let second = session.begin_search("wind").unwrap();
    let third = session.begin_search("hydro").unwrap();
    assert_eq!(session.topic(), "hydro");
    assert!(session.loading());

    // Outcomes settle out of order; only the third may touch the session.
    assert!(session
        .apply(&second, Ok(vec![record("w-1", "Wind", "w")]))
        .is_none());
    assert!(session.results().is_empty());
    assert!(session.loading());

    session.apply(&third, Ok(vec![record("h-1", "Hydro", "h")]));
    assert!(!session.loading());
    assert_eq!(session.results()[0].title, "Hydro");

    assert!(session
        .apply(&first, Err(FetchError::Status(504)))
        .is_none());
    assert_eq!(session.results()[0].title, "Hydro");
    assert!(!session.loading());
}

#[test]
fn test_selection_outlives_the_batch_it_came_from() {
    let mut session = SearchSession::new();

    let ticket = session.begin_search("climate change").unwrap();
    session.apply(&ticket, Ok(parse_news_body(climate_body()).unwrap()));
    session.select(session.results()[0].clone());

    let ticket = session.begin_search("fusion").unwrap();
    session.apply(&ticket, Ok(vec![record("f-1", "Fusion", "f")]));

    // The detail view still shows the old record until explicitly closed.
    assert_eq!(session.selected().unwrap().id, "cc-101");
    assert_eq!(session.results()[0].id, "f-1");
}

// ============================================================================
// Assistant Context
// ============================================================================

#[test]
fn test_readable_context_tracks_current_results() {
    let mut session = SearchSession::new();
    let ticket = session.begin_search("climate change").unwrap();
    session.apply(&ticket, Ok(parse_news_body(climate_body()).unwrap()));

    let context = ReadableContext::news_results(session.results_json());
    assert_eq!(context.description, RESULTS_CONTEXT_DESCRIPTION);

    let value: serde_json::Value = serde_json::from_str(&context.value).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["id"], "cc-101");

    // A transcript built alongside the context serializes with lowercase roles.
    let transcript = vec![ChatMessage::user("Summarize these stories")];
    let wire = serde_json::to_value(&transcript).unwrap();
    assert_eq!(wire[0]["role"], "user");
}

#[test]
fn test_readable_context_is_empty_array_before_first_search() {
    let session = SearchSession::new();
    let context = ReadableContext::news_results(session.results_json());
    assert_eq!(context.value, "[]");
}
