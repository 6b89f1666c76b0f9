//! News record model and response-shape validation.
//!
//! The aggregator replies with a JSON array of news records. Anything else,
//! including an object-wrapped list or records missing required fields, is
//! rejected as a shape error so the UI can surface a format notice instead
//! of rendering garbage.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;

/// A single news record returned by the aggregator.
///
/// The `id` is the aggregator's stable identifier for the record and is used
/// as the render key for result lists. Unknown fields in the wire record are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Validates a decoded response body and extracts the news records.
///
/// The body must be a JSON array. Each element must carry `id`, `title`, and
/// `content` as strings. An empty array is a valid, empty result set.
pub fn parse_news_body(body: Value) -> Result<Vec<NewsItem>, FetchError> {
    if !body.is_array() {
        return Err(FetchError::Shape(format!(
            "expected a JSON array of news records, got {}",
            json_type_name(&body)
        )));
    }
    serde_json::from_value(body).map_err(|err| FetchError::Shape(err.to_string()))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_array_of_records() {
        let body = json!([
            {"id": "1", "title": "Grid storage milestone", "content": "Battery costs fell again."},
            {"id": "2", "title": "Fusion pilot funded", "content": "A new pilot plant was announced."},
        ]);
        let items = parse_news_body(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[1].title, "Fusion pilot funded");
    }

    #[test]
    fn test_parse_empty_array_is_empty_result() {
        let items = parse_news_body(json!([])).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let body = json!([
            {"id": "1", "title": "T", "content": "C", "source": "wire", "score": 0.9},
        ]);
        let items = parse_news_body(body).unwrap();
        assert_eq!(items[0].title, "T");
    }

    #[test]
    fn test_parse_rejects_object_body() {
        let err = parse_news_body(json!({"articles": []})).unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_parse_rejects_null_body() {
        let err = parse_news_body(Value::Null).unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));
    }

    #[test]
    fn test_parse_rejects_record_missing_fields() {
        let body = json!([{"id": "1", "title": "No content field"}]);
        assert!(matches!(
            parse_news_body(body),
            Err(FetchError::Shape(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_string_id() {
        let body = json!([{"id": 7, "title": "T", "content": "C"}]);
        assert!(matches!(
            parse_news_body(body),
            Err(FetchError::Shape(_))
        ));
    }
}
