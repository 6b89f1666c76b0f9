//! Chat transcript types and the assistant runtime client.
//!
//! The assistant is an externally hosted service reached through a runtime
//! URL. Its internal protocol is not ours; this module defines the minimal
//! request the dashboard sends (the transcript so far plus a readable
//! snapshot of screen state) and the single field it reads back (the reply
//! text). The snapshot keeps the assistant grounded in what the user is
//! currently looking at without giving it write access to anything.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

use crate::client::http_client;
use crate::error::AssistantError;

/// Description attached to the screen-state snapshot sent to the runtime.
pub const RESULTS_CONTEXT_DESCRIPTION: &str = "The state of the searched news topics";

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the assistant transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Read-only snapshot of screen state offered to the assistant.
///
/// `value` is an opaque string (NewsPulse supplies the current result list
/// as JSON); the runtime decides what to make of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadableContext {
    pub description: String,
    pub value: String,
}

impl ReadableContext {
    /// Snapshot describing the current search results.
    pub fn news_results(results_json: String) -> Self {
        Self {
            description: RESULTS_CONTEXT_DESCRIPTION.to_string(),
            value: results_json,
        }
    }
}

/// Client for the hosted assistant runtime.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    runtime: Url,
}

impl AssistantClient {
    pub fn new(runtime: Url) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> &Url {
        &self.runtime
    }

    /// Sends the transcript and screen snapshot, returning the reply text.
    pub async fn ask(
        &self,
        transcript: &[ChatMessage],
        context: &ReadableContext,
    ) -> Result<String, AssistantError> {
        let payload = build_ask_payload(transcript, context);
        let response = http_client()
            .post(self.runtime.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|err| AssistantError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Status(status.as_u16()));
        }

        let body: Value = response.json().await.map_err(|err| {
            if err.is_decode() {
                AssistantError::Shape(err.to_string())
            } else {
                AssistantError::Transport(err.to_string())
            }
        })?;
        parse_reply(&body)
    }
}

fn build_ask_payload(transcript: &[ChatMessage], context: &ReadableContext) -> Value {
    json!({
        "messages": transcript,
        "context": context,
    })
}

fn parse_reply(body: &Value) -> Result<String, AssistantError> {
    body.get("reply")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AssistantError::Shape("missing string field \"reply\"".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_payload_carries_transcript_and_context() {
        let transcript = vec![
            ChatMessage::assistant("Hi!"),
            ChatMessage::user("What happened with fusion this week?"),
        ];
        let context = ReadableContext::news_results("[{\"id\":\"1\"}]".to_string());
        let payload = build_ask_payload(&transcript, &context);

        assert_eq!(payload["messages"][0]["role"], "assistant");
        assert_eq!(payload["messages"][1]["role"], "user");
        assert_eq!(
            payload["messages"][1]["content"],
            "What happened with fusion this week?"
        );
        assert_eq!(payload["context"]["description"], RESULTS_CONTEXT_DESCRIPTION);
        assert_eq!(payload["context"]["value"], "[{\"id\":\"1\"}]");
    }

    #[test]
    fn test_parse_reply_extracts_text() {
        let body = json!({"reply": "Here is a summary."});
        assert_eq!(parse_reply(&body).unwrap(), "Here is a summary.");
    }

    #[test]
    fn test_parse_reply_rejects_missing_field() {
        let err = parse_reply(&json!({"message": "nope"})).unwrap_err();
        assert!(matches!(err, AssistantError::Shape(_)));
    }

    #[test]
    fn test_parse_reply_rejects_non_string_reply() {
        let err = parse_reply(&json!({"reply": 42})).unwrap_err();
        assert!(matches!(err, AssistantError::Shape(_)));
    }
}
