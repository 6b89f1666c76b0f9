use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use newspulse_core::assistant::{ChatMessage, Role};

use crate::components::{use_assistant_client, use_news_feed};

const ASSISTANT_TITLE: &str = "News Assistant";
const ASSISTANT_GREETING: &str = "Hi! 👋 Need help understanding a news topic?";
const ASSISTANT_FALLBACK: &str = "Sorry, I could not reach the assistant right now. Please try again.";

// Messages for assistant coroutine
enum AssistantMessage {
    Ask(String), // question text
}

/// Floating assistant popup layered over the dashboard.
///
/// Questions are answered by the hosted runtime. Every request carries the
/// transcript so far plus a read-only snapshot of the current results, taken
/// at ask time, so answers track what the user is looking at.
#[component]
pub fn AssistantPopup() -> Element {
    let client = use_assistant_client();
    let feed = use_news_feed();

    let mut open = use_signal(|| false);
    let draft = use_signal(String::new);
    let transcript = use_signal(|| vec![ChatMessage::assistant(ASSISTANT_GREETING)]);
    let thinking = use_signal(|| false);

    // Assistant coroutine - answers questions strictly in order
    let ask_task = use_coroutine({
        let mut transcript_signal = transcript;
        let mut thinking_signal = thinking;
        let client = client.clone();

        move |mut rx: UnboundedReceiver<AssistantMessage>| {
            let client = client.clone();
            async move {
                while let Some(AssistantMessage::Ask(text)) = rx.next().await {
                    info!("asking assistant: '{}'", text);
                    thinking_signal.set(true);
                    transcript_signal.with_mut(|t| t.push(ChatMessage::user(text)));

                    let history = transcript_signal.read().clone();
                    let context = feed.readable_context();

                    let reply = match client.ask(&history, &context).await {
                        Ok(reply) => reply,
                        Err(err) => {
                            error!("assistant request failed: {}", err);
                            ASSISTANT_FALLBACK.to_string()
                        }
                    };

                    transcript_signal.with_mut(|t| t.push(ChatMessage::assistant(reply)));
                    thinking_signal.set(false);
                }
            }
        }
    });

    let mut draft_signal = draft;
    let mut submit = move || {
        if thinking() {
            return;
        }
        let text = draft_signal.read().trim().to_string();
        if text.is_empty() {
            return;
        }
        draft_signal.set(String::new());
        ask_task.send(AssistantMessage::Ask(text));
    };

    rsx! {
        div { class: "np-assistant",
            if open() {
                div { class: "np-assistant-panel",
                    header { class: "np-assistant-header",
                        span { class: "np-assistant-title", "{ASSISTANT_TITLE}" }
                        button {
                            class: "np-icon-button",
                            "aria-label": "Close assistant",
                            onclick: move |_| open.set(false),
                            "✕"
                        }
                    }

                    div { class: "np-assistant-messages",
                        for (idx, message) in transcript.read().iter().enumerate() {
                            ChatBubble { key: "{idx}", message: message.clone() }
                        }
                        if thinking() {
                            div { class: "np-chat-bubble np-chat-bubble--assistant np-chat-bubble--thinking",
                                "Thinking…"
                            }
                        }
                    }

                    div { class: "np-assistant-input-row",
                        input {
                            class: "np-assistant-input",
                            r#type: "text",
                            placeholder: "Ask about these stories…",
                            value: "{draft}",
                            oninput: move |evt| draft_signal.set(evt.value()),
                            onkeypress: move |evt: KeyboardEvent| {
                                if evt.key() == Key::Enter {
                                    submit();
                                }
                            },
                        }
                        button {
                            class: "np-btn np-btn--send",
                            disabled: thinking(),
                            onclick: move |_| submit(),
                            "Send"
                        }
                    }
                }
            } else {
                button {
                    class: "np-assistant-launcher",
                    "aria-label": "Open the news assistant",
                    onclick: move |_| open.set(true),
                    "💬"
                }
            }
        }
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> Element {
    let class = match message.role {
        Role::User => "np-chat-bubble np-chat-bubble--user",
        Role::Assistant => "np-chat-bubble np-chat-bubble--assistant",
    };

    rsx! {
        div { class: "{class}",
            p { class: "np-chat-text", "{message.content}" }
        }
    }
}
