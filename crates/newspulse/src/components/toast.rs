use dioxus::prelude::*;

use newspulse_core::session::{Notice, NoticeKind};

/// How long a toast stays on screen before dismissing itself.
const TOAST_DISMISS_MS: u32 = 4000;

/// One queued notice with its render identity.
#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Handle to the shared notice queue.
///
/// Any component can push a [`Notice`]; [`ToastHost`] renders the queue in
/// arrival order. Each toast auto-dismisses after a few seconds or when the
/// user clicks it away.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new(queue: Signal<Vec<Toast>>, next_id: Signal<u64>) -> Self {
        Self { queue, next_id }
    }

    /// Queues a notice and schedules its auto-dismissal.
    pub fn push(&self, notice: Notice) {
        let mut queue = self.queue;
        let mut next_id = self.next_id;

        let id = next_id() + 1;
        next_id.set(id);
        queue.with_mut(|q| q.push(Toast { id, notice }));

        spawn(async move {
            dismiss_delay().await;
            queue.with_mut(|q| q.retain(|t| t.id != id));
        });
    }

    /// Removes a toast ahead of its timer.
    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.with_mut(|q| q.retain(|t| t.id != id));
    }

    fn entries(&self) -> Vec<Toast> {
        self.queue.read().clone()
    }
}

/// Shared notice queue.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

async fn dismiss_delay() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(TOAST_DISMISS_MS))).await;
}

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "np-toast np-toast--info",
        NoticeKind::Warning => "np-toast np-toast--warning",
        NoticeKind::Error => "np-toast np-toast--error",
    }
}

/// Renders the notice queue as a stack of dismissible toasts.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let rows: Vec<(u64, &'static str, String)> = toasts
        .entries()
        .iter()
        .map(|t| (t.id, toast_class(t.notice.kind), t.notice.message.clone()))
        .collect();

    rsx! {
        div { class: "np-toast-stack", "aria-live": "polite",
            for (id, class, message) in rows {
                div {
                    key: "{id}",
                    class: "{class}",
                    role: "status",
                    span { class: "np-toast-message", "{message}" }
                    button {
                        class: "np-toast-close",
                        "aria-label": "Dismiss notification",
                        onclick: move |_| toasts.dismiss(id),
                        "✕"
                    }
                }
            }
        }
    }
}
