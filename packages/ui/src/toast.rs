//! Toast notifications.
//!
//! [`ToastProvider`] owns the stack and renders it in a corner of the page.
//! Components grab a [`Toasts`] handle with [`use_toasts`]; the handle is also
//! the [`Notifier`] the caregiver profile editor reports to.

use std::time::Duration;

use dioxus::prelude::*;
use profile::{Notice, NoticeLevel, Notifier};

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// How long a toast stays on screen.
const TOAST_TTL: Duration = Duration::from_secs(5);
/// Older toasts are dropped beyond this many.
const MAX_TOASTS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    entries: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastStack {
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        self.entries.push(ToastEntry {
            id: self.next_id,
            notice,
        });
        if self.entries.len() > MAX_TOASTS {
            let excess = self.entries.len() - MAX_TOASTS;
            self.entries.drain(..excess);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }
}

/// Handle for showing toasts. Cheap to copy into closures.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    stack: Signal<ToastStack>,
}

impl Toasts {
    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::success(title, message));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::error(title, message));
    }

    pub fn dismiss(&self, id: u64) {
        let mut stack = self.stack;
        stack.write().dismiss(id);
    }
}

impl Notifier for Toasts {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(title = %notice.title, "{}", notice.message),
            NoticeLevel::Error => tracing::warn!(title = %notice.title, "{}", notice.message),
        }
        let mut stack = self.stack;
        stack.write().push(notice);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let stack = use_signal(ToastStack::default);
    use_context_provider(|| Toasts { stack });
    let entries = stack.read().entries().to_vec();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        {children}
        div {
            class: "toast-viewport",
            role: "status",
            for entry in entries {
                ToastItem { key: "{entry.id}", entry }
            }
        }
    }
}

#[component]
fn ToastItem(entry: ToastEntry) -> Element {
    let toasts = use_toasts();
    let id = entry.id;

    use_future(move || async move {
        sleep(TOAST_TTL).await;
        toasts.dismiss(id);
    });

    let class = match entry.notice.level {
        NoticeLevel::Success => "toast toast--success",
        NoticeLevel::Error => "toast toast--error",
    };

    rsx! {
        div {
            class,
            div { class: "toast-title", "{entry.notice.title}" }
            if !entry.notice.message.is_empty() {
                div { class: "toast-message", "{entry.notice.message}" }
            }
            button {
                class: "toast-close",
                aria_label: "Fechar",
                onclick: move |_| toasts.dismiss(id),
                "×"
            }
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_caps_and_dismisses() {
        let mut stack = ToastStack::default();
        let first = stack.push(Notice::success("a", ""));
        for i in 0..MAX_TOASTS {
            stack.push(Notice::error(format!("e{i}"), ""));
        }
        assert_eq!(stack.entries().len(), MAX_TOASTS);
        assert!(stack.entries().iter().all(|e| e.id != first));

        let last = stack.entries()[MAX_TOASTS - 1].id;
        stack.dismiss(last);
        assert_eq!(stack.entries().len(), MAX_TOASTS - 1);
        stack.dismiss(9999);
        assert_eq!(stack.entries().len(), MAX_TOASTS - 1);
    }
}
