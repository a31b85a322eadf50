use crate::shared::config::config;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// Shown when the backend gives no explanation of its own
pub const FALLBACK_ERROR: &str = "Something went wrong. Please try again.";

pub fn error_text(message: Option<&str>) -> String {
    match message.map(str::trim) {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => FALLBACK_ERROR.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub text: String,
}

/// Toast stack shared through context
#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<Notice>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    /// `message` may be empty; the generic fallback is shown then
    pub fn error(&self, message: Option<&str>) {
        self.push(NoticeKind::Error, error_text(message));
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, text: String) {
        if kind == NoticeKind::Error {
            log::warn!("notification: {}", text);
        }
        let id = Uuid::new_v4();
        self.items.update(|items| items.push(Notice { id, kind, text }));

        let this = *self;
        let delay = config().notifications.dismiss_after_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            this.dismiss(id);
        });
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not provided in context")
}

#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-stack">
            <For
                each=move || notifications.items.get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    let class = match notice.kind {
                        NoticeKind::Success => "toast toast--success",
                        NoticeKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status">
                            <span>{notice.text}</span>
                            <button class="toast__close" on:click=move |_| notifications.dismiss(id) title="Dismiss">
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_text_fallback() {
        assert_eq!(error_text(None), FALLBACK_ERROR);
        assert_eq!(error_text(Some("   ")), FALLBACK_ERROR);
        assert_eq!(error_text(Some("Slug already taken")), "Slug already taken");
    }
}
