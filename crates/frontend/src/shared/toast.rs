//! Всплывающие уведомления (toast) с автоскрытием.
//!
//! `ToastService` кладётся в контекст приложения; `ToastHost` монтируется один
//! раз в корне. Уведомление живёт 5 секунд, затем 300 мс проигрывается
//! анимация выхода (CSS-классы `notification--leaving`).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

pub const TOAST_DISMISS_MS: u32 = 5_000;
pub const TOAST_EXIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
    Warning,
}

impl ToastKind {
    fn class_suffix(&self) -> &'static str {
        match self {
            ToastKind::Error => "error",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
        }
    }
}

#[derive(Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    leaving: RwSignal<bool>,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn show(&self, message: &str, kind: ToastKind) {
        let toast = Toast {
            id: Uuid::new_v4(),
            message: message.to_string(),
            kind,
            leaving: RwSignal::new(false),
        };
        let id = toast.id;
        let toasts = self.toasts;
        toasts.update(|list| list.push(toast));

        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            if let Some(toast) = toasts.get_untracked().iter().find(|t| t.id == id) {
                toast.leaving.set(true);
            }
            TimeoutFuture::new(TOAST_EXIT_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn error(&self, message: &str) {
        self.show(message, ToastKind::Error);
    }

    pub fn success(&self, message: &str) {
        self.show(message, ToastKind::Success);
    }

    pub fn warning(&self, message: &str) {
        self.show(message, ToastKind::Warning);
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="notifications">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let leaving = toast.leaving;
                    let suffix = toast.kind.class_suffix();
                    view! {
                        <div class=move || {
                            if leaving.get() {
                                format!("notification notification-{} notification--leaving", suffix)
                            } else {
                                format!("notification notification-{}", suffix)
                            }
                        }>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
