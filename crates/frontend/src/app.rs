use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::session::SessionContext;
use crate::shared::config;
use crate::shared::error;
use crate::shared::toast::{ToastHost, ToastService};

#[component]
pub fn App() -> impl IntoView {
    // Базовые URL сервисов резолвятся один раз при старте
    config::init();

    let session = SessionContext::new();
    session.load();
    provide_context(session);

    let toasts = ToastService::new();
    provide_context(toasts);

    // Необработанные ошибки и отклонённые промисы ловятся на уровне окна
    error::install_global_handlers(toasts);

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
