//! Классификация ошибок и глобальные обработчики.
//!
//! Любая пойманная ошибка сводится к структурированной записи с локализованным
//! сообщением для пользователя; классификация — эвристики по тексту ошибки.

use chrono::{SecondsFormat, Utc};
use serde_json::json;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::shared::logger;
use crate::shared::toast::ToastService;

pub const MSG_GENERIC: &str = "Произошла ошибка. Пожалуйста, попробуйте позже.";
pub const MSG_NETWORK: &str = "Ошибка подключения к серверу. Проверьте интернет соединение.";
pub const MSG_BAD_RESPONSE: &str = "Ошибка при обработке ответа сервера.";
pub const MSG_VALIDATION: &str = "Ошибка валидации данных.";
pub const MSG_RELOAD: &str = "Произошла ошибка. Пожалуйста, перезагрузите страницу.";
pub const MSG_FATAL_RELOAD: &str =
    "Произошла критическая ошибка. Пожалуйста, перезагрузите страницу.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Api,
    Validation,
    Storage,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "NETWORK_ERROR",
            ErrorKind::Api => "API_ERROR",
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::Storage => "STORAGE_ERROR",
            ErrorKind::Unknown => "UNKNOWN_ERROR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    pub user_message: String,
    pub context: String,
    pub timestamp: String,
}

impl AppError {
    /// Сводит сырое сообщение об ошибке к типу и локализованному тексту.
    pub fn classify(message: &str, context: &str) -> Self {
        let (kind, user_message) = classify_message(message);
        Self {
            kind,
            message: message.to_string(),
            user_message,
            context: context.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

fn classify_message(message: &str) -> (ErrorKind, String) {
    let lower = message.to_lowercase();

    if lower.contains("invalid car id") || lower.contains("некорректный id") {
        return (ErrorKind::Validation, MSG_VALIDATION.to_string());
    }
    if lower.contains("fetch") || lower.contains("failed to send") || lower.contains("network") {
        return (ErrorKind::Network, MSG_NETWORK.to_string());
    }
    if lower.contains("failed to parse")
        || lower.contains("json")
        || lower.contains("missing field")
        || lower.contains("invalid type")
    {
        return (ErrorKind::Api, MSG_BAD_RESPONSE.to_string());
    }
    // Сообщение с бэкенда показываем как есть
    if lower.contains("api error") || lower.contains("server returned") {
        return (ErrorKind::Api, message.to_string());
    }
    (ErrorKind::Unknown, MSG_GENERIC.to_string())
}

/// Логирует ошибку и возвращает структурированную запись для показа пользователю.
pub fn handle(message: &str, context: &str) -> AppError {
    let error = AppError::classify(message, context);
    logger::error(
        &format!("Error in {}: {}", context, message),
        Some(json!({"type": error.kind.as_str()})),
    );
    error
}

/// Перехват необработанных ошибок и отклонённых промисов на уровне окна.
/// Обе категории логируются как Fatal и показывают «перезагрузите страницу».
pub fn install_global_handlers(toasts: ToastService) {
    let Some(win) = window() else {
        return;
    };

    let on_error = Closure::wrap(Box::new(move |event: web_sys::ErrorEvent| {
        logger::fatal(
            "Uncaught error",
            Some(json!({
                "message": event.message(),
                "filename": event.filename(),
                "lineno": event.lineno(),
                "colno": event.colno(),
            })),
        );
        toasts.error(MSG_FATAL_RELOAD);
    }) as Box<dyn FnMut(_)>);
    let _ = win.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    // Обработчики живут всё время жизни приложения
    on_error.forget();

    let on_rejection = Closure::wrap(Box::new(move |event: web_sys::PromiseRejectionEvent| {
        let reason = event
            .reason()
            .as_string()
            .unwrap_or_else(|| format!("{:?}", event.reason()));
        logger::fatal("Unhandled promise rejection", Some(json!({"reason": reason})));
        toasts.error(MSG_RELOAD);
    }) as Box<dyn FnMut(_)>);
    let _ =
        win.add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref());
    on_rejection.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_classify_as_network() {
        let err = AppError::classify("Failed to send request: Failed to fetch", "load");
        assert_eq!(err.kind, ErrorKind::Network);
        assert_eq!(err.user_message, MSG_NETWORK);
    }

    #[test]
    fn parse_failures_classify_as_api() {
        let err = AppError::classify("Failed to parse response: missing field `name`", "load");
        assert_eq!(err.kind, ErrorKind::Api);
        assert_eq!(err.user_message, MSG_BAD_RESPONSE);
    }

    #[test]
    fn server_message_passes_through() {
        let err = AppError::classify("API Error: 409", "create_car");
        assert_eq!(err.kind, ErrorKind::Api);
        assert_eq!(err.user_message, "API Error: 409");
    }

    #[test]
    fn car_id_validation_classifies_as_validation() {
        let err = AppError::classify(
            "Invalid car ID: \"abc\" is not a valid positive number",
            "delete_car",
        );
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.user_message, MSG_VALIDATION);
    }

    #[test]
    fn anything_else_is_unknown_with_generic_message() {
        let err = AppError::classify("boom", "init");
        assert_eq!(err.kind, ErrorKind::Unknown);
        assert_eq!(err.user_message, MSG_GENERIC);
    }
}
