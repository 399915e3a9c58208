//! Ядро HTTP-запросов: разбор ответов и таймаут операций.

use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde_json::{json, Value};
use std::future::Future;
use std::pin::pin;

/// Таймаут долгих операций, используется страницами точечно.
pub const OPERATION_TIMEOUT_MS: u32 = 30_000;

pub const MSG_TIMEOUT: &str =
    "Операция заняла слишком много времени. Пожалуйста, попробуйте еще раз.";

pub fn builder(method: &str, url: &str) -> RequestBuilder {
    match method {
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "PATCH" => Request::patch(url),
        "DELETE" => Request::delete(url),
        _ => Request::get(url),
    }
}

/// Гонка запроса с таймером: первый завершившийся определяет результат.
pub async fn with_timeout<T, F>(fut: F) -> Result<T, String>
where
    F: Future<Output = Result<T, String>>,
{
    let fut = pin!(fut);
    let timer = pin!(TimeoutFuture::new(OPERATION_TIMEOUT_MS));
    match select(fut, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(MSG_TIMEOUT.to_string()),
    }
}

/// Читает тело ответа и сводит его к `Value` по правилам user-сервиса.
pub async fn read_json(response: Response) -> Result<Value, String> {
    let status = response.status();
    let status_text = response.status_text();
    let ok = response.ok();
    let body = response.text().await.unwrap_or_default();
    interpret_response(status, &status_text, ok, &body)
}

/// Правила разбора:
/// - 204 — успех без тела, JSON не разбирается;
/// - пустое тело — маркер успеха/неуспеха по статусу;
/// - не-JSON тело — синтезированное сообщение со статусом;
/// - не-2xx — ошибка с серверным `message`/`error` либо общим текстом.
pub fn interpret_response(
    status: u16,
    status_text: &str,
    ok: bool,
    body: &str,
) -> Result<Value, String> {
    if status == 204 {
        return Ok(json!({"success": true}));
    }

    let data = if body.is_empty() {
        json!({"success": ok})
    } else {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => value,
            Err(_) => json!({
                "message": format!("Server returned {}: {}", status, status_text)
            }),
        }
    };

    if !ok {
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| data.get("error").and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| format!("API Error: {}", status));
        return Err(message);
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_content_is_success_without_parsing() {
        let result = interpret_response(204, "No Content", true, "this is not json");
        assert_eq!(result.unwrap(), json!({"success": true}));
    }

    #[test]
    fn empty_ok_body_is_success_marker() {
        let result = interpret_response(200, "OK", true, "");
        assert_eq!(result.unwrap(), json!({"success": true}));
    }

    #[test]
    fn json_body_passes_through() {
        let result = interpret_response(200, "OK", true, r#"{"id": 7}"#);
        assert_eq!(result.unwrap(), json!({"id": 7}));
    }

    #[test]
    fn server_message_is_surfaced_on_error() {
        let result = interpret_response(409, "Conflict", false, r#"{"message": "plate taken"}"#);
        assert_eq!(result.unwrap_err(), "plate taken");
    }

    #[test]
    fn error_field_is_a_fallback_message() {
        let result = interpret_response(400, "Bad Request", false, r#"{"error": "bad plate"}"#);
        assert_eq!(result.unwrap_err(), "bad plate");
    }

    #[test]
    fn non_json_error_body_becomes_status_message() {
        let result = interpret_response(500, "Internal Server Error", false, "<html>oops</html>");
        assert_eq!(
            result.unwrap_err(),
            "Server returned 500: Internal Server Error"
        );
    }

    #[test]
    fn error_without_message_gets_generic_text() {
        let result = interpret_response(403, "Forbidden", false, r#"{"code": 403}"#);
        assert_eq!(result.unwrap_err(), "API Error: 403");
    }
}
