//! Типизированный клиент user-сервиса.
//!
//! Все авторизованные вызовы идут через [`api_request`]: identity-заголовки из
//! сессии, JSON-тело, разбор ответа по правилам [`crate::shared::http`].
//! Идентификаторы автомобилей проверяются синхронно до любого сетевого вызова.

use contracts::users::{Car, CreateCarRequest, CreateUserRequest, UpdateCarRequest, UpdateUserRequest, User};
use gloo_net::http::Request;
use serde_json::{json, Value};

use crate::session::SessionContext;
use crate::shared::config::api_config;
use crate::shared::http;
use crate::shared::logger;

/// Положительное целое из сырого ввода; всё остальное — ошибка валидации.
pub fn validate_car_id(raw: &str) -> Result<i64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Invalid car ID: value is required".to_string());
    }
    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(format!(
            "Invalid car ID: \"{}\" is not a valid positive number",
            raw
        )),
    }
}

fn ensure_positive(car_id: i64) -> Result<(), String> {
    if car_id <= 0 {
        return Err(format!(
            "Invalid car ID: \"{}\" is not a valid positive number",
            car_id
        ));
    }
    Ok(())
}

/// Общий запрос к user-сервису с identity-заголовками.
async fn api_request(
    session: SessionContext,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> Result<Value, String> {
    let current = session.get_untracked();
    let Some(user_id) = current.user_id else {
        return Err("User not authenticated: user ID is not set".to_string());
    };

    let url = format!("{}{}", api_config().user_base, path);
    logger::debug(
        &format!("API Request: {} {}", method, url),
        Some(json!({"userID": user_id, "role": current.role})),
    );

    let mut builder = http::builder(method, &url).header("Content-Type", "application/json");
    for (name, value) in session.auth_headers() {
        builder = builder.header(name, &value);
    }

    let response = match body {
        Some(ref value) => builder
            .json(value)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|e| format!("Failed to send request: {}", e))?;

    logger::debug(
        &format!("API Response: {} {} - Status {}", method, url, response.status()),
        None,
    );

    http::read_json(response).await
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| format!("Failed to serialize request: {}", e))
}

// ---------------------------------------------------------------------------
// Пользователь
// ---------------------------------------------------------------------------

/// Регистрация (публичный endpoint, без identity-заголовков).
/// Успех сохраняет учётные данные в сессию.
pub async fn create_user(
    session: SessionContext,
    request: &CreateUserRequest,
) -> Result<User, String> {
    let response = Request::post(&format!("{}/users", api_config().user_base))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let data = http::read_json(response).await?;
    let user: User =
        serde_json::from_value(data).map_err(|e| format!("Failed to parse response: {}", e))?;

    session.set_credentials(user.tg_user_id, &user.role, Some(&user.name));
    Ok(user)
}

pub async fn get_current_user(session: SessionContext) -> Result<User, String> {
    let data = api_request(session, "GET", "/users/me", None).await?;
    let user: User =
        serde_json::from_value(data).map_err(|e| format!("Failed to parse response: {}", e))?;

    if !user.name.is_empty() {
        session.set_name(&user.name);
        logger::info("User name updated from backend", Some(json!({"name": user.name})));
    }

    Ok(user)
}

pub async fn update_current_user(
    session: SessionContext,
    request: &UpdateUserRequest,
) -> Result<Value, String> {
    api_request(session, "PUT", "/users/me", Some(to_body(request)?)).await
}

pub async fn delete_current_user(session: SessionContext) -> Result<(), String> {
    api_request(session, "DELETE", "/users/me", None).await.map(|_| ())
}

/// Публичный internal-endpoint: профиль по идентификатору.
pub async fn get_user_by_id(user_id: i64) -> Result<User, String> {
    let url = format!("{}/internal/users/{}", api_config().user_base, user_id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    let data = http::read_json(response).await?;
    serde_json::from_value(data).map_err(|e| format!("Failed to parse response: {}", e))
}

// ---------------------------------------------------------------------------
// Автомобили
// ---------------------------------------------------------------------------

pub async fn create_car(
    session: SessionContext,
    request: &CreateCarRequest,
) -> Result<Value, String> {
    api_request(session, "POST", "/users/me/cars", Some(to_body(request)?)).await
}

pub async fn update_car(
    session: SessionContext,
    car_id: i64,
    request: &UpdateCarRequest,
) -> Result<Value, String> {
    ensure_positive(car_id)?;
    logger::info("Updating car", Some(json!({"carID": car_id})));
    api_request(
        session,
        "PATCH",
        &format!("/users/me/cars/{}", car_id),
        Some(to_body(request)?),
    )
    .await
}

pub async fn delete_car(session: SessionContext, car_id: i64) -> Result<Value, String> {
    ensure_positive(car_id)?;
    logger::info("Deleting car", Some(json!({"carID": car_id})));
    api_request(session, "DELETE", &format!("/users/me/cars/{}", car_id), None).await
}

pub async fn select_car(session: SessionContext, car_id: i64) -> Result<Value, String> {
    ensure_positive(car_id)?;
    logger::info("Selecting car", Some(json!({"carID": car_id})));
    api_request(
        session,
        "PUT",
        &format!("/users/me/cars/{}/select", car_id),
        None,
    )
    .await
}

/// Публичный internal-endpoint: выбранный автомобиль пользователя.
pub async fn get_selected_car(user_id: i64) -> Result<Car, String> {
    let url = format!(
        "{}/internal/users/{}/cars/selected",
        api_config().user_base,
        user_id
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    let data = http::read_json(response).await?;
    serde_json::from_value(data).map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_negative_and_garbage_ids() {
        assert!(validate_car_id("0").is_err());
        assert!(validate_car_id("-5").is_err());
        assert!(validate_car_id("abc").is_err());
        assert!(validate_car_id("").is_err());
        assert!(validate_car_id("  ").is_err());
        assert!(validate_car_id("12.5").is_err());
    }

    #[test]
    fn accepts_positive_integer_ids() {
        assert_eq!(validate_car_id("1").unwrap(), 1);
        assert_eq!(validate_car_id(" 42 ").unwrap(), 42);
    }

    #[test]
    fn mutation_guard_rejects_non_positive_ids() {
        assert!(ensure_positive(0).is_err());
        assert!(ensure_positive(-1).is_err());
        assert!(ensure_positive(7).is_ok());
    }
}
