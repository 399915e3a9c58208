//! Разрешение базовых URL трёх бэкенд-сервисов (user, seller, price).
//!
//! Источники в порядке приоритета: query-параметр → meta-тег → глобальная
//! переменная `window` (подставляется при деплое) → `localStorage` →
//! значение по умолчанию. Отсутствующий источник просто пропускается.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::shared::storage;

pub const USER_BASE_KEY: &str = "API_BASE_URL";
pub const SELLER_BASE_KEY: &str = "SELLER_API_BASE";
pub const PRICE_BASE_KEY: &str = "PRICE_API_BASE";

const DEFAULT_USER_BASE: &str = "http://localhost:8080";
const DEFAULT_SELLER_BASE: &str = "http://localhost:8081/api/v1";
const DEFAULT_PRICE_BASE: &str = "http://localhost:8082/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub user_base: String,
    pub seller_base: String,
    pub price_base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            user_base: DEFAULT_USER_BASE.to_string(),
            seller_base: DEFAULT_SELLER_BASE.to_string(),
            price_base: DEFAULT_PRICE_BASE.to_string(),
        }
    }
}

impl ApiConfig {
    /// Читает все источники и сводит их по приоритету.
    pub fn resolve() -> Self {
        let config = Self {
            user_base: resolve_key(USER_BASE_KEY, DEFAULT_USER_BASE),
            seller_base: resolve_key(SELLER_BASE_KEY, DEFAULT_SELLER_BASE),
            price_base: resolve_key(PRICE_BASE_KEY, DEFAULT_PRICE_BASE),
        };
        log::info!(
            "API configuration loaded: user={} seller={} price={}",
            config.user_base,
            config.seller_base,
            config.price_base
        );
        config
    }
}

static CONFIG: Lazy<RwLock<ApiConfig>> = Lazy::new(|| RwLock::new(ApiConfig::resolve()));

/// Форсирует разрешение конфигурации при старте приложения.
pub fn init() {
    let _ = api_config();
}

pub fn api_config() -> ApiConfig {
    CONFIG
        .read()
        .map(|config| config.clone())
        .unwrap_or_default()
}

/// Ручное переопределение адресов (тестовые стенды). Каждое переданное
/// значение пишется насквозь в `localStorage` и обновляет текущую конфигурацию.
pub fn set_api_config(user: Option<&str>, seller: Option<&str>, price: Option<&str>) {
    let Ok(mut config) = CONFIG.write() else {
        return;
    };
    if let Some(value) = user {
        config.user_base = value.to_string();
        storage::set_item(USER_BASE_KEY, value);
    }
    if let Some(value) = seller {
        config.seller_base = value.to_string();
        storage::set_item(SELLER_BASE_KEY, value);
    }
    if let Some(value) = price {
        config.price_base = value.to_string();
        storage::set_item(PRICE_BASE_KEY, value);
    }
    log::info!(
        "API configuration updated: user={} seller={} price={}",
        config.user_base,
        config.seller_base,
        config.price_base
    );
}

fn resolve_key(key: &str, default: &str) -> String {
    first_present(
        [
            query_param(key),
            meta_content(key),
            js_global(key),
            storage::get_item(key),
        ],
        default,
    )
}

/// Чистая свёртка приоритетов: первый непустой источник побеждает.
fn first_present(sources: [Option<String>; 4], default: &str) -> String {
    sources
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Значение query-параметра текущей страницы.
pub fn query_param(name: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).ok()?;
    params.get(name).cloned().filter(|value| !value.is_empty())
}

fn meta_content(name: &str) -> Option<String> {
    let document = window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name='{}']", name))
        .ok()??;
    element
        .get_attribute("content")
        .filter(|value| !value.is_empty())
}

fn js_global(name: &str) -> Option<String> {
    let win = window()?;
    js_sys::Reflect::get(win.as_ref(), &JsValue::from_str(name))
        .ok()?
        .as_string()
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_param_beats_stored_value() {
        let resolved = first_present(
            [
                Some("https://query.example".to_string()),
                Some("https://meta.example".to_string()),
                None,
                Some("https://stored.example".to_string()),
            ],
            DEFAULT_USER_BASE,
        );
        assert_eq!(resolved, "https://query.example");
    }

    #[test]
    fn stored_value_wins_when_higher_tiers_absent() {
        let resolved = first_present(
            [None, None, None, Some("https://stored.example".to_string())],
            DEFAULT_USER_BASE,
        );
        assert_eq!(resolved, "https://stored.example");
    }

    #[test]
    fn falls_back_to_default() {
        let resolved = first_present([None, None, None, None], DEFAULT_SELLER_BASE);
        assert_eq!(resolved, DEFAULT_SELLER_BASE);
    }

    #[test]
    fn empty_strings_are_skipped() {
        let resolved = first_present(
            [Some(String::new()), None, Some("https://global.example".to_string()), None],
            DEFAULT_PRICE_BASE,
        );
        assert_eq!(resolved, "https://global.example");
    }
}
