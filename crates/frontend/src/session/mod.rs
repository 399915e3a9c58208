//! Сессия пользователя как явный контекст приложения.
//!
//! Идентификатор и роль не живут в глобальных переменных: компоненты получают
//! [`SessionContext`] из контекста Leptos, API-клиенты — параметром.

pub mod storage;

use leptos::prelude::*;
use serde_json::json;
use web_sys::window;

use crate::shared::config;
use crate::shared::logger;

pub const DEFAULT_ROLE: &str = "client";

/// Query-параметр, через который Telegram-бот передаёт идентификатор.
pub const USER_ID_PARAM: &str = "X-UserID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<i64>,
    pub role: String,
    pub name: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user_id: None,
            role: DEFAULT_ROLE.to_string(),
            name: None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::default()),
        }
    }

    /// Загрузка учётных данных: `?X-UserID=` из URL приоритетнее сохранённых.
    pub fn load(&self) {
        if let Some(raw) = config::query_param(USER_ID_PARAM) {
            if let Ok(user_id) = raw.parse::<i64>() {
                logger::info("User ID from URL", Some(json!({"userID": user_id})));
                self.set_credentials(user_id, DEFAULT_ROLE, None);
                return;
            }
        }

        let user_id = storage::load_user_id();
        let role = storage::load_role().unwrap_or_else(|| DEFAULT_ROLE.to_string());
        let name = storage::load_name();
        logger::info(
            "User credentials loaded from localStorage",
            Some(json!({"userID": user_id, "userName": name})),
        );
        self.session.set(Session {
            user_id,
            role,
            name,
        });
    }

    /// Обновляет сессию и пишет насквозь в `localStorage`.
    pub fn set_credentials(&self, user_id: i64, role: &str, name: Option<&str>) {
        storage::save_credentials(user_id, role);
        if let Some(name) = name {
            storage::save_name(name);
        }
        self.session.update(|session| {
            session.user_id = Some(user_id);
            session.role = role.to_string();
            if let Some(name) = name {
                session.name = Some(name.to_string());
            }
        });
    }

    pub fn set_name(&self, name: &str) {
        storage::save_name(name);
        self.session.update(|session| {
            session.name = Some(name.to_string());
        });
    }

    pub fn get(&self) -> Session {
        self.session.get()
    }

    pub fn get_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    /// Identity-заголовки для авторизованных вызовов.
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        let session = self.session.get_untracked();
        let user_id = session
            .user_id
            .map(|id| id.to_string())
            .unwrap_or_default();
        if user_id.is_empty() {
            logger::warn("Missing user ID in auth headers", None);
        }
        vec![("X-User-ID", user_id), ("X-User-Role", session.role)]
    }

    /// Реферальная ссылка для QR-модалки: текущая страница + `?X-UserID=`.
    pub fn referral_link(&self) -> Option<String> {
        let user_id = self.session.get_untracked().user_id?;
        let location = window()?.location();
        let origin = location.origin().ok()?;
        let pathname = location.pathname().unwrap_or_default();
        Some(format!(
            "{}{}?{}={}",
            origin, pathname, USER_ID_PARAM, user_id
        ))
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_unauthenticated_client() {
        let session = Session::default();
        assert_eq!(session.user_id, None);
        assert_eq!(session.role, DEFAULT_ROLE);
        assert_eq!(session.name, None);
    }
}
