//! Учётные данные пользователя в `localStorage`.

use crate::shared::storage;

pub const USER_ID_KEY: &str = "userID";
pub const USER_ROLE_KEY: &str = "userRole";
pub const USER_NAME_KEY: &str = "userName";

pub fn save_credentials(user_id: i64, role: &str) {
    storage::set_item(USER_ID_KEY, &user_id.to_string());
    storage::set_item(USER_ROLE_KEY, role);
}

pub fn save_name(name: &str) {
    storage::set_item(USER_NAME_KEY, name);
}

pub fn load_user_id() -> Option<i64> {
    storage::get_item(USER_ID_KEY)?.parse().ok()
}

pub fn load_role() -> Option<String> {
    storage::get_item(USER_ROLE_KEY)
}

pub fn load_name() -> Option<String> {
    storage::get_item(USER_NAME_KEY)
}
