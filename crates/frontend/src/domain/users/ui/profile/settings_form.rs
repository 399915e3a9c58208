//! Настройки профиля: имя и телефон.

use contracts::users::{UpdateUserRequest, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::users::api as users_api;
use crate::session::use_session;
use crate::shared::components::ui::{Button, Input};
use crate::shared::error;
use crate::shared::http;
use crate::shared::logger;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;

/// Делит полное имя на имя и фамилию (всё после первого пробела).
pub fn split_name(full: &str) -> (String, String) {
    let mut parts = full.split_whitespace();
    let first = parts.next().unwrap_or("").to_string();
    let last = parts.collect::<Vec<_>>().join(" ");
    (first, last)
}

#[component]
pub fn ProfileSettingsModal(
    open: RwSignal<bool>,
    user: User,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let (first_init, last_init) = split_name(&user.name);
    let first_name = RwSignal::new(first_init);
    let last_name = RwSignal::new(last_init);
    let phone = RwSignal::new(user.phone_number.clone().unwrap_or_default());
    let saving = RwSignal::new(false);

    let close = Callback::new(move |_: ()| open.set(false));

    let submit = Callback::new(move |_: leptos::ev::MouseEvent| {
        let first_value = first_name.get_untracked().trim().to_string();
        let last_value = last_name.get_untracked().trim().to_string();
        let phone_value = phone.get_untracked().trim().to_string();

        if first_value.is_empty() || last_value.is_empty() || phone_value.is_empty() {
            toasts.error("Пожалуйста, заполните все поля");
            return;
        }

        saving.set(true);
        spawn_local(async move {
            let request = UpdateUserRequest {
                name: Some(format!("{} {}", first_value, last_value)),
                phone_number: Some(phone_value),
            };
            match http::with_timeout(users_api::update_current_user(session, &request)).await {
                Ok(_) => {
                    logger::info("Profile updated successfully", None);
                    close.run(());
                    toasts.success("Профиль успешно обновлен!");
                    on_saved.run(());
                }
                Err(e) => {
                    let err = error::handle(&e, "update_profile");
                    toasts.error(&err.user_message);
                }
            }
            saving.set(false);
        });
    });

    view! {
        <Show when=move || open.get()>
            <Modal title="Настройки профиля".to_string() on_close=close>
                <form class="settings-form" on:submit=move |ev| ev.prevent_default()>
                    <Input
                        label="Имя"
                        value=first_name
                        on_input=Callback::new(move |value| first_name.set(value))
                        required=true
                    />
                    <Input
                        label="Фамилия"
                        value=last_name
                        on_input=Callback::new(move |value| last_name.set(value))
                        required=true
                    />
                    <Input
                        label="Телефон"
                        value=phone
                        on_input=Callback::new(move |value| phone.set(value))
                        input_type="tel"
                        required=true
                    />
                    <Button disabled=Signal::derive(move || saving.get()) on_click=submit>
                        "Сохранить"
                    </Button>
                </form>
            </Modal>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_first_and_last_name() {
        assert_eq!(
            split_name("Иван Петров"),
            ("Иван".to_string(), "Петров".to_string())
        );
    }

    #[test]
    fn multiword_last_name_is_preserved() {
        assert_eq!(
            split_name("Анна Мария Ремарк"),
            ("Анна".to_string(), "Мария Ремарк".to_string())
        );
    }

    #[test]
    fn single_word_has_empty_last_name() {
        assert_eq!(split_name("Иван"), ("Иван".to_string(), String::new()));
        assert_eq!(split_name(""), (String::new(), String::new()));
    }
}
