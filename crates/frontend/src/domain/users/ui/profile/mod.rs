//! Страница профиля: данные пользователя и его гараж.

pub mod car_form;
pub mod settings_form;

use contracts::users::{Car, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;

use crate::domain::users::api as users_api;
use crate::session::use_session;
use crate::shared::components::ui::Button;
use crate::shared::debounce;
use crate::shared::dropdown::Dropdown;
use crate::shared::error;
use crate::shared::http;
use crate::shared::logger;
use crate::shared::toast::use_toasts;

use car_form::{AddCarModal, EditCarModal};
use settings_form::ProfileSettingsModal;

/// Какой автомобиль показывать: помеченный выбранным, иначе первый из списка.
pub fn select_display_car(cars: &[Car]) -> Option<&Car> {
    cars.iter()
        .find(|car| car.is_selected)
        .or_else(|| cars.first())
}

/// Подпись автомобиля в выпадающем списке.
pub fn car_key(car: &Car) -> String {
    format!("{} {} - {}", car.brand, car.model, car.license_plate)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let (user, set_user) = signal::<Option<User>>(None);

    let reload_user = move || {
        spawn_local(async move {
            match http::with_timeout(users_api::get_current_user(session)).await {
                Ok(loaded) => {
                    logger::info(
                        "User data loaded successfully",
                        Some(json!({"name": loaded.name, "carsCount": loaded.cars.len()})),
                    );
                    set_user.set(Some(loaded));
                }
                Err(e) => {
                    let err = error::handle(&e, "profile.load_user");
                    toasts.error(&err.user_message);
                }
            }
        });
    };

    if session.get_untracked().user_id.is_none() {
        logger::error("No user ID found in URL or localStorage", None);
        toasts.error(
            "Ошибка: не указан ID пользователя. Используйте ссылку вида: ?X-UserID=123456789",
        );
    } else {
        reload_user();
    }

    let display_car =
        Memo::new(move |_| user.get().and_then(|u| select_display_car(&u.cars).cloned()));

    let add_car_open = RwSignal::new(false);
    let add_car_guard = RwSignal::new(0.0_f64);
    let edit_car_open = RwSignal::new(false);
    let edit_car_guard = RwSignal::new(0.0_f64);
    let settings_open = RwSignal::new(false);
    let settings_guard = RwSignal::new(0.0_f64);
    let car_dropdown_open = RwSignal::new(false);

    let on_saved = Callback::new(move |_: ()| reload_user());

    let select_car = move |car: Car| {
        car_dropdown_open.set(false);
        let label = car_key(&car);
        spawn_local(async move {
            match http::with_timeout(users_api::select_car(session, car.id)).await {
                Ok(_) => {
                    logger::info("Car selected", Some(json!({"carID": car.id})));
                    toasts.success(&format!("Автомобиль {} выбран!", label));
                    reload_user();
                }
                Err(e) => {
                    let err = error::handle(&e, "profile.select_car");
                    toasts.error(&err.user_message);
                }
            }
        });
    };

    let open_add = Callback::new(move |_: leptos::ev::MouseEvent| {
        if debounce::allow_click(add_car_guard) {
            add_car_open.set(true);
        }
    });

    let open_edit = Callback::new(move |_: leptos::ev::MouseEvent| {
        if !debounce::allow_click(edit_car_guard) {
            return;
        }
        if display_car.get_untracked().is_none() {
            logger::warn("No car selected for editing", None);
            toasts.error("Пожалуйста, выберите автомобиль для редактирования");
            return;
        }
        edit_car_open.set(true);
    });

    let open_settings = Callback::new(move |_: leptos::ev::MouseEvent| {
        if debounce::allow_click(settings_guard) {
            settings_open.set(true);
        }
    });

    let user_name = move || {
        user.get()
            .map(|u| u.name)
            .filter(|name| !name.is_empty())
            .or_else(|| session.get().name)
            .unwrap_or_else(|| "Введите ваше имя".to_string())
    };
    let user_phone = move || {
        user.get()
            .and_then(|u| u.phone_number)
            .map(|phone| format!("тел. {}", phone))
            .unwrap_or_else(|| "тел. не указан".to_string())
    };

    let dropdown_label = Signal::derive(move || {
        display_car
            .get()
            .map(|car| car_key(&car))
            .unwrap_or_else(|| "Нет автомобилей".to_string())
    });

    view! {
        <div class="profile-page">
            <a class="profile-page__back" href="/">"К каталогу"</a>

            <section class="profile-info">
                <h1 class="profile-info__name">{user_name}</h1>
                <p class="profile-info__phone">{user_phone}</p>
                <Button variant="secondary" on_click=open_settings>
                    "Настройки профиля"
                </Button>
            </section>

            <section class="garage">
                <h2 class="garage__title">"Мой автомобиль"</h2>

                <Dropdown label=dropdown_label open=car_dropdown_open>
                    {move || {
                        let cars = user.get().map(|u| u.cars).unwrap_or_default();
                        if cars.is_empty() {
                            logger::warn("No cars found for user", None);
                            view! {
                                <div class="car-dropdown-item car-dropdown-item--empty">
                                    "Нет автомобилей"
                                </div>
                            }
                                .into_any()
                        } else {
                            cars.into_iter()
                                .map(|car| {
                                    let label = car_key(&car);
                                    view! {
                                        <div
                                            class="car-dropdown-item"
                                            on:click=move |_| select_car(car.clone())
                                        >
                                            {label.clone()}
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </Dropdown>

                {move || display_car.get().map(|car| view! {
                    <dl class="garage__details">
                        <div class="garage__row">
                            <dt>"Марка"</dt>
                            <dd>{car.brand.clone()}</dd>
                        </div>
                        <div class="garage__row">
                            <dt>"Модель"</dt>
                            <dd>{car.model.clone()}</dd>
                        </div>
                        <div class="garage__row">
                            <dt>"Госномер"</dt>
                            <dd>{car.license_plate.clone()}</dd>
                        </div>
                        <div class="garage__row">
                            <dt>"Класс"</dt>
                            <dd>
                                {car.size
                                    .map(|size| size.to_string())
                                    .unwrap_or_else(|| "Неизвестно".to_string())}
                            </dd>
                        </div>
                    </dl>
                })}

                <div class="garage__actions">
                    <Button on_click=open_add>"Добавить автомобиль"</Button>
                    <Button variant="secondary" on_click=open_edit>"Редактировать"</Button>
                </div>
            </section>

            <AddCarModal open=add_car_open on_saved=on_saved />
            {move || display_car.get().map(|car| view! {
                <EditCarModal open=edit_car_open car=car on_saved=on_saved />
            })}
            {move || user.get().map(|current| view! {
                <ProfileSettingsModal open=settings_open user=current on_saved=on_saved />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: i64, selected: bool) -> Car {
        Car {
            id,
            brand: "Lada".to_string(),
            model: "Vesta".to_string(),
            license_plate: format!("А{:03}АА", id),
            color: None,
            size: None,
            is_selected: selected,
        }
    }

    #[test]
    fn selected_car_wins_over_order() {
        let cars = vec![car(1, false), car(2, true), car(3, false)];
        assert_eq!(select_display_car(&cars).unwrap().id, 2);
    }

    #[test]
    fn first_car_is_the_fallback() {
        let cars = vec![car(1, false), car(2, false)];
        assert_eq!(select_display_car(&cars).unwrap().id, 1);
    }

    #[test]
    fn empty_garage_has_nothing_to_show() {
        assert!(select_display_car(&[]).is_none());
    }

    #[test]
    fn car_key_format() {
        assert_eq!(car_key(&car(1, false)), "Lada Vesta - А001АА");
    }
}
