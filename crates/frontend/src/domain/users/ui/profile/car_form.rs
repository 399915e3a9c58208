//! Модальные формы добавления и редактирования автомобиля.

use contracts::users::{Car, CreateCarRequest, UpdateCarRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;

use crate::domain::users::api as users_api;
use crate::domain::users::car_class::infer_vehicle_class;
use crate::session::use_session;
use crate::shared::components::ui::{Button, Input};
use crate::shared::error;
use crate::shared::http;
use crate::shared::logger;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;

#[component]
pub fn AddCarModal(open: RwSignal<bool>, on_saved: Callback<()>) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let brand = RwSignal::new(String::new());
    let model = RwSignal::new(String::new());
    let plate = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let close = Callback::new(move |_: ()| {
        open.set(false);
        brand.set(String::new());
        model.set(String::new());
        plate.set(String::new());
    });

    let submit = Callback::new(move |_: leptos::ev::MouseEvent| {
        let brand_value = brand.get_untracked().trim().to_string();
        let model_value = model.get_untracked().trim().to_string();
        let plate_value = plate.get_untracked().trim().to_string();

        if brand_value.is_empty() || model_value.is_empty() || plate_value.is_empty() {
            toasts.error("Пожалуйста, заполните все поля");
            return;
        }

        // Класс определяется автоматически по марке
        let size = infer_vehicle_class(&brand_value, &model_value);
        logger::info(
            "Car class determined automatically",
            Some(json!({"brand": brand_value, "model": model_value, "class": size.as_str()})),
        );

        saving.set(true);
        spawn_local(async move {
            let request = CreateCarRequest {
                brand: brand_value.clone(),
                model: model_value.clone(),
                license_plate: plate_value,
                color: None,
                size: Some(size),
            };
            match http::with_timeout(users_api::create_car(session, &request)).await {
                Ok(_) => {
                    logger::info(
                        "Car created successfully",
                        Some(json!({"brand": brand_value, "model": model_value})),
                    );
                    close.run(());
                    toasts.success(&format!(
                        "Автомобиль {} {} (Класс {}) успешно добавлен!",
                        brand_value, model_value, size
                    ));
                    on_saved.run(());
                }
                Err(e) => {
                    let err = error::handle(&e, "add_car");
                    toasts.error(&err.user_message);
                }
            }
            saving.set(false);
        });
    });

    view! {
        <Show when=move || open.get()>
            <Modal title="Добавить автомобиль".to_string() on_close=close>
                <form class="car-form" on:submit=move |ev| ev.prevent_default()>
                    <Input
                        label="Марка"
                        value=brand
                        on_input=Callback::new(move |value| brand.set(value))
                        placeholder="BMW"
                        required=true
                    />
                    <Input
                        label="Модель"
                        value=model
                        on_input=Callback::new(move |value| model.set(value))
                        placeholder="X5"
                        required=true
                    />
                    <Input
                        label="Госномер"
                        value=plate
                        on_input=Callback::new(move |value| plate.set(value))
                        placeholder="А123ВС777"
                        required=true
                    />
                    <Button disabled=Signal::derive(move || saving.get()) on_click=submit>
                        "Добавить"
                    </Button>
                </form>
            </Modal>
        </Show>
    }
}

#[component]
pub fn EditCarModal(open: RwSignal<bool>, car: Car, on_saved: Callback<()>) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let car_id = car.id;
    let brand = RwSignal::new(car.brand.clone());
    let model = RwSignal::new(car.model.clone());
    let plate = RwSignal::new(car.license_plate.clone());
    let saving = RwSignal::new(false);

    let close = Callback::new(move |_: ()| open.set(false));

    let submit = Callback::new(move |_: leptos::ev::MouseEvent| {
        let brand_value = brand.get_untracked().trim().to_string();
        let model_value = model.get_untracked().trim().to_string();
        let plate_value = plate.get_untracked().trim().to_string();

        if brand_value.is_empty() || model_value.is_empty() || plate_value.is_empty() {
            toasts.error("Пожалуйста, заполните все поля");
            return;
        }

        // Марка могла смениться, пересчитываем класс
        let size = infer_vehicle_class(&brand_value, &model_value);

        saving.set(true);
        spawn_local(async move {
            let request = UpdateCarRequest {
                brand: Some(brand_value.clone()),
                model: Some(model_value.clone()),
                license_plate: Some(plate_value),
                color: None,
                size: Some(size),
            };
            match http::with_timeout(users_api::update_car(session, car_id, &request)).await {
                Ok(_) => {
                    close.run(());
                    toasts.success(&format!(
                        "Данные автомобиля {} {} обновлены!",
                        brand_value, model_value
                    ));
                    on_saved.run(());
                }
                Err(e) => {
                    let err = error::handle(&e, "edit_car");
                    toasts.error(&err.user_message);
                }
            }
            saving.set(false);
        });
    });

    let delete = Callback::new(move |_: leptos::ev::MouseEvent| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Вы уверены, что хотите удалить этот автомобиль?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match http::with_timeout(users_api::delete_car(session, car_id)).await {
                Ok(_) => {
                    logger::info("Car deleted successfully", None);
                    close.run(());
                    toasts.success("Автомобиль успешно удален!");
                    on_saved.run(());
                }
                Err(e) => {
                    let err = error::handle(&e, "delete_car");
                    toasts.error(&err.user_message);
                }
            }
        });
    });

    view! {
        <Show when=move || open.get()>
            <Modal title="Редактировать автомобиль".to_string() on_close=close>
                <form class="car-form" on:submit=move |ev| ev.prevent_default()>
                    <Input
                        label="Марка"
                        value=brand
                        on_input=Callback::new(move |value| brand.set(value))
                        required=true
                    />
                    <Input
                        label="Модель"
                        value=model
                        on_input=Callback::new(move |value| model.set(value))
                        required=true
                    />
                    <Input
                        label="Госномер"
                        value=plate
                        on_input=Callback::new(move |value| plate.set(value))
                        required=true
                    />
                    <div class="car-form__actions">
                        <Button disabled=Signal::derive(move || saving.get()) on_click=submit>
                            "Сохранить"
                        </Button>
                        <Button variant="secondary" on_click=delete>
                            "Удалить автомобиль"
                        </Button>
                    </div>
                </form>
            </Modal>
        </Show>
    }
}
