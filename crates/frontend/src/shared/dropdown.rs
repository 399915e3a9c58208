use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Выпадающее меню: переключается по клику на триггер,
/// закрывается по клику в любом другом месте документа.
#[component]
pub fn Dropdown(
    /// Подпись на кнопке-триггере
    #[prop(into)]
    label: Signal<String>,
    /// Сигнал открытости; владеет им вызывающая сторона
    open: RwSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    // Закрытие по клику вне меню
    Effect::new(move |_| {
        if open.get() {
            let closure = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
                open.set(false);
            }) as Box<dyn FnMut(_)>);

            if let Some(win) = window() {
                let _ =
                    win.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                // Слушатель живёт до конца сессии, как и в остальных глобальных хуках
                closure.forget();
            }
        }
    });

    view! {
        <div class="dropdown">
            <button
                class=move || {
                    if open.get() {
                        "dropdown__trigger dropdown__trigger--active"
                    } else {
                        "dropdown__trigger"
                    }
                }
                on:click=move |ev| {
                    ev.stop_propagation();
                    open.update(|o| *o = !*o);
                }
            >
                {move || label.get()}
            </button>
            <Show when=move || open.get()>
                <div class="dropdown__menu" on:click=move |ev| ev.stop_propagation()>
                    {children()}
                </div>
            </Show>
        </div>
    }
}
