use leptos::prelude::*;

/// Текстовое поле формы с необязательной подписью.
#[component]
pub fn Input(
    /// Подпись поля
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Значение
    #[prop(into)]
    value: Signal<String>,
    /// Обработчик ввода
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Плейсхолдер
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Тип поля: "text" (по умолчанию), "tel" и т.п.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Обязательное поле
    #[prop(optional)]
    required: bool,
    /// id элемента
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
