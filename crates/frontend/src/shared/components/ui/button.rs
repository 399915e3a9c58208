use leptos::prelude::*;

/// Кнопка с вариантами primary (по умолчанию) и secondary.
#[component]
pub fn Button(
    /// Вариант: "primary" или "secondary"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Атрибут type кнопки
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Недоступность (реактивная)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Обработчик клика
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref() {
        Some("secondary") => "button--secondary",
        _ => "button--primary",
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {}", variant_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
