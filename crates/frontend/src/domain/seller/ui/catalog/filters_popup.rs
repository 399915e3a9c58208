//! Попап фильтров каталога: цена, длительность, компании.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::domain::seller::filters::{DurationBucket, FilterState, PriceRange};

const PRICE_BUCKETS: &[&str] = &["0-500", "500-1000", "1000-3000", "3000-+"];

#[component]
pub fn FiltersPopup(
    filters: RwSignal<FilterState>,
    /// Компании, загруженные каталогом: (id, название)
    #[prop(into)]
    companies: Signal<Vec<(i64, String)>>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let price_open = RwSignal::new(false);
    let duration_open = RwSignal::new(false);

    // Клик вне попапа закрывает его вместе с вложенными списками
    Effect::new(move |_| {
        if open.get() {
            let closure = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
                open.set(false);
                price_open.set(false);
                duration_open.set(false);
            }) as Box<dyn FnMut(_)>);

            if let Some(win) = web_sys::window() {
                let _ =
                    win.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    });

    let price_label = move || {
        filters
            .get()
            .price
            .map(|range| range.label())
            .unwrap_or_else(|| "Стоимость".to_string())
    };
    let duration_label = move || {
        let state = filters.get();
        if state.durations.is_empty() {
            "Длительность".to_string()
        } else {
            state
                .durations
                .iter()
                .map(|bucket| bucket.label())
                .collect::<Vec<_>>()
                .join(", ")
        }
    };

    view! {
        <div class="filters">
            <button
                class="filters__trigger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    open.update(|o| *o = !*o);
                }
            >
                "Фильтры"
                {move || {
                    let count = filters.get().active_count();
                    if count > 0 {
                        view! { <span class="badge badge--primary">{count}</span> }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </button>

            <Show when=move || open.get()>
                <div class="filters__popup" on:click=move |ev| ev.stop_propagation()>
                    <button
                        class="filters__reset"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            filters.update(|state| state.reset());
                            open.set(false);
                        }
                    >
                        "Все"
                    </button>

                    <div class="filters__group">
                        <button
                            class=move || {
                                if price_open.get() {
                                    "filters__dropdown-btn filters__dropdown-btn--active"
                                } else {
                                    "filters__dropdown-btn"
                                }
                            }
                            on:click=move |ev| {
                                ev.stop_propagation();
                                price_open.update(|o| *o = !*o);
                                duration_open.set(false);
                            }
                        >
                            {price_label}
                        </button>
                        <Show when=move || price_open.get()>
                            <div class="filters__options">
                                {PRICE_BUCKETS
                                    .iter()
                                    .map(|bucket| {
                                        let bucket = *bucket;
                                        let selected =
                                            move || filters.get().price == PriceRange::parse(bucket);
                                        view! {
                                            <button
                                                class=move || {
                                                    if selected() {
                                                        "filter-option filter-option--selected"
                                                    } else {
                                                        "filter-option"
                                                    }
                                                }
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    filters.update(|state| {
                                                        state.price = PriceRange::parse(bucket);
                                                    });
                                                    price_open.set(false);
                                                }
                                            >
                                                {PriceRange::parse(bucket)
                                                    .map(|range| range.label())
                                                    .unwrap_or_default()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>

                    <div class="filters__group">
                        <button
                            class=move || {
                                if duration_open.get() {
                                    "filters__dropdown-btn filters__dropdown-btn--active"
                                } else {
                                    "filters__dropdown-btn"
                                }
                            }
                            on:click=move |ev| {
                                ev.stop_propagation();
                                duration_open.update(|o| *o = !*o);
                                price_open.set(false);
                            }
                        >
                            {duration_label}
                        </button>
                        <Show when=move || duration_open.get()>
                            <div class="filters__options">
                                {DurationBucket::all()
                                    .into_iter()
                                    .map(|bucket| {
                                        let selected =
                                            move || filters.get().durations.contains(&bucket);
                                        view! {
                                            <button
                                                class=move || {
                                                    if selected() {
                                                        "filter-option filter-option--selected"
                                                    } else {
                                                        "filter-option"
                                                    }
                                                }
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    filters.update(|state| {
                                                        state.toggle_duration(bucket);
                                                    });
                                                }
                                            >
                                                {bucket.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>

                    <div class="filters__companies">
                        <span class="filters__companies-title">"Компании"</span>
                        <For
                            each=move || companies.get()
                            key=|(id, _)| *id
                            children=move |(id, name)| {
                                let checked = move || filters.get().companies.contains(&id);
                                view! {
                                    <label class="filters__company">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |_| {
                                                filters.update(|state| state.toggle_company(id));
                                            }
                                        />
                                        {name.clone()}
                                    </label>
                                }
                            }
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
