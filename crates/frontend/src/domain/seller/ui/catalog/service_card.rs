use leptos::prelude::*;

use super::CatalogEntry;
use crate::shared::components::card_animated::CardAnimated;

/// Карточка услуги в сетке каталога.
#[component]
pub fn ServiceCard(
    entry: CatalogEntry,
    /// Каскадная задержка анимации появления
    #[prop(optional)]
    delay_ms: u32,
    on_open: Callback<CatalogEntry>,
) -> impl IntoView {
    let entry_for_click = entry.clone();

    view! {
        <CardAnimated delay_ms=delay_ms style="cursor: pointer;">
            <div
                class="service-card"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_open.run(entry_for_click.clone());
                }
            >
                <span class="service-card__name">{entry.service.name.clone()}</span>
                <span class="service-card__description">
                    {entry.service.description_or_empty().to_string()}
                </span>
                <div class="service-card__price-row">
                    <span class="service-card__price-caption">"Цена:"</span>
                    <span class="service-card__price">{entry.price_label()}</span>
                </div>
            </div>
        </CardAnimated>
    }
}
