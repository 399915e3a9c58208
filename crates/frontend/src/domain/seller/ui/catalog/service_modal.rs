use leptos::prelude::*;

use super::CatalogEntry;
use crate::shared::modal::Modal;

/// Модалка с деталями услуги. Открыта, пока в сигнале лежит запись.
#[component]
pub fn ServiceModal(entry: RwSignal<Option<CatalogEntry>>) -> impl IntoView {
    view! {
        {move || entry.get().map(|current| {
            let on_close = Callback::new(move |_: ()| entry.set(None));
            view! {
                <Modal title=current.service.name.clone() on_close=on_close>
                    <div class="service-modal__price">{current.price_label()}</div>
                    <p class="service-modal__description">{current.full_description()}</p>
                </Modal>
            }
        })}
    }
}
