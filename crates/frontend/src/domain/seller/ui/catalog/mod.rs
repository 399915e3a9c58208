//! Каталог услуг: загрузка данных, поиск, фильтры, модалки.

pub mod filters_popup;
pub mod qr_modal;
pub mod service_card;
pub mod service_modal;

use std::collections::HashMap;

use contracts::seller::ServiceItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;

use crate::domain::pricing::api as pricing_api;
use crate::domain::seller::api as seller_api;
use crate::domain::seller::filters::{self, FilterState};
use crate::layout::header::{CollapsingHeader, HeaderMetrics};
use crate::session::{use_session, SessionContext, DEFAULT_ROLE};
use crate::shared::debounce;
use crate::shared::error;
use crate::shared::http;
use crate::shared::logger;
use crate::shared::toast::use_toasts;

use filters_popup::FiltersPopup;
use qr_modal::QrModal;
use service_card::ServiceCard;
use service_modal::ServiceModal;

/// Идентификатор тестового пользователя для стендов без Telegram.
const TEST_USER_ID: i64 = 123_456_789;

/// Строка каталога: услуга, её компания и цена для показа.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub service: ServiceItem,
    pub company_id: i64,
    pub company_name: String,
    pub price: u32,
}

impl CatalogEntry {
    pub fn price_label(&self) -> String {
        format!("{} ₽", self.price)
    }

    /// Полный текст для модалки услуги.
    pub fn full_description(&self) -> String {
        format!(
            "{}\n\nВремя выполнения: {} минут\nКомпания: {}",
            self.service.description_or_empty(),
            self.service.average_duration,
            self.company_name
        )
    }
}

/// Собирает каталог: услуги всех компаний с ценами.
///
/// Цены берутся из price-сервиса (с учётом выбранного автомобиля, когда
/// пользователь известен); при недоступности сервиса — локальная формула.
async fn load_catalog(session: SessionContext) -> Vec<CatalogEntry> {
    let companies = seller_api::get_companies().await;
    if companies.is_empty() {
        logger::warn("No companies found", None);
        return Vec::new();
    }

    let user_id = session.get_untracked().user_id;
    let mut entries = Vec::new();

    for company in companies {
        let services = seller_api::get_services(company.id).await;
        if services.is_empty() {
            continue;
        }

        let service_ids: Vec<i64> = services.iter().map(|s| s.id).collect();
        let quotes: HashMap<i64, f64> =
            match pricing_api::calculate_prices(company.id, user_id, service_ids).await {
                Ok(prices) => prices.into_iter().map(|q| (q.service_id, q.price)).collect(),
                Err(e) => {
                    logger::warn(
                        "Price service unavailable, falling back to local estimate",
                        Some(json!({"companyId": company.id, "error": e})),
                    );
                    HashMap::new()
                }
            };

        for service in services {
            let price = quotes
                .get(&service.id)
                .map(|p| p.round() as u32)
                .unwrap_or_else(|| pricing_api::estimate_price(service.average_duration));
            entries.push(CatalogEntry {
                company_id: company.id,
                company_name: company.name.clone(),
                price,
                service,
            });
        }
    }

    entries
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    // Стенд без Telegram: подставляем тестовые учётные данные
    if session.get_untracked().user_id.is_none() {
        logger::info("No user logged in, using test credentials", None);
        session.set_credentials(TEST_USER_ID, DEFAULT_ROLE, None);
    }

    let (entries, set_entries) = signal::<Vec<CatalogEntry>>(Vec::new());
    let (search, set_search) = signal(String::new());
    let filter_state = RwSignal::new(FilterState::default());
    let selected_entry = RwSignal::new(Option::<CatalogEntry>::None);
    let qr_open = RwSignal::new(false);
    let header = RwSignal::new(HeaderMetrics::initial());
    let service_guard = RwSignal::new(0.0_f64);
    let qr_guard = RwSignal::new(0.0_f64);

    let load_entries = move || {
        spawn_local(async move {
            let catalog = async move { Ok::<_, String>(load_catalog(session).await) };
            match http::with_timeout(catalog).await {
                Ok(list) => {
                    if list.is_empty() {
                        logger::warn("No services found for any company", None);
                    } else {
                        logger::info(
                            "Services rendered successfully",
                            Some(json!({"count": list.len()})),
                        );
                    }
                    set_entries.set(list);
                }
                Err(e) => {
                    let err = error::handle(&e, "load_catalog");
                    toasts.error(&err.user_message);
                }
            }
        });
    };
    load_entries();

    // Компании для чекбоксов фильтра — из уже загруженного каталога
    let companies = Signal::derive(move || {
        let mut seen: Vec<(i64, String)> = Vec::new();
        for entry in entries.get() {
            if !seen.iter().any(|(id, _)| *id == entry.company_id) {
                seen.push((entry.company_id, entry.company_name.clone()));
            }
        }
        seen
    });

    // Видимые карточки: поиск и фильтры поверх плоских данных
    let visible = Memo::new(move |_| {
        let term = search.get();
        let state = filter_state.get();
        entries
            .get()
            .into_iter()
            .filter(|entry| {
                filters::matches_search(
                    &term,
                    &entry.service.name,
                    entry.service.description_or_empty(),
                ) && state.matches(
                    entry.company_id,
                    entry.price,
                    entry.service.average_duration,
                )
            })
            .collect::<Vec<_>>()
    });

    let open_service = Callback::new(move |entry: CatalogEntry| {
        if !debounce::allow_click(service_guard) {
            return;
        }
        selected_entry.set(Some(entry));
    });

    let open_qr = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if debounce::allow_click(qr_guard) {
            qr_open.set(true);
        }
    };

    view! {
        <div class="catalog-page">
            <CollapsingHeader metrics=header>
                <input
                    class="catalog-search"
                    type="search"
                    placeholder="Поиск услуг"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <FiltersPopup filters=filter_state companies=companies />
            </CollapsingHeader>

            <section class="profile-cards">
                <div
                    class=move || {
                        if header.get().compact_cards {
                            "profile-card profile-card--compact"
                        } else {
                            "profile-card"
                        }
                    }
                    on:click=open_qr
                >
                    <span class="profile-card__name">
                        {move || session.get().name.unwrap_or_else(|| "Гость".to_string())}
                    </span>
                    <span class="profile-card__hint">"Пригласить друга"</span>
                </div>
                <a class="profile-card__link" href="/profile">"Мой профиль"</a>
            </section>

            <div class=move || {
                if header.get().compact_cards {
                    "services-grid services-grid--compact"
                } else {
                    "services-grid"
                }
            }>
                <For
                    each=move || { let items: Vec<_> = visible.get().into_iter().enumerate().collect(); items }
                    key=|(_, entry)| (entry.company_id, entry.service.id)
                    children=move |(index, entry)| {
                        let delay_ms = ((index % 6) * 80) as u32;
                        view! {
                            <ServiceCard
                                entry=entry
                                delay_ms=delay_ms
                                on_open=open_service
                            />
                        }
                    }
                />
            </div>

            <ServiceModal entry=selected_entry />
            <QrModal open=qr_open />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> CatalogEntry {
        CatalogEntry {
            service: ServiceItem {
                id: 7,
                company_id: 1,
                name: "Мойка кузова".to_string(),
                description: None,
                average_duration: 45,
            },
            company_id: 1,
            company_name: "Мойка №1".to_string(),
            price: 750,
        }
    }

    #[test]
    fn price_label_is_in_rubles() {
        assert_eq!(entry().price_label(), "750 ₽");
    }

    #[test]
    fn full_description_includes_duration_and_company() {
        let text = entry().full_description();
        assert!(text.contains("Время выполнения: 45 минут"));
        assert!(text.contains("Компания: Мойка №1"));
    }
}
