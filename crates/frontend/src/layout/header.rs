//! Сжимающаяся шапка каталога.
//!
//! Логотип линейно интерполируется между исходным и минимальным размером на
//! первых 150px скролла; строка поиска и фильтры прячутся при движении вниз.
//! У нижней границы документа (допуск 10px) применяется полностью сжатое
//! состояние независимо от направления.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub const LOGO_INITIAL_WIDTH: f64 = 331.0;
pub const LOGO_INITIAL_HEIGHT: f64 = 61.0;
pub const LOGO_INITIAL_TOP: f64 = 50.0;

pub const LOGO_MIN_WIDTH: f64 = 80.0;
pub const LOGO_MIN_HEIGHT: f64 = 20.0;
pub const LOGO_MIN_TOP: f64 = 10.0;

/// Дистанция скролла до полного сжатия.
pub const COLLAPSE_DISTANCE: f64 = 150.0;
/// Отметка, после которой большая карточка сменяется компактной.
pub const CARD_SWAP_OFFSET: f64 = 100.0;
pub const BOTTOM_TOLERANCE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderMetrics {
    pub logo_width: f64,
    pub logo_height: f64,
    pub logo_top: f64,
    pub controls_visible: bool,
    pub compact_cards: bool,
}

impl HeaderMetrics {
    pub fn initial() -> Self {
        header_metrics(0.0, false, false)
    }

    fn collapsed() -> Self {
        Self {
            logo_width: LOGO_MIN_WIDTH,
            logo_height: LOGO_MIN_HEIGHT,
            logo_top: LOGO_MIN_TOP,
            controls_visible: false,
            compact_cards: true,
        }
    }
}

pub fn collapse_progress(scroll_y: f64) -> f64 {
    (scroll_y / COLLAPSE_DISTANCE).clamp(0.0, 1.0)
}

fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    from - (from - to) * progress
}

/// Метрики шапки как чистая функция позиции и направления скролла.
pub fn header_metrics(scroll_y: f64, scrolling_down: bool, at_bottom: bool) -> HeaderMetrics {
    if at_bottom {
        return HeaderMetrics::collapsed();
    }

    let progress = collapse_progress(scroll_y);
    HeaderMetrics {
        logo_width: lerp(LOGO_INITIAL_WIDTH, LOGO_MIN_WIDTH, progress),
        logo_height: lerp(LOGO_INITIAL_HEIGHT, LOGO_MIN_HEIGHT, progress),
        logo_top: lerp(LOGO_INITIAL_TOP, LOGO_MIN_TOP, progress),
        controls_visible: !scrolling_down && scroll_y < COLLAPSE_DISTANCE,
        compact_cards: if scrolling_down {
            scroll_y > CARD_SWAP_OFFSET
        } else {
            scroll_y >= COLLAPSE_DISTANCE
        },
    }
}

/// Шапка каталога. Слушает скролл окна и публикует метрики в переданный
/// сигнал, чтобы страница могла переключать компактную сетку карточек.
#[component]
pub fn CollapsingHeader(
    /// Метрики для внешних потребителей (сетка карточек)
    metrics: RwSignal<HeaderMetrics>,
    /// Поиск и кнопка фильтров
    children: Children,
) -> impl IntoView {
    let last_y = StoredValue::new(0.0_f64);

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let Some(win) = web_sys::window() else {
                return;
            };
            let y = win.scroll_y().unwrap_or(0.0);
            let scrolling_down = y > last_y.get_value();
            let at_bottom = win
                .document()
                .and_then(|doc| doc.document_element())
                .map(|root| {
                    let doc_height = root.scroll_height() as f64;
                    let inner = win
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    y >= doc_height - inner - BOTTOM_TOLERANCE
                })
                .unwrap_or(false);

            metrics.set(header_metrics(y, scrolling_down, at_bottom));
            last_y.set_value(y);
        }) as Box<dyn FnMut(_)>);

        if let Some(win) = web_sys::window() {
            let _ = win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    view! {
        <header class="catalog-header">
            <div
                class="catalog-header__logo"
                style=move || {
                    let m = metrics.get();
                    format!(
                        "width: {:.0}px; height: {:.0}px; top: {:.0}px;",
                        m.logo_width, m.logo_height, m.logo_top
                    )
                }
            >
                "АвтоСервис"
            </div>
            <div class=move || {
                if metrics.get().controls_visible {
                    "catalog-header__controls"
                } else {
                    "catalog-header__controls catalog-header__controls--hidden"
                }
            }>
                {children()}
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_scroll_keeps_initial_logo() {
        let m = header_metrics(0.0, false, false);
        assert_eq!(m.logo_width, LOGO_INITIAL_WIDTH);
        assert_eq!(m.logo_height, LOGO_INITIAL_HEIGHT);
        assert_eq!(m.logo_top, LOGO_INITIAL_TOP);
        assert!(m.controls_visible);
        assert!(!m.compact_cards);
    }

    #[test]
    fn halfway_scroll_interpolates_linearly() {
        let m = header_metrics(75.0, true, false);
        assert_eq!(m.logo_width, 205.5);
        assert_eq!(m.logo_height, 40.5);
        assert_eq!(m.logo_top, 30.0);
        assert!(!m.controls_visible);
        assert!(!m.compact_cards);
    }

    #[test]
    fn deep_scroll_clamps_to_minimum() {
        let m = header_metrics(400.0, true, false);
        assert_eq!(m.logo_width, LOGO_MIN_WIDTH);
        assert_eq!(m.logo_height, LOGO_MIN_HEIGHT);
        assert_eq!(m.logo_top, LOGO_MIN_TOP);
        assert!(m.compact_cards);
    }

    #[test]
    fn card_swap_happens_past_offset_when_scrolling_down() {
        assert!(!header_metrics(100.0, true, false).compact_cards);
        assert!(header_metrics(101.0, true, false).compact_cards);
    }

    #[test]
    fn scrolling_up_restores_controls() {
        let m = header_metrics(40.0, false, false);
        assert!(m.controls_visible);
        assert!(!m.compact_cards);
    }

    #[test]
    fn document_bottom_forces_collapsed_state() {
        let m = header_metrics(20.0, false, true);
        assert_eq!(m.logo_width, LOGO_MIN_WIDTH);
        assert!(!m.controls_visible);
        assert!(m.compact_cards);
    }
}
