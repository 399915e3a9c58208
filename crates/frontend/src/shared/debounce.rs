//! Окно защиты от быстрых повторных кликов (модальные окна, QR).

use leptos::prelude::*;

pub const CLICK_DEBOUNCE_MS: f64 = 300.0;

/// true, если с последнего срабатывания окно ещё не истекло.
pub fn within_debounce(last_ms: f64, now_ms: f64, window_ms: f64) -> bool {
    now_ms - last_ms < window_ms
}

/// Проверяет и обновляет отметку последнего клика. Возвращает false,
/// когда клик нужно проигнорировать.
pub fn allow_click(last_click: RwSignal<f64>) -> bool {
    let now = js_sys::Date::now();
    if within_debounce(last_click.get_untracked(), now, CLICK_DEBOUNCE_MS) {
        return false;
    }
    last_click.set(now);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_click_inside_window_is_ignored() {
        assert!(within_debounce(1_000.0, 1_299.0, CLICK_DEBOUNCE_MS));
    }

    #[test]
    fn click_after_window_passes() {
        assert!(!within_debounce(1_000.0, 1_300.0, CLICK_DEBOUNCE_MS));
        assert!(!within_debounce(1_000.0, 2_000.0, CLICK_DEBOUNCE_MS));
    }

    #[test]
    fn first_click_always_passes() {
        assert!(!within_debounce(0.0, 1_700_000_000_000.0, CLICK_DEBOUNCE_MS));
    }
}
