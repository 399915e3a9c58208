//! Копирование текста в буфер обмена через Web Clipboard API.

use wasm_bindgen_futures::spawn_local;

/// Копирует текст и вызывает колбэк при успехе (например, чтобы показать toast).
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                .await
                .is_ok()
            {
                on_success();
            }
        }
    });
}
