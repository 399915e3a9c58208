use leptos::prelude::*;

use crate::session::use_session;
use crate::shared::clipboard;
use crate::shared::components::ui::Button;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;

/// Модалка с реферальной ссылкой пользователя.
#[component]
pub fn QrModal(open: RwSignal<bool>) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    view! {
        <Show when=move || open.get()>
            {move || {
                let link = session.referral_link().unwrap_or_default();
                let link_for_copy = link.clone();
                let on_close = Callback::new(move |_: ()| open.set(false));
                let copy = Callback::new(move |_: leptos::ev::MouseEvent| {
                    let link = link_for_copy.clone();
                    clipboard::copy_to_clipboard_with_callback(&link, move || {
                        toasts.success("Ссылка скопирована!");
                    });
                });

                view! {
                    <Modal title="Пригласить друга".to_string() on_close=on_close>
                        <p class="qr-modal__hint">
                            "Отправьте ссылку другу — по ней откроется каталог с вашим идентификатором."
                        </p>
                        <code class="qr-modal__link">{link}</code>
                        <Button on_click=copy>"Скопировать ссылку"</Button>
                    </Modal>
                }
            }}
        </Show>
    }
}
