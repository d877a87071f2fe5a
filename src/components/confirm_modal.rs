//! Confirm Modal Component
//!
//! Generic yes/no dialog. Confirming runs the caller's action, then closes.

use leptos::prelude::*;

use super::modal::Modal;

#[component]
pub fn ConfirmModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into, default = "Yes".to_string())] confirm_text: String,
    #[prop(into, default = "No".to_string())] cancel_text: String,
) -> impl IntoView {
    view! {
        <Modal is_open=is_open on_close=on_close title=title>
            <p class="confirm-message">{message.clone()}</p>
            <div class="confirm-actions">
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| on_close.run(())
                >
                    {cancel_text.clone()}
                </button>
                <button
                    type="button"
                    class="btn btn-danger"
                    on:click=move |_| {
                        on_confirm.run(());
                        on_close.run(());
                    }
                >
                    {confirm_text.clone()}
                </button>
            </div>
        </Modal>
    }
}
