//! Modal Component
//!
//! Dialog shell shared by every popup: backdrop, title bar and close button.
//! Escape and backdrop clicks close it; page scrolling is locked while open.

use leptos::ev;
use leptos::prelude::*;

/// `overflow` of `<body>` while a dialog is open or closed
fn body_overflow(open: bool) -> &'static str {
    if open {
        "hidden"
    } else {
        "unset"
    }
}

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && is_open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    Effect::new(move |_| {
        let overflow = body_overflow(is_open.get());
        if let Some(body) = document().body() {
            if let Err(e) = body.style().set_property("overflow", overflow) {
                log::warn!("Failed to set body overflow: {:?}", e);
            }
        }
    });

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay">
                <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
                <div class="modal-panel" role="dialog" aria-modal="true">
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.get()}</h2>
                        <button
                            type="button"
                            class="modal-close"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_overflow() {
        assert_eq!(body_overflow(true), "hidden");
        assert_eq!(body_overflow(false), "unset");
    }
}
