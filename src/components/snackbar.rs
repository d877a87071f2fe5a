//! Snackbar Component
//!
//! Renders the notification currently held by [`SnackbarContext`](crate::context::SnackbarContext).

use leptos::prelude::*;

use crate::context::use_snackbar;

#[component]
pub fn Snackbar() -> impl IntoView {
    let snackbar = use_snackbar();

    move || {
        snackbar.current.get().map(|note| {
            view! {
                <div class=note.kind.css_class() role="status">
                    <span class="snackbar-icon">{note.kind.icon()}</span>
                    <span class="snackbar-message">{note.message}</span>
                    <button
                        class="snackbar-close"
                        aria-label="Close notification"
                        on:click=move |_| snackbar.close()
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
