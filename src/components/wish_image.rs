//! Wish Image Component
//!
//! `<img>` that swaps to a placeholder when the URL fails to load.

use leptos::prelude::*;

pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=400&h=300&fit=crop";

#[component]
pub fn WishImage(
    src: String,
    alt: String,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let current_src = move || {
        if failed.get() || src.is_empty() {
            FALLBACK_IMAGE.to_string()
        } else {
            src.clone()
        }
    };

    view! {
        <img
            class=class
            src=current_src
            alt=alt
            on:error=move |_| set_failed.set(true)
        />
    }
}
