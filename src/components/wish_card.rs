//! Wish Card Component
//!
//! One wish in the grid, with delete / edit / details actions.

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wishlist_core::{format_price, Wish};

use super::wish_image::WishImage;

/// Creation date in the browser's locale
pub fn locale_date(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}

#[component]
pub fn WishCard(
    wish: Wish,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_edit: Callback<Wish>,
    #[prop(into)] on_view: Callback<Wish>,
) -> impl IntoView {
    let completed = wish.completed;
    let id = wish.id.clone();
    let edit_target = wish.clone();
    let view_target = wish.clone();

    view! {
        <div class=if completed { "wish-card completed" } else { "wish-card" }>
            <div class="wish-card-media">
                <WishImage
                    src=wish.image_url.clone()
                    alt=wish.title.clone()
                    class="wish-card-image"
                />
                <span class=wish.priority.badge_class()>{wish.priority.label()}</span>
            </div>

            <div class="wish-card-body">
                <h3 class=if completed { "wish-title struck" } else { "wish-title" }>
                    {wish.title.clone()}
                </h3>
                <p class=if completed { "wish-description struck" } else { "wish-description" }>
                    {wish.description.clone()}
                </p>
                <div class="wish-meta">
                    <span class="wish-price">{format_price(wish.price)}</span>
                    <span class="wish-date">{locale_date(&wish.created_at)}</span>
                </div>
            </div>

            <div class="wish-card-actions">
                <button
                    class="icon-btn"
                    title="Delete"
                    aria-label="Delete wish"
                    on:click=move |_| on_delete.run(id.clone())
                >
                    "🗑️"
                </button>
                <button
                    class="icon-btn"
                    title="Update"
                    aria-label="Update wish"
                    on:click=move |_| on_edit.run(edit_target.clone())
                >
                    "✏️"
                </button>
                <button
                    class="icon-btn"
                    title="Details"
                    aria-label="View wish details"
                    on:click=move |_| on_view.run(view_target.clone())
                >
                    "📄"
                </button>
            </div>
        </div>
    }
}
