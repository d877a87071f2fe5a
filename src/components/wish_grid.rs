//! Wish Grid Component

use leptos::prelude::*;
use wishlist_core::Wish;

use super::wish_card::WishCard;

/// Cards in server order, or an empty-state hint
#[component]
pub fn WishGrid(
    #[prop(into)] wishes: Signal<Vec<Wish>>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_edit: Callback<Wish>,
    #[prop(into)] on_view: Callback<Wish>,
) -> impl IntoView {
    view! {
        <div class="wish-grid">
            <Show
                when=move || !wishes.with(Vec::is_empty)
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"No wishes yet. Start by adding your first wish!"</p>
                    </div>
                }
            >
                <For
                    each=move || wishes.get()
                    key=|wish| wish.id.clone()
                    children=move |wish| {
                        view! {
                            <WishCard
                                wish=wish
                                on_delete=on_delete
                                on_edit=on_edit
                                on_view=on_view
                            />
                        }
                    }
                />
            </Show>
        </div>
    }
}
