//! Wish Details Modal Component
//!
//! Read-only view of every field of one wish.

use leptos::prelude::*;
use wishlist_core::{format_price, Wish};

use super::modal::Modal;
use super::wish_card::locale_date;
use super::wish_image::WishImage;

#[component]
pub fn WishDetailsModal(
    #[prop(into)] wish: Signal<Option<Wish>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || wish.with(Option::is_some));

    view! {
        <Modal is_open=is_open on_close=on_close title="Wish Details".to_string()>
            {move || wish.get().map(|wish| view! {
                <div class="wish-details">
                    <WishImage
                        src=wish.image_url.clone()
                        alt=wish.title.clone()
                        class="details-image"
                    />

                    <div class="detail-field">
                        <h3>"Title"</h3>
                        <p class="detail-title">{wish.title.clone()}</p>
                    </div>

                    <div class="detail-field">
                        <h3>"Description"</h3>
                        <p>{wish.description.clone()}</p>
                    </div>

                    <div class="detail-grid">
                        <div class="detail-field">
                            <h3>"Price"</h3>
                            <p class="detail-price">{format_price(wish.price)}</p>
                        </div>
                        <div class="detail-field">
                            <h3>"Priority"</h3>
                            <span class=wish.priority.badge_class()>{wish.priority.label()}</span>
                        </div>
                        <div class="detail-field">
                            <h3>"Status"</h3>
                            <p>{if wish.completed { "Completed" } else { "Pending" }}</p>
                        </div>
                        <div class="detail-field">
                            <h3>"Created"</h3>
                            <p>{locale_date(&wish.created_at)}</p>
                        </div>
                    </div>

                    <div class="detail-field">
                        <h3>"Image URL"</h3>
                        <p class="detail-url">{wish.image_url.clone()}</p>
                    </div>
                </div>
            })}
        </Modal>
    }
}
