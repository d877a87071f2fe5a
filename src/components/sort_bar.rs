//! Sort Bar Component
//!
//! Date and price selects. Picking a value makes that axis the active one.

use leptos::prelude::*;
use wishlist_core::{DateOrder, PriceOrder};

use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn SortBar() -> impl IntoView {
    let sort = use_ui_store().sort();

    view! {
        <div class="sort-bar">
            <label class="sort-field">
                <span>"Sort by Date"</span>
                <select
                    prop:value=move || sort.with(|s| s.date.as_str())
                    on:change=move |ev| {
                        let order = DateOrder::from_str(&event_target_value(&ev));
                        sort.update(|s| s.select_date(order));
                    }
                >
                    {DateOrder::ALL.iter().map(|o| view! {
                        <option value=o.as_str()>{o.label()}</option>
                    }).collect_view()}
                </select>
            </label>

            <label class="sort-field">
                <span>"Sort by Price"</span>
                <select
                    prop:value=move || sort.with(|s| s.price.as_str())
                    on:change=move |ev| {
                        let order = PriceOrder::from_str(&event_target_value(&ev));
                        sort.update(|s| s.select_price(order));
                    }
                >
                    {PriceOrder::ALL.iter().map(|o| view! {
                        <option value=o.as_str()>{o.label()}</option>
                    }).collect_view()}
                </select>
            </label>
        </div>
    }
}
