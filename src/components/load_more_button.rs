//! Load More Button Component

use leptos::prelude::*;

#[component]
pub fn LoadMoreButton(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="load-more">
            <button
                class="btn btn-primary"
                disabled=move || loading.get()
                on:click=move |_| on_click.run(())
            >
                {move || if loading.get() { "Loading..." } else { "Load More" }}
            </button>
        </div>
    }
}
