//! Wishlist App
//!
//! Root composition: header, sort bar, grid, dialogs and snackbar, all wired
//! to one shared [`WishesController`].

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wishlist_core::{
    ClientConfig, HttpWishStore, Submission, Wish, WishesController,
};

use crate::components::{
    ConfirmModal, LoadMoreButton, Snackbar, SortBar, WishDetailsModal, WishFormModal, WishGrid,
};
use crate::context::SnackbarContext;
use crate::store::{
    store_close_form, store_open_create, store_open_edit, UiState, UiStateStoreFields,
    WishesSignal,
};

type Controller = WishesController<HttpWishStore, WishesSignal, SnackbarContext>;

const DELETE_TITLE: &str = "Delete Wish";
const DELETE_MESSAGE: &str =
    "Are you sure you want to delete this wish? This action cannot be undone.";
const DELETE_CONFIRM: &str = "Yes, Delete";
const DELETE_CANCEL: &str = "No, Keep it";

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_env();
    log::info!("Wishlist API at {}", config.api_base_url);

    let snackbar = SnackbarContext::new();
    let wishes = WishesSignal::new();
    let ui = Store::new(UiState::default());

    // Provide context to all children
    provide_context(snackbar);
    provide_context(wishes);
    provide_context(ui);

    let store = match HttpWishStore::new(&config) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Cannot build wish store: {}", e);
            return view! {
                <div class="app">
                    <div class="error-banner">
                        <p>"Error: " {e.to_string()}</p>
                    </div>
                </div>
            }
            .into_any();
        }
    };

    let controller = StoredValue::new_local(Controller::new(
        store,
        wishes,
        snackbar,
        config.per_page,
    ));

    // Initial load, and a fresh first page whenever the active sort changes
    Effect::new(move |_| {
        let spec = ui.sort().with(|s| s.spec());
        let ctrl = controller.get_value();
        spawn_local(async move {
            if let Err(e) = ctrl.change_sort(spec).await {
                log::warn!("Loading wishes failed: {}", e);
            }
        });
    });

    let on_submit = Callback::new(move |_: ()| {
        let form = ui.form().get_untracked();
        let editing = ui.editing().get_untracked();
        let ctrl = controller.get_value();
        spawn_local(async move {
            let saved = match form.submission(editing.as_ref()) {
                Submission::Create(draft) => ctrl.create(draft).await.map(|_| ()),
                Submission::Update { id, patch } => ctrl.update(&id, patch).await.map(|_| ()),
            };
            match saved {
                Ok(()) => store_close_form(&ui),
                Err(e) => log::error!("Failed to save wish: {}", e),
            }
        });
    });

    let on_edit = Callback::new(move |wish: Wish| store_open_edit(&ui, wish));
    let on_view = Callback::new(move |wish: Wish| ui.selected().set(Some(wish)));
    let on_delete = Callback::new(move |id: String| ui.pending_delete().set(Some(id)));

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(id) = ui.pending_delete().get_untracked() else {
            return;
        };
        let ctrl = controller.get_value();
        spawn_local(async move {
            if let Err(e) = ctrl.delete(&id).await {
                log::error!("Failed to delete wish {}: {}", id, e);
            }
        });
    });

    let on_load_more = Callback::new(move |_: ()| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            if let Err(e) = ctrl.load_more().await {
                log::warn!("Loading more wishes failed: {}", e);
            }
        });
    });

    let port = config
        .api_port()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "3001".to_string());

    view! {
        <div class="app">
            <header class="app-header">
                <div>
                    <h1>"✨ My Wishlist"</h1>
                    <p class="subtitle">"Keep track of your goals and dreams"</p>
                </div>
                <button class="btn btn-primary" on:click=move |_| store_open_create(&ui)>
                    "Add New Wish"
                </button>
            </header>

            <SortBar />

            {move || wishes.error().map(|message| view! {
                <div class="error-banner">
                    <p>"Error: " {message}</p>
                    <p class="error-hint">
                        "Make sure json-server is running on port " {port.clone()}
                    </p>
                </div>
            })}

            <Show when=move || wishes.show_spinner()>
                <div class="spinner-wrap">
                    <div class="spinner"></div>
                    <p>"Loading wishes..."</p>
                </div>
            </Show>

            <Show when=move || wishes.is_loaded()>
                <WishGrid
                    wishes=Signal::derive(move || wishes.list())
                    on_delete=on_delete
                    on_edit=on_edit
                    on_view=on_view
                />
                <Show when=move || wishes.can_load_more()>
                    <LoadMoreButton
                        loading=Signal::derive(move || wishes.loading())
                        on_click=on_load_more
                    />
                </Show>
            </Show>

            <WishFormModal
                loading=Signal::derive(move || wishes.loading())
                on_submit=on_submit
                on_close=Callback::new(move |_: ()| store_close_form(&ui))
            />

            <WishDetailsModal
                wish=Signal::derive(move || ui.selected().get())
                on_close=Callback::new(move |_: ()| ui.selected().set(None))
            />

            <ConfirmModal
                is_open=Signal::derive(move || ui.pending_delete().with(Option::is_some))
                on_close=Callback::new(move |_: ()| ui.pending_delete().set(None))
                on_confirm=confirm_delete
                title=DELETE_TITLE
                message=DELETE_MESSAGE
                confirm_text=DELETE_CONFIRM
                cancel_text=DELETE_CANCEL
            />

            <Snackbar />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_dialog_text() {
        assert!(DELETE_MESSAGE.ends_with("This action cannot be undone."));
        assert_eq!(DELETE_CONFIRM, "Yes, Delete");
        assert_eq!(DELETE_CANCEL, "No, Keep it");
    }
}
