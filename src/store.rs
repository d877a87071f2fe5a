//! Application State Stores
//!
//! Wishes state lives in a signal the controller writes through; UI-local
//! state (dialogs, form, sort) uses reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use wishlist_core::{SortControls, StateCell, Wish, WishForm, WishesState};

/// Root-composition state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Create/edit dialog visible
    pub show_form: bool,
    /// Wish being edited (None = creating)
    pub editing: Option<Wish>,
    /// Current form field values
    pub form: WishForm,
    /// Id awaiting delete confirmation
    pub pending_delete: Option<String>,
    /// Wish shown in the details dialog
    pub selected: Option<Wish>,
    pub sort: SortControls,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Open the dialog with an empty form
pub fn store_open_create(store: &UiStore) {
    store.editing().set(None);
    store.form().set(WishForm::default());
    store.show_form().set(true);
}

/// Open the dialog prefilled from `wish`
pub fn store_open_edit(store: &UiStore, wish: Wish) {
    store.form().set(WishForm::from_wish(&wish));
    store.editing().set(Some(wish));
    store.show_form().set(true);
}

/// Close the dialog and reset the form
pub fn store_close_form(store: &UiStore) {
    store.show_form().set(false);
    store.editing().set(None);
    store.form().set(WishForm::default());
}

// ========================
// Wishes State
// ========================

/// The wishes state container as seen by the view tree
#[derive(Clone, Copy)]
pub struct WishesSignal(RwSignal<WishesState>);

impl WishesSignal {
    pub fn new() -> Self {
        Self(RwSignal::new(WishesState::new()))
    }

    /// Loaded wishes, empty while unloaded
    pub fn list(&self) -> Vec<Wish> {
        self.0
            .with(|s| s.wishes().map(<[Wish]>::to_vec).unwrap_or_default())
    }

    pub fn is_loaded(&self) -> bool {
        self.0.with(|s| s.wishes().is_some())
    }

    pub fn loading(&self) -> bool {
        self.0.with(|s| s.loading())
    }

    pub fn error(&self) -> Option<String> {
        self.0.with(|s| s.error().map(str::to_string))
    }

    pub fn show_spinner(&self) -> bool {
        self.0.with(|s| s.show_spinner())
    }

    pub fn can_load_more(&self) -> bool {
        self.0.with(|s| s.can_load_more())
    }
}

impl StateCell for WishesSignal {
    fn read<R>(&self, f: impl FnOnce(&WishesState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut WishesState)) {
        self.0.update(f);
    }
}
