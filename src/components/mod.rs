//! UI Components
//!
//! Reusable Leptos components.

mod confirm_modal;
mod load_more_button;
mod modal;
mod snackbar;
mod sort_bar;
mod wish_card;
mod wish_details_modal;
mod wish_form_modal;
mod wish_grid;
mod wish_image;

pub use confirm_modal::ConfirmModal;
pub use load_more_button::LoadMoreButton;
pub use snackbar::Snackbar;
pub use sort_bar::SortBar;
pub use wish_details_modal::WishDetailsModal;
pub use wish_form_modal::WishFormModal;
pub use wish_grid::WishGrid;
