//! Wishlist Core
//!
//! Everything behind the wishlist UI that does not need a browser:
//! - models: the wish data contract
//! - query / store / http: the remote store client
//! - state / controller: the state container and the code that drives it
//! - notify / sort / form: notification, sort-control and form models

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod models;
pub mod notify;
pub mod query;
pub mod sort;
pub mod state;
pub mod store;

pub use config::ClientConfig;
pub use controller::WishesController;
pub use error::{StoreError, StoreResult};
pub use form::{Submission, WishForm};
pub use http::HttpWishStore;
pub use models::{format_price, NewWish, Priority, Wish, WishPatch};
pub use notify::{Notification, NotificationKind, Notifier};
pub use query::{ListQuery, SortField, SortOrder, SortSpec, WishPage};
pub use sort::{DateOrder, PriceOrder, SortAxis, SortControls};
pub use state::{StateCell, WishesState};
pub use store::WishStore;
