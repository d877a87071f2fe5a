//! Store Abstraction
//!
//! Defines the data-access interface for wishes. The browser talks to the
//! collaborator through [`crate::http::HttpWishStore`].

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{NewWish, Wish, WishPatch};
use crate::query::{ListQuery, WishPage};

/// CRUD access to the wishes collection.
///
/// Futures are `?Send`: everything runs on the browser's event loop.
/// No operation retries on failure.
#[async_trait(?Send)]
pub trait WishStore {
    /// Fetch one sorted page
    async fn list(&self, query: &ListQuery) -> StoreResult<WishPage>;

    /// Persist a draft; the store stamps `createdAt` and the collaborator assigns the id
    async fn create(&self, draft: &NewWish) -> StoreResult<Wish>;

    /// Send only the fields present in `patch`
    async fn update(&self, id: &str, patch: &WishPatch) -> StoreResult<Wish>;

    async fn delete(&self, id: &str) -> StoreResult<()>;
}
