//! Wishes Controller
//!
//! Drives a [`WishStore`] and keeps a [`StateCell`] and a [`Notifier`] in
//! step with every request. Built once per session and shared by cloning.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::error::StoreResult;
use crate::models::{NewWish, Wish, WishPatch};
use crate::notify::Notifier;
use crate::query::{ListQuery, SortSpec};
use crate::state::StateCell;
use crate::store::WishStore;

struct Inner<S, C, N> {
    store: S,
    state: C,
    notifier: N,
    per_page: u32,
    last_sort: Cell<Option<SortSpec>>,
    /// Bumped by every replacing load; older responses are dropped.
    generation: Cell<u64>,
}

pub struct WishesController<S, C, N> {
    inner: Rc<Inner<S, C, N>>,
}

impl<S, C, N> Clone for WishesController<S, C, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, C, N> WishesController<S, C, N>
where
    S: WishStore,
    C: StateCell,
    N: Notifier,
{
    pub fn new(store: S, state: C, notifier: N, per_page: u32) -> Self {
        Self {
            inner: Rc::new(Inner {
                store,
                state,
                notifier,
                per_page,
                last_sort: Cell::new(None),
                generation: Cell::new(0),
            }),
        }
    }

    pub fn state(&self) -> &C {
        &self.inner.state
    }

    /// Sort used by reloads and "load more"
    pub fn last_sort(&self) -> Option<SortSpec> {
        self.inner.last_sort.get()
    }

    // ========================
    // List
    // ========================

    /// Fetch `page`; replaces the list unless `append`.
    ///
    /// Replacing loads clear the list first and announce their outcome.
    /// Appending loads keep the list and fail quietly (the error field is
    /// still set).
    pub async fn load(
        &self,
        sort: Option<SortSpec>,
        page: u32,
        append: bool,
    ) -> StoreResult<Vec<Wish>> {
        self.fetch(sort, page, append, true).await
    }

    /// Make `sort` authoritative and start over at page 1
    pub async fn change_sort(&self, sort: SortSpec) -> StoreResult<Vec<Wish>> {
        self.inner.last_sort.set(Some(sort));
        self.load(Some(sort), 1, false).await
    }

    /// Page 1 again with the last-used sort
    pub async fn reload(&self) -> StoreResult<Vec<Wish>> {
        self.load(self.last_sort(), 1, false).await
    }

    /// Next page with the last-used sort, appended
    pub async fn load_more(&self) -> StoreResult<Vec<Wish>> {
        let next_page = self.inner.state.read(|s| s.current_page()) + 1;
        self.load(self.last_sort(), next_page, true).await
    }

    async fn fetch(
        &self,
        sort: Option<SortSpec>,
        page: u32,
        append: bool,
        announce: bool,
    ) -> StoreResult<Vec<Wish>> {
        let inner = &self.inner;
        let generation = if append {
            inner.generation.get()
        } else {
            let next = inner.generation.get() + 1;
            inner.generation.set(next);
            next
        };

        inner.state.write(|s| {
            s.set_loading(true);
            s.set_error(None);
            if !append {
                s.set_wishes(None);
            }
        });

        let query = ListQuery {
            sort,
            page,
            per_page: inner.per_page,
        };
        let result = inner.store.list(&query).await;

        if generation != inner.generation.get() {
            log::debug!("Dropping stale response for page {}", page);
            return Ok(result.map(|fetched| fetched.items).unwrap_or_default());
        }

        match result {
            Ok(fetched) => {
                let items = fetched.items;
                inner.state.write(|s| {
                    s.set_has_more(fetched.has_more);
                    if append {
                        s.append_wishes(items.clone());
                    } else {
                        s.set_wishes(Some(items.clone()));
                    }
                    s.set_current_page(page);
                    s.set_loading(false);
                });
                log::info!("Loaded {} wishes (page {})", items.len(), page);
                if !append && announce {
                    inner.notifier.success("Wishes loaded successfully");
                }
                Ok(items)
            }
            Err(err) => {
                let message = err.to_string();
                log::warn!("Loading page {} failed: {}", page, message);
                inner.state.write(|s| {
                    s.set_error(Some(message.clone()));
                    if !append {
                        s.set_wishes(None);
                    }
                    s.set_loading(false);
                });
                if !append {
                    inner.notifier.error(&message);
                }
                Err(err)
            }
        }
    }

    // ========================
    // Mutations
    // ========================

    pub async fn create(&self, draft: NewWish) -> StoreResult<Wish> {
        self.mutate(
            self.inner.store.create(&draft),
            "Wish created successfully",
        )
        .await
    }

    pub async fn update(&self, id: &str, patch: WishPatch) -> StoreResult<Wish> {
        self.mutate(
            self.inner.store.update(id, &patch),
            "Wish updated successfully",
        )
        .await
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.mutate(self.inner.store.delete(id), "Wish deleted successfully")
            .await
    }

    /// Run a mutation, then refetch page 1 instead of patching the cache.
    ///
    /// Failures only notify; the error field stays reserved for list loads.
    async fn mutate<T>(
        &self,
        op: impl Future<Output = StoreResult<T>>,
        done: &str,
    ) -> StoreResult<T> {
        let inner = &self.inner;
        inner.state.write(|s| {
            s.set_loading(true);
            s.set_error(None);
        });

        match op.await {
            Ok(value) => {
                self.fetch(self.last_sort(), 1, false, false).await?;
                inner.notifier.success(done);
                Ok(value)
            }
            Err(err) => {
                log::warn!("Mutation failed: {}", err);
                inner.state.write(|s| s.set_loading(false));
                inner.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }
}
