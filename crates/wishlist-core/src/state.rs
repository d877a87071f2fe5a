//! Wishes State Container
//!
//! The cached page(s) of wishes plus request status. Only the mutators
//! below change it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Wish;

#[derive(Debug, Clone, PartialEq)]
pub struct WishesState {
    /// `None` until a list load succeeds (and again while a replacing load runs)
    wishes: Option<Vec<Wish>>,
    loading: bool,
    error: Option<String>,
    has_more: bool,
    current_page: u32,
}

impl Default for WishesState {
    fn default() -> Self {
        Self {
            wishes: None,
            loading: false,
            error: None,
            has_more: true,
            current_page: 1,
        }
    }
}

impl WishesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wishes(&self) -> Option<&[Wish]> {
        self.wishes.as_deref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    // ========================
    // Mutators
    // ========================

    pub fn set_wishes(&mut self, wishes: Option<Vec<Wish>>) {
        self.wishes = wishes;
    }

    /// Append after the existing items; replaces when nothing is loaded.
    pub fn append_wishes(&mut self, more: Vec<Wish>) {
        match &mut self.wishes {
            Some(wishes) => wishes.extend(more),
            None => self.wishes = Some(more),
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_has_more(&mut self, has_more: bool) {
        self.has_more = has_more;
    }

    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page;
    }

    // ========================
    // View helpers
    // ========================

    /// Spinner only while nothing is on screen
    pub fn show_spinner(&self) -> bool {
        self.loading && self.wishes.is_none()
    }

    pub fn can_load_more(&self) -> bool {
        self.has_more && self.wishes.as_ref().is_some_and(|w| !w.is_empty())
    }
}

/// Shared, interior-mutable home of a [`WishesState`]
pub trait StateCell {
    fn read<R>(&self, f: impl FnOnce(&WishesState) -> R) -> R;

    fn write(&self, f: impl FnOnce(&mut WishesState));
}

impl StateCell for Rc<RefCell<WishesState>> {
    fn read<R>(&self, f: impl FnOnce(&WishesState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut WishesState)) {
        f(&mut self.borrow_mut());
    }
}
