//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_server;

use std::cell::RefCell;
use std::rc::Rc;

use wishlist_core::{
    ClientConfig, HttpWishStore, NewWish, Notification, NotificationKind, Notifier, Priority,
    WishesController, WishesState,
};

pub use mock_server::MockJsonServer;

/// Collects every notification for later assertions.
#[derive(Clone, Default)]
pub struct RecordingNotifier(Rc<RefCell<Vec<Notification>>>);

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.0.borrow_mut().push(Notification::new(kind, message));
    }
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.0.borrow().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.0.borrow().last().cloned()
    }
}

pub type TestController = WishesController<HttpWishStore, Rc<RefCell<WishesState>>, RecordingNotifier>;

pub fn http_store(server: &MockJsonServer) -> HttpWishStore {
    HttpWishStore::new(&ClientConfig {
        api_base_url: server.base_url(),
        per_page: 10,
    })
    .expect("mock server URL should be valid")
}

/// Controller over the mock server with a small page size.
pub fn controller(server: &MockJsonServer, per_page: u32) -> (TestController, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    let controller = WishesController::new(
        http_store(server),
        Rc::new(RefCell::new(WishesState::new())),
        notifier.clone(),
        per_page,
    );
    (controller, notifier)
}

pub fn draft(title: &str, price: f64, priority: Priority) -> NewWish {
    NewWish {
        title: title.to_string(),
        description: format!("{} description", title),
        image_url: "https://example.com/image.jpg".to_string(),
        priority,
        price,
        completed: false,
    }
}
