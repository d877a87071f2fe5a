//! Notification Context
//!
//! The snackbar broadcaster, provided once by the root via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wishlist_core::{Notification, NotificationKind, Notifier};

/// How long a notification stays up
pub const SNACKBAR_DURATION_MS: u32 = 3000;

/// Shows one notification at a time and hides it after a delay
#[derive(Clone, Copy)]
pub struct SnackbarContext {
    /// Currently visible notification - read
    pub current: ReadSignal<Option<Notification>>,
    /// Currently visible notification - write
    set_current: WriteSignal<Option<Notification>>,
    /// Bumped on every show; a timer only hides the message it started for
    shown: StoredValue<u64>,
}

impl SnackbarContext {
    pub fn new() -> Self {
        let (current, set_current) = signal(None::<Notification>);
        Self {
            current,
            set_current,
            shown: StoredValue::new(0),
        }
    }

    /// Replace whatever is showing and restart the dismiss timer
    pub fn show(&self, notification: Notification) {
        self.shown.update_value(|n| *n += 1);
        let ticket = self.shown.get_value();
        self.set_current.set(Some(notification));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(SNACKBAR_DURATION_MS).await;
            if ctx.shown.get_value() == ticket {
                ctx.close();
            }
        });
    }

    pub fn close(&self) {
        self.set_current.set(None);
    }
}

impl Notifier for SnackbarContext {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.show(Notification::new(kind, message));
    }
}

/// Get the snackbar from context
pub fn use_snackbar() -> SnackbarContext {
    expect_context::<SnackbarContext>()
}
