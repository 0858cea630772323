//! Alert Context
//!
//! Transient deletion notification state, provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long the alert stays up before hiding itself
const AUTO_HIDE_MS: u32 = 4_000;

/// Alert banner state: hidden or visible, with a pending auto-hide task
#[derive(Clone, Copy)]
pub struct AlertContext {
    /// Whether the banner is currently shown - read
    pub visible: ReadSignal<bool>,
    /// Whether the banner is currently shown - write
    set_visible: WriteSignal<bool>,
    /// Handle to the pending auto-hide timeout, if any
    hide_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl AlertContext {
    pub fn new() -> Self {
        let (visible, set_visible) = signal(false);
        Self {
            visible,
            set_visible,
            hide_timer: StoredValue::new_local(None),
        }
    }

    /// Show the banner and restart the auto-hide countdown. Replacing the
    /// stored handle drops any pending timeout, which cancels it, so
    /// repeated calls restart the single timer cycle.
    pub fn show(&self) {
        self.set_visible.set(true);

        let set_visible = self.set_visible;
        self.hide_timer.set_value(Some(Timeout::new(AUTO_HIDE_MS, move || {
            set_visible.set(false);
        })));
    }

    /// Hide the banner immediately, cancelling any pending auto-hide
    pub fn dismiss(&self) {
        self.hide_timer.set_value(None);
        self.set_visible.set(false);
    }
}
