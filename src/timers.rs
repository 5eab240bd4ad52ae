//! Browser Timers
//!
//! One cancellable `gloo_timers` timeout per owner. Scheduling replaces (and so
//! cancels) the previous timeout; the owner's cleanup cancels whatever is left.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TimerSlot {
    handle: StoredValue<Option<Timeout>, LocalStorage>,
}

impl TimerSlot {
    /// Must be called inside a reactive owner (component body)
    pub fn new() -> Self {
        let slot = Self { handle: StoredValue::new_local(None) };
        on_cleanup(move || slot.cancel());
        slot
    }

    pub fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(delay_ms, callback);
        // Dropping the old Timeout clears it
        self.handle.set_value(Some(timeout));
    }

    pub fn cancel(&self) {
        self.handle.try_update_value(|timeout| {
            timeout.take();
        });
    }
}
