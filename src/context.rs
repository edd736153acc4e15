//! Refresh Context
//!
//! Shared reload trigger provided via Leptos Context API.

use leptos::prelude::*;

/// Lets any child ask for the list to be fetched again
#[derive(Clone, Copy)]
pub struct RefreshContext {
    /// Bumped on every requested reload - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped on every requested reload - write
    set_reload_trigger: WriteSignal<u32>,
}

impl RefreshContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of the list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v = v.wrapping_add(1));
    }
}
