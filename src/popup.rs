//! Cart Confirmation Popup
//!
//! Server-rendered `#cart-popup` (or `#cart-action-popup`) shown after a
//! successful add. One auto-dismiss slot: a newer `show` supersedes the
//! pending timer of an older one.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dom;
use crate::store::{AppStateStoreFields, AppStore};

const POPUP_IDS: &[&str] = &["cart-popup", "cart-action-popup"];
const SHOW_CLASS: &str = "show";

/// Generation counter for the single auto-dismiss timer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopupSlot {
    generation: u64,
}

impl PopupSlot {
    /// Start a new timer generation, invalidating any pending one
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn disarm(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

#[derive(Clone, Copy)]
pub struct PopupController {
    store: AppStore,
    slot: StoredValue<PopupSlot>,
    duration_ms: u32,
    target: Option<&'static str>,
}

impl PopupController {
    pub fn new(store: AppStore, duration_ms: u32, exists: impl Fn(&str) -> bool) -> Self {
        Self {
            store,
            slot: StoredValue::new(PopupSlot::default()),
            duration_ms,
            target: POPUP_IDS.iter().copied().find(|id| exists(id)),
        }
    }

    /// False on pages without a popup element; callers fall back to a toast
    pub fn is_available(&self) -> bool {
        self.target.is_some()
    }

    pub fn show(&self) {
        if self.target.is_none() {
            return;
        }
        self.store.popup_open().set(true);
        let generation = self.slot.try_update_value(|s| s.arm()).unwrap_or_default();

        let ctrl = *self;
        spawn_local(async move {
            TimeoutFuture::new(ctrl.duration_ms).await;
            if ctrl.slot.with_value(|s| s.is_current(generation)) {
                ctrl.hide();
            }
        });
    }

    pub fn hide(&self) {
        self.slot.update_value(|s| s.disarm());
        if self.store.popup_open().get_untracked() {
            self.store.popup_open().set(false);
        }
    }
}

/// Mirror `popup_open` onto the popup element's `show` class
pub fn bind_popup(ctrl: PopupController) {
    let Some(id) = ctrl.target else { return };
    let store = ctrl.store;
    Effect::new(move |_| {
        dom::set_class(id, SHOW_CLASS, store.popup_open().get());
    });
}
