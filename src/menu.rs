//! Side Menu
//!
//! Panel and backdrop overlay share one open/closed state. Markup comes in two
//! flavors (`sideMenu`/`menuOverlay` and `wcMenu`/`wcMenuOverlay`); whichever
//! is present on the page is bound.

use leptos::prelude::*;

use crate::dom;
use crate::store::{AppStateStoreFields, AppStore};

/// Class toggled on both panel and overlay
pub const OPEN_CLASS: &str = "open";

const VARIANTS: &[(&str, &str)] = &[("wcMenu", "wcMenuOverlay"), ("sideMenu", "menuOverlay")];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns whether the state changed
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Element ids of the menu pair in use on this page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuIds {
    pub panel: &'static str,
    pub overlay: &'static str,
}

impl MenuIds {
    /// Pick the first variant whose panel exists
    pub fn resolve(exists: impl Fn(&str) -> bool) -> Option<Self> {
        VARIANTS
            .iter()
            .find(|(panel, _)| exists(panel))
            .map(|&(panel, overlay)| MenuIds { panel, overlay })
    }
}

pub fn open_menu(store: &AppStore) {
    if store.menu().with_untracked(|m| m.is_open()) {
        return;
    }
    store.menu().update(|m| {
        m.open();
    });
}

pub fn close_menu(store: &AppStore) {
    if !store.menu().with_untracked(|m| m.is_open()) {
        return;
    }
    store.menu().update(|m| {
        m.close();
    });
}

pub fn toggle_menu(store: &AppStore) {
    store.menu().update(|m| m.toggle());
}

/// Keep the DOM pair in sync with the store. The first run closes the menu,
/// so a page always loads with it shut.
pub fn bind_menu(store: AppStore, ids: MenuIds) {
    Effect::new(move |_| {
        let open = store.menu().with(|m| m.is_open());
        log::debug!("[MENU] open={}", open);
        dom::set_class(ids.panel, OPEN_CLASS, open);
        dom::set_class(ids.overlay, OPEN_CLASS, open);
    });
}
