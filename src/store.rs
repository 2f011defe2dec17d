//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::{CartState, Ticket, ViewPatch};
use crate::menu::MenuState;
use crate::models::{CartSnapshot, ProductId};

/// Global UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last accepted server view of the cart
    pub cart: CartState,
    /// Side panel + overlay, always toggled together
    pub menu: MenuState,
    /// Confirmation popup visibility
    pub popup_open: bool,
}

impl AppState {
    pub fn new(fencing: bool) -> Self {
        Self {
            cart: CartState::new(fencing),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_issue_ticket(store: &AppStore) -> Ticket {
    store.cart().write().issue()
}

pub fn store_apply_count(store: &AppStore, ticket: Ticket, count: u32) -> Vec<ViewPatch> {
    store.cart().write().apply_count(ticket, count)
}

pub fn store_apply_added(store: &AppStore, ticket: Ticket, snap: &CartSnapshot) -> Vec<ViewPatch> {
    store.cart().write().apply_added(ticket, snap)
}

pub fn store_apply_line_update(
    store: &AppStore,
    ticket: Ticket,
    id: &ProductId,
    snap: &CartSnapshot,
) -> Vec<ViewPatch> {
    store.cart().write().apply_line_update(ticket, id, snap)
}
