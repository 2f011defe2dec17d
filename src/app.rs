//! Wallcraft Storefront App
//!
//! Root that owns all UI state and wires it to the server-rendered page.
//! Renders nothing itself; toasts mount into their own container on demand.

use leptos::prelude::*;
use leptos_toast::create_toast_hub;
use reactive_stores::Store;

use crate::bindings::bind_document;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::dom;
use crate::menu::{bind_menu, MenuIds};
use crate::popup::{bind_popup, PopupController};
use crate::store::AppState;
use crate::sync;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!(
        "[APP] Booting on {:?} page, fencing={}",
        config.page,
        config.request_fencing
    );

    let store = Store::new(AppState::new(config.request_fencing));
    let toasts = create_toast_hub(config.toast_ms);
    let popup = PopupController::new(store, config.popup_ms, dom::exists);
    let menu = MenuIds::resolve(dom::exists);
    let is_admin = config.is_admin();

    let ctx = AppContext::new(config, store, toasts, popup, menu);
    if let Some(ids) = menu {
        bind_menu(store, ids);
    }
    bind_popup(popup);
    bind_document(ctx);

    if !is_admin {
        sync::refresh_count(ctx);
    }
}
