//! Document Event Bindings
//!
//! One delegated listener per event type on the document, so markup added
//! after boot is handled too. Triggers are matched by `data-*` attribute.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::admin;
use crate::context::AppContext;
use crate::dom;
use crate::menu::{close_menu, open_menu, toggle_menu};
use crate::models::{ProductId, QtyAction};
use crate::sync;

fn product_id(el: &web_sys::Element) -> Option<ProductId> {
    el.get_attribute("data-product-id").and_then(ProductId::new)
}

fn handle_click(ctx: AppContext, ev: &web_sys::Event) {
    if let Some(btn) = dom::closest(ev, "[data-add-to-cart]") {
        ev.prevent_default();
        match product_id(&btn) {
            Some(id) => sync::add_item(ctx, id),
            None => log::warn!("[CART] Add button without data-product-id"),
        }
        return;
    }

    if let Some(btn) = dom::closest(ev, "[data-cart-action]") {
        ev.prevent_default();
        let action = btn
            .get_attribute("data-cart-action")
            .as_deref()
            .and_then(QtyAction::parse);
        match (product_id(&btn), action) {
            (Some(id), Some(action)) => sync::update_quantity(ctx, id, action),
            _ => log::warn!("[CART] Quantity button missing product id or action"),
        }
        return;
    }

    if dom::closest(ev, "[data-menu-toggle]").is_some() {
        toggle_menu(&ctx.store);
        return;
    }

    if dom::closest(ev, "[data-menu-open]").is_some() {
        open_menu(&ctx.store);
        return;
    }

    let on_overlay = ctx
        .menu
        .map(|ids| dom::closest(ev, &format!("#{}", ids.overlay)).is_some())
        .unwrap_or(false);
    if on_overlay || dom::closest(ev, "[data-menu-close]").is_some() {
        close_menu(&ctx.store);
        return;
    }

    if dom::closest(ev, "[data-popup-close]").is_some() {
        ctx.popup.hide();
        return;
    }

    if dom::closest(ev, "[data-admin-add]").is_some() {
        ev.prevent_default();
        admin::submit_product(ctx);
    }
}

fn handle_submit(ctx: AppContext, ev: &web_sys::Event) {
    let is_product_form = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.id() == admin::FORM_ID)
        .unwrap_or(false);
    if is_product_form {
        ev.prevent_default();
        admin::submit_product(ctx);
    }
}

/// Attach click, submit, keydown and pagehide listeners for the page's lifetime
pub fn bind_document(ctx: AppContext) {
    let Some(win) = web_sys::window() else { return };
    let Some(doc) = win.document() else { return };

    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        handle_click(ctx, &ev);
    });
    let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        handle_submit(ctx, &ev);
    });
    let _ = doc.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    on_submit.forget();

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            close_menu(&ctx.store);
            ctx.popup.hide();
        }
    });
    let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();

    let on_pagehide = Closure::<dyn FnMut()>::new(move || {
        ctx.clear_transient();
    });
    let _ = win.add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref());
    on_pagehide.forget();
}
