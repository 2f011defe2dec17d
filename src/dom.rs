//! DOM Helpers
//!
//! Thin wrappers over `web_sys` for the server-rendered storefront markup.
//! Missing elements are skipped; a page without a badge or cart table is
//! still a valid page.

use wasm_bindgen::JsCast;

use crate::cart::{badge_visible, ViewPatch};
use crate::models::{format_money, ProductId};

pub const CART_COUNT_ID: &str = "cart-count";
pub const CART_TOTAL_ID: &str = "cart-total";

pub fn row_id(id: &ProductId) -> String {
    format!("row-{}", id)
}

pub fn qty_id(id: &ProductId) -> String {
    format!("qty-{}", id)
}

pub fn subtotal_id(id: &ProductId) -> String {
    format!("subtotal-{}", id)
}

/// Selector for a product's add-to-cart button
pub fn add_button_selector(id: &ProductId) -> String {
    format!(
        "[data-add-to-cart][data-product-id=\"{}\"]",
        id.as_str().replace('\\', "\\\\").replace('"', "\\\"")
    )
}

pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub fn by_id(id: &str) -> Option<web_sys::Element> {
    document()?.get_element_by_id(id)
}

pub fn exists(id: &str) -> bool {
    by_id(id).is_some()
}

pub fn set_text(id: &str, text: &str) {
    if let Some(el) = by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_class(id: &str, class: &str, on: bool) {
    if let Some(el) = by_id(id) {
        let _ = el.class_list().toggle_with_force(class, on);
    }
}

pub fn remove(id: &str) {
    if let Some(el) = by_id(id) {
        el.remove();
    }
}

pub fn reload_page() {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().reload() {
            log::error!("[DOM] Reload failed: {:?}", e);
        }
    }
}

/// `html[lang]`, used to pick the message language
pub fn document_lang() -> Option<String> {
    document()?.document_element()?.get_attribute("lang")
}

/// Element that received the event, or its nearest ancestor matching `selector`
pub fn closest(ev: &web_sys::Event, selector: &str) -> Option<web_sys::Element> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    target.closest(selector).ok().flatten()
}

fn set_badge(count: u32) {
    let Some(el) = by_id(CART_COUNT_ID) else { return };
    el.set_text_content(Some(&count.to_string()));
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        html.set_hidden(!badge_visible(count));
    }
}

/// Mark a product's add button as already in the cart
pub fn mark_added(id: &ProductId, label: &str) {
    let Some(doc) = document() else { return };
    let Ok(Some(btn)) = doc.query_selector(&add_button_selector(id)) else { return };
    let _ = btn.class_list().add_1("in-cart");
    btn.set_text_content(Some(label));
    if let Some(button) = btn.dyn_ref::<web_sys::HtmlButtonElement>() {
        button.set_disabled(true);
    }
}

/// Project patches onto the page in order
pub fn apply_patches(patches: &[ViewPatch], currency: &str) {
    for patch in patches {
        match patch {
            ViewPatch::Badge(count) => set_badge(*count),
            ViewPatch::Total(total) => set_text(CART_TOTAL_ID, &format_money(*total, currency)),
            ViewPatch::SetLine { id, qty, subtotal } => {
                set_text(&qty_id(id), &qty.to_string());
                set_text(&subtotal_id(id), &format_money(*subtotal, currency));
            }
            ViewPatch::RemoveLine(id) => remove(&row_id(id)),
            ViewPatch::Reload => reload_page(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_ids() {
        let id = ProductId::from(7);
        assert_eq!(row_id(&id), "row-7");
        assert_eq!(qty_id(&id), "qty-7");
        assert_eq!(subtotal_id(&id), "subtotal-7");
    }

    #[test]
    fn test_add_button_selector_escapes_quotes() {
        let id = ProductId::new("42").unwrap();
        assert_eq!(add_button_selector(&id), "[data-add-to-cart][data-product-id=\"42\"]");
        let odd = ProductId::new("a\"b").unwrap();
        assert_eq!(add_button_selector(&odd), "[data-add-to-cart][data-product-id=\"a\\\"b\"]");
    }
}
