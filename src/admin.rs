//! Admin Product Form
//!
//! `form#addForm` is posted as multipart data; the page reloads once the
//! backend acknowledges it.

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::dom;
use crate::i18n::Message;

pub const FORM_ID: &str = "addForm";

pub fn submit_product(ctx: AppContext) {
    let Some(form) = dom::by_id(FORM_ID).and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok()) else {
        log::warn!("[ADMIN] #{} not found", FORM_ID);
        return;
    };
    spawn_local(async move {
        match ctx.api().add_product(&form).await {
            Ok(_) => {
                log::info!("[ADMIN] Product added, reloading");
                dom::reload_page();
            }
            Err(e) => {
                log::error!("[ADMIN] Add product failed: {}", e);
                ctx.toasts.error(ctx.text(Message::ProductSaveFailed));
            }
        }
    });
}
