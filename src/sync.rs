//! Cart View Synchronizer
//!
//! Sends one request per user action and projects the accepted response onto
//! the page. No retries; every failure leaves the page as it was.

use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::dom;
use crate::i18n::Message;
use crate::models::{ProductId, QtyAction};
use crate::store::{store_apply_added, store_apply_count, store_apply_line_update, store_issue_ticket};

/// Add one unit of a product
pub fn add_item(ctx: AppContext, id: ProductId) {
    let ticket = store_issue_ticket(&ctx.store);
    spawn_local(async move {
        match ctx.api().add_to_cart(&id).await {
            Ok(snap) => {
                let patches = store_apply_added(&ctx.store, ticket, &snap);
                log::info!("[CART] Added {}, cart_total_items={:?}", id, snap.cart_total_items);
                dom::apply_patches(&patches, &ctx.currency());
                dom::mark_added(&id, ctx.text(Message::InCart));
                if ctx.popup.is_available() {
                    ctx.popup.show();
                } else {
                    ctx.toasts.success(ctx.text(Message::AddedToCart));
                }
            }
            Err(e) => {
                log::error!("[CART] Add to cart failed for {}: {}", id, e);
                ctx.toasts.error(ctx.text(Message::AddToCartFailed));
            }
        }
    });
}

/// Increment or decrement one cart line
pub fn update_quantity(ctx: AppContext, id: ProductId, action: QtyAction) {
    let ticket = store_issue_ticket(&ctx.store);
    spawn_local(async move {
        match ctx.api().update_cart(&id, action).await {
            Ok(snap) => {
                let patches = store_apply_line_update(&ctx.store, ticket, &id, &snap);
                log::debug!("[CART] {} {} -> {} patches", action.as_str(), id, patches.len());
                dom::apply_patches(&patches, &ctx.currency());
            }
            Err(e) => {
                log::error!("[CART] Update {} {} failed: {}", action.as_str(), id, e);
            }
        }
    });
}

/// Set the badge from the server's aggregate count
pub fn refresh_count(ctx: AppContext) {
    let ticket = store_issue_ticket(&ctx.store);
    spawn_local(async move {
        match ctx.api().cart_count().await {
            Ok(count) => {
                let patches = store_apply_count(&ctx.store, ticket, count.cart_total_items);
                dom::apply_patches(&patches, &ctx.currency());
            }
            Err(e) => log::debug!("[CART] Count refresh skipped: {}", e),
        }
    });
}
