//! Cart Commands
//!
//! `/api/add_to_cart`, `/api/update_cart` and `/api/cart_count`.

use super::{encode_segment, read_json, ApiClient};
use crate::error::{SyncError, SyncResult};
use crate::models::{CartSnapshot, CountSnapshot, ProductId, QtyAction};

pub const CART_COUNT_PATH: &str = "/api/cart_count";

pub fn add_to_cart_path(id: &ProductId) -> String {
    format!("/api/add_to_cart/{}", encode_segment(id))
}

pub fn update_cart_path(id: &ProductId, action: QtyAction) -> String {
    format!("/api/update_cart/{}/{}", encode_segment(id), action.as_str())
}

/// `success: false` becomes an error so callers only see usable snapshots
fn require_success(snap: CartSnapshot) -> SyncResult<CartSnapshot> {
    if snap.success {
        Ok(snap)
    } else {
        Err(SyncError::Rejected(snap.error))
    }
}

impl ApiClient {
    pub async fn add_to_cart(&self, id: &ProductId) -> SyncResult<CartSnapshot> {
        let resp = self.post(&add_to_cart_path(id)).send().await?;
        require_success(read_json(resp).await?)
    }

    pub async fn update_cart(&self, id: &ProductId, action: QtyAction) -> SyncResult<CartSnapshot> {
        let resp = self.post(&update_cart_path(id, action)).send().await?;
        require_success(read_json(resp).await?)
    }

    pub async fn cart_count(&self) -> SyncResult<CountSnapshot> {
        let resp = self.get(CART_COUNT_PATH).send().await?;
        read_json(resp).await
    }
}
