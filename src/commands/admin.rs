//! Admin Commands
//!
//! Multipart product upload from the admin page.

use super::{read_json, ApiClient};
use crate::error::{SyncError, SyncResult};
use crate::models::AdminAck;

pub const ADD_PRODUCT_PATH: &str = "/admin/products/add";

impl ApiClient {
    /// Post every field of `form` (files included) as multipart form data
    pub async fn add_product(&self, form: &web_sys::HtmlFormElement) -> SyncResult<AdminAck> {
        let data = web_sys::FormData::new_with_form(form)
            .map_err(|_| SyncError::Dom("FormData from #addForm"))?;
        let resp = self.post(ADD_PRODUCT_PATH).body(data)?.send().await?;
        let ack: AdminAck = read_json(resp).await?;
        if ack.accepted() {
            Ok(ack)
        } else {
            Err(SyncError::Rejected(ack.message))
        }
    }
}
