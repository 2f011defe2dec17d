//! Application Context
//!
//! Everything the event handlers touch, owned by the `App` root. `Copy`, so
//! it moves into DOM listeners that run outside any reactive owner.

use leptos::prelude::*;
use leptos_toast::ToastHub;

use crate::commands::ApiClient;
use crate::config::AppConfig;
use crate::i18n::{self, Message};
use crate::menu::MenuIds;
use crate::popup::PopupController;
use crate::store::AppStore;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub toasts: ToastHub,
    pub popup: PopupController,
    /// None when the page has no side menu
    pub menu: Option<MenuIds>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        store: AppStore,
        toasts: ToastHub,
        popup: PopupController,
        menu: Option<MenuIds>,
    ) -> Self {
        Self {
            store,
            toasts,
            popup,
            menu,
            config: StoredValue::new(config),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.config.with_value(ApiClient::new)
    }

    pub fn currency(&self) -> String {
        self.config.with_value(|c| c.currency.clone())
    }

    pub fn text(&self, msg: Message) -> &'static str {
        i18n::text(self.config.with_value(|c| c.lang), msg)
    }

    /// Drop transient UI before the page goes away
    pub fn clear_transient(&self) {
        self.toasts.clear();
        self.popup.hide();
    }
}
