//! Wallcraft Storefront Frontend Entry Point

mod admin;
mod app;
mod bindings;
mod cart;
mod commands;
mod config;
mod context;
mod dom;
mod error;
mod i18n;
mod menu;
mod models;
mod popup;
mod store;
mod sync;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    if console_log::init_with_level(config.log_level).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already initialized".into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
