#![allow(warnings)]
//! DigiNativa Frontend Entry Point

mod models;
mod error;
mod config;
mod api;
mod query;
mod pagination;
mod format;
mod context;
mod store;
mod diagnostics;
mod components;
mod app;

use app::App;
use config::{AppConfig, CONFIG_ELEMENT_ID};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let logger = console_logger::Config {
        level: config.level_filter(),
        ..Default::default()
    };
    if let Err(e) = console_logger::init(logger) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("[APP] Ignoring invalid #{} block: {}", CONFIG_ELEMENT_ID, e);
    }
    log::info!(
        "[APP] Starting (api base {:?}, page size {})",
        config.api_base_url,
        config.page_size
    );

    mount_to_body(move || view! { <App config=config.clone() /> });
}
