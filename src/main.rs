//! Item Cards Frontend Entry Point

mod actions;
mod app;
mod cards;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("ItemCards", log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }

    let config = config::resolve_api_config();
    log::info!("Collection endpoint: {}", config.collection_url());

    mount_to_body(move || view! { <App config=config /> });
}
