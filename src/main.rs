//! Grocery List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

/// Records kept in the diagnostic buffer
const LOG_CAPACITY: usize = 500;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(LOG_CAPACITY, log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", err).into());
    }
    mount_to_body(App);
}
