//! Entry point for the WASM application

use leptos::*;
use physio_frontend::{App, LOG_LEVEL};

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🩺 Physio Hero - Starting Leptos App");

    mount_to_body(|| view! { <App/> })
}
