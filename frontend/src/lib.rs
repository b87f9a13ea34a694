//! Physio Hero - Frontend Rust/Leptos Application
//!
//! A WebAssembly build of the clinic home page hero.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero                                                       │
//! │  ├── text column (logo, heading, description, buttons)      │
//! │  └── image column (background image, gradient overlay)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time business details
//! - [`components`] - UI components

use leptos::*;
use physio_hero_core::HeroConfig;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod components;

pub use config::*;
pub use components::*;

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🩺 Physio Hero - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    let defaults = HeroConfig::for_business(&business_info());

    view! {
        <main>
            <Hero defaults=defaults/>
        </main>
    }
}
