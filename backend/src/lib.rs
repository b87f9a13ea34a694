//! # physio-site - Server-rendered hero section for a physiotherapy clinic
//!
//! Merges per-request overrides with the clinic's default hero content and
//! renders the result as HTML.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ content.json│────▶│ SiteContent │────▶│   resolve   │────▶│   askama    │
//! │ (optional)  │     │ (defaults)  │     │ (overrides) │     │   (HTML)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use physio_site::{render_page, SiteContent};
//! use physio_hero_core::HeroOverrides;
//!
//! let html = render_page(&SiteContent::default(), &HeroOverrides::default())?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Site content and server settings
//! - [`render`] - askama templates
//! - [`api`] - HTTP server

pub mod error;
pub mod config;
pub mod render;
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    ConfigError,
    RenderError,
    ServerError,
    ConfigResult,
    RenderResult,
    ServerResult,
};

pub use config::{ServerConfig, SiteContent, DEFAULT_HOST, DEFAULT_PORT};

pub use render::{render_hero, render_page};

pub use api::types::{HeroResponse, error_response};

// Server
pub mod server {
    pub use crate::api::server::{create_app, start_server, AppState};
}
