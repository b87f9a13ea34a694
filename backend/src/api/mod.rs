//! HTTP API module.
//!
//! This module provides the HTTP server and API types for the site.

pub mod server;
pub mod types;

pub use server::{create_app, start_server, AppState};
pub use types::*;
