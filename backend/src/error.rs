//! Error types for the site server.
//!
//! - [`ConfigError`] - loading site content and server settings
//! - [`RenderError`] - template rendering
//! - [`ServerError`] - top-level, returned by handlers and the server loop
//!
//! Content itself has no error cases: every hero field falls back to a
//! default. These errors only cover the machinery around it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::api::types::error_response;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the content file.
    #[error("Failed to read content file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Content file is not valid JSON for the expected shape.
    #[error("Invalid content file: {0}")]
    Json(#[from] serde_json::Error),

    /// Bind host is neither an IP address nor `localhost`.
    #[error("Invalid host '{0}': expected an IP address or 'localhost'")]
    InvalidHost(String),

    /// Assets directory does not exist.
    #[error("Assets directory not found: {0}")]
    MissingAssets(String),
}

// =============================================================================
// Rendering Errors
// =============================================================================

/// Errors while rendering markup.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template engine failure.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

// =============================================================================
// Server Errors (top-level)
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rendering error.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Socket or listener failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(error_response(&self.to_string())),
        )
            .into_response()
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
