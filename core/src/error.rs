//! Error types for the hero content model.
//!
//! Resolving a hero never fails: every missing value has a default. The only
//! fallible step is turning free text (CLI flags, config values) into a
//! [`crate::HeroSize`].

use thiserror::Error;

/// Errors raised while reading hero content from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Size name outside of `large`, `medium`, `small`.
    #[error("Unknown hero size '{0}' (expected large, medium or small)")]
    UnknownSize(String),
}

/// Result type for content parsing.
pub type ContentResult<T> = Result<T, ContentError>;
