//! UI Components for the clinic website.
//!
//! - [`Hero`] - Top-of-page section with heading, buttons and background image

mod hero;

pub use hero::*;
