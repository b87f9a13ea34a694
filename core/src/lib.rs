//! # physio-hero-core - Content model for the clinic website hero
//!
//! Shared by the server renderer (`physio-site`) and the Leptos component
//! (`physio-frontend`), so both apply the same override rule.
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌───────────────┐
//! │  HeroConfig  │────▶│               │     │               │
//! │  (defaults)  │     │    resolve    │────▶│ EffectiveHero │
//! │ HeroOverrides│────▶│               │     │               │
//! └──────────────┘     └───────────────┘     └───────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use physio_hero_core::{resolve, HeroConfig, HeroOverrides, HeroSize};
//!
//! let overrides = HeroOverrides {
//!     title: Some("Sports Injury Recovery".into()),
//!     size: Some(HeroSize::Medium),
//!     ..Default::default()
//! };
//! let hero = resolve(&HeroConfig::default(), &overrides);
//! assert_eq!(hero.title, "Sports Injury Recovery");
//! assert!(hero.primary_cta.is_some());
//! ```
//!
//! ## Modules
//!
//! - [`business`] - Clinic details (booking URL, contact)
//! - [`hero`] - Defaults, overrides and resolution
//! - [`size`] - Height variants
//! - [`link`] - URL filtering for untrusted overrides
//! - [`error`] - Parse errors

pub mod business;
pub mod error;
pub mod hero;
pub mod link;
pub mod size;

pub use business::BusinessInfo;
pub use error::{ContentError, ContentResult};
pub use hero::{resolve, CtaLink, EffectiveHero, HeroConfig, HeroOverrides};
pub use link::safe_link;
pub use size::HeroSize;
