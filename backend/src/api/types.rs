//! JSON shapes returned by the HTTP API.

use physio_hero_core::EffectiveHero;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Response of `GET /api/hero`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroResponse {
    /// Resolved hero values
    pub hero: EffectiveHero,

    /// Layout class for the band height
    pub height_class: String,

    /// Whether any override changed the defaults
    pub overridden: bool,
}

impl HeroResponse {
    pub fn new(hero: EffectiveHero, overridden: bool) -> Self {
        Self {
            height_class: hero.height_class().to_string(),
            hero,
            overridden,
        }
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "status": "error",
        "error": error,
    })
}
