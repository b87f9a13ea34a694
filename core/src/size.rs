//! Height variants of the hero band.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

/// Height of the hero band.
///
/// Each variant maps to exactly one fixed height class, see
/// [`HeroSize::height_class`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroSize {
    #[default]
    Large,
    Medium,
    Small,
}

impl HeroSize {
    /// All variants, largest first.
    pub const ALL: [HeroSize; 3] = [HeroSize::Large, HeroSize::Medium, HeroSize::Small];

    /// Layout class fixing the band height.
    pub fn height_class(self) -> &'static str {
        match self {
            HeroSize::Large => "h-[640px] lg:h-[720px]",
            HeroSize::Medium => "h-[480px] lg:h-[560px]",
            HeroSize::Small => "h-[360px] lg:h-[420px]",
        }
    }

    /// Lowercase name, as used in query strings and content files.
    pub fn as_str(self) -> &'static str {
        match self {
            HeroSize::Large => "large",
            HeroSize::Medium => "medium",
            HeroSize::Small => "small",
        }
    }
}

impl fmt::Display for HeroSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeroSize {
    type Err = ContentError;

    fn from_str(s: &str) -> ContentResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "large" | "lg" => Ok(HeroSize::Large),
            "medium" | "md" => Ok(HeroSize::Medium),
            "small" | "sm" => Ok(HeroSize::Small),
            _ => Err(ContentError::UnknownSize(s.to_string())),
        }
    }
}
