//! Site configuration.
//!
//! Content comes from an optional JSON file; anything the file leaves out
//! keeps the compiled defaults. The file looks like:
//!
//! ```json
//! {
//!   "business": { "name": "Harbour Physio", "bookingUrl": "https://harbour.example/book" },
//!   "hero": { "title": "Sports Injury Recovery", "size": "medium" }
//! }
//! ```
//!
//! The `hero` object uses the same fields as a per-request override and is
//! layered on top of the defaults built for `business`.

use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use physio_hero_core::{resolve, BusinessInfo, EffectiveHero, HeroConfig, HeroOverrides};
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

/// Default port for `serve`.
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address for `serve`.
pub const DEFAULT_HOST: &str = "0.0.0.0";

// =============================================================================
// Site content
// =============================================================================

/// Business details plus the hero defaults derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub business: BusinessInfo,
    pub hero: HeroConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentFile {
    business: BusinessInfo,
    hero: HeroOverrides,
}

impl SiteContent {
    /// Build content for `business`, with the hero pointing at its booking page.
    pub fn for_business(business: BusinessInfo) -> Self {
        let hero = HeroConfig::for_business(&business);
        Self { business, hero }
    }

    /// Parse a content file body.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let file: ContentFile = serde_json::from_str(json)?;
        let mut content = Self::for_business(file.business);
        content.hero.apply(&file.hero);
        Ok(content)
    }

    /// Read content from `path`.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Content from `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(p) => {
                tracing::info!(path = %p.display(), "loading site content");
                Self::from_file(p)
            }
            None => {
                tracing::debug!("no content file, using built-in content");
                Ok(Self::default())
            }
        }
    }

    /// Resolve the hero for one render.
    pub fn resolve_hero(&self, overrides: &HeroOverrides) -> EffectiveHero {
        resolve(&self.hero, overrides)
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::for_business(BusinessInfo::default())
    }
}

// =============================================================================
// Server settings
// =============================================================================

/// Settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Optional JSON content file.
    pub content_path: Option<PathBuf>,
    /// Directory served under `/images`.
    pub assets_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Socket address to bind. `host` must be an IP address or `localhost`.
    pub fn addr(&self) -> ConfigResult<SocketAddr> {
        let host = self.host.trim();
        let ip = if host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            host.parse()
                .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?
        };
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Check that referenced paths exist.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(dir) = &self.assets_dir {
            if !dir.is_dir() {
                return Err(ConfigError::MissingAssets(dir.display().to_string()));
            }
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            content_path: None,
            assets_dir: None,
        }
    }
}
