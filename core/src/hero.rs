//! Hero content: defaults, overrides and the resolved values used to render.
//!
//! - [`HeroConfig`] - built-in content of the section
//! - [`HeroOverrides`] - per-render replacements, every field optional
//! - [`EffectiveHero`] - result of [`resolve`], what renderers consume
//! - [`CtaLink`] - a call-to-action that is known to be displayable

use serde::{Deserialize, Serialize};

use crate::business::BusinessInfo;
use crate::link::safe_link;
use crate::size::HeroSize;

// =============================================================================
// Defaults
// =============================================================================

/// Built-in content of the hero section.
///
/// CTA text and URL are independent options; a button is shown only when both
/// halves end up non-empty after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConfig {
    pub title: String,
    pub description: String,
    pub cta_text: Option<String>,
    pub cta_url: Option<String>,
    pub secondary_cta_text: Option<String>,
    pub secondary_cta_url: Option<String>,
    pub hero_image: String,
    pub hero_image_alt: String,
    pub logo_image: String,
    pub logo_alt: String,
    /// Native logo width in pixels.
    pub logo_width: u32,
    /// Native logo height in pixels.
    pub logo_height: u32,
    pub size: HeroSize,
}

impl HeroConfig {
    /// Default content for a clinic. The primary CTA books with `business`.
    pub fn for_business(business: &BusinessInfo) -> Self {
        Self {
            title: "Move Better, Live Pain-Free".to_string(),
            description: "Expert physiotherapy care tailored to your body, your goals and \
                          your recovery. From sports injuries to chronic back pain, our \
                          chartered physiotherapists help you get back to doing what you love."
                .to_string(),
            cta_text: Some("Book an Appointment".to_string()),
            cta_url: Some(business.booking_url.clone()),
            secondary_cta_text: Some("Explore Our Services".to_string()),
            secondary_cta_url: Some("/services".to_string()),
            hero_image: "/images/hero-physiotherapy.jpg".to_string(),
            hero_image_alt: "Physiotherapist guiding a patient through a rehabilitation exercise"
                .to_string(),
            logo_image: "/images/logo.svg".to_string(),
            logo_alt: business.name.clone(),
            logo_width: 180,
            logo_height: 60,
            size: HeroSize::Large,
        }
    }

    /// Replace every field `overrides` provides, keeping the rest.
    ///
    /// CTA halves are layered independently, so a half supplied here can still
    /// be completed by a later override.
    pub fn apply(&mut self, overrides: &HeroOverrides) {
        set_text(&mut self.title, &overrides.title);
        set_text(&mut self.description, &overrides.description);
        set_optional(&mut self.cta_text, &overrides.cta_text);
        set_optional(&mut self.cta_url, &overrides.cta_url);
        set_optional(&mut self.secondary_cta_text, &overrides.secondary_cta_text);
        set_optional(&mut self.secondary_cta_url, &overrides.secondary_cta_url);
        set_text(&mut self.hero_image, &overrides.hero_image);
        set_text(&mut self.hero_image_alt, &overrides.hero_image_alt);
        set_text(&mut self.logo_image, &overrides.logo_image);
        set_text(&mut self.logo_alt, &overrides.logo_alt);
        if let Some(width) = overrides.logo_width {
            self.logo_width = width;
        }
        if let Some(height) = overrides.logo_height {
            self.logo_height = height;
        }
        if let Some(size) = overrides.size {
            self.size = size;
        }
    }
}

fn set_text(field: &mut String, value: &Option<String>) {
    if let Some(v) = provided(value) {
        *field = v.to_string();
    }
}

fn set_optional(field: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = provided(value) {
        *field = Some(v.to_string());
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self::for_business(&BusinessInfo::default())
    }
}

// =============================================================================
// Overrides
// =============================================================================

/// Caller-supplied replacements for [`HeroConfig`] fields.
///
/// `None`, an empty string and a whitespace-only string all mean "not
/// provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cta_text: Option<String>,
    pub cta_url: Option<String>,
    pub secondary_cta_text: Option<String>,
    pub secondary_cta_url: Option<String>,
    pub hero_image: Option<String>,
    pub hero_image_alt: Option<String>,
    pub logo_image: Option<String>,
    pub logo_alt: Option<String>,
    pub logo_width: Option<u32>,
    pub logo_height: Option<u32>,
    #[serde(deserialize_with = "blank_size_as_none")]
    pub size: Option<HeroSize>,
}

/// `""` means "not provided", like the text fields; unknown names still fail.
fn blank_size_as_none<'de, D>(deserializer: D) -> Result<Option<HeroSize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl HeroOverrides {
    /// True when no field would change the defaults.
    pub fn is_empty(&self) -> bool {
        let texts = [
            &self.title,
            &self.description,
            &self.cta_text,
            &self.cta_url,
            &self.secondary_cta_text,
            &self.secondary_cta_url,
            &self.hero_image,
            &self.hero_image_alt,
            &self.logo_image,
            &self.logo_alt,
        ];
        texts.iter().all(|t| provided(t).is_none())
            && self.logo_width.is_none()
            && self.logo_height.is_none()
            && self.size.is_none()
    }

    /// Drop link and image targets that [`safe_link`] rejects, so they fall
    /// back to the defaults. Apply this to overrides from untrusted input.
    pub fn with_safe_links(mut self) -> Self {
        for field in [
            &mut self.cta_url,
            &mut self.secondary_cta_url,
            &mut self.hero_image,
            &mut self.logo_image,
        ] {
            if field.as_deref().is_some_and(|url| safe_link(url).is_none()) {
                *field = None;
            }
        }
        self
    }

    /// Layer `later` on top of `self`: fields provided in `later` win.
    pub fn merge(self, later: HeroOverrides) -> HeroOverrides {
        HeroOverrides {
            title: layer(self.title, later.title),
            description: layer(self.description, later.description),
            cta_text: layer(self.cta_text, later.cta_text),
            cta_url: layer(self.cta_url, later.cta_url),
            secondary_cta_text: layer(self.secondary_cta_text, later.secondary_cta_text),
            secondary_cta_url: layer(self.secondary_cta_url, later.secondary_cta_url),
            hero_image: layer(self.hero_image, later.hero_image),
            hero_image_alt: layer(self.hero_image_alt, later.hero_image_alt),
            logo_image: layer(self.logo_image, later.logo_image),
            logo_alt: layer(self.logo_alt, later.logo_alt),
            logo_width: later.logo_width.or(self.logo_width),
            logo_height: later.logo_height.or(self.logo_height),
            size: later.size.or(self.size),
        }
    }
}

fn layer(earlier: Option<String>, later: Option<String>) -> Option<String> {
    if provided(&later).is_some() {
        later
    } else {
        earlier
    }
}

// =============================================================================
// Resolved values
// =============================================================================

/// A call-to-action whose label and URL are both non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaLink {
    pub label: String,
    pub url: String,
}

/// Values actually used to render one hero section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveHero {
    pub title: String,
    pub description: String,
    pub primary_cta: Option<CtaLink>,
    pub secondary_cta: Option<CtaLink>,
    pub hero_image: String,
    pub hero_image_alt: String,
    pub logo_image: String,
    pub logo_alt: String,
    pub logo_width: u32,
    pub logo_height: u32,
    pub size: HeroSize,
}

impl EffectiveHero {
    /// Height class of the band, from [`HeroSize::height_class`].
    pub fn height_class(&self) -> &'static str {
        self.size.height_class()
    }
}

/// Resolve every field as override-if-provided-else-default.
pub fn resolve(defaults: &HeroConfig, overrides: &HeroOverrides) -> EffectiveHero {
    EffectiveHero {
        title: pick(&overrides.title, &defaults.title),
        description: pick(&overrides.description, &defaults.description),
        primary_cta: cta(
            (&overrides.cta_text, &overrides.cta_url),
            (&defaults.cta_text, &defaults.cta_url),
        ),
        secondary_cta: cta(
            (&overrides.secondary_cta_text, &overrides.secondary_cta_url),
            (&defaults.secondary_cta_text, &defaults.secondary_cta_url),
        ),
        hero_image: pick(&overrides.hero_image, &defaults.hero_image),
        hero_image_alt: pick(&overrides.hero_image_alt, &defaults.hero_image_alt),
        logo_image: pick(&overrides.logo_image, &defaults.logo_image),
        logo_alt: pick(&overrides.logo_alt, &defaults.logo_alt),
        logo_width: overrides.logo_width.unwrap_or(defaults.logo_width),
        logo_height: overrides.logo_height.unwrap_or(defaults.logo_height),
        size: overrides.size.unwrap_or(defaults.size),
    }
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn pick(value: &Option<String>, default: &str) -> String {
    provided(value).unwrap_or(default).to_string()
}

type CtaPair<'a> = (&'a Option<String>, &'a Option<String>);

fn cta(overrides: CtaPair<'_>, defaults: CtaPair<'_>) -> Option<CtaLink> {
    let label = provided(overrides.0).or_else(|| provided(defaults.0))?;
    let url = provided(overrides.1).or_else(|| provided(defaults.1))?;
    Some(CtaLink {
        label: label.to_string(),
        url: url.to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn title_only(title: &str) -> HeroOverrides {
        HeroOverrides {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_overrides_yields_defaults() {
        let defaults = HeroConfig::default();
        let hero = resolve(&defaults, &HeroOverrides::default());

        assert_eq!(hero.title, defaults.title);
        assert_eq!(hero.description, defaults.description);
        assert_eq!(hero.size, HeroSize::Large);
        let primary = hero.primary_cta.expect("primary CTA");
        assert_eq!(primary.label, "Book an Appointment");
        assert_eq!(primary.url, BusinessInfo::default().booking_url);
        let secondary = hero.secondary_cta.expect("secondary CTA");
        assert_eq!(secondary.label, "Explore Our Services");
        assert_eq!(secondary.url, "/services");
    }

    #[test]
    fn test_title_override_does_not_leak() {
        let defaults = HeroConfig::default();
        let baseline = resolve(&defaults, &HeroOverrides::default());
        let hero = resolve(&defaults, &title_only("Back Pain Clinic"));

        assert_eq!(hero.title, "Back Pain Clinic");
        assert_eq!(
            EffectiveHero {
                title: baseline.title.clone(),
                ..hero
            },
            baseline
        );
    }

    #[test]
    fn test_sports_injury_medium_example() {
        let defaults = HeroConfig::default();
        let overrides = HeroOverrides {
            title: Some("Sports Injury Recovery".into()),
            size: Some(HeroSize::Medium),
            ..Default::default()
        };
        let hero = resolve(&defaults, &overrides);

        assert_eq!(hero.title, "Sports Injury Recovery");
        assert_eq!(hero.height_class(), HeroSize::Medium.height_class());
        assert!(hero.description.starts_with("Expert physiotherapy care tailored"));
        assert_eq!(hero.primary_cta.unwrap().label, "Book an Appointment");
        assert_eq!(hero.secondary_cta.unwrap().label, "Explore Our Services");
        assert_eq!(hero.hero_image, defaults.hero_image);
        assert_eq!(hero.logo_image, defaults.logo_image);
    }

    #[test]
    fn test_blank_override_falls_back() {
        let defaults = HeroConfig::default();
        let overrides = HeroOverrides {
            title: Some(String::new()),
            description: Some("   ".into()),
            cta_text: Some("".into()),
            ..Default::default()
        };
        let hero = resolve(&defaults, &overrides);

        assert_eq!(hero.title, defaults.title);
        assert_eq!(hero.description, defaults.description);
        assert_eq!(hero.primary_cta.unwrap().label, "Book an Appointment");
    }

    #[test]
    fn test_cta_requires_both_halves() {
        let defaults = HeroConfig {
            cta_text: Some("Call Us".into()),
            cta_url: None,
            secondary_cta_text: None,
            secondary_cta_url: Some("/about".into()),
            ..HeroConfig::default()
        };

        let hero = resolve(&defaults, &HeroOverrides::default());
        assert!(hero.primary_cta.is_none());
        assert!(hero.secondary_cta.is_none());

        // Each pair is completed independently.
        let overrides = HeroOverrides {
            cta_url: Some("tel:+442079460321".into()),
            ..Default::default()
        };
        let hero = resolve(&defaults, &overrides);
        assert_eq!(
            hero.primary_cta,
            Some(CtaLink {
                label: "Call Us".into(),
                url: "tel:+442079460321".into()
            })
        );
        assert!(hero.secondary_cta.is_none());
    }

    #[test]
    fn test_cta_override_replaces_one_half() {
        let overrides = HeroOverrides {
            secondary_cta_text: Some("Meet the Team".into()),
            ..Default::default()
        };
        let hero = resolve(&HeroConfig::default(), &overrides);
        let secondary = hero.secondary_cta.unwrap();
        assert_eq!(secondary.label, "Meet the Team");
        assert_eq!(secondary.url, "/services");
    }

    #[test]
    fn test_for_business_uses_booking_url() {
        let business = BusinessInfo {
            name: "Harbour Physio".into(),
            booking_url: "https://harbour.example/book".into(),
            ..Default::default()
        };
        let config = HeroConfig::for_business(&business);
        assert_eq!(config.cta_url.as_deref(), Some("https://harbour.example/book"));
        assert_eq!(config.logo_alt, "Harbour Physio");
    }

    #[test]
    fn test_overrides_is_empty() {
        assert!(HeroOverrides::default().is_empty());
        assert!(title_only("  ").is_empty());
        assert!(!title_only("Hi").is_empty());
        assert!(!HeroOverrides {
            size: Some(HeroSize::Small),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_merge_later_wins() {
        let base = HeroOverrides {
            title: Some("Base".into()),
            description: Some("Base description".into()),
            size: Some(HeroSize::Small),
            ..Default::default()
        };
        let later = HeroOverrides {
            title: Some("Later".into()),
            description: Some("".into()),
            ..Default::default()
        };
        let merged = base.merge(later);
        assert_eq!(merged.title.as_deref(), Some("Later"));
        assert_eq!(merged.description.as_deref(), Some("Base description"));
        assert_eq!(merged.size, Some(HeroSize::Small));
    }

    #[test]
    fn test_apply_layers_fields() {
        let mut config = HeroConfig::default();
        let defaults = HeroConfig::default();
        config.apply(&HeroOverrides {
            title: Some("Pelvic Health".into()),
            description: Some(" ".into()),
            size: Some(HeroSize::Small),
            ..Default::default()
        });
        assert_eq!(config.title, "Pelvic Health");
        assert_eq!(config.description, defaults.description);
        assert_eq!(config.size, HeroSize::Small);
        assert_eq!(config.cta_text, defaults.cta_text);
        assert_eq!(config.secondary_cta_url, defaults.secondary_cta_url);
    }

    #[test]
    fn test_apply_keeps_half_cta_for_later_override() {
        let mut config = HeroConfig {
            cta_url: None,
            ..HeroConfig::default()
        };
        config.apply(&title_only("Layered"));
        assert_eq!(config.cta_text.as_deref(), Some("Book an Appointment"));

        let hero = resolve(
            &config,
            &HeroOverrides {
                cta_url: Some("/book".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            hero.primary_cta,
            Some(CtaLink {
                label: "Book an Appointment".into(),
                url: "/book".into()
            })
        );
    }

    #[test]
    fn test_with_safe_links_drops_script_urls() {
        let overrides = HeroOverrides {
            title: Some("Kept".into()),
            cta_url: Some("javascript:alert(document.cookie)".into()),
            secondary_cta_url: Some("/team".into()),
            hero_image: Some("data:image/svg+xml,<svg onload=alert(1)>".into()),
            logo_image: Some("https://cdn.example/logo.svg".into()),
            ..Default::default()
        }
        .with_safe_links();

        assert_eq!(overrides.title.as_deref(), Some("Kept"));
        assert!(overrides.cta_url.is_none());
        assert_eq!(overrides.secondary_cta_url.as_deref(), Some("/team"));
        assert!(overrides.hero_image.is_none());
        assert_eq!(
            overrides.logo_image.as_deref(),
            Some("https://cdn.example/logo.svg")
        );

        let hero = resolve(&HeroConfig::default(), &overrides);
        assert_eq!(
            hero.primary_cta.unwrap().url,
            BusinessInfo::default().booking_url
        );
    }

    #[test]
    fn test_blank_size_is_not_provided() {
        let overrides: HeroOverrides = serde_json::from_str(r#"{"size": "  "}"#).unwrap();
        assert!(overrides.size.is_none());
        let overrides: HeroOverrides = serde_json::from_str(r#"{"size": null}"#).unwrap();
        assert!(overrides.size.is_none());
        assert!(serde_json::from_str::<HeroOverrides>(r#"{"size": "huge"}"#).is_err());
    }

    #[test]
    fn test_overrides_from_camel_case_json() {
        let overrides: HeroOverrides =
            serde_json::from_str(r#"{"ctaText": "Book Now", "size": "small"}"#).unwrap();
        assert_eq!(overrides.cta_text.as_deref(), Some("Book Now"));
        assert_eq!(overrides.size, Some(HeroSize::Small));
        assert!(overrides.title.is_none());
    }
}
