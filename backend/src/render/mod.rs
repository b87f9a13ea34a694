//! Server-side rendering of the hero section.
//!
//! Templates live in `templates/` and are compiled in by askama; all text is
//! HTML-escaped, so override values can come straight from a query string.

use askama::Template;
use physio_hero_core::{CtaLink, EffectiveHero, HeroOverrides};

use crate::config::SiteContent;
use crate::error::RenderResult;

/// The hero `<section>`.
#[derive(Template)]
#[template(path = "hero.html")]
struct HeroTemplate<'a> {
    hero: &'a EffectiveHero,
    height_class: &'static str,
    size: &'static str,
    has_cta: bool,
    primary_cta: Option<&'a CtaLink>,
    secondary_cta: Option<&'a CtaLink>,
}

impl<'a> HeroTemplate<'a> {
    fn new(hero: &'a EffectiveHero) -> Self {
        Self {
            hero,
            height_class: hero.height_class(),
            size: hero.size.as_str(),
            has_cta: hero.primary_cta.is_some() || hero.secondary_cta.is_some(),
            primary_cta: hero.primary_cta.as_ref(),
            secondary_cta: hero.secondary_cta.as_ref(),
        }
    }
}

/// A full document wrapping an already rendered hero.
#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    page_title: String,
    description: &'a str,
    hero_html: String,
}

/// Render the hero section markup.
pub fn render_hero(hero: &EffectiveHero) -> RenderResult<String> {
    Ok(HeroTemplate::new(hero).render()?)
}

/// Render the home page for `content` with `overrides` applied to the hero.
pub fn render_page(content: &SiteContent, overrides: &HeroOverrides) -> RenderResult<String> {
    let hero = content.resolve_hero(overrides);
    let page = PageTemplate {
        page_title: format!("{} | {}", hero.title, content.business.name),
        description: &hero.description,
        hero_html: render_hero(&hero)?,
    };
    Ok(page.render()?)
}
