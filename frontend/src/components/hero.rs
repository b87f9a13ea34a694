//! Hero section component

use leptos::*;
use physio_hero_core::{resolve, CtaLink, EffectiveHero, HeroConfig, HeroOverrides, HeroSize};

/// Top-of-page hero: logo, heading, description, up to two buttons and a
/// background image.
///
/// Every prop is optional. Missing or empty values fall back to `defaults`
/// (or [`HeroConfig::default`] when no defaults are given).
#[component]
pub fn Hero(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] cta_text: Option<String>,
    #[prop(optional, into)] cta_url: Option<String>,
    #[prop(optional, into)] secondary_cta_text: Option<String>,
    #[prop(optional, into)] secondary_cta_url: Option<String>,
    #[prop(optional, into)] hero_image: Option<String>,
    #[prop(optional, into)] hero_image_alt: Option<String>,
    #[prop(optional, into)] logo_image: Option<String>,
    #[prop(optional)] size: Option<HeroSize>,
    #[prop(optional)] defaults: Option<HeroConfig>,
) -> impl IntoView {
    let overrides = overrides_from_props(
        title,
        description,
        (cta_text, cta_url),
        (secondary_cta_text, secondary_cta_url),
        (hero_image, hero_image_alt),
        logo_image,
        size,
    );
    let hero = resolve(&defaults.unwrap_or_default(), &overrides);
    log::debug!("🩺 Hero: size={}, overridden={}", hero.size, !overrides.is_empty());

    let section_class = format!(
        "hero relative w-full overflow-hidden bg-slate-50 {}",
        hero.height_class()
    );

    let EffectiveHero {
        title,
        description,
        primary_cta,
        secondary_cta,
        hero_image,
        hero_image_alt,
        logo_image,
        logo_alt,
        logo_width,
        logo_height,
        size,
    } = hero;

    let buttons = cta_buttons(primary_cta, secondary_cta);

    view! {
        <section class=section_class data-hero-size=size.as_str()>
            <div class="mx-auto grid h-full max-w-7xl grid-cols-1 lg:grid-cols-2">
                <div class="hero-text relative z-10 flex flex-col justify-center gap-6 px-6 py-12 lg:px-12">
                    <img
                        class="hero-logo h-auto w-auto"
                        src=logo_image
                        alt=logo_alt
                        width=logo_width.to_string()
                        height=logo_height.to_string()
                    />
                    <h1 class="text-4xl font-bold tracking-tight text-slate-900 lg:text-5xl">{title}</h1>
                    <p class="max-w-xl text-lg leading-relaxed text-slate-600">{description}</p>
                    {(!buttons.is_empty()).then(move || view! {
                        <div class="hero-actions flex flex-wrap gap-4">
                            {buttons
                                .into_iter()
                                .map(|(cta, primary)| view! { <CtaButton cta=cta primary=primary/> })
                                .collect_view()}
                        </div>
                    })}
                </div>
                <div class="hero-media absolute inset-0 lg:relative">
                    <img class="h-full w-full object-cover" src=hero_image alt=hero_image_alt loading="eager"/>
                    <div
                        class="hero-overlay absolute inset-0 bg-gradient-to-r from-slate-50 via-slate-50/70 to-transparent"
                        aria-hidden="true"
                    ></div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CtaButton(cta: CtaLink, primary: bool) -> impl IntoView {
    view! {
        <a class=cta_class(primary) href=cta.url>{cta.label}</a>
    }
}

type TextPair = (Option<String>, Option<String>);

/// Collect the component props into overrides for [`resolve`].
fn overrides_from_props(
    title: Option<String>,
    description: Option<String>,
    (cta_text, cta_url): TextPair,
    (secondary_cta_text, secondary_cta_url): TextPair,
    (hero_image, hero_image_alt): TextPair,
    logo_image: Option<String>,
    size: Option<HeroSize>,
) -> HeroOverrides {
    HeroOverrides {
        title,
        description,
        cta_text,
        cta_url,
        secondary_cta_text,
        secondary_cta_url,
        hero_image,
        hero_image_alt,
        logo_image,
        size,
        ..Default::default()
    }
}

/// Buttons to render in order, flagged `true` for the primary one.
/// Empty means the action row is left out.
fn cta_buttons(primary: Option<CtaLink>, secondary: Option<CtaLink>) -> Vec<(CtaLink, bool)> {
    primary
        .map(|cta| (cta, true))
        .into_iter()
        .chain(secondary.map(|cta| (cta, false)))
        .collect()
}

fn cta_class(primary: bool) -> &'static str {
    if primary {
        "hero-cta hero-cta-primary rounded-full bg-teal-600 px-6 py-3 font-semibold text-white hover:bg-teal-700"
    } else {
        "hero-cta hero-cta-secondary rounded-full border border-teal-600 px-6 py-3 font-semibold text-teal-700 hover:bg-teal-50"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str, url: &str) -> CtaLink {
        CtaLink {
            label: label.into(),
            url: url.into(),
        }
    }

    #[test]
    fn test_overrides_from_props() {
        let overrides = overrides_from_props(
            Some("Sports Injury Recovery".into()),
            None,
            (None, Some("/book".into())),
            (Some("Meet the Team".into()), None),
            (Some("/images/run.jpg".into()), Some("Runner stretching".into())),
            Some("/images/logo-dark.svg".into()),
            Some(HeroSize::Medium),
        );

        assert_eq!(overrides.title.as_deref(), Some("Sports Injury Recovery"));
        assert!(overrides.description.is_none());
        assert!(overrides.cta_text.is_none());
        assert_eq!(overrides.cta_url.as_deref(), Some("/book"));
        assert_eq!(overrides.secondary_cta_text.as_deref(), Some("Meet the Team"));
        assert!(overrides.secondary_cta_url.is_none());
        assert_eq!(overrides.hero_image.as_deref(), Some("/images/run.jpg"));
        assert_eq!(overrides.hero_image_alt.as_deref(), Some("Runner stretching"));
        assert_eq!(overrides.logo_image.as_deref(), Some("/images/logo-dark.svg"));
        assert_eq!(overrides.size, Some(HeroSize::Medium));
        assert!(overrides.logo_alt.is_none());
    }

    #[test]
    fn test_no_props_resolve_to_defaults() {
        let overrides = overrides_from_props(None, None, (None, None), (None, None), (None, None), None, None);
        assert!(overrides.is_empty());

        let defaults = HeroConfig::default();
        let hero = resolve(&defaults, &overrides);
        assert_eq!(hero.title, defaults.title);
        assert_eq!(hero.size, HeroSize::Large);
    }

    #[test]
    fn test_cta_buttons_order_and_flags() {
        let buttons = cta_buttons(Some(link("Book", "/book")), Some(link("Services", "/services")));
        assert_eq!(
            buttons,
            vec![(link("Book", "/book"), true), (link("Services", "/services"), false)]
        );
    }

    #[test]
    fn test_cta_buttons_omit_missing() {
        assert_eq!(
            cta_buttons(None, Some(link("Services", "/services"))),
            vec![(link("Services", "/services"), false)]
        );
        assert_eq!(cta_buttons(Some(link("Book", "/book")), None).len(), 1);
        assert!(cta_buttons(None, None).is_empty());
    }

    #[test]
    fn test_incomplete_default_pair_has_no_button() {
        let defaults = HeroConfig {
            secondary_cta_url: None,
            ..HeroConfig::default()
        };
        let hero = resolve(&defaults, &HeroOverrides::default());
        let buttons = cta_buttons(hero.primary_cta, hero.secondary_cta);
        assert_eq!(buttons.len(), 1);
        assert!(buttons[0].1);
    }

    #[test]
    fn test_cta_class() {
        assert!(cta_class(true).contains("hero-cta-primary"));
        assert!(cta_class(false).contains("hero-cta-secondary"));
    }
}
