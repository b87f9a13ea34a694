//! Application configuration.
//!
//! Values are baked in at build time. Set `PHYSIO_CLINIC_NAME` or
//! `PHYSIO_BOOKING_URL` when running `trunk build` to point the site at a
//! different clinic; otherwise the built-in business details are used.

use physio_hero_core::BusinessInfo;

/// Console log level.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Clinic name override from the build environment.
const CLINIC_NAME: Option<&str> = option_env!("PHYSIO_CLINIC_NAME");

/// Booking page override from the build environment.
const BOOKING_URL: Option<&str> = option_env!("PHYSIO_BOOKING_URL");

/// Business details used to build the hero defaults.
pub fn business_info() -> BusinessInfo {
    with_build_overrides(BusinessInfo::default(), CLINIC_NAME, BOOKING_URL)
}

fn with_build_overrides(
    mut info: BusinessInfo,
    name: Option<&str>,
    booking_url: Option<&str>,
) -> BusinessInfo {
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        info.name = name.to_string();
    }
    if let Some(url) = booking_url.filter(|u| !u.is_empty()) {
        info.booking_url = url.to_string();
    }
    info
}
