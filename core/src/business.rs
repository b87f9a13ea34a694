//! Business details shared across the website.

use serde::{Deserialize, Serialize};

/// Contact and booking details of the clinic.
///
/// The hero's primary call-to-action points at [`BusinessInfo::booking_url`]
/// unless a page overrides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessInfo {
    /// Clinic name, also used as the logo's alt text.
    pub name: String,
    /// Online booking page.
    pub booking_url: String,
    /// Front desk phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: "Balance Physiotherapy".to_string(),
            booking_url: "https://booking.balancephysio.example/appointments".to_string(),
            phone: "+44 20 7946 0321".to_string(),
            email: "hello@balancephysio.example".to_string(),
        }
    }
}
