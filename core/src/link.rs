//! Link targets that are safe to write into `href`/`src`.
//!
//! Escaping keeps a value inside its attribute but says nothing about the
//! scheme, so untrusted URLs are filtered here before they reach a renderer.

/// Schemes allowed for absolute URLs.
const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "tel", "mailto"];

/// Returns `Some(url)` when `url` is a same-site path, a fragment, or uses an
/// allowed scheme. Returns `None` otherwise.
///
/// - `/services`, `#booking` are accepted
/// - `//evil.example`, `/\evil.example` (protocol-relative) are rejected
/// - `javascript:`, `data:`, `vbscript:` and other schemes are rejected
/// - control characters anywhere are rejected
///
/// ```
/// use physio_hero_core::safe_link;
///
/// assert_eq!(safe_link("/book"), Some("/book"));
/// assert_eq!(safe_link("tel:+442079460321"), Some("tel:+442079460321"));
/// assert_eq!(safe_link("javascript:alert(1)"), None);
/// ```
pub fn safe_link(url: &str) -> Option<&str> {
    let url = url.trim();
    if url.is_empty() || url.chars().any(|c| c.is_control()) {
        return None;
    }

    if url.starts_with('#') {
        return Some(url);
    }

    if url.starts_with('/') {
        if url.starts_with("//") || url.starts_with("/\\") {
            return None;
        }
        return Some(url);
    }

    let (scheme, rest) = url.split_once(':')?;
    let scheme = scheme.to_ascii_lowercase();
    if !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
        return None;
    }
    if matches!(scheme.as_str(), "http" | "https") && !rest.starts_with("//") {
        return None;
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_and_fragment() {
        assert_eq!(safe_link("/services"), Some("/services"));
        assert_eq!(safe_link(" /services "), Some("/services"));
        assert_eq!(safe_link("#contact"), Some("#contact"));
        assert_eq!(safe_link("//evil.example/x"), None);
        assert_eq!(safe_link("/\\evil.example"), None);
    }

    #[test]
    fn test_allowed_schemes() {
        assert!(safe_link("https://harbour.example/book").is_some());
        assert!(safe_link("HTTP://harbour.example").is_some());
        assert!(safe_link("mailto:hello@balancephysio.example").is_some());
        assert!(safe_link("tel:+442079460321").is_some());
        assert_eq!(safe_link("https:evil"), None);
    }

    #[test]
    fn test_script_schemes_rejected() {
        assert_eq!(safe_link("javascript:alert(document.cookie)"), None);
        assert_eq!(safe_link("JavaScript:alert(1)"), None);
        assert_eq!(safe_link(" javascript:alert(1)"), None);
        assert_eq!(safe_link("java\tscript:alert(1)"), None);
        assert_eq!(safe_link("data:text/html,<script>alert(1)</script>"), None);
        assert_eq!(safe_link("vbscript:msgbox"), None);
    }

    #[test]
    fn test_bare_words_rejected() {
        assert_eq!(safe_link("services"), None);
        assert_eq!(safe_link(""), None);
        assert_eq!(safe_link("   "), None);
    }
}
