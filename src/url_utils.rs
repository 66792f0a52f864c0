//! URL Utility Functions
//!
//! Absolute-URL checks and relative resolution used when deriving a base URL
//! from `<base href>` and when absolutizing links against a resolved source.

use url::Url;

/// Parse a string as an absolute URL.
///
/// Returns `None` for empty input, relative references, or anything the
/// `url` crate rejects. Any scheme is accepted as long as the result is not
/// a relative reference, so `file:` and `about:` locations are kept.
#[must_use]
pub fn parse_absolute(s: &str) -> Option<Url> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Url::parse(s).ok()
}

/// Resolve a possibly relative reference against a base URL.
///
/// Returns `None` when the reference is empty or cannot be joined.
///
/// # Examples
///
/// ```
/// use page_capture::url_utils::resolve_against;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/docs/page.html").unwrap();
/// let resolved = resolve_against("../img/a.png", &base).unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/img/a.png");
/// ```
#[must_use]
pub fn resolve_against(reference: &str, base: &Url) -> Option<Url> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }
    base.join(reference).ok()
}

/// Convert a link to absolute form, keeping special schemes untouched.
///
/// `data:`, `javascript:`, `mailto:` and `tel:` links, fragment-only links,
/// and links that fail to resolve are returned as given.
#[must_use]
pub fn absolutize(href: &str, base: &Url) -> String {
    let href = href.trim();

    if href.is_empty() {
        return String::new();
    }

    if href.starts_with('#')
        || href.starts_with("data:")
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
    {
        return href.to_string();
    }

    resolve_against(href, base).map_or_else(|| href.to_string(), |url| url.to_string())
}
