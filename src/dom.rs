//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate: parsing, root serialization,
//! `<base href>` lookup, first-match queries, and the stock extraction
//! functions handed to the selector extractor.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

use url::Url;

use crate::url_utils;

// === Parsing & Serialization ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Serialize the document's root element, `<html>...</html>`.
///
/// Returns `None` when the document has no root element to serialize.
#[must_use]
pub fn serialize_root(doc: &Document) -> Option<String> {
    let root = doc.select("html");
    if root.exists() {
        Some(root.first().html().to_string())
    } else {
        None
    }
}

/// Resolve the document's `<base href>` against an optional location.
///
/// Only the first `<base>` element with an `href` counts. A relative href
/// needs `location` to resolve; without it only absolute hrefs are usable.
#[must_use]
pub fn base_href(doc: &Document, location: Option<&Url>) -> Option<Url> {
    let href = doc.select("base[href]").first().attr("href")?;
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    match location {
        Some(loc) => url_utils::resolve_against(href, loc),
        None => url_utils::parse_absolute(href),
    }
}

// === Querying ===

/// First element matching a CSS selector, in document order.
///
/// Invalid selector syntax is treated the same as no match.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let selector = selector.trim();
    if selector.is_empty() {
        return None;
    }
    doc.try_select(selector)
        .map(|sel| sel.first())
        .filter(Selection::exists)
}

// === Extraction Functions ===

/// All text content of the element and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> String {
    sel.text().to_string()
}

/// Text content with surrounding whitespace removed.
///
/// Whitespace-only elements yield an empty string, which the extractor
/// treats as "keep looking".
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

/// Inner HTML of the element.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> String {
    sel.inner_html().to_string()
}

/// Outer HTML of the element.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> String {
    sel.html().to_string()
}

/// Build an extraction function that reads one attribute.
///
/// A missing attribute yields an empty string.
///
/// # Example
///
/// ```rust
/// use page_capture::dom;
///
/// let doc = dom::parse(r#"<meta name="description" content="Summary">"#);
/// let content = dom::attribute("content");
/// let sel = dom::first_match(&doc, "meta[name=description]").unwrap();
/// assert_eq!(content(&sel), "Summary");
/// ```
pub fn attribute(name: &str) -> impl Fn(&Selection) -> String + '_ {
    move |sel: &Selection| {
        sel.attr(name)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }
}
