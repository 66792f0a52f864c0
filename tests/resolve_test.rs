#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use page_capture::{
    dom, resolve, resolve_bytes, ContentSource, Detached, Error, ExecutionContext, LivePage,
    ResolvedSource,
};
use url::Url;

/// A host that has a window location but no document, e.g. a worker.
struct LocationOnly(Url);

impl ExecutionContext for LocationOnly {
    fn document(&self) -> Option<&dom::Document> {
        None
    }

    fn location(&self) -> Option<Url> {
        Some(self.0.clone())
    }
}

#[test]
fn absent_source_without_any_page_resolves_to_empty() {
    let resolved = resolve(ContentSource::Absent, None, &Detached);
    assert_eq!(resolved.html, "");
    assert_eq!(resolved.base_url, None);
}

#[test]
fn absent_source_with_override_keeps_override() {
    let resolved = resolve(ContentSource::Absent, Some("https://example.com/x"), &Detached);
    assert_eq!(resolved.html, "");
    assert_eq!(resolved.base_url.as_deref(), Some("https://example.com/x"));
}

#[test]
fn string_sources_resolve_verbatim_without_base() {
    for s in ["", "plain", "<p>para</p>", "<html><body>full</body></html>", "  spaced  "] {
        let resolved = resolve(ContentSource::from(s), None, &Detached);
        assert_eq!(
            resolved,
            ResolvedSource {
                html: s.to_string(),
                base_url: None,
            }
        );
    }
}

#[test]
fn string_source_does_not_inherit_live_page_base() {
    let page = LivePage::with_location("<p>live</p>", "https://example.com/").expect("url");
    let resolved = resolve(ContentSource::from("<p>raw</p>"), None, &page);
    assert_eq!(resolved.base_url, None);
}

#[test]
fn document_source_serializes_root_element() {
    let doc = dom::parse("<!DOCTYPE html><html><head><title>T</title></head><body><p>x</p></body></html>");
    let resolved = resolve(ContentSource::from(&doc), None, &Detached);
    assert!(resolved.html.starts_with("<html>"));
    assert!(resolved.html.contains("<title>T</title>"));
    assert!(resolved.html.contains("<p>x</p>"));
    assert!(!resolved.html.contains("DOCTYPE"));
}

#[test]
fn document_source_without_base_element_has_no_base() {
    let doc = dom::parse("<p>x</p>");
    let resolved = resolve(ContentSource::Document(&doc), None, &Detached);
    assert_eq!(resolved.base_url, None);
}

#[test]
fn absent_source_prefers_base_element_over_location() {
    let page = LivePage::with_location(
        r#"<html><head><base href="https://cdn.example.com/"></head><body></body></html>"#,
        "https://example.com/article",
    )
    .expect("url");
    let resolved = resolve(ContentSource::Absent, None, &page);
    assert_eq!(resolved.base_url.as_deref(), Some("https://cdn.example.com/"));
}

#[test]
fn absent_source_falls_back_to_location_without_document() {
    let ctx = LocationOnly(Url::parse("https://example.com/worker").expect("url"));
    let resolved = resolve(ContentSource::Absent, None, &ctx);
    assert_eq!(resolved.html, "");
    assert_eq!(resolved.base_url.as_deref(), Some("https://example.com/worker"));
}

#[test]
fn override_always_wins() {
    let page = LivePage::with_location(
        r#"<html><head><base href="https://cdn.example.com/"></head></html>"#,
        "https://example.com/",
    )
    .expect("url");
    let doc = dom::parse(r#"<html><head><base href="https://doc.example.com/"></head></html>"#);

    for source in [
        ContentSource::Absent,
        ContentSource::Document(&doc),
        ContentSource::Html("<p></p>"),
    ] {
        let resolved = resolve(source, Some("https://override.example/"), &page);
        assert_eq!(resolved.base_url.as_deref(), Some("https://override.example/"));
    }
}

#[test]
fn resolved_base_supports_link_resolution() {
    let page = LivePage::with_location(
        r#"<html><body><a href="../next">next</a></body></html>"#,
        "https://example.com/blog/2024/post",
    )
    .expect("url");
    let resolved = resolve(ContentSource::Absent, None, &page);

    let doc = resolved.document();
    let href = dom::attribute("href")(&dom::first_match(&doc, "a").expect("link"));
    assert_eq!(
        resolved.absolutize(&href).expect("base"),
        "https://example.com/blog/next"
    );
}

#[test]
fn absolutize_without_base_is_an_error() {
    let resolved = resolve(ContentSource::Html("<a href='x'>x</a>"), None, &Detached);
    assert!(matches!(resolved.absolutize("x"), Err(Error::MissingBaseUrl)));
}

#[test]
fn bytes_source_is_decoded_then_resolved() {
    let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
    let resolved = resolve_bytes(html, Some("https://example.com/"));
    assert!(resolved.html.contains("Café"));
    assert_eq!(resolved.base_url.as_deref(), Some("https://example.com/"));
}
