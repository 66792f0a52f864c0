use page_capture::{
    capture, dom, extract_first_in, is_markdown, normalize, render, resolve, truncate,
    ContentSource, Detached, LivePage, Options,
};

const MALFORMED: &[&str] = &[
    "<p>text<div>more",
    "<p><div></p></div>",
    "<div class=\"test id=broken>",
    "&amp text &lt;",
    "<<<>>>",
    "",
];

#[test]
fn resolve_does_not_panic_on_malformed_html() {
    for html in MALFORMED {
        let doc = dom::parse(html);
        let resolved = resolve(ContentSource::Document(&doc), None, &Detached);
        assert!(resolved.html.starts_with("<html>"), "input {html:?}");
    }
}

#[test]
fn extraction_does_not_panic_on_malformed_html() {
    for html in MALFORMED {
        let doc = dom::parse(html);
        let _ = extract_first_in(&doc, ["div", "p", "body", "::invalid(", ""], dom::trimmed_text);
    }
}

#[test]
fn unclosed_tags_still_extract_text() {
    let doc = dom::parse("<html><body><article>content");
    assert_eq!(extract_first_in(&doc, ["article"], dom::trimmed_text), "content");
}

#[test]
fn text_operations_accept_arbitrary_unicode() {
    let inputs = ["\u{0}", "\u{FEFF}bom", "ŝtrange\r\nlines", "🦀\n\n\n🦀", "\r"];
    for input in inputs {
        let normalized = normalize(input);
        assert!(!normalized.contains('\r'));
        let _ = is_markdown(input);
        let _ = truncate(input, 1);
        let _ = render(input);
    }
}

#[test]
fn capture_survives_pages_with_only_whitespace() {
    let page = LivePage::from_html("<body>   \n\n   </body>");
    let result = capture(&page, ["body"], dom::trimmed_text, &Options::default());
    assert!(result.is_empty());
    assert_eq!(result.preview, "");
}
