#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use std::cell::RefCell;

use page_capture::{dom, extract_first, extract_first_in, Detached, LivePage, SelectorList};

const BLOG_PAGE: &str = r#"
<html>
<head><meta name="description" content="A post about parsers"></head>
<body>
    <nav><a href="/">Home</a></nav>
    <div class="post-body">   </div>
    <div class="entry-content"><p>Parsers turn text into trees.</p></div>
    <article><p>Fallback article text.</p></article>
</body>
</html>
"#;

#[test]
fn template_specific_guesses_fall_through_in_order() {
    let page = LivePage::from_html(BLOG_PAGE);
    let selectors = SelectorList::new()
        .then("#story")
        .then(".post-body")
        .then(".entry-content")
        .then("article");

    let text = extract_first(&page, &selectors, dom::trimmed_text);
    assert_eq!(text, "Parsers turn text into trees.");
}

#[test]
fn selectors_after_first_success_are_never_looked_at() {
    let doc = dom::parse(BLOG_PAGE);
    let seen = RefCell::new(Vec::new());

    let text = extract_first_in(&doc, [".entry-content", "article", "nav"], |sel| {
        seen.borrow_mut().push(dom::outer_html(sel));
        dom::trimmed_text(sel)
    });

    assert_eq!(text, "Parsers turn text into trees.");
    assert_eq!(seen.borrow().len(), 1);
    assert!(seen.borrow()[0].contains("entry-content"));
}

#[test]
fn extraction_function_sees_only_first_match_per_selector() {
    let doc = dom::parse("<ul><li>one</li><li>two</li></ul>");
    let text = extract_first_in(&doc, ["li"], dom::text_content);
    assert_eq!(text, "one");
}

#[test]
fn attribute_extraction_reads_meta_content() {
    let doc = dom::parse(BLOG_PAGE);
    let text = extract_first_in(
        &doc,
        ["meta[property='og:description']", "meta[name='description']"],
        dom::attribute("content"),
    );
    assert_eq!(text, "A post about parsers");
}

#[test]
fn inner_html_extraction_keeps_markup() {
    let doc = dom::parse(BLOG_PAGE);
    let html = extract_first_in(&doc, [".entry-content"], dom::inner_html);
    assert_eq!(html, "<p>Parsers turn text into trees.</p>");
}

#[test]
fn empty_selector_list_yields_empty_string() {
    let page = LivePage::from_html(BLOG_PAGE);
    assert_eq!(extract_first(&page, &SelectorList::new(), dom::text_content), "");
}

#[test]
fn unmatched_selectors_yield_empty_string() {
    let page = LivePage::from_html(BLOG_PAGE);
    let selectors = SelectorList::from(vec!["table", "#missing", ".nope"]);
    assert_eq!(extract_first(&page, &selectors, dom::text_content), "");
}

#[test]
fn no_live_document_yields_empty_string() {
    let selectors = SelectorList::from(vec!["body", "html"]);
    assert_eq!(extract_first(&Detached, &selectors, dom::text_content), "");
}

#[test]
fn repeated_extraction_is_idempotent() {
    let page = LivePage::from_html(BLOG_PAGE);
    let selectors = SelectorList::from(vec![".entry-content"]);
    let first = extract_first(&page, &selectors, dom::trimmed_text);
    let second = extract_first(&page, &selectors, dom::trimmed_text);
    assert_eq!(first, second);
    // the page is read, never changed
    assert_eq!(extract_first(&page, &selectors, dom::inner_html), "<p>Parsers turn text into trees.</p>");
}

#[test]
fn duplicate_selectors_are_harmless() {
    let page = LivePage::from_html(BLOG_PAGE);
    let selectors = SelectorList::from(vec![".post-body", ".post-body", "article"]);
    assert_eq!(
        extract_first(&page, &selectors, dom::trimmed_text),
        "Fallback article text."
    );
}
