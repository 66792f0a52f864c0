//! Selector Extraction
//!
//! Pages expose the same logical content under different markup depending on
//! their template. Callers describe that as a priority-ordered list of
//! selector guesses; the first one that yields non-empty text wins.

use dom_query::{Document, Selection};

use crate::context::ExecutionContext;
use crate::dom;

mod list;

pub use list::SelectorList;

/// Extract from the live page in `ctx`, first non-empty result wins.
///
/// Returns an empty string when the context has no document or no selector
/// produces content. See [`extract_first_in`].
#[must_use]
pub fn extract_first<'s, I, F>(ctx: &dyn ExecutionContext, selectors: I, extract: F) -> String
where
    I: IntoIterator<Item = &'s str>,
    F: FnMut(&Selection) -> String,
{
    let Some(doc) = ctx.document() else {
        tracing::trace!("no live document, nothing to extract");
        return String::new();
    };
    extract_first_in(doc, selectors, extract)
}

/// Extract from `doc`, trying `selectors` in order.
///
/// For each selector the first matching element is handed to `extract`.
/// The first non-empty value is returned and no further selector is looked
/// up. Selectors that match nothing, or do not parse, are skipped.
///
/// # Example
///
/// ```rust
/// use page_capture::{dom, selector::extract_first_in};
///
/// let doc = dom::parse(r#"<div class="body">Article text</div>"#);
/// let text = extract_first_in(&doc, ["article", ".body"], dom::trimmed_text);
/// assert_eq!(text, "Article text");
/// ```
#[must_use]
pub fn extract_first_in<'s, I, F>(doc: &Document, selectors: I, mut extract: F) -> String
where
    I: IntoIterator<Item = &'s str>,
    F: FnMut(&Selection) -> String,
{
    selectors
        .into_iter()
        .find_map(|selector| {
            let element = dom::first_match(doc, selector)?;
            let value = extract(&element);
            tracing::debug!(selector, value = %value, "selector matched");
            (!value.is_empty()).then_some(value)
        })
        .unwrap_or_default()
}
