//! Markdown rendering.
//!
//! Converts captured Markdown to HTML for preview with a fixed GFM
//! configuration. Output is not sanitized: raw HTML in the source passes
//! through, and escaping for display is up to the consumer.

use comrak::{markdown_to_html, Options};

/// Render Markdown to HTML.
///
/// GFM tables, strikethrough, autolinks and task lists are enabled. A single
/// newline inside a paragraph is a soft break and does not produce `<br>`.
///
/// # Example
///
/// ```rust
/// use page_capture::render;
///
/// assert_eq!(render(""), "");
/// assert!(render("**hi**").contains("<strong>hi</strong>"));
/// ```
#[must_use]
pub fn render(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.render.hardbreaks = false;
    options.render.unsafe_ = true;

    markdown_to_html(content, &options)
}
