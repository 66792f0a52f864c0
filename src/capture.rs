//! The capture pipeline and its response envelope.
//!
//! One call pulls text off the page, decides whether it is Markdown,
//! normalizes it, renders a preview when it is Markdown, and truncates a
//! short preview string. Finding nothing is a successful empty capture.

use std::fmt::Display;

use dom_query::Selection;
use serde::{Deserialize, Serialize};

use crate::classify::is_markdown;
use crate::context::ExecutionContext;
use crate::error::Result;
use crate::markdown::render;
use crate::options::Options;
use crate::selector::extract_first;
use crate::source::resolve_base_url;
use crate::text::{normalize, truncate};

/// Outcome of one capture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Text as extracted, before normalization.
    pub raw: String,
    /// Whether the raw text classified as Markdown.
    pub is_markdown: bool,
    /// Normalized text.
    pub text: String,
    /// Normalized text cut to `Options::max_length`.
    pub preview: String,
    /// Rendered HTML, only for Markdown with rendering enabled.
    pub html: Option<String>,
    /// Base URL of the captured page; `Options::base_url` wins when set.
    pub base_url: Option<String>,
}

impl Capture {
    /// Whether nothing was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Run the capture pipeline against the live page in `ctx`.
///
/// # Example
///
/// ```rust
/// use page_capture::{capture, dom, LivePage, Options};
///
/// let page = LivePage::from_html("<pre id=\"note\"># Notes\n\n- one</pre>");
/// let result = capture(&page, ["#note"], dom::text_content, &Options::default());
/// assert!(result.is_markdown);
/// assert!(result.html.unwrap().contains("<h1>Notes</h1>"));
/// ```
#[must_use]
pub fn capture<'s, I, F>(
    ctx: &dyn ExecutionContext,
    selectors: I,
    extract: F,
    options: &Options,
) -> Capture
where
    I: IntoIterator<Item = &'s str>,
    F: FnMut(&Selection) -> String,
{
    let raw = extract_first(ctx, selectors, extract);
    let markdown = is_markdown(&raw);
    let text = normalize(&raw);
    let html = (markdown && options.render_markdown).then(|| render(&text));
    let preview = truncate(&text, options.max_length);
    let base_url = resolve_base_url(options.base_url.as_deref(), ctx);

    tracing::debug!(
        raw_len = raw.len(),
        text_len = text.len(),
        is_markdown = markdown,
        rendered = html.is_some(),
        "capture complete"
    );

    Capture {
        raw,
        is_markdown: markdown,
        text,
        preview,
        html,
        base_url,
    }
}

/// Response envelope handed back to the messaging layer.
///
/// Serializes as `{ "success": bool, "data"?: string, "error"?: string }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResponse {
    /// Whether the capture call completed.
    pub success: bool,
    /// Captured text on success. May be empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CaptureResponse {
    /// A successful response carrying `data`.
    #[must_use]
    pub fn ok(data: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data.into()),
            error: None,
        }
    }

    /// A failed response carrying a message.
    #[must_use]
    pub fn failure(message: impl Display) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&Capture> for CaptureResponse {
    fn from(capture: &Capture) -> Self {
        Self::ok(capture.text.clone())
    }
}

impl From<Capture> for CaptureResponse {
    fn from(capture: Capture) -> Self {
        Self::ok(capture.text)
    }
}

impl<E: Display> From<std::result::Result<String, E>> for CaptureResponse {
    fn from(result: std::result::Result<String, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::failure(err),
        }
    }
}
