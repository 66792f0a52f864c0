//! Configuration options for the capture pipeline.
//!
//! The `Options` struct controls how captured text is post-processed.
//! It deserializes from JSON with every field optional, so the messaging
//! layer can forward a partial configuration object unchanged.

use serde::{Deserialize, Serialize};

/// Default maximum preview length in characters.
pub const DEFAULT_MAX_LENGTH: usize = 300;

/// Configuration options for the capture pipeline.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use page_capture::Options;
///
/// // Use defaults
/// let options = Options::default();
/// assert_eq!(options.max_length, 300);
///
/// // Customize specific fields
/// let options = Options {
///     render_markdown: false,
///     ..Options::default()
/// };
///
/// // Partial JSON falls back to defaults for missing fields
/// let options: Options = serde_json::from_str(r#"{"max_length": 80}"#)?;
/// assert!(options.render_markdown);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Maximum length of the capture preview, in characters.
    ///
    /// Longer text is cut and suffixed with `...`.
    ///
    /// Default: `300`
    pub max_length: usize,

    /// Render captured text to HTML when it classifies as Markdown.
    ///
    /// Default: `true`
    pub render_markdown: bool,

    /// Base URL override used by [`crate::capture`] and
    /// [`crate::resolve_with_options`].
    ///
    /// Takes precedence over any base URL found in the document or page.
    ///
    /// Default: `None`
    pub base_url: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            render_markdown: true,
            base_url: None,
        }
    }
}
