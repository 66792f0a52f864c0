//! Markdown detection.
//!
//! A flat table of independent structural checks, OR-combined. Each check is
//! permissive on its own, so the classifier leans toward calling text
//! Markdown: rendering plain text as Markdown is cheap to live with, missing
//! real Markdown is not.

use std::sync::LazyLock;

use crate::patterns;

/// A single named structural check.
#[derive(Debug, Clone, Copy)]
pub struct Heuristic {
    /// Short identifier used in diagnostics.
    pub name: &'static str,
    /// Returns `true` when the content shows this Markdown feature.
    pub test: fn(&str) -> bool,
}

impl Heuristic {
    /// Create a heuristic from a name and a predicate.
    #[must_use]
    pub const fn new(name: &'static str, test: fn(&str) -> bool) -> Self {
        Self { name, test }
    }

    /// Run the check.
    #[inline]
    #[must_use]
    pub fn matches(&self, content: &str) -> bool {
        (self.test)(content)
    }
}

/// The stock battery of checks.
pub static DEFAULT_HEURISTICS: &[Heuristic] = &[
    Heuristic::new("heading", |s: &str| patterns::HEADING.is_match(s)),
    Heuristic::new("link", |s: &str| patterns::INLINE_LINK.is_match(s)),
    Heuristic::new("reference_link", |s: &str| patterns::REFERENCE_LINK.is_match(s)),
    Heuristic::new("image", |s: &str| patterns::IMAGE.is_match(s)),
    Heuristic::new("unordered_list", |s: &str| patterns::UNORDERED_LIST.is_match(s)),
    Heuristic::new("ordered_list", |s: &str| patterns::ORDERED_LIST.is_match(s)),
    Heuristic::new("blockquote", |s: &str| patterns::BLOCKQUOTE.is_match(s)),
    Heuristic::new("inline_code", |s: &str| patterns::INLINE_CODE.is_match(s)),
    Heuristic::new("fenced_code", |s: &str| patterns::FENCED_CODE.is_match(s)),
    Heuristic::new("table", |s: &str| patterns::TABLE_ROW.is_match(s)),
    Heuristic::new("horizontal_rule", |s: &str| patterns::HORIZONTAL_RULE.is_match(s)),
    Heuristic::new("bold", |s: &str| patterns::BOLD.is_match(s)),
    Heuristic::new("italic", |s: &str| patterns::ITALIC.is_match(s)),
    Heuristic::new("strikethrough", |s: &str| patterns::STRIKETHROUGH.is_match(s)),
];

/// An ordered set of heuristics evaluated with early exit.
#[derive(Debug, Clone)]
pub struct Classifier {
    heuristics: Vec<Heuristic>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            heuristics: DEFAULT_HEURISTICS.to_vec(),
        }
    }
}

impl Classifier {
    /// A classifier with no checks at all; nothing classifies as Markdown.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            heuristics: Vec::new(),
        }
    }

    /// Append a check after the existing ones.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristics.push(heuristic);
        self
    }

    /// The checks, in evaluation order.
    #[must_use]
    pub fn heuristics(&self) -> &[Heuristic] {
        &self.heuristics
    }

    /// Whether `content` should be treated as Markdown.
    ///
    /// Empty content is never Markdown. Stops at the first check that fires.
    #[must_use]
    pub fn is_markdown(&self, content: &str) -> bool {
        if content.is_empty() {
            return false;
        }
        let hit = self.heuristics.iter().find(|h| h.matches(content));
        tracing::trace!(
            heuristic = hit.map_or("none", |h| h.name),
            "markdown classification"
        );
        hit.is_some()
    }

    /// Names of every check that fires on `content`.
    #[must_use]
    pub fn matching(&self, content: &str) -> Vec<&'static str> {
        if content.is_empty() {
            return Vec::new();
        }
        self.heuristics
            .iter()
            .filter(|h| h.matches(content))
            .map(|h| h.name)
            .collect()
    }
}

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::default);

/// Whether `content` looks like Markdown, using the stock checks.
///
/// # Example
///
/// ```rust
/// use page_capture::is_markdown;
///
/// assert!(is_markdown("# Title"));
/// assert!(is_markdown("Some **bold** claim"));
/// assert!(!is_markdown("plain sentence with no markers."));
/// assert!(!is_markdown(""));
/// ```
#[must_use]
pub fn is_markdown(content: &str) -> bool {
    DEFAULT_CLASSIFIER.is_markdown(content)
}
