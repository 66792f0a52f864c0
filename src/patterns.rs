//! Compiled regex patterns for Markdown detection and text normalization.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Patterns are organized by their purpose in the capture pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Markdown Structure Patterns
// =============================================================================

/// ATX heading: one to six `#` at line start followed by whitespace and text.
pub static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+.+$").expect("HEADING regex"));

/// Inline link `[text](target)`.
pub static INLINE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]\n]+\]\([^)\n]+\)").expect("INLINE_LINK regex"));

/// Reference link `[text][ref]` or a link definition `[ref]: target` at line start.
pub static REFERENCE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)\[[^\]\n]+\]\[[^\]\n]*\]|^\[[^\]\n]+\]:\s*\S+").expect("REFERENCE_LINK regex")
});

/// Image link `![alt](src)`. Alt text may be empty.
pub static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]\n]*\]\([^)\n]+\)").expect("IMAGE regex"));

/// Unordered list item: `-`, `*` or `+` followed by whitespace.
pub static UNORDERED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+\S.*$").expect("UNORDERED_LIST regex"));

/// Ordered list item: digits, a period, whitespace.
pub static ORDERED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+\S.*$").expect("ORDERED_LIST regex"));

/// Block quote line.
pub static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*>[ \t]*\S.*$").expect("BLOCKQUOTE regex"));

/// Inline code span on a single line.
pub static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`\n]+`").expect("INLINE_CODE regex"));

/// Fenced code block opened and closed with backticks or tildes.
pub static FENCED_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```.*?```|~~~.*?~~~").expect("FENCED_CODE regex")
});

/// Pipe-delimited table row: at least two pipes enclosing some content.
pub static TABLE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|[^\n|]*[^\s|][^\n]*\|").expect("TABLE_ROW regex"));

/// Horizontal rule: three or more hyphens alone on a line.
pub static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*-{3,}[ \t]*$").expect("HORIZONTAL_RULE regex"));

/// Bold emphasis with `**` or `__`.
pub static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*[^*\n]+\*\*|__[^_\n]+__").expect("BOLD regex"));

/// Italic emphasis with `*` or `_`.
///
/// Deliberately loose: `snake_case_names` match too.
pub static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*[^*\n]+\*|_[^_\n]+_").expect("ITALIC regex"));

/// Strikethrough with `~~`.
pub static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~[^~\n]+~~").expect("STRIKETHROUGH regex"));

// =============================================================================
// Text Normalization Patterns
// =============================================================================

/// Any line ending that is not a bare `\n`: `\r\n` or a lone `\r`.
pub static FOREIGN_LINE_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?").expect("FOREIGN_LINE_ENDING regex"));

/// Three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));
