//! Text normalization and truncation.

use crate::options::DEFAULT_MAX_LENGTH;
use crate::patterns::{FOREIGN_LINE_ENDING, MULTIPLE_NEWLINES};

/// Appended to text cut by [`truncate`].
pub const ELLIPSIS: &str = "...";

/// Unify line endings and cap blank runs at one empty line.
///
/// `\r\n` and lone `\r` become `\n` first, then any run of three or more
/// newlines becomes exactly two. The result never contains `\r` nor more than
/// two consecutive newlines.
///
/// # Example
///
/// ```rust
/// use page_capture::normalize;
///
/// assert_eq!(normalize("a\r\n\r\n\r\nb"), "a\n\nb");
/// assert_eq!(normalize("a\n\n\n\nb"), "a\n\nb");
/// ```
#[must_use]
pub fn normalize(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    let unified = FOREIGN_LINE_ENDING.replace_all(content, "\n");
    MULTIPLE_NEWLINES.replace_all(&unified, "\n\n").into_owned()
}

/// Cut `content` to `max_length` characters, marking the cut with `...`.
///
/// Length counts Unicode scalar values, so multi-byte characters are never
/// split. Text at or under the limit is returned unchanged.
///
/// # Example
///
/// ```rust
/// use page_capture::truncate;
///
/// assert_eq!(truncate("xxxxxxxxxx", 5), "xxxxx...");
/// assert_eq!(truncate("abc", 5), "abc");
/// assert_eq!(truncate("héllo wörld", 5), "héllo...");
/// ```
#[must_use]
pub fn truncate(content: &str, max_length: usize) -> String {
    match content.char_indices().nth(max_length) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len());
            out.push_str(&content[..cut]);
            out.push_str(ELLIPSIS);
            out
        }
        None => content.to_string(),
    }
}

/// [`truncate`] with the default limit of 300 characters.
#[must_use]
pub fn truncate_default(content: &str) -> String {
    truncate(content, DEFAULT_MAX_LENGTH)
}
