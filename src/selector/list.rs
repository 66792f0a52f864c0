//! Ordered selector lists.

use serde::{Deserialize, Serialize};

/// An ordered list of CSS selectors; earlier entries take priority.
///
/// Duplicates are allowed. They only repeat a lookup that already failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectorList(Vec<String>);

impl SelectorList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a selector with the lowest priority so far.
    pub fn push(&mut self, selector: impl Into<String>) {
        self.0.push(selector.into());
    }

    /// Builder-style [`SelectorList::push`].
    #[must_use]
    pub fn then(mut self, selector: impl Into<String>) -> Self {
        self.push(selector);
        self
    }

    /// Number of selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no selectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate selectors in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectorList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> From<Vec<S>> for SelectorList {
    fn from(selectors: Vec<S>) -> Self {
        selectors.into_iter().collect()
    }
}

impl<S: Into<String> + Clone> From<&[S]> for SelectorList {
    fn from(selectors: &[S]) -> Self {
        selectors.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a SelectorList {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(String::as_str as fn(&String) -> &str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let list = SelectorList::new().then("article").then("main").then("body");
        assert_eq!(list.iter().collect::<Vec<_>>(), ["article", "main", "body"]);
    }

    #[test]
    fn keeps_duplicates() {
        let list: SelectorList = ["p", "p"].into_iter().collect();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn deserializes_from_json_array() {
        let list: SelectorList =
            serde_json::from_str(r##"["#content", ".post-body"]"##).expect("valid json");
        assert_eq!(list, SelectorList::from(vec!["#content", ".post-body"]));
    }
}
