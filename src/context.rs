//! Execution context abstraction.
//!
//! The resolver and extractor never reach for ambient globals. Whatever
//! stands in for "the page the user is looking at" is passed in as an
//! [`ExecutionContext`], and every capability it offers is optional so the
//! same code runs with a live page or with nothing at all.

use dom_query::Document;
use url::Url;

use crate::dom;
use crate::error::{Error, Result};

/// Capabilities the pipeline needs from its host environment.
pub trait ExecutionContext {
    /// The live document, if the host has one.
    fn document(&self) -> Option<&Document>;

    /// The live window location, if known.
    fn location(&self) -> Option<Url>;

    /// Serialized markup of the live document's root element.
    fn serialized_markup(&self) -> Option<String> {
        self.document().and_then(dom::serialize_root)
    }

    /// Base URL declared by the live document.
    ///
    /// A `<base href>` resolved against the location wins; otherwise the
    /// document falls back to the location it was loaded from.
    fn document_base_url(&self) -> Option<Url> {
        let doc = self.document()?;
        let location = self.location();
        dom::base_href(doc, location.as_ref()).or(location)
    }
}

/// A context with no page: headless, background, or test execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl ExecutionContext for Detached {
    fn document(&self) -> Option<&Document> {
        None
    }

    fn location(&self) -> Option<Url> {
        None
    }
}

/// A parsed page standing in for the live document and window.
pub struct LivePage {
    document: Document,
    location: Option<Url>,
}

impl LivePage {
    /// Wrap an already parsed document.
    #[must_use]
    pub fn new(document: Document, location: Option<Url>) -> Self {
        Self { document, location }
    }

    /// Parse `html` as the live page with no known location.
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        Self::new(dom::parse(html), None)
    }

    /// Parse `html` as the live page loaded from `location`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if `location` is not an absolute URL.
    pub fn with_location(html: &str, location: &str) -> Result<Self> {
        let url = crate::url_utils::parse_absolute(location)
            .ok_or_else(|| Error::InvalidBaseUrl(location.to_string()))?;
        Ok(Self::new(dom::parse(html), Some(url)))
    }

    /// The page's document.
    #[must_use]
    pub fn page(&self) -> &Document {
        &self.document
    }
}

impl ExecutionContext for LivePage {
    fn document(&self) -> Option<&Document> {
        Some(&self.document)
    }

    fn location(&self) -> Option<Url> {
        self.location.clone()
    }
}

impl std::fmt::Debug for LivePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LivePage")
            .field("location", &self.location.as_ref().map(Url::as_str))
            .finish_non_exhaustive()
    }
}
