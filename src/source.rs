//! Content source resolution.
//!
//! Turns whatever the caller has - a parsed document, a markup string, or
//! nothing - into a [`ResolvedSource`] holding markup and a base URL. Every
//! branch terminates in a value; absence of a page is not an error.

use dom_query::Document;
use url::Url;

use crate::context::ExecutionContext;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::{dom, encoding, url_utils};

/// Where the markup to resolve comes from.
#[derive(Clone, Copy, Default)]
pub enum ContentSource<'a> {
    /// A parsed document.
    Document(&'a Document),
    /// Raw markup, taken verbatim.
    Html(&'a str),
    /// Nothing supplied: use the live page, if any.
    #[default]
    Absent,
}

impl<'a> From<&'a str> for ContentSource<'a> {
    fn from(html: &'a str) -> Self {
        Self::Html(html)
    }
}

impl<'a> From<&'a String> for ContentSource<'a> {
    fn from(html: &'a String) -> Self {
        Self::Html(html.as_str())
    }
}

impl<'a> From<&'a Document> for ContentSource<'a> {
    fn from(doc: &'a Document) -> Self {
        Self::Document(doc)
    }
}

impl<'a, T> From<Option<T>> for ContentSource<'a>
where
    T: Into<ContentSource<'a>>,
{
    fn from(source: Option<T>) -> Self {
        source.map_or(Self::Absent, Into::into)
    }
}

/// Markup plus the base URL its relative links resolve against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSource {
    /// Serialized markup. Empty when nothing could be resolved.
    pub html: String,
    /// Base URL, when one was supplied or could be derived.
    pub base_url: Option<String>,
}

impl ResolvedSource {
    /// Parse the base URL.
    ///
    /// # Errors
    ///
    /// [`Error::MissingBaseUrl`] when there is none, [`Error::InvalidBaseUrl`]
    /// when it is not an absolute URL (an override is kept verbatim, so this
    /// can happen).
    pub fn base(&self) -> Result<Url> {
        let raw = self.base_url.as_deref().ok_or(Error::MissingBaseUrl)?;
        url_utils::parse_absolute(raw).ok_or_else(|| Error::InvalidBaseUrl(raw.to_string()))
    }

    /// Resolve a link found in the markup to an absolute URL.
    ///
    /// # Errors
    ///
    /// Fails when the base URL is missing or invalid; see [`ResolvedSource::base`].
    pub fn absolutize(&self, href: &str) -> Result<String> {
        let base = self.base()?;
        Ok(url_utils::absolutize(href, &base))
    }

    /// Parse the markup into a document.
    #[must_use]
    pub fn document(&self) -> Document {
        dom::parse(&self.html)
    }
}

/// Resolve a content source into markup and a base URL.
///
/// `base_url_override` always wins over a base URL derived from the source.
/// An absent source reads from `ctx`: its document's markup, then its base
/// URL or location.
///
/// # Example
///
/// ```rust
/// use page_capture::{resolve, ContentSource, Detached};
///
/// let resolved = resolve(ContentSource::Html("<p>hi</p>"), None, &Detached);
/// assert_eq!(resolved.html, "<p>hi</p>");
/// assert!(resolved.base_url.is_none());
///
/// let resolved = resolve(ContentSource::Absent, Some("https://example.com/"), &Detached);
/// assert_eq!(resolved.html, "");
/// assert_eq!(resolved.base_url.as_deref(), Some("https://example.com/"));
/// ```
#[must_use]
pub fn resolve(
    source: ContentSource<'_>,
    base_url_override: Option<&str>,
    ctx: &dyn ExecutionContext,
) -> ResolvedSource {
    let overridden = base_url_override.map(str::to_string);

    let resolved = match source {
        ContentSource::Html(html) => ResolvedSource {
            html: html.to_string(),
            base_url: overridden,
        },
        ContentSource::Document(doc) => ResolvedSource {
            html: dom::serialize_root(doc).unwrap_or_default(),
            base_url: overridden
                .or_else(|| dom::base_href(doc, None).map(String::from)),
        },
        ContentSource::Absent => ResolvedSource {
            html: ctx.serialized_markup().unwrap_or_default(),
            base_url: overridden.or_else(|| live_base_url(ctx)),
        },
    };

    tracing::debug!(
        source = source.kind(),
        html_len = resolved.html.len(),
        base_url = resolved.base_url.as_deref().unwrap_or(""),
        overridden = base_url_override.is_some(),
        "resolved content source"
    );

    resolved
}

/// Base URL of the live page: its document base, else the window location.
fn live_base_url(ctx: &dyn ExecutionContext) -> Option<String> {
    ctx.document_base_url()
        .or_else(|| ctx.location())
        .map(String::from)
}

/// Base URL for the live page in `ctx`, with `base_url_override` winning.
///
/// Same precedence as [`resolve`] with an absent source, without
/// serializing the document.
#[must_use]
pub fn resolve_base_url(
    base_url_override: Option<&str>,
    ctx: &dyn ExecutionContext,
) -> Option<String> {
    base_url_override
        .map(str::to_string)
        .or_else(|| live_base_url(ctx))
}

/// [`resolve`] taking the override from [`Options::base_url`].
#[must_use]
pub fn resolve_with_options(
    source: ContentSource<'_>,
    options: &Options,
    ctx: &dyn ExecutionContext,
) -> ResolvedSource {
    resolve(source, options.base_url.as_deref(), ctx)
}

/// Decode raw markup bytes and resolve them as an [`ContentSource::Html`] source.
///
/// Encoding is taken from a byte order mark or a `<meta>` charset
/// declaration, defaulting to UTF-8.
#[must_use]
pub fn resolve_bytes(bytes: &[u8], base_url_override: Option<&str>) -> ResolvedSource {
    let html = encoding::decode_markup(bytes);
    ResolvedSource {
        html,
        base_url: base_url_override.map(str::to_string),
    }
}

impl std::fmt::Debug for ContentSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Html(html) => f.debug_tuple("Html").field(html).finish(),
            other => f.write_str(other.kind()),
        }
    }
}

impl ContentSource<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Document(_) => "document",
            Self::Html(_) => "html",
            Self::Absent => "absent",
        }
    }
}
