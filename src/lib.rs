//! # page-capture
//!
//! Content resolution, extraction and normalization for capturing what a
//! user is looking at in a page.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_capture::{capture, dom, CaptureResponse, LivePage, Options};
//!
//! let page = LivePage::with_location(
//!     r#"<html><body><article>Main content here.</article></body></html>"#,
//!     "https://example.com/post",
//! )?;
//!
//! let result = capture(&page, ["#story", "article"], dom::trimmed_text, &Options::default());
//! assert_eq!(result.text, "Main content here.");
//! assert!(!result.is_markdown);
//!
//! let response = CaptureResponse::from(result).to_json()?;
//! assert_eq!(response, r#"{"success":true,"data":"Main content here."}"#);
//! # Ok::<(), page_capture::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Source resolution**: any source (document, markup, or nothing) becomes
//!   markup plus a base URL, whether or not a live page exists
//! - **Selector extraction**: first non-empty match over a priority list
//! - **Markdown detection**: permissive structural checks, OR-combined
//! - **Normalization**: line endings unified, blank runs capped, truncation
//! - **Rendering**: GFM Markdown to HTML for preview
//!
//! None of the pipeline operations fail. Missing pages, documents and
//! matches produce empty strings and absent URLs.

mod capture;
mod classify;
mod context;
mod error;
mod options;
mod patterns;
mod source;
mod text;

/// DOM operations adapter over `dom_query`, including stock extraction functions.
pub mod dom;

/// Priority-ordered selector extraction.
pub mod selector;

/// Markdown to HTML rendering.
pub mod markdown;

/// URL utilities for validation and resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use capture::{capture, Capture, CaptureResponse};
pub use classify::{is_markdown, Classifier, Heuristic, DEFAULT_HEURISTICS};
pub use context::{Detached, ExecutionContext, LivePage};
pub use error::{Error, Result};
pub use markdown::render;
pub use options::{Options, DEFAULT_MAX_LENGTH};
pub use selector::{extract_first, extract_first_in, SelectorList};
pub use source::{
    resolve, resolve_base_url, resolve_bytes, resolve_with_options, ContentSource, ResolvedSource,
};
pub use text::{normalize, truncate, truncate_default, ELLIPSIS};
