#![warn(missing_docs)]
//! Redline Core - Headless Rich-Text Diff Engine
//!
//! # Overview
//!
//! `redline-core` compares two versions of an attributed (run-formatted) text document and
//! renders the difference as highlight attributes on each version, without any notion of how
//! those documents are displayed. The host decodes its documents, calls into this crate, and
//! renders the two resulting documents side by side.
//!
//! # Core Features
//!
//! - **Character-level diff**: Myers edit scripts over the documents' plain text
//! - **Formatting-preserving highlights**: deletions and insertions become an attribute overlay,
//!   leaving bold/italic/link/... untouched
//! - **Embed aware**: embedded objects occupy exactly one position, keeping offsets stable
//! - **Clean commit**: highlight attributes are stripped before the edited result is saved
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Review pipeline (diff_documents / commit)  │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Projector / Cleaner (RichText seam)        │  ← Highlight overlay
//! ├─────────────────────────────────────────────┤
//! │  Attribute composition                      │  ← Run splitting/merging
//! ├─────────────────────────────────────────────┤
//! │  Diff engine (Myers, via `similar`)         │  ← Edit script
//! ├─────────────────────────────────────────────┤
//! │  Text extraction + run-array documents      │  ← Data model
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use redline_core::{AttributedDocument, ReviewOptions, Run, diff_documents};
//!
//! let old = AttributedDocument::plain("Hello world");
//! let new = AttributedDocument::plain("Hello brave world");
//!
//! let view = diff_documents(&old, &new, &ReviewOptions::default()).unwrap();
//!
//! assert_eq!(view.left, old);
//! assert_eq!(
//!     view.right.runs(),
//!     &[
//!         Run::text("Hello "),
//!         Run::text("brave ").with_attribute("background", "#e6ffec"),
//!         Run::text("world"),
//!     ]
//! );
//! ```
//!
//! # Module Description
//!
//! - [`document`] - run-array document model
//! - [`extract`] - plain-text extraction with embed placeholders
//! - [`diff`] - edit scripts
//! - [`compose`] - attribute-only composition
//! - [`highlight`] - projection of edit scripts onto one document side
//! - [`clean`] - highlight removal
//! - [`model`] - the [`RichText`] seam for other document models
//! - [`codec`] - JSON payload decoding/encoding
//! - [`review`] - end-to-end review pipeline
//!
//! # Offsets
//!
//! All offsets and lengths are in Unicode scalar values (`char`), never bytes.

pub mod clean;
pub mod codec;
pub mod compose;
pub mod diff;
pub mod document;
mod error;
pub mod extract;
pub mod highlight;
pub mod model;
pub mod options;
pub mod review;

pub use clean::clean_highlight;
pub use codec::{decode_document, decode_document_value, decode_or_empty, encode_document};
pub use compose::{AttributeOverlay, RetainSpan, compose_attributes, merge_attributes};
pub use diff::{
    DiffGranularity, DiffOp, DiffOptions, DiffStats, DiffTag, diff_text, diff_text_with,
    reconstruct_new, reconstruct_old,
};
pub use document::{AttributedDocument, Attributes, Run, RunContent};
pub use error::{CodecError, HighlightError};
pub use extract::{EMBED_PLACEHOLDER, extract_text};
pub use highlight::{HighlightRange, ProjectedRanges, collect_ranges, project};
pub use model::RichText;
pub use options::{
    DEFAULT_ADDED_COLOR, DEFAULT_HIGHLIGHT_KEY, DEFAULT_REMOVED_COLOR, HighlightOptions,
    ReviewOptions,
};
pub use review::{DiffView, commit, diff_documents, finalize};
