//! Error types.

use thiserror::Error;

use crate::diff::DiffTag;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced while projecting highlights onto a document.
///
/// These indicate a broken offset correspondence between the extracted text and the document
/// model, so callers should treat them as bugs rather than recoverable input problems.
pub enum HighlightError {
    #[error("kept tag must be Delete or Insert, got {0:?}")]
    /// The projector was asked to keep `Equal` ops.
    InvalidKeptTag(DiffTag),

    #[error("range {start}..{end} exceeds document length {doc_len}", end = .start + .len)]
    /// A highlight range (or overlay span) runs past the end of the target document.
    RangeOutOfBounds {
        /// Range start offset (chars).
        start: usize,
        /// Range length (chars).
        len: usize,
        /// Actual length of the target document (chars).
        doc_len: usize,
    },

    #[error("edit script spans {script_len} positions but the document has {doc_len}")]
    /// The edit script was computed against a different text than the target document's.
    LengthMismatch {
        /// Positions covered by `Equal` and kept-tag ops.
        script_len: usize,
        /// Actual length of the target document (chars).
        doc_len: usize,
    },

    #[error("highlight value for {key:?} is null")]
    /// A highlight value of JSON `null` would remove `key` instead of setting it.
    NullHighlightValue {
        /// Attribute key the highlight was meant to set.
        key: String,
    },
}

#[derive(Debug, Error)]
/// Errors produced while decoding an externally supplied document payload.
pub enum CodecError {
    #[error("JSON parse error: {0}")]
    /// The payload is not valid JSON or does not match the op shape.
    Json(#[from] serde_json::Error),

    #[error("payload is not a document: {0}")]
    /// The payload parsed, but describes a change (retain/delete) or an unsupported shape.
    NotADocument(String),
}
