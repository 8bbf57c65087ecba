//! The rich-text model seam.
//!
//! The diff pipeline only needs three capabilities from a document model: plain-text extraction
//! with a stable 1:1 offset mapping, an attribute-only overlay, and attribute removal. Any
//! attributed-run model (rope, run array, CRDT-backed text) can take part by implementing
//! [`RichText`]. [`AttributedDocument`] is the built-in implementation.

use serde_json::Value;

use crate::clean::clean_highlight;
use crate::compose::{compose_attributes, overlay_for_ranges};
use crate::document::AttributedDocument;
use crate::error::HighlightError;
use crate::extract::extract_text;
use crate::highlight::HighlightRange;

/// A document model the diff pipeline can operate on.
pub trait RichText: Sized {
    /// Flatten to plain text; `char` offsets must map 1:1 onto the model's text positions.
    fn extract_text(&self) -> String;

    /// Return a copy with `key: value` merged into the attributes of every position covered by
    /// `ranges` (sorted, non-overlapping). Content and all other attributes are preserved.
    ///
    /// Must fail with [`HighlightError::RangeOutOfBounds`] rather than clamp when a range runs
    /// past the end of the document, and with [`HighlightError::NullHighlightValue`] when `value`
    /// is JSON `null`.
    fn overlay_attribute(
        &self,
        ranges: &[HighlightRange],
        key: &str,
        value: &Value,
    ) -> Result<Self, HighlightError>;

    /// Return a copy with `key` removed wherever its value is one of `sentinels`.
    fn remove_attribute(&self, key: &str, sentinels: &[Value]) -> Self;
}

impl RichText for AttributedDocument {
    fn extract_text(&self) -> String {
        extract_text(self)
    }

    fn overlay_attribute(
        &self,
        ranges: &[HighlightRange],
        key: &str,
        value: &Value,
    ) -> Result<Self, HighlightError> {
        if value.is_null() {
            return Err(HighlightError::NullHighlightValue {
                key: key.to_string(),
            });
        }
        let doc_len = self.len();
        if let Some(range) = ranges.iter().find(|range| range.end() > doc_len) {
            return Err(HighlightError::RangeOutOfBounds {
                start: range.start,
                len: range.len,
                doc_len,
            });
        }

        let overlay = overlay_for_ranges(ranges.iter().map(|r| (r.start, r.len)), key, value);
        compose_attributes(self, &overlay)
    }

    fn remove_attribute(&self, key: &str, sentinels: &[Value]) -> Self {
        clean_highlight(self, key, sentinels)
    }
}
