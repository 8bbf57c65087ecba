//! Attribute-only composition.
//!
//! An [`AttributeOverlay`] is a change that retains content while patching attributes: a list of
//! retain spans, each optionally carrying an attribute patch. Composing it onto a document splits
//! runs at span boundaries and merges each patch into the covered runs' attributes. Content is
//! never altered.
//!
//! Patch semantics follow rich-text deltas: a key mapped to a value sets or overwrites it, a key
//! mapped to JSON `null` removes it. Positions past the last span pass through unchanged.

use serde_json::Value;

use crate::document::{AttributedDocument, Attributes, Run, RunContent, normalize_attributes};
use crate::error::HighlightError;

/// A single retain span of an [`AttributeOverlay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetainSpan {
    /// Number of text positions covered.
    pub len: usize,
    /// Attribute patch applied to the covered positions; `None` leaves them untouched.
    pub patch: Option<Attributes>,
}

/// An ordered, attribute-only change over a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeOverlay {
    spans: Vec<RetainSpan>,
}

impl AttributeOverlay {
    /// Create an empty overlay (the identity change).
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain `len` positions, optionally patching their attributes.
    ///
    /// Zero-length spans are ignored; consecutive spans with equal patches are merged.
    pub fn retain(&mut self, len: usize, patch: Option<Attributes>) -> &mut Self {
        if len == 0 {
            return self;
        }
        let patch = normalize_attributes(patch);
        if let Some(last) = self.spans.last_mut()
            && last.patch == patch
        {
            last.len += len;
            return self;
        }
        self.spans.push(RetainSpan { len, patch });
        self
    }

    /// The spans of this overlay.
    pub fn spans(&self) -> &[RetainSpan] {
        &self.spans
    }

    /// Total number of positions covered by the spans.
    pub fn len(&self) -> usize {
        self.spans.iter().map(|span| span.len).sum()
    }

    /// Returns `true` if the overlay has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Merge an attribute patch into (a copy of) existing attributes.
pub fn merge_attributes(base: Option<&Attributes>, patch: &Attributes) -> Option<Attributes> {
    let mut merged = base.cloned().unwrap_or_default();
    for (key, value) in patch {
        if value.is_null() {
            merged.remove(key);
        } else {
            merged.insert(key.clone(), value.clone());
        }
    }
    normalize_attributes(Some(merged))
}

/// Apply an attribute overlay to a document, producing a new document.
///
/// Fails with [`HighlightError::RangeOutOfBounds`] if the overlay covers more positions than the
/// document holds.
pub fn compose_attributes(
    doc: &AttributedDocument,
    overlay: &AttributeOverlay,
) -> Result<AttributedDocument, HighlightError> {
    let doc_len = doc.len();
    let mut start = 0;
    for span in &overlay.spans {
        if start + span.len > doc_len {
            return Err(HighlightError::RangeOutOfBounds {
                start,
                len: span.len,
                doc_len,
            });
        }
        start += span.len;
    }

    let mut out = AttributedDocument::new();
    let mut cursor = RunCursor::new(doc.runs());

    for span in &overlay.spans {
        let mut remaining = span.len;
        while remaining > 0 {
            // The length check above guarantees the cursor does not run dry here.
            let Some(piece) = cursor.take(remaining) else {
                break;
            };
            remaining -= piece.len();
            out.push(match &span.patch {
                Some(patch) => Run {
                    attributes: merge_attributes(piece.attributes.as_ref(), patch),
                    content: piece.content,
                },
                None => piece,
            });
        }
    }

    while let Some(rest) = cursor.take(usize::MAX) {
        out.push(rest);
    }

    Ok(out)
}

/// Walks the runs of a document, handing out pieces of at most `n` positions.
///
/// The current run's char length is counted once on entry, and text runs are sliced from a
/// remembered byte offset, so cutting one run into many pieces stays linear in its length.
struct RunCursor<'a> {
    runs: &'a [Run],
    index: usize,
    /// Char length of `runs[index]`.
    run_len: usize,
    /// Char offset inside `runs[index]`.
    offset: usize,
    /// Byte offset of `offset` inside a text run.
    byte_offset: usize,
}

impl<'a> RunCursor<'a> {
    fn new(runs: &'a [Run]) -> Self {
        Self {
            runs,
            index: 0,
            run_len: runs.first().map_or(0, Run::len),
            offset: 0,
            byte_offset: 0,
        }
    }

    fn next_run(&mut self) {
        self.index += 1;
        self.run_len = self.runs.get(self.index).map_or(0, Run::len);
        self.offset = 0;
        self.byte_offset = 0;
    }

    fn take(&mut self, n: usize) -> Option<Run> {
        let runs = self.runs;
        let run = runs.get(self.index)?;

        if self.offset == 0 && n >= self.run_len {
            self.next_run();
            return Some(run.clone());
        }

        let count = n.min(self.run_len - self.offset);
        let content = match &run.content {
            RunContent::Text(text) => {
                let rest = &text[self.byte_offset..];
                let byte_len = rest
                    .char_indices()
                    .nth(count)
                    .map_or(rest.len(), |(i, _)| i);
                self.byte_offset += byte_len;
                RunContent::Text(rest[..byte_len].to_string())
            }
            // Embeds have length 1, so they are always taken whole above.
            RunContent::Embed(object) => RunContent::Embed(object.clone()),
        };

        self.offset += count;
        if self.offset >= self.run_len {
            self.next_run();
        }

        Some(Run {
            content,
            attributes: run.attributes.clone(),
        })
    }
}

/// Build an overlay that sets `key` to `value` on the given `(start, len)` ranges.
///
/// Ranges must be sorted and non-overlapping.
pub(crate) fn overlay_for_ranges(
    ranges: impl IntoIterator<Item = (usize, usize)>,
    key: &str,
    value: &Value,
) -> AttributeOverlay {
    let mut patch = Attributes::new();
    patch.insert(key.to_string(), value.clone());

    let mut overlay = AttributeOverlay::new();
    let mut last = 0;
    for (start, len) in ranges {
        overlay.retain(start.saturating_sub(last), None);
        overlay.retain(len, Some(patch.clone()));
        last = start + len;
    }
    overlay
}
