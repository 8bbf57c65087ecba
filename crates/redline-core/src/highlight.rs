//! Projection of an edit script onto one side of a diff.
//!
//! The same script is projected twice: onto the old document keeping `Delete` ops ("what was
//! removed") and onto the new document keeping `Insert` ops ("what was added"). Each projection
//! walks the script with a cursor in the base document's char space:
//!
//! - `Equal` advances the cursor,
//! - the kept tag records a [`HighlightRange`] and advances the cursor,
//! - the opposite tag does not exist in the base document and is skipped.

use serde_json::Value;

use crate::diff::{DiffOp, DiffTag};
use crate::error::HighlightError;
use crate::model::RichText;

/// A half-open highlight span `start..start + len` in one document's char space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRange {
    /// Start offset, in chars.
    pub start: usize,
    /// Length, in chars.
    pub len: usize,
}

impl HighlightRange {
    /// Create a new range.
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Ranges recorded for one side, plus the number of base positions the script walked over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRanges {
    /// Sorted, non-overlapping ranges of `kept_tag` content.
    pub ranges: Vec<HighlightRange>,
    /// Final cursor position; equals the base document length for a matching script.
    pub covered: usize,
}

/// Collect the ranges of `kept_tag` content in the base document's char space.
pub fn collect_ranges(
    ops: &[DiffOp],
    kept_tag: DiffTag,
) -> Result<ProjectedRanges, HighlightError> {
    if kept_tag == DiffTag::Equal {
        return Err(HighlightError::InvalidKeptTag(kept_tag));
    }

    let mut ranges = Vec::new();
    let mut cursor = 0;
    for op in ops {
        if op.tag == DiffTag::Equal {
            cursor += op.char_len();
        } else if op.tag == kept_tag {
            let len = op.char_len();
            ranges.push(HighlightRange::new(cursor, len));
            cursor += len;
        }
    }

    Ok(ProjectedRanges {
        ranges,
        covered: cursor,
    })
}

/// Overlay `key: value` onto the `kept_tag` ranges of `doc`.
///
/// `kept_tag` is [`DiffTag::Delete`] when `doc` is the old side and [`DiffTag::Insert`] when it
/// is the new side. Fails if the script does not describe `doc`'s text, or if `value` is JSON
/// `null` (which would clear `key` rather than set it).
pub fn project<D: RichText>(
    doc: &D,
    ops: &[DiffOp],
    kept_tag: DiffTag,
    key: &str,
    value: &Value,
) -> Result<D, HighlightError> {
    if value.is_null() {
        return Err(HighlightError::NullHighlightValue {
            key: key.to_string(),
        });
    }
    let projected = collect_ranges(ops, kept_tag)?;
    let doc_len = doc.extract_text().chars().count();
    if projected.covered != doc_len {
        return Err(HighlightError::LengthMismatch {
            script_len: projected.covered,
            doc_len,
        });
    }

    tracing::trace!(
        ?kept_tag,
        ranges = projected.ranges.len(),
        doc_len,
        "projecting highlight ranges"
    );
    doc.overlay_attribute(&projected.ranges, key, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff_text;
    use crate::document::{AttributedDocument, Run};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_collect_ranges_both_sides() {
        let ops = vec![
            DiffOp::equal("ab"),
            DiffOp::delete("c"),
            DiffOp::insert("de"),
            DiffOp::equal("f"),
        ];

        let left = collect_ranges(&ops, DiffTag::Delete).unwrap();
        assert_eq!(left.ranges, vec![HighlightRange::new(2, 1)]);
        assert_eq!(left.covered, 4);

        let right = collect_ranges(&ops, DiffTag::Insert).unwrap();
        assert_eq!(right.ranges, vec![HighlightRange::new(2, 2)]);
        assert_eq!(right.covered, 5);
    }

    #[test]
    fn test_collect_ranges_rejects_equal() {
        assert_eq!(
            collect_ranges(&[], DiffTag::Equal),
            Err(HighlightError::InvalidKeptTag(DiffTag::Equal))
        );
    }

    #[test]
    fn test_project_preserves_formatting() {
        let old = AttributedDocument::from_runs([
            Run::text("Hello ").with_attribute("bold", true),
            Run::text("world"),
        ]);
        let new = AttributedDocument::from_runs([
            Run::text("Hello ").with_attribute("bold", true),
            Run::text("brave world"),
        ]);
        let ops = diff_text(&old.extract_text(), &new.extract_text());

        let right = project(&new, &ops, DiffTag::Insert, "background", &json!("#e6ffec")).unwrap();
        assert_eq!(
            right.runs(),
            &[
                Run::text("Hello ").with_attribute("bold", true),
                Run::text("brave ").with_attribute("background", "#e6ffec"),
                Run::text("world"),
            ]
        );

        let left = project(&old, &ops, DiffTag::Delete, "background", &json!("#ffe6e6")).unwrap();
        assert_eq!(left, old);
    }

    #[test]
    fn test_project_overwrites_existing_key() {
        let doc =
            AttributedDocument::from_runs([Run::text("xy").with_attribute("background", "#000")]);
        let ops = vec![DiffOp::equal("x"), DiffOp::delete("y")];

        let left = project(&doc, &ops, DiffTag::Delete, "background", &json!("#ffe6e6")).unwrap();
        assert_eq!(
            left.runs(),
            &[
                Run::text("x").with_attribute("background", "#000"),
                Run::text("y").with_attribute("background", "#ffe6e6"),
            ]
        );
    }

    #[test]
    fn test_project_rejects_foreign_script() {
        let doc = AttributedDocument::plain("short");
        let ops = diff_text("a much longer text", "short");

        let err = project(&doc, &ops, DiffTag::Delete, "background", &json!("#ffe6e6"))
            .unwrap_err();
        assert_eq!(
            err,
            HighlightError::LengthMismatch {
                script_len: 18,
                doc_len: 5,
            }
        );
    }

    #[test]
    fn test_project_rejects_null_value() {
        let doc =
            AttributedDocument::from_runs([Run::text("b").with_attribute("background", "#000")]);
        let ops = vec![DiffOp::delete("b")];

        let err = project(&doc, &ops, DiffTag::Delete, "background", &Value::Null).unwrap_err();
        assert_eq!(
            err,
            HighlightError::NullHighlightValue {
                key: "background".to_string(),
            }
        );
        assert_eq!(
            doc.overlay_attribute(&[HighlightRange::new(0, 1)], "background", &Value::Null),
            Err(HighlightError::NullHighlightValue {
                key: "background".to_string(),
            })
        );
        assert_eq!(doc.runs()[0].attribute("background"), Some(&json!("#000")));
    }

    #[test]
    fn test_overlay_attribute_rejects_out_of_bounds_range() {
        let doc = AttributedDocument::plain("abc");
        let err = doc
            .overlay_attribute(&[HighlightRange::new(2, 5)], "background", &json!("#fff"))
            .unwrap_err();
        assert_eq!(
            err,
            HighlightError::RangeOutOfBounds {
                start: 2,
                len: 5,
                doc_len: 3,
            }
        );
    }
}
