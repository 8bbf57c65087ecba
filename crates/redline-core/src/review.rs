//! Side-by-side review of two document versions.
//!
//! [`diff_documents`] produces the two highlighted views shown to a reviewer: the old document
//! with removed text marked, and the new document with added text marked. After the reviewer
//! optionally edits the new side, [`commit`] strips the highlight overlay, encodes the result, and
//! hands it to the host's `apply` callback.

use crate::codec::encode_document;
use crate::diff::{DiffOp, DiffStats, DiffTag, diff_text_with};
use crate::document::AttributedDocument;
use crate::error::{CodecError, HighlightError};
use crate::highlight::project;
use crate::model::RichText;
use crate::options::{HighlightOptions, ReviewOptions};

/// The two highlighted views of a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffView<D> {
    /// Old document with deletions highlighted.
    pub left: D,
    /// New document with insertions highlighted.
    pub right: D,
    /// The edit script both views were projected from.
    pub ops: Vec<DiffOp>,
    /// Summary of the script.
    pub stats: DiffStats,
}

/// Diff two documents and project the result onto both sides.
pub fn diff_documents<D: RichText>(
    old: &D,
    new: &D,
    options: &ReviewOptions,
) -> Result<DiffView<D>, HighlightError> {
    let old_text = old.extract_text();
    let new_text = new.extract_text();
    let ops = diff_text_with(&old_text, &new_text, &options.diff);
    let stats = DiffStats::from_ops(&ops);

    tracing::debug!(
        ops = ops.len(),
        deleted = stats.deleted,
        inserted = stats.inserted,
        "computed document diff"
    );

    let highlight = &options.highlight;
    let left = project(
        old,
        &ops,
        DiffTag::Delete,
        &highlight.attribute_key,
        &highlight.removed_value,
    )?;
    let right = project(
        new,
        &ops,
        DiffTag::Insert,
        &highlight.attribute_key,
        &highlight.added_value,
    )?;

    Ok(DiffView {
        left,
        right,
        ops,
        stats,
    })
}

/// Strip both diff highlight colors from a document.
pub fn finalize<D: RichText>(doc: &D, options: &HighlightOptions) -> D {
    doc.remove_attribute(&options.attribute_key, &options.sentinels())
}

/// Clean, encode, and hand the reviewed document to the host.
///
/// `apply` receives the document id and the encoded document, and is called exactly once on
/// success. Nothing is applied if encoding fails.
pub fn commit<F>(
    document_id: &str,
    doc: &AttributedDocument,
    options: &HighlightOptions,
    apply: F,
) -> Result<(), CodecError>
where
    F: FnOnce(&str, String),
{
    let cleaned = finalize(doc, options);
    let encoded = encode_document(&cleaned)?;
    tracing::debug!(document_id, bytes = encoded.len(), "committing reviewed document");
    apply(document_id, encoded);
    Ok(())
}
