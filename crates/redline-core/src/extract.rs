//! Plain-text extraction.
//!
//! Flattens an [`AttributedDocument`] into a `String` whose `char` offsets correspond 1:1 with the
//! document's text positions. Text runs contribute their characters verbatim; every embed
//! contributes exactly one [`EMBED_PLACEHOLDER`].

use crate::document::{AttributedDocument, RunContent};

/// Placeholder codepoint standing in for one embedded object.
///
/// U+0000 never appears in rich-text content produced by editors, so it cannot collide with real
/// text in the diff.
pub const EMBED_PLACEHOLDER: char = '\u{0}';

/// Extract the plain text of a document.
pub fn extract_text(doc: &AttributedDocument) -> String {
    let mut out = String::with_capacity(doc.runs().len() * 16);
    for run in doc.runs() {
        match &run.content {
            RunContent::Text(text) => out.push_str(text),
            RunContent::Embed(_) => out.push(EMBED_PLACEHOLDER),
        }
    }
    out
}
