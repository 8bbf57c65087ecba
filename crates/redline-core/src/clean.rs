//! Highlight removal.

use serde_json::Value;

use crate::document::{AttributedDocument, Run, normalize_attributes};

/// Remove `key` from every run whose value for it is one of `sentinels`.
///
/// Runs whose attribute map becomes empty end up with no attribute map at all, and neighbouring
/// runs that become identically formatted are merged. Values of `key` outside `sentinels` (a
/// user-chosen background color, say) are left alone. Idempotent.
pub fn clean_highlight(
    doc: &AttributedDocument,
    key: &str,
    sentinels: &[Value],
) -> AttributedDocument {
    doc.runs()
        .iter()
        .map(|run| {
            let attributes = run.attributes.clone().map(|mut attributes| {
                if attributes
                    .get(key)
                    .is_some_and(|value| sentinels.contains(value))
                {
                    attributes.remove(key);
                }
                attributes
            });
            Run {
                content: run.content.clone(),
                attributes: normalize_attributes(attributes),
            }
        })
        .collect()
}
