//! Highlight and review configuration.

use serde_json::Value;

use crate::diff::DiffOptions;

/// Background color marking added text (light green).
pub const DEFAULT_ADDED_COLOR: &str = "#e6ffec";
/// Background color marking removed text (light red).
pub const DEFAULT_REMOVED_COLOR: &str = "#ffe6e6";
/// Attribute used for diff highlights.
pub const DEFAULT_HIGHLIGHT_KEY: &str = "background";

/// How diff highlights are expressed as run attributes.
///
/// `added_value` and `removed_value` double as the sentinel values recognized when stripping
/// highlights, so they should not collide with formatting users apply themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Attribute key carrying the highlight.
    pub attribute_key: String,
    /// Value set on inserted text in the new document.
    pub added_value: Value,
    /// Value set on deleted text in the old document.
    pub removed_value: Value,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            attribute_key: DEFAULT_HIGHLIGHT_KEY.to_string(),
            added_value: Value::from(DEFAULT_ADDED_COLOR),
            removed_value: Value::from(DEFAULT_REMOVED_COLOR),
        }
    }
}

impl HighlightOptions {
    /// Values recognized as diff highlights when cleaning.
    pub fn sentinels(&self) -> [Value; 2] {
        [self.added_value.clone(), self.removed_value.clone()]
    }
}

/// Options for a full review pass ([`crate::review::diff_documents`]).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewOptions {
    /// Edit-script options.
    pub diff: DiffOptions,
    /// Highlight attribute options.
    pub highlight: HighlightOptions,
}
