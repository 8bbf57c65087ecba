//! Plain-text edit scripts.
//!
//! [`diff_text`] computes an ordered list of [`DiffOp`]s between two strings using the Myers
//! algorithm from `similar`. The script satisfies a round-trip invariant:
//!
//! - concatenating `Equal` and `Delete` payloads reproduces the old text,
//! - concatenating `Equal` and `Insert` payloads reproduces the new text.
//!
//! Adjacent ops never share a tag, payloads are never empty, and inside a changed region the
//! `Delete` op always precedes the `Insert` op.

use similar::{Algorithm, ChangeTag, TextDiff};

/// Tag of a [`DiffOp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffTag {
    /// Text present in both versions.
    Equal,
    /// Text present only in the old version.
    Delete,
    /// Text present only in the new version.
    Insert,
}

impl From<ChangeTag> for DiffTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => Self::Equal,
            ChangeTag::Delete => Self::Delete,
            ChangeTag::Insert => Self::Insert,
        }
    }
}

/// A single edit-script operation over plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOp {
    /// Operation tag.
    pub tag: DiffTag,
    /// Text covered by this operation.
    pub text: String,
}

impl DiffOp {
    /// Create an op.
    pub fn new(tag: DiffTag, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }

    /// Shorthand for an `Equal` op.
    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(DiffTag::Equal, text)
    }

    /// Shorthand for a `Delete` op.
    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(DiffTag::Delete, text)
    }

    /// Shorthand for an `Insert` op.
    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(DiffTag::Insert, text)
    }

    /// Payload length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Tokenization used by the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffGranularity {
    /// Diff individual characters.
    #[default]
    Char,
    /// Diff whitespace-separated words (whitespace runs are tokens too).
    Word,
    /// Diff lines (including their line terminator).
    Line,
}

/// Options that control how the edit script is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffOptions {
    /// Token granularity. Payloads are always concatenations of whole tokens, so offsets derived
    /// from the script stay in character space regardless of this setting.
    pub granularity: DiffGranularity,
}

/// Compute a character-level edit script from `old` to `new`.
pub fn diff_text(old: &str, new: &str) -> Vec<DiffOp> {
    diff_text_with(old, new, &DiffOptions::default())
}

/// Compute an edit script from `old` to `new` with explicit options.
pub fn diff_text_with(old: &str, new: &str, options: &DiffOptions) -> Vec<DiffOp> {
    let mut config = TextDiff::configure();
    config.algorithm(Algorithm::Myers);
    let diff = match options.granularity {
        DiffGranularity::Char => config.diff_chars(old, new),
        DiffGranularity::Word => config.diff_words(old, new),
        DiffGranularity::Line => config.diff_lines(old, new),
    };

    let mut builder = ScriptBuilder::default();
    for change in diff.iter_all_changes() {
        builder.push(change.tag().into(), change.value());
    }
    builder.finish()
}

/// Coalesces token-level changes into whole ops.
///
/// Deletions and insertions between two equal stretches are buffered separately and flushed as
/// one `Delete` followed by one `Insert`.
#[derive(Default)]
struct ScriptBuilder {
    ops: Vec<DiffOp>,
    equal: String,
    deleted: String,
    inserted: String,
}

impl ScriptBuilder {
    fn push(&mut self, tag: DiffTag, value: &str) {
        match tag {
            DiffTag::Equal => {
                self.flush_changes();
                self.equal.push_str(value);
            }
            DiffTag::Delete => {
                self.flush_equal();
                self.deleted.push_str(value);
            }
            DiffTag::Insert => {
                self.flush_equal();
                self.inserted.push_str(value);
            }
        }
    }

    fn flush_equal(&mut self) {
        if !self.equal.is_empty() {
            self.ops.push(DiffOp::equal(std::mem::take(&mut self.equal)));
        }
    }

    fn flush_changes(&mut self) {
        if !self.deleted.is_empty() {
            self.ops.push(DiffOp::delete(std::mem::take(&mut self.deleted)));
        }
        if !self.inserted.is_empty() {
            self.ops
                .push(DiffOp::insert(std::mem::take(&mut self.inserted)));
        }
    }

    fn finish(mut self) -> Vec<DiffOp> {
        self.flush_equal();
        self.flush_changes();
        self.ops
    }
}

/// Reconstruct the old text from an edit script.
pub fn reconstruct_old(ops: &[DiffOp]) -> String {
    ops.iter()
        .filter(|op| op.tag != DiffTag::Insert)
        .map(|op| op.text.as_str())
        .collect()
}

/// Reconstruct the new text from an edit script.
pub fn reconstruct_new(ops: &[DiffOp]) -> String {
    ops.iter()
        .filter(|op| op.tag != DiffTag::Delete)
        .map(|op| op.text.as_str())
        .collect()
}

/// Summary statistics for an edit script, in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Characters present in both versions.
    pub unchanged: usize,
    /// Characters removed from the old version.
    pub deleted: usize,
    /// Characters added in the new version.
    pub inserted: usize,
}

impl DiffStats {
    /// Compute statistics for an edit script.
    pub fn from_ops(ops: &[DiffOp]) -> Self {
        let mut stats = Self::default();
        for op in ops {
            let len = op.char_len();
            match op.tag {
                DiffTag::Equal => stats.unchanged += len,
                DiffTag::Delete => stats.deleted += len,
                DiffTag::Insert => stats.inserted += len,
            }
        }
        stats
    }

    /// Returns `true` if the script contains no changes.
    pub fn is_unchanged(&self) -> bool {
        self.deleted == 0 && self.inserted == 0
    }
}
