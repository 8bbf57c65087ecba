//! Attributed (run-formatted) document model.
//!
//! A document is an ordered list of [`Run`]s. Each run is either a text fragment or a single
//! embedded object, optionally carrying an attribute map (`bold`, `background`, `link`, ...).
//!
//! All lengths and offsets are expressed in **character offsets** (Unicode scalar values); an
//! embed occupies exactly one position.
//!
//! Documents are kept normalized: empty text runs are dropped, adjacent text runs with equal
//! attributes are merged, and an empty attribute map is stored as `None`. This makes structural
//! equality (`==`) meaningful for documents built along different paths.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute map of a run. Keys are unique; values are arbitrary JSON.
pub type Attributes = BTreeMap<String, Value>;

/// The content of a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RunContent {
    /// A text fragment.
    Text(String),
    /// A single embedded non-text object (image, formula, ...). Opaque to this crate.
    Embed(Map<String, Value>),
}

/// A contiguous span of content with an optional attribute map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Run content.
    #[serde(rename = "insert")]
    pub content: RunContent,
    /// Run attributes. `None` when the run carries no attributes (never an empty map).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl Run {
    /// Create an unformatted text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: RunContent::Text(text.into()),
            attributes: None,
        }
    }

    /// Create an unformatted embed run.
    pub fn embed(object: Map<String, Value>) -> Self {
        Self {
            content: RunContent::Embed(object),
            attributes: None,
        }
    }

    /// Replace the attributes of this run. An empty map is stored as `None`.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = normalize_attributes(Some(attributes));
        self
    }

    /// Set a single attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(key.into(), value.into());
        self
    }

    /// Number of text positions occupied by this run.
    pub fn len(&self) -> usize {
        match &self.content {
            RunContent::Text(text) => text.chars().count(),
            RunContent::Embed(_) => 1,
        }
    }

    /// Returns `true` for an empty text run.
    pub fn is_empty(&self) -> bool {
        match &self.content {
            RunContent::Text(text) => text.is_empty(),
            RunContent::Embed(_) => false,
        }
    }

    /// Returns the text of a text run.
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            RunContent::Text(text) => Some(text),
            RunContent::Embed(_) => None,
        }
    }

    /// Look up a single attribute value.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.as_ref()?.get(key)
    }
}

pub(crate) fn normalize_attributes(attributes: Option<Attributes>) -> Option<Attributes> {
    attributes.filter(|map| !map.is_empty())
}

/// An ordered sequence of runs representing one version of rich text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDocument", into = "RawDocument")]
pub struct AttributedDocument {
    runs: Vec<Run>,
}

/// Wire shape of a document: `{"ops": [{"insert": ..., "attributes": ...}, ...]}`.
#[derive(Serialize, Deserialize)]
pub(crate) struct RawDocument {
    pub(crate) ops: Vec<Run>,
}

impl From<RawDocument> for AttributedDocument {
    fn from(raw: RawDocument) -> Self {
        Self::from_runs(raw.ops)
    }
}

impl From<AttributedDocument> for RawDocument {
    fn from(doc: AttributedDocument) -> Self {
        Self { ops: doc.runs }
    }
}

impl AttributedDocument {
    /// Create a document with no runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// The defined "empty document" value used as a fallback for unusable input: a single
    /// unformatted line break, which is the minimal content a rich-text editor accepts.
    pub fn empty_document() -> Self {
        Self::from_runs([Run::text("\n")])
    }

    /// Build a normalized document from runs.
    pub fn from_runs(runs: impl IntoIterator<Item = Run>) -> Self {
        let mut doc = Self::new();
        for run in runs {
            doc.push(run);
        }
        doc
    }

    /// Build a document holding a single unformatted text run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::from_runs([Run::text(text)])
    }

    /// Append a run, keeping the document normalized.
    pub fn push(&mut self, mut run: Run) {
        if run.is_empty() {
            return;
        }
        run.attributes = normalize_attributes(run.attributes.take());

        if let Some(last) = self.runs.last_mut()
            && last.attributes == run.attributes
            && let (RunContent::Text(prev), RunContent::Text(next)) =
                (&mut last.content, &run.content)
        {
            prev.push_str(next);
            return;
        }

        self.runs.push(run);
    }

    /// The runs of this document.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Consume the document, returning its runs.
    pub fn into_runs(self) -> Vec<Run> {
        self.runs
    }

    /// Number of text positions in the document.
    pub fn len(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    /// Returns `true` if the document has no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl FromIterator<Run> for AttributedDocument {
    fn from_iter<I: IntoIterator<Item = Run>>(iter: I) -> Self {
        Self::from_runs(iter)
    }
}
