//! The document value stored in an index.

use serde::{Deserialize, Serialize};

use crate::metadata::Metadata;
use crate::vector::DocumentId;

/// A unit of content with optional identity and metadata.
///
/// Documents are plain values: the contract passes them through unchanged and
/// backends return them as stored.
///
/// # Example
///
/// ```
/// use docindex_core::{Document, Metadata};
///
/// let doc = Document::new("Rust has no garbage collector.")
///     .with_id("faq-7")
///     .with_metadata(Metadata::new().with_field("topic", "memory"));
///
/// assert_eq!(doc.id.as_deref(), Some("faq-7"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier, if the caller or backend assigned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    /// Text content.
    pub content: String,
    /// Metadata used by structured filters.
    #[serde(default)]
    pub metadata: Metadata,
}

impl Document {
    /// Creates a document without id or metadata.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            metadata: Metadata::new(),
        }
    }

    /// Sets the id. Chainable.
    pub fn with_id(mut self, id: impl Into<DocumentId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Replaces the metadata. Chainable.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}
