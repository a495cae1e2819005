//! The index contract and its reference backend.
//!
//! [`VectorIndex`] has three primitives every backend writes:
//! [`upsert_by_vector`](VectorIndex::upsert_by_vector),
//! [`delete_by_ids`](VectorIndex::delete_by_ids) and
//! [`lazy_get_by_ids`](VectorIndex::lazy_get_by_ids). Everything else has a
//! default body built on those three and may be overridden by backends with
//! a native implementation.
//!
//! Default filtered operations only honor identifiers. Without ids they fail
//! with [`Error::MissingIds`]; with ids plus a filter or options they log an
//! [`Advisory`](crate::Advisory) and proceed on the ids alone.

pub mod memory;
#[cfg(feature = "async")]
pub mod nonblocking;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::response::{DeleteResponse, UpsertResponse};
use crate::selection::{ids_only, Selection};
use crate::vector::{DocumentId, Vector};

/// Lazy sequence of documents returned by get operations.
pub type DocumentIter<'a> = Box<dyn Iterator<Item = Document> + Send + 'a>;

/// Interface to store documents with their vectors and fetch them back.
///
/// Per-item problems (unknown id, malformed vector) belong in the `failed`
/// list of a response. `Err` is reserved for requests that are malformed as a
/// whole or that the backend cannot serve at all.
///
/// # Example
///
/// ```
/// use docindex_core::{Document, InMemoryIndex, Selection, Vector, VectorIndex};
///
/// let index = InMemoryIndex::new();
/// let docs = vec![Document::new("alpha"), Document::new("beta")];
/// let vectors = vec![Vector::new(&[1.0, 0.0]), Vector::new(&[0.0, 1.0])];
/// let ids = vec!["a".to_string(), "b".to_string()];
///
/// let resp = index.upsert_by_vector(docs, vectors, Some(ids)).unwrap();
/// assert_eq!(resp.succeeded, vec!["a", "b"]);
///
/// let found = index.get(Selection::ids(["b", "a"])).unwrap();
/// assert_eq!(found[0].content, "beta");
/// ```
pub trait VectorIndex: Send + Sync {
    /// Inserts or overwrites documents with precomputed vectors.
    ///
    /// `documents` and `vectors` pair up by position. When `ids` is `None` the
    /// backend assigns identifiers.
    fn upsert_by_vector(
        &self,
        documents: Vec<Document>,
        vectors: Vec<Vector>,
        ids: Option<Vec<DocumentId>>,
    ) -> Result<UpsertResponse>;

    /// Removes documents by id. Unknown ids are reported as failed.
    fn delete_by_ids(&self, ids: &[DocumentId]) -> Result<DeleteResponse>;

    /// Lazily yields documents in the order their ids were requested.
    ///
    /// Each call produces a fresh iterator. What happens to ids that are not
    /// found is up to the backend.
    fn lazy_get_by_ids(&self, ids: Vec<DocumentId>) -> Result<DocumentIter<'_>>;

    /// Collects [`lazy_get_by_ids`](Self::lazy_get_by_ids).
    fn get_by_ids(&self, ids: &[DocumentId]) -> Result<Vec<Document>> {
        Ok(self.lazy_get_by_ids(ids.to_vec())?.collect())
    }

    /// Deletes the selected documents.
    ///
    /// Override this if the backend can delete by filter.
    fn delete(&self, selection: Selection) -> Result<DeleteResponse> {
        let ids = ids_only(selection, "delete")?;
        self.delete_by_ids(&ids)
    }

    /// Lazily gets the selected documents.
    ///
    /// Override this if the backend can get by filter.
    fn lazy_get(&self, selection: Selection) -> Result<DocumentIter<'_>> {
        let ids = ids_only(selection, "get")?;
        self.lazy_get_by_ids(ids)
    }

    /// Collects [`lazy_get`](Self::lazy_get).
    fn get(&self, selection: Selection) -> Result<Vec<Document>> {
        Ok(self.lazy_get(selection)?.collect())
    }
}

/// Rejects upserts whose positional inputs disagree in length.
///
/// Backends call this before touching storage so that a malformed batch
/// mutates nothing.
pub fn check_upsert_lengths(
    documents: &[Document],
    vectors: &[Vector],
    ids: Option<&[DocumentId]>,
) -> Result<()> {
    if vectors.len() != documents.len() {
        return Err(Error::LengthMismatch {
            what: "vectors",
            expected: documents.len(),
            got: vectors.len(),
        });
    }
    if let Some(ids) = ids {
        if ids.len() != documents.len() {
            return Err(Error::LengthMismatch {
                what: "ids",
                expected: documents.len(),
                got: ids.len(),
            });
        }
    }
    Ok(())
}
