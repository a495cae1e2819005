//! # docindex Core
//!
//! Core library for docindex: the contract a document-and-vector storage
//! backend implements to take part in a retrieval pipeline.
//!
//! A backend writes three primitives; callers get the full blocking and
//! non-blocking API through default method bodies.
//!
//! ## Crate Features
//!
//! - `async` (default) - Enables [`AsyncVectorIndex`] and the [`executor`] module
//!
//! ## Core Types
//!
//! ### Contract
//!
//! - [`VectorIndex`] - Blocking operations: three primitives plus derived get/delete
//! - [`AsyncVectorIndex`] - Non-blocking variants backed by an injected [`Executor`]
//! - [`InMemoryIndex`] - Reference backend relying on every default
//!
//! ### Requests and responses
//!
//! - [`Selection`] - Ids, filter and extra options of a filtered get or delete
//! - [`UpsertResponse`] / [`DeleteResponse`] - Partition of submitted ids into succeeded/failed
//! - [`Advisory`] - Non-fatal notice that arguments were ignored
//!
//! ### Types
//!
//! - [`Document`] - Content with optional id and [`Metadata`]
//! - [`Vector`] - Embedding supplied at insertion time
//! - [`Filter`] / [`FilterSpec`] - Structured predicates over metadata

pub mod document;
pub mod error;
#[cfg(feature = "async")]
pub mod executor;
pub mod filter;
pub mod index;
pub mod metadata;
pub mod response;
pub mod selection;
pub mod vector;

// Re-exports for convenient access
pub use document::Document;
pub use error::{Error, Result};
#[cfg(feature = "async")]
pub use executor::{run_blocking, BlockingTask, Executor, ThreadExecutor, TokioExecutor};
pub use filter::{FieldFilter, Filter, FilterCondition, FilterSpec};
pub use index::memory::{IdStrategy, InMemoryConfig, InMemoryIndex};
#[cfg(feature = "async")]
pub use index::nonblocking::{AsyncVectorIndex, DocumentStream};
pub use index::{check_upsert_lengths, DocumentIter, VectorIndex};
pub use metadata::Metadata;
pub use response::{DeleteResponse, UpsertResponse};
pub use selection::{Advisory, Selection};
pub use vector::{DocumentId, Vector};

/// Re-export commonly used types for convenience.
///
/// # Example
///
/// ```rust
/// use docindex_core::prelude::*;
///
/// let index = InMemoryIndex::new();
/// let resp = index
///     .upsert_by_vector(vec![Document::new("text")], vec![Vector::new(&[1.0])], None)
///     .unwrap();
/// assert!(resp.is_complete());
/// ```
pub mod prelude {
    #[cfg(feature = "async")]
    pub use crate::{AsyncVectorIndex, Executor, ThreadExecutor, TokioExecutor};
    pub use crate::{
        DeleteResponse, Document, DocumentId, Error, Filter, FilterSpec, IdStrategy,
        InMemoryConfig, InMemoryIndex, Metadata, Result, Selection, UpsertResponse, Vector,
        VectorIndex,
    };
}
