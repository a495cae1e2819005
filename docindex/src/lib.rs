//! # docindex
//!
//! **A uniform contract for document-and-vector storage backends.**
//!
//! Retrieval pipelines talk to many stores: relational databases with vector
//! extensions, embedded indexes, remote services. docindex fixes the surface
//! they all expose:
//!
//! - **Three primitives** a backend must write: upsert with vectors, delete by
//!   id, lazy get by id
//! - **Derived operations** with default bodies: eager get, filtered get and
//!   delete, async variants of everything
//! - **Batch responses** that partition the submitted ids into `succeeded`
//!   and `failed` instead of aborting the batch
//!
//! ## Quick Start
//!
//! ```rust
//! use docindex::prelude::*;
//!
//! let index = InMemoryIndex::new();
//!
//! let docs = vec![
//!     Document::new("Ownership rules").with_metadata(Metadata::new().with_field("lang", "rust")),
//!     Document::new("List comprehensions").with_metadata(Metadata::new().with_field("lang", "python")),
//! ];
//! let vectors = vec![Vector::new(&[0.9, 0.1]), Vector::new(&[0.1, 0.9])];
//! let ids = vec!["1".to_string(), "2".to_string()];
//!
//! let resp = index.upsert_by_vector(docs, vectors, Some(ids)).unwrap();
//! assert!(resp.is_complete());
//!
//! let resp = index.delete_by_ids(&["1".to_string(), "3".to_string()]).unwrap();
//! assert_eq!(resp.succeeded, vec!["1"]);
//! assert_eq!(resp.failed, vec!["3"]);
//!
//! let docs = index.get(Selection::ids(["2"])).unwrap();
//! assert_eq!(docs[0].content, "List comprehensions");
//! ```
//!
//! ## Filtered requests
//!
//! The default `get` and `delete` only honor ids. A filter alone is an
//! argument error; a filter next to ids is ignored with a `warn` log:
//!
//! ```rust
//! use docindex::prelude::*;
//!
//! let index = InMemoryIndex::new();
//! let err = index
//!     .get(Selection::filter(FilterSpec::mapping([("lang", "rust")])))
//!     .unwrap_err();
//! assert!(matches!(err, Error::MissingIds { .. }));
//! ```
//!
//! Backends that can evaluate filters override `lazy_get` / `delete` (and the
//! async counterparts) and are free of that policy.
//!
//! ## Crate Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `async` (default) | Enables `AsyncVectorIndex` and the executor adapters |
//!
//! ## Architecture
//!
//! docindex is organized into two crates:
//!
//! - **`docindex-core`** - contract, value types and the reference backend
//! - **`docindex`** - main crate that re-exports everything
//!
//! ## Error Handling
//!
//! Whole-request failures return [`Result<T>`](crate::Result) with the
//! [`Error`] enum. Per-id failures are reported in the response, never as
//! errors.
//!
//! ## Thread Safety
//!
//! - [`VectorIndex`] requires `Send + Sync`; each backend owns its locking
//! - [`InMemoryIndex`] is `Clone`; clones share storage behind an `RwLock`
//! - The async defaults never block the calling task; blocking work runs on
//!   the backend's executor

// Re-export everything from core
pub use docindex_core::*;
