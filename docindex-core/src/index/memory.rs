//! Reference in-memory backend.
//!
//! `InMemoryIndex` implements only the three primitives and relies on the
//! contract defaults for everything else, so it doubles as a test double for
//! the default policy. Ids that are not found are skipped by
//! `lazy_get_by_ids`.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

#[cfg(feature = "async")]
use super::nonblocking::AsyncVectorIndex;
use super::{check_upsert_lengths, DocumentIter, VectorIndex};
use crate::document::Document;
use crate::error::Result;
#[cfg(feature = "async")]
use crate::executor::{Executor, TokioExecutor};
use crate::response::{DeleteResponse, UpsertResponse};
use crate::vector::{DocumentId, Vector};

/// How the backend names documents that arrive without an id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Random UUID v4 strings.
    #[default]
    Uuid,
    /// `"1"`, `"2"`, ... skipping numbers already used as explicit ids.
    Sequential,
}

/// Configuration for an in-memory index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfig {
    /// Required vector dimension. `None` accepts any non-empty vector.
    pub dimension: Option<usize>,
    /// Id assignment for documents without one.
    pub id_strategy: IdStrategy,
}

impl InMemoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires every vector to have `dimension` components. Chainable.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Sets the id strategy. Chainable.
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }
}

#[derive(Debug, Clone)]
struct StoredEntry {
    document: Document,
    vector: Vector,
}

#[derive(Debug)]
struct State {
    entries: HashMap<DocumentId, StoredEntry>,
    next_seq: u64,
}

impl State {
    /// `reserved` holds ids claimed elsewhere in the same batch.
    fn generate_id(
        &mut self,
        strategy: IdStrategy,
        reserved: &HashSet<DocumentId>,
    ) -> DocumentId {
        match strategy {
            IdStrategy::Uuid => uuid::Uuid::new_v4().to_string(),
            IdStrategy::Sequential => loop {
                let id = self.next_seq.to_string();
                self.next_seq += 1;
                if !self.entries.contains_key(&id) && !reserved.contains(&id) {
                    break id;
                }
            },
        }
    }

    // keep generated sequence ids clear of explicit numeric ids
    fn observe(&mut self, id: &str) {
        if let Ok(n) = id.parse::<u64>() {
            self.next_seq = self.next_seq.max(n.saturating_add(1));
        }
    }
}

/// Why a single upsert item was rejected.
#[derive(Debug)]
enum Rejection {
    EmptyId,
    EmptyVector,
    Dimension { expected: usize, got: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::EmptyId => f.write_str("empty id"),
            Rejection::EmptyVector => f.write_str("empty vector"),
            Rejection::Dimension { expected, got } => {
                write!(f, "dimension mismatch: expected {}, got {}", expected, got)
            }
        }
    }
}

/// Thread-safe in-memory document index.
///
/// Cloning is cheap and clones share storage, so a clone can be moved onto
/// an executor by the async defaults.
///
/// # Ids
///
/// Each upserted document is stored under the first of: its entry in the
/// explicit `ids`, its own [`Document::id`], a generated id. The stored
/// document carries that id, so an explicit id that differs from
/// `document.id` replaces it and a later get returns the document with the
/// explicit id. Documents come back unchanged only when the two agree or
/// `ids` is `None`.
///
/// # Example
///
/// ```
/// use docindex_core::{Document, InMemoryConfig, InMemoryIndex, Vector, VectorIndex};
///
/// let index = InMemoryIndex::with_config(InMemoryConfig::new().with_dimension(2));
/// let resp = index
///     .upsert_by_vector(
///         vec![Document::new("ok"), Document::new("bad")],
///         vec![Vector::new(&[1.0, 0.0]), Vector::new(&[1.0, 0.0, 0.0])],
///         Some(vec!["1".to_string(), "2".to_string()]),
///     )
///     .unwrap();
///
/// assert_eq!(resp.succeeded, vec!["1"]);
/// assert_eq!(resp.failed, vec!["2"]);
/// ```
#[derive(Clone)]
pub struct InMemoryIndex {
    state: Arc<RwLock<State>>,
    config: InMemoryConfig,
    #[cfg(feature = "async")]
    executor: Arc<dyn Executor>,
}

impl InMemoryIndex {
    /// Creates an empty index with the default configuration.
    pub fn new() -> Self {
        Self::with_config(InMemoryConfig::default())
    }

    pub fn with_config(config: InMemoryConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                entries: HashMap::new(),
                next_seq: 1,
            })),
            config,
            #[cfg(feature = "async")]
            executor: Arc::new(TokioExecutor::current()),
        }
    }

    /// Replaces the executor used by the async defaults. Chainable.
    #[cfg(feature = "async")]
    pub fn with_executor(mut self, executor: Arc<dyn Executor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn config(&self) -> &InMemoryConfig {
        &self.config
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.state.read().entries.contains_key(id)
    }

    /// Returns the vector stored with `id`.
    pub fn vector(&self, id: &str) -> Option<Vector> {
        self.state.read().entries.get(id).map(|e| e.vector.clone())
    }

    /// Returns all stored ids, sorted.
    pub fn ids(&self) -> Vec<DocumentId> {
        let mut ids: Vec<_> = self.state.read().entries.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn validate(&self, id: &str, vector: &Vector) -> std::result::Result<(), Rejection> {
        if id.is_empty() {
            return Err(Rejection::EmptyId);
        }
        if vector.is_empty() {
            return Err(Rejection::EmptyVector);
        }
        match self.config.dimension {
            Some(expected) if expected != vector.dimension() => Err(Rejection::Dimension {
                expected,
                got: vector.dimension(),
            }),
            _ => Ok(()),
        }
    }
}

impl Default for InMemoryIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryIndex")
            .field("len", &self.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl VectorIndex for InMemoryIndex {
    fn upsert_by_vector(
        &self,
        documents: Vec<Document>,
        vectors: Vec<Vector>,
        ids: Option<Vec<DocumentId>>,
    ) -> Result<UpsertResponse> {
        check_upsert_lengths(&documents, &vectors, ids.as_deref())?;

        let mut response = UpsertResponse::new();
        let mut state = self.state.write();
        let reserved: HashSet<DocumentId> = match &ids {
            Some(ids) => ids.iter().cloned().collect(),
            None => documents.iter().filter_map(|d| d.id.clone()).collect(),
        };
        for id in &reserved {
            state.observe(id);
        }
        let mut explicit = ids.map(Vec::into_iter);

        for (document, vector) in documents.into_iter().zip(vectors) {
            // explicit ids win over the document's own id
            let id = match explicit.as_mut().and_then(Iterator::next) {
                Some(id) => id,
                None => match document.id.clone() {
                    Some(id) => id,
                    None => state.generate_id(self.config.id_strategy, &reserved),
                },
            };

            if let Err(reason) = self.validate(&id, &vector) {
                tracing::debug!(id = %id, %reason, "upsert rejected");
                response.fail(id);
                continue;
            }

            state.observe(&id);
            let document = Document {
                id: Some(id.clone()),
                ..document
            };
            state
                .entries
                .insert(id.clone(), StoredEntry { document, vector });
            response.succeed(id);
        }

        tracing::debug!(
            succeeded = response.succeeded.len(),
            failed = response.failed.len(),
            "upsert_by_vector"
        );
        Ok(response)
    }

    fn delete_by_ids(&self, ids: &[DocumentId]) -> Result<DeleteResponse> {
        let mut response = DeleteResponse::new();
        let mut state = self.state.write();

        for id in ids {
            if state.entries.remove(id).is_some() {
                response.succeed(id.clone());
            } else {
                response.fail(id.clone());
            }
        }

        tracing::debug!(
            succeeded = response.succeeded.len(),
            failed = response.failed.len(),
            "delete_by_ids"
        );
        Ok(response)
    }

    fn lazy_get_by_ids(&self, ids: Vec<DocumentId>) -> Result<DocumentIter<'_>> {
        // one short read lock per item, so concurrent writers interleave
        Ok(Box::new(ids.into_iter().filter_map(move |id| {
            self.state
                .read()
                .entries
                .get(&id)
                .map(|entry| entry.document.clone())
        })))
    }
}

#[cfg(feature = "async")]
impl AsyncVectorIndex for InMemoryIndex {
    fn executor(&self) -> Arc<dyn Executor> {
        Arc::clone(&self.executor)
    }
}
