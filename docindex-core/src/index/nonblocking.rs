//! Non-blocking half of the index contract.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, Stream, StreamExt};

use super::VectorIndex;
use crate::document::Document;
use crate::error::Result;
use crate::executor::{run_blocking, Executor, TokioExecutor};
use crate::response::{DeleteResponse, UpsertResponse};
use crate::selection::{ids_only, Selection};
use crate::vector::{DocumentId, Vector};

/// Async stream of documents returned by the async get operations.
pub type DocumentStream = BoxStream<'static, Document>;

/// Async variants of every [`VectorIndex`] operation.
///
/// All methods have defaults that run the blocking operation on
/// [`executor`](Self::executor). Implementors are cheap handles over shared
/// state: the defaults move a clone of `self` onto the executor. Backends with
/// native async I/O override the methods instead.
///
/// # Example
///
/// ```
/// use docindex_core::{AsyncVectorIndex, Document, InMemoryIndex, Vector};
/// use futures::stream;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> docindex_core::Result<()> {
/// let index = InMemoryIndex::new();
/// index
///     .aupsert_by_vector(
///         vec![Document::new("hello")],
///         vec![Vector::new(&[0.5, 0.5])],
///         Some(vec!["greeting".to_string()]),
///     )
///     .await?;
///
/// let docs = index.aget_by_ids(stream::iter(vec!["greeting".to_string()])).await?;
/// assert_eq!(docs[0].content, "hello");
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait AsyncVectorIndex: VectorIndex + Clone + 'static {
    /// Executor used by the default method bodies.
    fn executor(&self) -> Arc<dyn Executor> {
        Arc::new(TokioExecutor::current())
    }

    async fn aupsert_by_vector(
        &self,
        documents: Vec<Document>,
        vectors: Vec<Vector>,
        ids: Option<Vec<DocumentId>>,
    ) -> Result<UpsertResponse> {
        let this = self.clone();
        let executor = self.executor();
        run_blocking(&*executor, move || {
            this.upsert_by_vector(documents, vectors, ids)
        })
        .await?
    }

    async fn adelete_by_ids<S>(&self, ids: S) -> Result<DeleteResponse>
    where
        S: Stream<Item = DocumentId> + Send,
    {
        let ids: Vec<DocumentId> = ids.collect().await;
        let this = self.clone();
        let executor = self.executor();
        run_blocking(&*executor, move || this.delete_by_ids(&ids)).await?
    }

    /// Collects `ids`, runs [`VectorIndex::lazy_get_by_ids`] to completion on
    /// the executor and streams the documents back.
    async fn alazy_get_by_ids<S>(&self, ids: S) -> Result<DocumentStream>
    where
        S: Stream<Item = DocumentId> + Send,
    {
        let ids: Vec<DocumentId> = ids.collect().await;
        let this = self.clone();
        let executor = self.executor();
        let docs = run_blocking(&*executor, move || {
            this.lazy_get_by_ids(ids)
                .map(|docs| docs.collect::<Vec<_>>())
        })
        .await??;
        Ok(stream::iter(docs).boxed())
    }

    async fn aget_by_ids<S>(&self, ids: S) -> Result<Vec<Document>>
    where
        S: Stream<Item = DocumentId> + Send,
    {
        Ok(self.alazy_get_by_ids(ids).await?.collect().await)
    }

    /// Async counterpart of [`VectorIndex::delete`], with the same
    /// identifier-only default policy.
    async fn adelete(&self, selection: Selection) -> Result<DeleteResponse> {
        let ids = ids_only(selection, "delete")?;
        self.adelete_by_ids(stream::iter(ids)).await
    }

    /// Async counterpart of [`VectorIndex::lazy_get`].
    async fn alazy_get(&self, selection: Selection) -> Result<DocumentStream> {
        let ids = ids_only(selection, "get")?;
        self.alazy_get_by_ids(stream::iter(ids)).await
    }

    async fn aget(&self, selection: Selection) -> Result<Vec<Document>> {
        Ok(self.alazy_get(selection).await?.collect().await)
    }
}
