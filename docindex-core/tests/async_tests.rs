//! Default async adapters over the blocking primitives.

#![cfg(feature = "async")]

mod common;

use std::sync::Arc;

use common::{capture_warnings, contents, ids, two_doc_index};
use docindex_core::prelude::*;
use futures::stream::{self, StreamExt};

fn id_stream(raw: &[&str]) -> impl futures::Stream<Item = DocumentId> + Send + 'static {
    stream::iter(ids(raw))
}

#[tokio::test]
async fn test_aget_by_ids_matches_sync() {
    let index = two_doc_index();

    let sync = index.get_by_ids(&ids(&["2", "missing", "1"])).unwrap();
    let asynchronous = index
        .aget_by_ids(id_stream(&["2", "missing", "1"]))
        .await
        .unwrap();

    assert_eq!(asynchronous, sync);
    assert_eq!(contents(&asynchronous), vec!["doc two", "doc one"]);
}

#[tokio::test]
async fn test_alazy_get_by_ids_streams_in_order() {
    let index = two_doc_index();

    let mut docs = index.alazy_get_by_ids(id_stream(&["2", "1"])).await.unwrap();
    assert_eq!(docs.next().await.unwrap().content, "doc two");
    assert_eq!(docs.next().await.unwrap().content, "doc one");
    assert!(docs.next().await.is_none());
}

#[tokio::test]
async fn test_async_upsert_and_delete() {
    let index = InMemoryIndex::new();

    let resp = index
        .aupsert_by_vector(
            vec![Document::new("a"), Document::new("b")],
            vec![Vector::new(&[1.0]), Vector::new(&[2.0])],
            Some(ids(&["a", "b"])),
        )
        .await
        .unwrap();
    assert!(resp.is_complete());

    let resp = index.adelete_by_ids(id_stream(&["a", "zzz"])).await.unwrap();
    assert_eq!(resp.succeeded, ids(&["a"]));
    assert_eq!(resp.failed, ids(&["zzz"]));
    assert_eq!(index.ids(), ids(&["b"]));
}

#[tokio::test]
async fn test_async_upsert_propagates_argument_errors() {
    let index = InMemoryIndex::new();
    let err = index
        .aupsert_by_vector(vec![Document::new("a")], vec![], None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { .. }));
}

#[tokio::test]
async fn test_aget_default_policy() {
    let index = two_doc_index();

    let err = index
        .aget(Selection::filter(FilterSpec::mapping([("k", "v")])))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingIds { operation: "get" }));

    let (logs, _guard) = capture_warnings();
    let filtered = index
        .aget(Selection::ids(["1"]).with_filter(FilterSpec::mapping([("k", "v")])))
        .await
        .unwrap();
    assert_eq!(filtered, index.get(Selection::ids(["1"])).unwrap());
    assert!(logs.contents().contains("only get by ids is supported"));
}

#[tokio::test]
async fn test_adelete_default_policy() {
    let index = two_doc_index();

    let err = index
        .adelete(Selection::filter(Filter::field("n").exists()))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingIds { operation: "delete" }));

    let resp = index.adelete(Selection::ids(["1", "3"])).await.unwrap();
    assert_eq!(resp, DeleteResponse::from_parts(ids(&["1"]), ids(&["3"])));
}

#[tokio::test]
async fn test_alazy_get_yields_selection() {
    let index = two_doc_index();
    let docs: Vec<Document> = index
        .alazy_get(Selection::ids(["2"]))
        .await
        .unwrap()
        .collect()
        .await;
    assert_eq!(contents(&docs), vec!["doc two"]);
}

#[tokio::test]
async fn test_adelete_with_ids_and_filter_warns_and_deletes_by_ids() {
    let index = two_doc_index();
    let (logs, _guard) = capture_warnings();

    let resp = index
        .adelete(
            Selection::ids(["1", "9"])
                .with_filter(FilterSpec::mapping([("lang", "fr")]))
                .with_option("cascade", true),
        )
        .await
        .unwrap();
    assert_eq!(resp, DeleteResponse::from_parts(ids(&["1"]), ids(&["9"])));
    assert_eq!(index.ids(), ids(&["2"]));

    let output = logs.contents();
    assert_eq!(output.matches("only delete by ids is supported").count(), 1);
    assert!(output.contains(r#""filters":{"lang":"fr"}"#));
    assert!(output.contains("cascade"));
}

#[tokio::test]
async fn test_alazy_get_with_ids_and_filter_warns_and_ignores_filter() {
    let index = two_doc_index();
    let (logs, _guard) = capture_warnings();

    let docs: Vec<Document> = index
        .alazy_get(Selection::ids(["2", "1"]).with_filter(Filter::field("lang").eq("fr")))
        .await
        .unwrap()
        .collect()
        .await;
    assert_eq!(contents(&docs), vec!["doc two", "doc one"]);

    let output = logs.contents();
    assert_eq!(output.matches("only get by ids is supported").count(), 1);
    assert!(output.contains(r#"{"filters":{"Eq":["lang","fr"]}}"#));
}

#[tokio::test]
async fn test_injected_thread_executor_is_used() {
    let executor = Arc::new(ThreadExecutor::new("index-io"));
    let index = two_doc_index().with_executor(executor.clone());

    let docs = index.aget_by_ids(id_stream(&["1"])).await.unwrap();
    assert_eq!(contents(&docs), vec!["doc one"]);
    index.adelete_by_ids(id_stream(&["1"])).await.unwrap();

    assert_eq!(executor.spawned(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_async_calls_share_storage() {
    let index = InMemoryIndex::new();

    let mut handles = Vec::new();
    for i in 0..32 {
        let index = index.clone();
        handles.push(tokio::spawn(async move {
            index
                .aupsert_by_vector(
                    vec![Document::new(format!("doc {}", i))],
                    vec![Vector::new(&[i as f32])],
                    Some(vec![i.to_string()]),
                )
                .await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_complete());
    }

    assert_eq!(index.len(), 32);
    let docs = index.aget_by_ids(id_stream(&["31", "0"])).await.unwrap();
    assert_eq!(contents(&docs), vec!["doc 31", "doc 0"]);
}

#[test]
fn test_async_defaults_need_a_runtime_or_executor() {
    let index = two_doc_index().with_executor(Arc::new(ThreadExecutor::default()));
    let docs = futures::executor::block_on(index.aget_by_ids(id_stream(&["2"]))).unwrap();
    assert_eq!(contents(&docs), vec!["doc two"]);

    let index = two_doc_index();
    let err = futures::executor::block_on(index.aget_by_ids(id_stream(&["2"]))).unwrap_err();
    assert!(matches!(err, Error::Executor(_)));
}
