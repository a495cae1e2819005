use std::collections::HashSet;

use docindex_core::{Document, DocumentId, InMemoryConfig, InMemoryIndex, Vector, VectorIndex};
use proptest::prelude::*;

// small pool so that duplicates and unknown ids show up often
fn id_strategy() -> impl Strategy<Value = DocumentId> {
    prop_oneof![
        Just(String::new()),
        "[a-f]".prop_map(String::from),
    ]
}

fn batch_strategy() -> impl Strategy<Value = Vec<(DocumentId, usize)>> {
    proptest::collection::vec((id_strategy(), 1usize..4), 0..24)
}

fn seeded(batch: &[(DocumentId, usize)]) -> InMemoryIndex {
    let index = InMemoryIndex::with_config(InMemoryConfig::new().with_dimension(2));
    let docs = batch.iter().map(|(id, _)| Document::new(format!("content of {}", id))).collect();
    let vectors = batch.iter().map(|(_, dim)| Vector::from(vec![0.5; *dim])).collect();
    let ids = batch.iter().map(|(id, _)| id.clone()).collect();
    index.upsert_by_vector(docs, vectors, Some(ids)).unwrap();
    index
}

proptest! {
    #[test]
    fn test_upsert_partitions_submitted_ids(batch in batch_strategy()) {
        let index = InMemoryIndex::with_config(InMemoryConfig::new().with_dimension(2));
        let submitted: Vec<DocumentId> = batch.iter().map(|(id, _)| id.clone()).collect();
        let docs = batch.iter().map(|_| Document::new("x")).collect();
        let vectors = batch.iter().map(|(_, dim)| Vector::from(vec![1.0; *dim])).collect();

        let resp = index.upsert_by_vector(docs, vectors, Some(submitted.clone())).unwrap();

        prop_assert!(resp.is_partition_of(&submitted));
        for id in &resp.succeeded {
            prop_assert!(index.contains(id));
        }
    }

    #[test]
    fn test_delete_partitions_submitted_ids(
        batch in batch_strategy(),
        to_delete in proptest::collection::vec(id_strategy(), 0..12),
    ) {
        let index = seeded(&batch);
        let before: HashSet<DocumentId> = index.ids().into_iter().collect();

        let resp = index.delete_by_ids(&to_delete).unwrap();

        prop_assert!(resp.is_partition_of(&to_delete));
        let succeeded: HashSet<&DocumentId> = resp.succeeded.iter().collect();
        let failed: HashSet<&DocumentId> = resp.failed.iter().collect();
        for id in &to_delete {
            prop_assert!(!index.contains(id));
            if before.contains(id) {
                prop_assert!(succeeded.contains(id));
            } else {
                prop_assert!(failed.contains(id));
            }
        }
    }

    #[test]
    fn test_get_preserves_request_order(
        batch in batch_strategy(),
        request in proptest::collection::vec(id_strategy(), 0..12),
    ) {
        let index = seeded(&batch);

        let docs = index.get_by_ids(&request).unwrap();

        let expected: Vec<&DocumentId> = request.iter().filter(|id| index.contains(id)).collect();
        let got: Vec<&DocumentId> = docs.iter().filter_map(|d| d.id.as_ref()).collect();
        prop_assert_eq!(got, expected);
    }
}
