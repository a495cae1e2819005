//! Writing a backend: three primitives, plus an optional filter-aware `get`.
//!
//! Run with: cargo run --example custom_backend

use std::collections::BTreeMap;

use docindex::prelude::*;
use docindex::DocumentIter;
use parking_lot::RwLock;

#[derive(Default)]
struct TopicIndex {
    store: RwLock<BTreeMap<DocumentId, Document>>,
}

impl VectorIndex for TopicIndex {
    fn upsert_by_vector(
        &self,
        documents: Vec<Document>,
        vectors: Vec<Vector>,
        ids: Option<Vec<DocumentId>>,
    ) -> Result<UpsertResponse> {
        docindex::check_upsert_lengths(&documents, &vectors, ids.as_deref())?;
        // explicit id, then the document's own, then a fresh one
        let ids: Vec<DocumentId> = match ids {
            Some(ids) => ids,
            None => documents
                .iter()
                .map(|doc| doc.id.clone().unwrap_or_else(|| uuid::Uuid::new_v4().to_string()))
                .collect(),
        };

        let mut store = self.store.write();
        let mut resp = UpsertResponse::new();
        for (id, doc) in ids.into_iter().zip(documents) {
            store.insert(id.clone(), doc.with_id(id.clone()));
            resp.succeed(id);
        }
        Ok(resp)
    }

    fn delete_by_ids(&self, ids: &[DocumentId]) -> Result<DeleteResponse> {
        let mut store = self.store.write();
        let mut resp = DeleteResponse::new();
        for id in ids {
            match store.remove(id) {
                Some(_) => resp.succeed(id.clone()),
                None => resp.fail(id.clone()),
            }
        }
        Ok(resp)
    }

    fn lazy_get_by_ids(&self, ids: Vec<DocumentId>) -> Result<DocumentIter<'_>> {
        let store = self.store.read();
        let docs: Vec<Document> = ids.iter().filter_map(|id| store.get(id).cloned()).collect();
        Ok(Box::new(docs.into_iter()))
    }

    // Native filter support: ids become optional.
    fn lazy_get(&self, selection: Selection) -> Result<DocumentIter<'_>> {
        let store = self.store.read();
        let docs: Vec<Document> = store
            .values()
            .filter(|doc| match &selection.ids {
                Some(ids) => doc.id.as_ref().is_some_and(|id| ids.contains(id)),
                None => true,
            })
            .filter(|doc| selection.filter.as_ref().map_or(true, |f| f.matches(&doc.metadata)))
            .cloned()
            .collect();
        Ok(Box::new(docs.into_iter()))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let index = TopicIndex::default();
    let docs = ["ownership", "lifetimes", "asyncio"]
        .iter()
        .map(|t| {
            let lang = if *t == "asyncio" { "python" } else { "rust" };
            Document::new(*t).with_metadata(Metadata::new().with_field("lang", lang))
        })
        .collect();
    let vectors = vec![Vector::new(&[1.0]); 3];
    index.upsert_by_vector(docs, vectors, Some(vec!["a".into(), "b".into(), "c".into()]))?;

    let resp =
        index.upsert_by_vector(vec![Document::new("borrowing")], vec![Vector::new(&[1.0])], None)?;
    println!("generated id: {}", resp.succeeded[0]);

    let rust = index.get(Selection::filter(FilterSpec::mapping([("lang", "rust")])))?;
    println!("rust docs: {:?}", rust.iter().map(|d| &d.content).collect::<Vec<_>>());

    // delete was not overridden, so the identifier-only default applies
    match index.delete(Selection::filter(FilterSpec::mapping([("lang", "python")]))) {
        Err(e) => println!("delete by filter: {}", e),
        Ok(resp) => println!("deleted: {:?}", resp.succeeded),
    }
    let resp = index.delete(Selection::ids(["c"]))?;
    println!("deleted by id: {:?}", resp.succeeded);
    Ok(())
}
