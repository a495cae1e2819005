//! Async API demo: the blocking reference backend driven from tokio.
//!
//! Run with: cargo run --example async_demo

use std::sync::Arc;
use std::time::Instant;

use docindex::prelude::*;
use futures::stream;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("Async docindex demo\n");

    let index = InMemoryIndex::with_config(
        InMemoryConfig::new()
            .with_dimension(64)
            .with_id_strategy(IdStrategy::Sequential),
    );

    println!("Upserting 500 documents from concurrent tasks...");
    let start = Instant::now();
    let mut handles = Vec::new();
    for i in 0..500 {
        let index = index.clone();
        handles.push(tokio::spawn(async move {
            let vector: Vec<f32> = (0..64).map(|j| ((i * 64 + j) as f32).sin()).collect();
            let doc = Document::new(format!("chunk #{}", i))
                .with_metadata(Metadata::new().with_field("parity", i % 2));
            index
                .aupsert_by_vector(vec![doc], vec![Vector::from(vector)], None)
                .await
        }));
    }
    for handle in handles {
        let resp = handle
            .await
            .map_err(|e| Error::Executor(e.to_string()))??;
        assert!(resp.is_complete());
    }
    println!("   [OK] {} documents in {:?}\n", index.len(), start.elapsed());

    let ids: Vec<DocumentId> = vec!["42".into(), "7".into(), "9999".into()];
    let docs = index.aget_by_ids(stream::iter(ids)).await?;
    println!("aget_by_ids [42, 7, 9999]:");
    for doc in &docs {
        println!("   {} -> {}", doc.id.as_deref().unwrap_or("?"), doc.content);
    }

    // Same calls, but blocking work runs on dedicated threads
    let threaded = index.clone().with_executor(Arc::new(ThreadExecutor::new("demo-io")));
    let resp = threaded.adelete(Selection::ids(["1", "2", "3"])).await?;
    println!("\nadelete on ThreadExecutor: {:?}", resp);

    println!("\nAsync demo complete!");
    Ok(())
}
