//! Quick start for docindex.
//!
//! Run with: cargo run --example quickstart
//! Set `RUST_LOG=docindex=debug` to see backend activity.

use docindex::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("docindex quick start\n");

    let index = InMemoryIndex::with_config(InMemoryConfig::new().with_dimension(4));

    // Embeddings would normally come from a model
    let chunks = vec![
        ("intro", "Introduction to Rust programming", "rust", [0.9, 0.8, 0.1, 0.0]),
        ("patterns", "Advanced Rust patterns", "rust", [0.85, 0.9, 0.15, 0.05]),
        ("pandas", "Python for data science", "python", [0.1, 0.2, 0.9, 0.85]),
        ("broken", "A chunk with a bad embedding", "misc", [0.0, 0.0, 0.0, 0.0]),
    ];

    let mut ids = Vec::new();
    let mut documents = Vec::new();
    let mut vectors = Vec::new();
    for (id, text, topic, embedding) in &chunks {
        ids.push(id.to_string());
        documents.push(
            Document::new(*text).with_metadata(Metadata::new().with_field("topic", *topic)),
        );
        // the last vector has the wrong dimension on purpose
        let vector = if *id == "broken" {
            Vector::new(&embedding[..2])
        } else {
            Vector::new(embedding)
        };
        vectors.push(vector);
    }

    let resp = index.upsert_by_vector(documents, vectors, Some(ids))?;
    println!("upsert succeeded: {:?}", resp.succeeded);
    println!("upsert failed:    {:?}\n", resp.failed);

    let docs = index.get(Selection::ids(["pandas", "intro"]))?;
    println!("get [pandas, intro]:");
    for doc in &docs {
        println!("  {} -> {}", doc.id.as_deref().unwrap_or("?"), doc.content);
    }

    // Filters are not honored by the reference backend: this logs a warning
    // and falls back to the ids.
    let docs = index.get(
        Selection::ids(["patterns"]).with_filter(Filter::field("topic").eq("python")),
    )?;
    println!("\nget [patterns] with an ignored filter: {} document(s)", docs.len());

    match index.get(Selection::filter(FilterSpec::mapping([("topic", "rust")]))) {
        Err(e) => println!("get by filter alone: {}", e),
        Ok(docs) => println!("get by filter alone returned {} document(s)", docs.len()),
    }

    let resp = index.delete_by_ids(&["intro".to_string(), "unknown".to_string()])?;
    let json = serde_json::to_string(&resp).map_err(|e| Error::Backend(e.to_string()))?;
    println!("\ndelete response: {}", json);
    println!("{} document(s) left", index.len());

    Ok(())
}
