//! Benchmarks for identifier lookups on the reference backend.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docindex_core::{Document, DocumentId, InMemoryIndex, Vector, VectorIndex};
use rand::seq::SliceRandom;
use rand::Rng;

fn populated_index(size: usize, dim: usize) -> (InMemoryIndex, Vec<DocumentId>) {
    let mut rng = rand::thread_rng();
    let ids: Vec<DocumentId> = (0..size).map(|i| format!("doc-{}", i)).collect();
    let docs = ids.iter().map(|id| Document::new(format!("body of {}", id))).collect();
    let vectors = (0..size)
        .map(|_| Vector::from((0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect::<Vec<f32>>()))
        .collect();

    let index = InMemoryIndex::new();
    index
        .upsert_by_vector(docs, vectors, Some(ids.clone()))
        .expect("upsert");
    (index, ids)
}

fn bench_get_by_ids(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_by_ids");
    let (index, ids) = populated_index(10_000, 128);

    for batch in [1, 32, 512].iter() {
        let mut request: Vec<DocumentId> = ids.clone();
        request.shuffle(&mut rand::thread_rng());
        request.truncate(*batch);

        group.throughput(Throughput::Elements(*batch as u64));
        group.bench_with_input(BenchmarkId::new("eager", batch), &request, |b, request| {
            b.iter(|| index.get_by_ids(black_box(request)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("lazy_first", batch), &request, |b, request| {
            b.iter(|| {
                index
                    .lazy_get_by_ids(black_box(request.clone()))
                    .unwrap()
                    .next()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_get_by_ids);
criterion_main!(benches);
