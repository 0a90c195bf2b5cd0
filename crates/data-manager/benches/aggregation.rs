use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use freq_charts_data::aggregate;
use freq_charts_shared::ParsedDocument;
use serde_json::json;

fn aggregation_benchmark(c: &mut Criterion) {
    let documents: Vec<ParsedDocument> = (0..100)
        .map(|i| {
            ParsedDocument::new(
                format!("doc-{i}.json"),
                json!([
                    {"score": i, "weight": 2},
                    "alpha",
                    "beta",
                    {"tags": ["x", "y", "z"]},
                    [1, 2, 3],
                ]),
            )
        })
        .collect();

    c.bench_function("aggregate 100 documents", |b| {
        b.iter(|| aggregate(black_box(&documents)))
    });
}

criterion_group!(benches, aggregation_benchmark);
criterion_main!(benches);
