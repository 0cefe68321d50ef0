//! Benchmarks for the filter/search engine
//! Target: well under a frame (16ms) for a few thousand entries

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wflib_core::catalog::{filter_entries, workflow_templates, WorkflowEntry};

/// The built-in workflows, repeated with unique ids
fn large_catalog(copies: usize) -> Vec<WorkflowEntry> {
    let base = workflow_templates();
    (0..copies)
        .flat_map(|n| {
            base.iter().map(move |w| WorkflowEntry {
                id: format!("{}-{n}", w.id),
                ..w.clone()
            })
        })
        .collect()
}

fn benchmark_filter(c: &mut Criterion) {
    let small = workflow_templates();
    let large = large_catalog(500);

    c.bench_function("filter_builtin_identity", |b| {
        b.iter(|| filter_entries(black_box(&small), black_box("all"), black_box("")))
    });

    c.bench_function("filter_builtin_language_and_query", |b| {
        b.iter(|| filter_entries(black_box(&small), black_box("Go"), black_box("release")))
    });

    c.bench_function("filter_large_query_only", |b| {
        b.iter(|| filter_entries(black_box(&large), black_box("all"), black_box("SECURITY")))
    });

    c.bench_function("filter_large_no_match", |b| {
        b.iter(|| filter_entries(black_box(&large), black_box("Rust"), black_box("zzz")))
    });
}

criterion_group!(benches, benchmark_filter);
criterion_main!(benches);
