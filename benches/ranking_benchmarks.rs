//! Ranking Metric Benchmarks
//!
//! Benchmarks for single nDCG calls and parallel batch evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rankeval::{ndcg, GainForm, NdcgScorer, RankingQuery};

/// Create synthetic graded relevances in 0..=3
fn create_relevances(n: usize, seed: u64) -> Vec<f64> {
    // Simple LCG random generator for reproducibility
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) % 4) as f64
        })
        .collect()
}

fn bench_ndcg(c: &mut Criterion) {
    let mut group = c.benchmark_group("ndcg");

    for &n in &[10usize, 100, 1_000, 10_000] {
        let rel_true = create_relevances(n, 42);
        let rel_pred = create_relevances(n, 7);

        for form in [GainForm::Linear, GainForm::Exponential] {
            group.bench_with_input(BenchmarkId::new(form.as_str(), n), &n, |b, &n| {
                b.iter(|| ndcg(black_box(&rel_true), black_box(&rel_pred), n, form))
            });
        }
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("ndcg_batch");
    let scorer = NdcgScorer::new(10, GainForm::Exponential);

    for &queries in &[100usize, 1_000, 10_000] {
        let batch: Vec<RankingQuery> = (0..queries)
            .map(|i| {
                RankingQuery::new(
                    format!("q{}", i),
                    create_relevances(50, i as u64 + 1),
                    create_relevances(20, i as u64 + 1_000_003),
                )
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(queries), &batch, |b, batch| {
            b.iter(|| scorer.evaluate_batch(black_box(batch)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ndcg, bench_batch);
criterion_main!(benches);
