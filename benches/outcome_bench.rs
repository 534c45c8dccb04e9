//! Benchmark for Outcome combinator chains.
//!
//! Measures the cost of value-level failure propagation against a direct
//! pattern-match baseline.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tagged_outcome::outcome::{Outcome, failure, success};

fn step(n: u64) -> Outcome<u64, &'static str> {
    if n % 1000 == 999 {
        failure("hit the sentinel")
    } else {
        success(n + 1)
    }
}

fn benchmark_combinator_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combinator_chain");

    for length in [4_u64, 16, 64] {
        group.bench_with_input(
            BenchmarkId::new("and_then", length),
            &length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut outcome: Outcome<u64, &'static str> = success(black_box(0));
                    for _ in 0..length {
                        outcome = outcome.and_then(step);
                    }
                    black_box(outcome)
                });
            },
        );
    }

    group.bench_function("map_pipeline", |bencher| {
        bencher.iter(|| {
            success::<u64, &'static str>(black_box(1))
                .map(|n| n * 2)
                .map(|n| n + 7)
                .and_then(step)
                .map_error(|e| e)
        });
    });

    group.bench_function("match_baseline", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<u64, &'static str> = success(black_box(1));
            match outcome {
                Outcome::Success(n) => black_box(n * 2 + 7),
                Outcome::Failure(_) => 0,
            }
        });
    });

    group.finish();
}

fn benchmark_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("short_circuit");

    group.bench_function("failure_propagation", |bencher| {
        bencher.iter(|| {
            let mut outcome: Outcome<u64, &'static str> = failure(black_box("early"));
            for _ in 0..64 {
                outcome = outcome.and_then(step);
            }
            black_box(outcome)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_combinator_chain, benchmark_short_circuit);
criterion_main!(benches);
