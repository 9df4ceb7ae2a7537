// ABOUTME: Criterion benchmarks for the pace calculators and plan generator
// ABOUTME: Measures fitness scoring, training pace derivation, and plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

//! Criterion benchmarks for the pace and plan engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use runpace_pro::models::{FitnessMetric, Performance};
use runpace_pro::{
    compute_fitness_metric, derive_training_paces, generate_plan, PaceAlgorithm, PaceInput,
    RacePredictor,
};

/// Race results spanning the standard distances: (seconds, meters)
const RACES: [(u32, f64); 5] = [
    (1200, 5000.0),
    (2501, 10_000.0),
    (3900, 15_000.0),
    (5415, 21_097.0),
    (11_700, 42_195.0),
];

/// Benchmark fitness scoring for every algorithm
#[allow(clippy::cast_possible_truncation)]
fn bench_fitness_metric(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness_metric");
    group.throughput(Throughput::Elements(RACES.len() as u64));

    for algorithm in PaceAlgorithm::ALL {
        group.bench_with_input(
            BenchmarkId::new("compute_fitness_metric", algorithm.name()),
            &algorithm,
            |b, &algorithm| {
                b.iter(|| {
                    for (time, distance) in RACES {
                        let _ = compute_fitness_metric(
                            black_box(algorithm),
                            black_box(time),
                            black_box(distance),
                        );
                    }
                });
            },
        );
    }

    group.finish();
}

/// Benchmark training pace derivation per algorithm
fn bench_training_paces(c: &mut Criterion) {
    let mut group = c.benchmark_group("training_paces");

    let Ok(performance) = Performance::new(1200, 5000.0) else {
        return;
    };
    let inputs = [
        (PaceAlgorithm::Daniels, PaceInput::Vdot { vdot: 50.0 }),
        (PaceAlgorithm::Riegel, PaceInput::Performance { performance }),
        (
            PaceAlgorithm::McMillan,
            PaceInput::McMillan {
                performance,
                base_pace_seconds_per_mile: 386.0,
            },
        ),
    ];

    for (algorithm, input) in &inputs {
        group.bench_with_input(
            BenchmarkId::new("derive_training_paces", algorithm.name()),
            input,
            |b, input| {
                b.iter(|| derive_training_paces(black_box(*algorithm), black_box(input)));
            },
        );
    }

    group.finish();
}

/// Benchmark plan generation across plan lengths
fn bench_plan_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_generation");
    let metric = FitnessMetric::Vdot(50.0);

    for weeks in [4_u32, 12, 52] {
        group.throughput(Throughput::Elements(u64::from(weeks)));
        group.bench_with_input(
            BenchmarkId::new("generate_plan", weeks),
            &weeks,
            |b, &weeks| {
                b.iter(|| generate_plan(black_box("marathon"), black_box(&metric), black_box(weeks)));
            },
        );
    }

    group.finish();
}

/// Benchmark equivalent time projection
fn bench_race_predictions(c: &mut Criterion) {
    let Ok(performance) = Performance::new(2501, 10_000.0) else {
        return;
    };

    c.bench_function("generate_race_predictions", |b| {
        b.iter(|| RacePredictor::generate_race_predictions(black_box(&performance)));
    });
}

criterion_group!(
    benches,
    bench_fitness_metric,
    bench_training_paces,
    bench_plan_generation,
    bench_race_predictions,
);
criterion_main!(benches);
