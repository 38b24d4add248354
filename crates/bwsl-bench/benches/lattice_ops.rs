//! Criterion micro-benchmarks for lattice construction and queries.

use std::hint::black_box;

use bwsl_bench::{reference_profile, sample_pairs, stress_profile};
use bwsl_core::{array_to_index, index_to_array};
use bwsl_test_utils::hashed_occupations;
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: build every table of a 32x32 square lattice.
fn bench_build_square_1k(c: &mut Criterion) {
    let config = reference_profile();
    c.bench_function("build_square_1k", |b| {
        b.iter(|| black_box(config.build().unwrap()));
    });
}

/// Benchmark: build every table of a 16x16x16 cubic lattice.
fn bench_build_cubic_4k(c: &mut Criterion) {
    let config = stress_profile();
    c.bench_function("build_cubic_4k", |b| {
        b.iter(|| black_box(config.build().unwrap()));
    });
}

/// Benchmark: 1000 pairwise distance lookups.
fn bench_distance_lookup(c: &mut Criterion) {
    let lattice = reference_profile().build().unwrap();
    let pairs = sample_pairs(lattice.num_sites(), 1000, 7);
    c.bench_function("distance_lookup_1000", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(lattice.distance(x, y));
            }
        });
    });
}

/// Benchmark: iterate all neighbour lists of the cubic lattice.
fn bench_neighbors_cubic_4k(c: &mut Criterion) {
    let lattice = stress_profile().build().unwrap();
    c.bench_function("neighbors_cubic_4k", |b| {
        b.iter(|| {
            for i in lattice.grid().sites() {
                black_box(lattice.neighbors(i));
            }
        });
    });
}

/// Benchmark: mixed-radix round trip over every site of the cubic grid.
fn bench_index_round_trip(c: &mut Criterion) {
    let size = stress_profile().size;
    let n: usize = size.iter().product();
    c.bench_function("index_round_trip_4k", |b| {
        b.iter(|| {
            for i in 0..n {
                black_box(array_to_index(&index_to_array(i, &size), &size));
            }
        });
    });
}

/// Benchmark: structure factor of a random half-filling on 32x32.
fn bench_structure_factor(c: &mut Criterion) {
    let lattice = reference_profile().build().unwrap();
    let occ = hashed_occupations(lattice.num_sites(), 3);
    let mut sk = vec![0.0; lattice.num_sites()];
    c.bench_function("structure_factor_square_1k", |b| {
        b.iter(|| {
            lattice.accumulate_sk(&occ, &mut sk, 1.0);
            black_box(&sk);
        });
    });
}

criterion_group!(
    benches,
    bench_build_square_1k,
    bench_build_cubic_4k,
    bench_distance_lookup,
    bench_neighbors_cubic_4k,
    bench_index_round_trip,
    bench_structure_factor
);
criterion_main!(benches);
