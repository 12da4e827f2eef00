//! Benchmarks for the matcher, verifier and rank tables.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- deferred_acceptance
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use stable_match::engine::{match_hospitals, verify, RankTable};
use stable_match::{CandidateMatching, Instance, Side};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SIZES: [usize; 4] = [64, 256, 1_024, 2_048];

// ============================================================================
// HELPER FUNCTIONS - Deterministic instance generation
// ============================================================================

/// Uniformly random instance; same seed = same instance
fn random_instance(n: usize, seed: u64) -> Instance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut side = || -> Vec<Vec<u32>> {
        (0..n)
            .map(|_| {
                let mut ranking: Vec<u32> = (1..=n as u32).collect();
                ranking.shuffle(&mut rng);
                ranking
            })
            .collect()
    };

    let hospital_prefs = side();
    let student_prefs = side();
    Instance::new(hospital_prefs, student_prefs).expect("shuffled rankings are permutations")
}

// ============================================================================
// BENCHMARK: Rank tables
// ============================================================================

fn bench_rank_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_table");

    for n in SIZES {
        let instance = random_instance(n, 42);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::new("build", n), &instance, |b, instance| {
            b.iter(|| black_box(RankTable::build(instance.prefs(Side::Student))))
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Deferred acceptance
// ============================================================================

fn bench_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("deferred_acceptance");
    group.measurement_time(Duration::from_secs(10));

    for n in SIZES {
        let instance = random_instance(n, 42);
        group.bench_with_input(BenchmarkId::new("random", n), &instance, |b, instance| {
            b.iter(|| black_box(match_hospitals(instance)))
        });
    }

    // n(n+1)/2 proposals: every hospital fights for the same students
    for n in [64, 256, 1_024] {
        let instance = Instance::ordered(n);
        group.bench_with_input(BenchmarkId::new("ordered", n), &instance, |b, instance| {
            b.iter(|| black_box(match_hospitals(instance)))
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Verifier
// ============================================================================

fn bench_verifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");
    group.measurement_time(Duration::from_secs(10));

    for n in SIZES {
        let instance = random_instance(n, 42);
        let candidate: CandidateMatching = match_hospitals(&instance).matching.to_candidate();

        // stable input: the scan visits all n^2 pairs
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(
            BenchmarkId::new("stable", n),
            &(instance, candidate),
            |b, (instance, candidate)| b.iter(|| black_box(verify(instance, candidate))),
        );
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_rank_table, bench_matcher, bench_verifier);

criterion_main!(benches);
