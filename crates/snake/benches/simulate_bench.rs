//! Criterion benchmarks for the lattice simulator.
//! Focus lengths: n in {11, 23} (12- and 24-prism snakes).
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use snake::lattice::simulate;
use snake::State;

fn random_state(len: usize, rng: &mut StdRng) -> State {
    State::new((0..len).map(|_| rng.gen_range(0u8..4)).collect()).unwrap()
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    for &len in &[11usize, 23] {
        group.bench_with_input(BenchmarkId::new("random", len), &len, |b, &len| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter_batched(
                || random_state(len, &mut rng),
                |s| simulate(&s, false),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("straight_cyclic", len), &len, |b, &len| {
            let s = State::new(vec![0; len]).unwrap();
            b.iter(|| simulate(&s, true))
        });
        group.bench_with_input(BenchmarkId::new("straight", len), &len, |b, &len| {
            let s = State::new(vec![0; len]).unwrap();
            b.iter(|| simulate(&s, false))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_simulate);
criterion_main!(benches);
