//! Criterion benchmarks for the pruned enumerator.
//! Full scans of small lengths, with and without symmetry, and one cyclic census.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use snake::search::{SearchCfg, Solutions};
use snake::symmetry::Symmetry;

fn count(len: usize, cfg: SearchCfg) -> usize {
    Solutions::new(len, cfg).unwrap().count()
}

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");
    group.sample_size(10);
    let plain = SearchCfg::default();
    let mirror = SearchCfg {
        physical: true,
        symmetry: Symmetry {
            reverse: true,
            chiral: true,
            cyclic: false,
        },
    };
    let loops = SearchCfg {
        physical: true,
        symmetry: Symmetry {
            reverse: true,
            chiral: true,
            cyclic: true,
        },
    };
    for &len in &[6usize, 8] {
        group.bench_with_input(BenchmarkId::new("physical", len), &len, |b, &len| {
            b.iter(|| count(len, plain))
        });
        group.bench_with_input(BenchmarkId::new("reverse_chiral", len), &len, |b, &len| {
            b.iter(|| count(len, mirror))
        });
    }
    group.bench_function(BenchmarkId::new("cyclic_full", 9), |b| b.iter(|| count(9, loops)));
    group.finish();
}

criterion_group!(benches, bench_enumerate);
criterion_main!(benches);
