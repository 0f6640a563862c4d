use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use soft_heap_select::select::{select_simple, Policy};

fn permutation(n: usize) -> Vec<usize> {
    (0..n).map(|i| (i * 2654435761) % n.max(1)).collect()
}

fn sort_select(xs: &[usize], k: usize) -> usize {
    let mut sorted = xs.to_vec();
    sorted.sort_unstable();
    sorted[k - 1]
}

pub fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_median");

    for &n in &[1_000, 10_000, 100_000] {
        let xs = permutation(n);
        let k = n / 2;

        for policy in [Policy::Baseline, Policy::Mirror, Policy::Sample, Policy::RandomPivot] {
            group.bench_with_input(format!("{:?}_{n}", policy), &n, |b, _n| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| black_box(select_simple(k, &xs, policy, &mut rng).unwrap()));
            });
        }

        group.bench_with_input(format!("sort_unstable_{n}"), &n, |b, _n| {
            b.iter(|| black_box(sort_select(&xs, k)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
