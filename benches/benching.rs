use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

use fuzzywarp::{count_tolerant_matches, multiply_fast, multiply_naive, Base};

fn random_coefficients(rng: &mut SmallRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(0..10)).collect()
}

fn random_bases(rng: &mut SmallRng, len: usize) -> Vec<Base> {
    (0..len)
        .map(|_| *Base::ALL.choose(rng).unwrap())
        .collect()
}

fn bench_polynomial_multiplication(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut group = c.benchmark_group("polynomial_multiplication");

    for size in [10, 50, 100, 150, 200] {
        let a = random_coefficients(&mut rng, size);
        let b = random_coefficients(&mut rng, size);
        assert_eq!(multiply_fast(&a, &b).unwrap(), multiply_naive(&a, &b));

        group.bench_with_input(BenchmarkId::new("naive", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| multiply_naive(black_box(a), black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("fft", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| multiply_fast(black_box(a), black_box(b)).unwrap())
        });
    }
    group.finish();
}

fn bench_tolerant_matching(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut group = c.benchmark_group("count_tolerant_matches");

    for text_len in [1_000, 10_000, 100_000] {
        let text = random_bases(&mut rng, text_len);
        let pattern = random_bases(&mut rng, 50);

        group.bench_with_input(
            BenchmarkId::new("text_len", text_len),
            &(&text, &pattern),
            |bench, (text, pattern)| {
                bench.iter(|| {
                    count_tolerant_matches(
                        black_box(text.as_slice()),
                        black_box(pattern.as_slice()),
                        3,
                        &Base::ALL,
                    )
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_polynomial_multiplication, bench_tolerant_matching);
criterion_main!(benches);
