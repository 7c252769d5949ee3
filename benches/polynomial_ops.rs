use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use realpoly::{Monomial, Polynomial};
use std::time::Duration;

/// Generate a dense random polynomial of the given degree
fn random_polynomial(degree: u32) -> Polynomial {
    let mut rng = rand::thread_rng();
    (0..=degree)
        .map(|exponent| Monomial::new(rng.gen_range(-10.0..10.0), exponent))
        .chain(std::iter::once(Monomial::new(1.0, degree + 1)))
        .collect()
}

/// Product of `(x - r)` for small integer roots, so GCDs are nontrivial
fn from_roots(roots: &[i32]) -> Polynomial {
    roots.iter().fold(Polynomial::one(), |acc, &root| {
        &acc * &Polynomial::from_pairs(&[(1.0, 1), (-f64::from(root), 0)])
    })
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("Polynomial Multiplication");
    group.measurement_time(Duration::from_secs(5));

    for degree in [4u32, 16, 64] {
        let a = random_polynomial(degree);
        let b = random_polynomial(degree);
        group.bench_with_input(BenchmarkId::new("multiply", degree), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a * b))
        });
    }

    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("Polynomial Division");

    for degree in [8u32, 32, 128] {
        let dividend = random_polynomial(degree);
        let divisor = random_polynomial(degree / 2);
        group.bench_with_input(
            BenchmarkId::new("div_rem", degree),
            &(dividend, divisor),
            |bench, (dividend, divisor)| bench.iter(|| black_box(dividend.div_rem(divisor))),
        );
    }

    // Sparse dividend: a handful of terms spread over a wide degree range
    let sparse = Polynomial::from_pairs(&[(1.0, 200), (3.0, 100), (-2.0, 0)]);
    let divisor = Polynomial::from_pairs(&[(1.0, 3), (1.0, 0)]);
    group.bench_function("sparse_div_rem", |bench| {
        bench.iter(|| black_box(sparse.div_rem(&divisor)))
    });

    group.finish();
}

fn bench_gcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("Polynomial GCD");

    let a = from_roots(&[1, 2, 3, -1, -2]);
    let b = from_roots(&[1, 2, 4, -3]);
    group.bench_function("gcd_shared_roots", |bench| bench.iter(|| black_box(a.gcd(&b))));
    group.bench_function("lcm_shared_roots", |bench| bench.iter(|| black_box(a.lcm(&b))));

    group.finish();
}

fn bench_calculus(c: &mut Criterion) {
    let p = random_polynomial(32);

    c.bench_function("integral_derivative", |bench| {
        bench.iter(|| black_box(p.integral().derivative()))
    });
    c.bench_function("definite_integral", |bench| {
        bench.iter(|| black_box(p.definite_integral(-1.0, 1.0)))
    });
}

criterion_group!(
    benches,
    bench_multiplication,
    bench_division,
    bench_gcd,
    bench_calculus
);
criterion_main!(benches);
