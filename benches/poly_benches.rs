use RustedPoly::polynomial::poly_engine::Polynomial;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// dense polynomial sum_{k=0}^{n} (k+1) x^k
fn dense(n: u32) -> Polynomial {
    Polynomial::from_terms((0..=n).map(|k| (k, (k + 1) as f64)))
}

fn bench_parse(c: &mut Criterion) {
    let text = dense(50).to_string();
    c.bench_function("parse 51 terms", |b| {
        b.iter(|| Polynomial::parse(black_box(&text)))
    });
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplication");
    for n in [10u32, 50, 200] {
        let p = dense(n);
        let q = dense(n / 2);
        group.bench_function(format!("degree {} x degree {}", n, n / 2), |b| {
            b.iter(|| black_box(&p) * black_box(&q))
        });
    }
    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");
    for n in [10u32, 50, 200] {
        let divisor = Polynomial::from_terms([(n / 4, 1.0), (0, -3.0)]);
        let dividend = dense(n);
        group.bench_function(format!("degree {} / degree {}", n, n / 4), |b| {
            b.iter(|| black_box(&dividend).div_rem(black_box(&divisor)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_multiplication, bench_division);
criterion_main!(benches);
