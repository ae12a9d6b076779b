use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use RustedPolyArea::numerical::riemann::left_riemann_area;
use RustedPolyArea::symbolic::polynomial::Polynomial;

fn bench_parse(c: &mut Criterion) {
    let input = "3.5x^7 - 2x^6 + x^5 - 0.25x^4 + 12x^3 - x^2 + 7x - 42";
    c.bench_function("parse polynomial", |b| {
        b.iter(|| Polynomial::parse(black_box(input)).unwrap())
    });
}

fn bench_riemann(c: &mut Criterion) {
    let f1 = Polynomial::parse("x^3 - 2x + 1").unwrap();
    let f2 = Polynomial::parse("0.5x^2").unwrap();
    let mut group = c.benchmark_group("left Riemann sum");
    for n in [100usize, 10_000] {
        group.bench_function(format!("n = {}", n), |b| {
            b.iter(|| left_riemann_area(&f1, &f2, -2.0, 2.0, black_box(n)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_riemann);
criterion_main!(benches);
