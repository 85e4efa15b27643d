use criterion::{criterion_group, criterion_main, Criterion};

use nanohedra::catalog;
use nanohedra::lattice::{carve, par_carve, UnitCell};
use nanohedra::num::Prec;

fn bench_carve(c: &mut Criterion) {
    let p = Prec::decimal(30);
    let r = p.int(12);
    let poly = catalog::by_name("truncated octahedron", p)
        .unwrap()
        .build(p, &r)
        .unwrap();
    let cell = UnitCell::fcc(4.08);
    c.bench_function("carve/truncated octahedron", |b| {
        b.iter(|| carve(&poly, &cell))
    });
    c.bench_function("par_carve/truncated octahedron", |b| {
        b.iter(|| par_carve(&poly, &cell))
    });
}

criterion_group!(benches, bench_carve);
criterion_main!(benches);
