use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::Vector3;

use nanohedra::catalog;
use nanohedra::num::Prec;

fn probes() -> Vec<Vector3<f64>> {
    // Deterministic grid through the particle shell, where the verdict is
    // least predictable.
    let mut out = Vec::new();
    let mut t = -1.2f64;
    while t <= 1.2 {
        out.push(Vector3::new(10.0 * t, 3.0, -2.0 * t));
        out.push(Vector3::new(-4.0 * t, 10.0 * t, 5.0));
        t += 0.05;
    }
    out
}

fn bench_in_bounds(c: &mut Criterion) {
    let p = Prec::decimal(50);
    let r = p.int(10);
    let points = probes();
    for name in ["cube", "truncated icosahedron", "disdyakis triacontahedron"] {
        let poly = catalog::by_name(name, p).unwrap().build(p, &r).unwrap();
        c.bench_function(&format!("in_bounds/{name}"), |b| {
            b.iter(|| {
                let mut inside = 0usize;
                for q in &points {
                    if poly.in_bounds_f64(black_box(*q)) {
                        inside += 1;
                    }
                }
                inside
            })
        });
    }
}

criterion_group!(benches, bench_in_bounds);
criterion_main!(benches);
