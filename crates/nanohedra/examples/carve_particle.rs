//! Carve one faceted nanoparticle and report timings.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for "how long does it
//!   take to build a catalog solid and carve an fcc lattice through it?"
//! - Exercise the whole path a caller uses: catalog lookup, build at a
//!   chosen radius and precision, sequential and parallel carving.
//!
//! Why this shape
//! - The truncated octahedron is a common equilibrium particle shape for
//!   fcc metals, so its site counts are easy to sanity-check against the
//!   bulk density.

use std::time::Instant;

use nanohedra::lattice::{carve, par_carve, UnitCell};
use nanohedra::num::Prec;
use nanohedra::{catalog, VERSION};

fn main() {
    let prec = Prec::decimal(50);
    let radius = prec.scalar("30").expect("radius literal");

    let build_start = Instant::now();
    let poly = catalog::by_name("truncated octahedron", prec)
        .expect("catalog entry")
        .build(prec, &radius)
        .expect("build succeeds");
    let build_ms = build_start.elapsed().as_secs_f64() * 1e3;

    // Gold: fcc, a = 4.08 A.
    let cell = UnitCell::fcc(4.08);

    let seq_start = Instant::now();
    let sites = carve(&poly, &cell);
    let seq_ms = seq_start.elapsed().as_secs_f64() * 1e3;

    let par_start = Instant::now();
    let par_sites = par_carve(&poly, &cell);
    let par_ms = par_start.elapsed().as_secs_f64() * 1e3;
    assert_eq!(sites.len(), par_sites.len());

    println!(
        "nanohedra {VERSION}: truncated octahedron r=30A digits=50 \
         faces={} vertices={}",
        poly.faces().len(),
        poly.vertices().len()
    );
    println!("build: {build_ms:.1} ms");
    println!(
        "carve fcc(4.08): {} sites, seq {seq_ms:.1} ms, par {par_ms:.1} ms",
        sites.len()
    );
}
