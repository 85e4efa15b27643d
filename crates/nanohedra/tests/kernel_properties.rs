//! Property checks for the containment kernel over catalog solids.

use std::sync::OnceLock;

use nalgebra::Vector3;
use proptest::prelude::*;

use nanohedra::catalog;
use nanohedra::geom::Polyhedron;
use nanohedra::num::Prec;

fn solid(name: &'static str, cell: &'static OnceLock<Polyhedron>) -> &'static Polyhedron {
    cell.get_or_init(|| {
        let p = Prec::decimal(30);
        let r = p.int(2);
        catalog::by_name(name, p)
            .expect("catalog entry")
            .build(p, &r)
            .expect("build")
    })
}

fn cube() -> &'static Polyhedron {
    static CELL: OnceLock<Polyhedron> = OnceLock::new();
    solid("cube", &CELL)
}

fn octahedron() -> &'static Polyhedron {
    static CELL: OnceLock<Polyhedron> = OnceLock::new();
    solid("octahedron", &CELL)
}

proptest! {
    /// An axis-aligned cube is invariant under sign flips and coordinate
    /// permutations, so the verdict must be too.
    #[test]
    fn cube_respects_signed_permutations(
        x in -3.0..3.0f64,
        y in -3.0..3.0f64,
        z in -3.0..3.0f64,
        sx in prop::bool::ANY,
        sy in prop::bool::ANY,
        sz in prop::bool::ANY,
        perm in 0usize..6,
    ) {
        let cube = cube();
        let flip = |on: bool, v: f64| if on { -v } else { v };
        let (fx, fy, fz) = (flip(sx, x), flip(sy, y), flip(sz, z));
        let permuted = match perm {
            0 => (fx, fy, fz),
            1 => (fx, fz, fy),
            2 => (fy, fx, fz),
            3 => (fy, fz, fx),
            4 => (fz, fx, fy),
            _ => (fz, fy, fx),
        };
        prop_assert_eq!(
            cube.in_bounds_f64(Vector3::new(x, y, z)),
            cube.in_bounds_f64(Vector3::new(permuted.0, permuted.1, permuted.2))
        );
    }

    #[test]
    fn octahedron_respects_signed_permutations(
        x in -3.0..3.0f64,
        y in -3.0..3.0f64,
        z in -3.0..3.0f64,
    ) {
        let oct = octahedron();
        let base = oct.in_bounds_f64(Vector3::new(x, y, z));
        prop_assert_eq!(base, oct.in_bounds_f64(Vector3::new(-x, y, z)));
        prop_assert_eq!(base, oct.in_bounds_f64(Vector3::new(x, -z, y)));
        prop_assert_eq!(base, oct.in_bounds_f64(Vector3::new(z, x, y)));
    }

    /// Queries are pure: the same point always yields the same verdict.
    #[test]
    fn verdicts_are_idempotent(
        x in -3.0..3.0f64,
        y in -3.0..3.0f64,
        z in -3.0..3.0f64,
    ) {
        let cube = cube();
        let q = Vector3::new(x, y, z);
        let first = cube.in_bounds_f64(q);
        for _ in 0..5 {
            prop_assert_eq!(cube.in_bounds_f64(q), first);
        }
    }

    /// Every face half-space contains the origin, so shrinking an accepted
    /// point toward the origin keeps it accepted.
    #[test]
    fn acceptance_is_star_shaped(
        x in -3.0..3.0f64,
        y in -3.0..3.0f64,
        z in -3.0..3.0f64,
        t in 0.0..1.0f64,
    ) {
        let oct = octahedron();
        let q = Vector3::new(x, y, z);
        if oct.in_bounds_f64(q) {
            prop_assert!(oct.in_bounds_f64(q * t));
        }
    }
}
