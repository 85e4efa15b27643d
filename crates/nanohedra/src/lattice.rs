//! Cubic unit cells and the lattice carving driver.
//!
//! Purpose
//! - Enumerate candidate lattice sites over a solid's bounding cube and keep
//!   the ones the containment test accepts, producing the point set an
//!   atomistic decoration step consumes.
//!
//! Why this design
//! - `in_bounds` is a pure function over the immutable polyhedron, so the
//!   parallel driver just splits the candidate stream into x-slabs across
//!   rayon workers; no locking, and slab order keeps the output
//!   deterministic and identical to the sequential driver.

use nalgebra::Vector3;
use rayon::prelude::*;
use tracing::debug;

use crate::geom::Polyhedron;

/// Bravais centring of a cubic cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Centering {
    Primitive,
    BodyCentred,
    FaceCentred,
}

/// A cubic unit cell with edge length `a`, in the same unit as the
/// polyhedron radius (angstroms for atomic lattices).
#[derive(Clone, Copy, Debug)]
pub struct UnitCell {
    pub a: f64,
    pub centering: Centering,
}

impl UnitCell {
    pub fn simple_cubic(a: f64) -> Self {
        Self {
            a,
            centering: Centering::Primitive,
        }
    }

    pub fn bcc(a: f64) -> Self {
        Self {
            a,
            centering: Centering::BodyCentred,
        }
    }

    pub fn fcc(a: f64) -> Self {
        Self {
            a,
            centering: Centering::FaceCentred,
        }
    }

    /// Fractional coordinates of the sites inside one cell.
    pub fn sites(&self) -> &'static [[f64; 3]] {
        match self.centering {
            Centering::Primitive => &[[0.0, 0.0, 0.0]],
            Centering::BodyCentred => &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]],
            Centering::FaceCentred => &[
                [0.0, 0.0, 0.0],
                [0.5, 0.5, 0.0],
                [0.5, 0.0, 0.5],
                [0.0, 0.5, 0.5],
            ],
        }
    }

    /// Cartesian position of fractional site `site` in cell `(i, j, k)`.
    #[inline]
    pub fn position(&self, cell: (i64, i64, i64), site: &[f64; 3]) -> Vector3<f64> {
        Vector3::new(
            (cell.0 as f64 + site[0]) * self.a,
            (cell.1 as f64 + site[1]) * self.a,
            (cell.2 as f64 + site[2]) * self.a,
        )
    }

    /// Symmetric cell-index range covering a circumsphere of `radius`.
    fn range(&self, radius: f64) -> std::ops::RangeInclusive<i64> {
        let n = (radius / self.a).ceil() as i64;
        -n..=n
    }
}

/// Enumerate the lattice sites inside the solid, sequentially.
pub fn carve(poly: &Polyhedron, cell: &UnitCell) -> Vec<Vector3<f64>> {
    let radius = poly.radius_f64();
    let mut kept = Vec::new();
    for i in cell.range(radius) {
        carve_slab(poly, cell, i, &mut kept);
    }
    debug!(kept = kept.len(), "carved lattice");
    kept
}

/// Parallel carve: identical output to [`carve`], with the candidate stream
/// partitioned into x-slabs across worker threads.
pub fn par_carve(poly: &Polyhedron, cell: &UnitCell) -> Vec<Vector3<f64>> {
    let radius = poly.radius_f64();
    let slabs: Vec<i64> = cell.range(radius).collect();
    let kept: Vec<Vec<Vector3<f64>>> = slabs
        .par_iter()
        .map(|&i| {
            let mut slab = Vec::new();
            carve_slab(poly, cell, i, &mut slab);
            slab
        })
        .collect();
    let kept: Vec<Vector3<f64>> = kept.into_iter().flatten().collect();
    debug!(kept = kept.len(), "carved lattice in parallel");
    kept
}

fn carve_slab(poly: &Polyhedron, cell: &UnitCell, i: i64, out: &mut Vec<Vector3<f64>>) {
    let radius = poly.radius_f64();
    for j in cell.range(radius) {
        for k in cell.range(radius) {
            for site in cell.sites() {
                let pos = cell.position((i, j, k), site);
                if poly.in_bounds_f64(pos) {
                    out.push(pos);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::catalog;
    use crate::num::Prec;

    fn build(name: &str, radius: &str) -> Polyhedron {
        let p = Prec::decimal(30);
        let r = p.scalar(radius).unwrap();
        catalog::by_name(name, p).unwrap().build(p, &r).unwrap()
    }

    #[test]
    fn fcc_cube_site_count_is_plausible() {
        // A cube of circumradius 10 A has side 20 / sqrt(3) = 11.55 A, i.e.
        // a volume of 1540 A^3. Aluminium fcc packs 4 atoms per (4.05 A)^3
        // cell, so the continuum estimate is ~93 sites; grid alignment
        // against the facets trims that noticeably. Allow a wide window.
        let poly = build("cube", "10");
        let kept = carve(&poly, &UnitCell::fcc(4.05));
        assert!(kept.len() > 40, "too few sites: {}", kept.len());
        assert!(kept.len() < 100, "too many sites: {}", kept.len());
    }

    #[test]
    fn all_carved_sites_are_inside() {
        let poly = build("truncated octahedron", "12");
        for pos in carve(&poly, &UnitCell::bcc(3.16)) {
            assert!(poly.in_bounds_f64(pos));
        }
    }

    #[test]
    fn origin_site_is_always_kept() {
        let poly = build("octahedron", "5");
        let kept = carve(&poly, &UnitCell::simple_cubic(2.0));
        assert!(kept
            .iter()
            .any(|p| p.norm() == 0.0));
    }

    #[test]
    fn parallel_matches_sequential() {
        let poly = build("truncated icosahedron", "15");
        let cell = UnitCell::fcc(3.61);
        let seq = carve(&poly, &cell);
        let par = par_carve(&poly, &cell);
        assert_eq!(seq.len(), par.len());
        for (a, b) in seq.iter().zip(&par) {
            assert_relative_eq!(a.x, b.x);
            assert_relative_eq!(a.y, b.y);
            assert_relative_eq!(a.z, b.z);
        }
    }

    #[test]
    fn denser_centering_keeps_more_sites() {
        let poly = build("cube", "8");
        let sc = carve(&poly, &UnitCell::simple_cubic(3.0)).len();
        let bcc = carve(&poly, &UnitCell::bcc(3.0)).len();
        let fcc = carve(&poly, &UnitCell::fcc(3.0)).len();
        assert!(sc < bcc && bcc < fcc, "{sc} {bcc} {fcc}");
    }
}
