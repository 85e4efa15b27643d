use rug::ops::Pow;

use super::*;
use crate::error::BuildError;
use crate::num::Prec;

fn v3(p: Prec, x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(p.from_f64(x), p.from_f64(y), p.from_f64(z))
}

#[test]
fn vec3_dot_and_cross_agree_with_hand_values() {
    let p = Prec::decimal(30);
    let a = v3(p, 1.0, 2.0, 3.0);
    let b = v3(p, -4.0, 0.5, 2.0);
    assert_eq!(a.dot(&b).to_f64(), -4.0 + 1.0 + 6.0);
    let c = a.cross(&b);
    // Orthogonal to both operands.
    assert_eq!(c.dot(&a).to_f64(), 0.0);
    assert_eq!(c.dot(&b).to_f64(), 0.0);
    assert_eq!(c.to_f64(), nalgebra::Vector3::new(2.5, -14.0, 8.5));
}

#[test]
fn normalize_rejects_zero_vectors() {
    let p = Prec::decimal(30);
    let eps = p.epsilon();
    let z = v3(p, 0.0, 0.0, 0.0);
    assert!(matches!(
        z.normalized(&eps),
        Err(BuildError::DegenerateGeometry)
    ));
    let u = v3(p, 3.0, 4.0, 0.0).normalized(&eps).unwrap();
    assert!((u.norm() - p.one()).abs() < eps);
}

#[test]
fn triangle_normal_points_outward_for_either_winding() {
    let p = Prec::decimal(30);
    let eps = p.epsilon();
    let ccw = [v3(p, 1.0, 0.0, 1.0), v3(p, 0.0, 1.0, 1.0), v3(p, -1.0, 0.0, 1.0)];
    let cw = [ccw[2].clone(), ccw[1].clone(), ccw[0].clone()];
    for ring in [ccw, cw] {
        let n = polygon_normal(&ring, &eps).unwrap();
        assert_eq!(n.to_f64(), nalgebra::Vector3::new(0.0, 0.0, 1.0));
    }
}

#[test]
fn newell_normal_handles_larger_rings() {
    let p = Prec::decimal(30);
    let eps = p.epsilon();
    // Hexagon at z = 2, slightly uneven ordering start.
    let mut ring = Vec::new();
    for k in 0..6 {
        let theta = std::f64::consts::FRAC_PI_3 * k as f64;
        ring.push(v3(p, theta.cos(), theta.sin(), 2.0));
    }
    let n = polygon_normal(&ring, &eps).unwrap();
    assert!((n.dot(&v3(p, 0.0, 0.0, 1.0)) - p.one()).abs() < p.from_f64(1e-15));
}

#[test]
fn collinear_ring_is_degenerate() {
    let p = Prec::decimal(30);
    let eps = p.epsilon();
    let ring = [v3(p, 0.0, 0.0, 1.0), v3(p, 1.0, 0.0, 1.0), v3(p, 2.0, 0.0, 1.0)];
    assert!(polygon_normal(&ring, &eps).is_err());
}

#[test]
fn build_rejects_malformed_input() {
    let p = Prec::decimal(30);
    let r = p.one();
    let tri = [v3(p, 1.0, 0.0, 0.0), v3(p, 0.0, 1.0, 0.0), v3(p, 0.0, 0.0, 1.0)];

    let empty: &[&[usize]] = &[];
    assert!(matches!(
        Polyhedron::build(p, &r, &tri, empty),
        Err(BuildError::Empty { .. })
    ));
    assert!(matches!(
        Polyhedron::build(p, &r, &tri, &[&[0, 1]]),
        Err(BuildError::BadFaceArity { face: 0, arity: 2 })
    ));
    assert!(matches!(
        Polyhedron::build(p, &r, &tri, &[&[0, 1, 7]]),
        Err(BuildError::FaceIndexOutOfRange { index: 7, .. })
    ));
    assert!(matches!(
        Polyhedron::build(p, &r, &tri, &[&[0, 1, 0]]),
        Err(BuildError::RepeatedVertex { index: 0, .. })
    ));
}

#[test]
fn build_rejects_zero_basis_vertex() {
    let p = Prec::decimal(30);
    let r = p.one();
    let basis = [v3(p, 0.0, 0.0, 0.0), v3(p, 0.0, 1.0, 0.0), v3(p, 0.0, 0.0, 1.0)];
    assert!(matches!(
        Polyhedron::build(p, &r, &basis, &[&[0, 1, 2]]),
        Err(BuildError::DegenerateGeometry)
    ));
}

#[test]
fn build_detects_insufficient_precision() {
    // Two basis vertices that differ far below the working precision round
    // onto the same circumsphere point, leaving a zero-length face edge.
    let p = Prec::decimal(20);
    let r = p.one();
    let nudged = p.one() + p.int(10).pow(-40i32);
    let basis = [
        v3(p, 1.0, 0.0, 0.0),
        Vec3::new(nudged, p.zero(), p.zero()),
        v3(p, 0.0, 1.0, 0.0),
    ];
    assert!(matches!(
        Polyhedron::build(p, &r, &basis, &[&[0, 1, 2]]),
        Err(BuildError::InsufficientPrecision { face: 0, .. })
    ));
}

#[test]
fn build_rejects_bowtie_face() {
    // A ring whose Newell sum cancels to zero has no usable normal.
    let p = Prec::decimal(30);
    let r = p.one();
    let basis = [
        v3(p, 1.0, 0.0, 0.0),
        v3(p, 0.0, 1.0, 0.0),
        v3(p, 0.0, -1.0, 0.0),
        v3(p, -1.0, 0.0, 0.0),
    ];
    assert!(matches!(
        Polyhedron::build(p, &r, &basis, &[&[0, 1, 2, 3]]),
        Err(BuildError::DegenerateFace { face: 0 })
    ));
}

/// Axis-aligned cube at circumradius 1 and 50 digits: the face planes sit at
/// `1 / sqrt(3)` from the origin.
#[test]
fn cube_containment_scenario() {
    let p = Prec::decimal(50);
    let r = p.one();
    let def = crate::catalog::platonic::cube(p);
    let poly = def.build(p, &r).unwrap();

    let half_extent = 3.0_f64.sqrt().recip(); // 0.57735...
    assert!(poly.in_bounds(&v3(p, 0.0, 0.0, 0.0)));
    assert!(poly.in_bounds(&v3(p, half_extent - 0.001, 0.0, 0.0)));
    assert!(!poly.in_bounds(&v3(p, half_extent + 0.001, 0.0, 0.0)));
    assert!(!poly.in_bounds(&v3(p, 1.01, 0.0, 0.0)));

    // Exactly on a face plane counts as inside, including vertices and edge
    // points.
    let s = p.int(3).sqrt().recip();
    let vert_a = Vec3::new(s.clone(), s.clone(), s.clone());
    assert!(poly.in_bounds(&vert_a));
    let on_face = Vec3::new(s.clone(), p.zero(), p.zero());
    assert!(poly.in_bounds(&on_face));
    let edge_mid = Vec3::new(s.clone(), s, p.zero());
    assert!(poly.in_bounds(&edge_mid));
}

/// A regular tetrahedron: four triangular faces, unit normals, vertex
/// centroid at the origin.
#[test]
fn tetrahedron_build_invariants() {
    let p = Prec::decimal(50);
    let r = p.int(2);
    let eps = p.epsilon();
    let poly = crate::catalog::platonic::tetrahedron(p)
        .build(p, &r)
        .unwrap();

    assert_eq!(poly.faces().len(), 4);
    for face in poly.faces() {
        assert_eq!(face.indices.len(), 3);
        assert!((face.normal.norm() - p.one()).abs() < eps);
    }
    let mut sum = v3(p, 0.0, 0.0, 0.0);
    for v in poly.vertices() {
        assert!((v.norm() - poly.radius()).abs() < eps);
        sum = sum.add(v);
    }
    assert!(sum.norm() < eps);
}

#[test]
fn in_bounds_is_idempotent_and_pure() {
    let p = Prec::decimal(30);
    let r = p.int(3);
    let poly = crate::catalog::platonic::octahedron(p)
        .build(p, &r)
        .unwrap();
    let probe = v3(p, 0.4, -1.1, 0.2);
    let first = poly.in_bounds(&probe);
    for _ in 0..10 {
        assert_eq!(poly.in_bounds(&probe), first);
    }
}

#[test]
fn shared_queries_across_threads() {
    let p = Prec::decimal(30);
    let r = p.int(5);
    let poly = crate::catalog::platonic::icosahedron(p)
        .build(p, &r)
        .unwrap();
    let inside = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let poly = &poly;
                scope.spawn(move || poly.in_bounds_f64(nalgebra::Vector3::new(0.1 * t as f64, 0.0, 0.0)))
            })
            .collect();
        handles.into_iter().all(|h| h.join().unwrap())
    });
    assert!(inside);
}

#[test]
fn face_ordering_does_not_change_the_verdict() {
    let p = Prec::decimal(30);
    let r = p.int(2);
    let def = crate::catalog::platonic::cube(p);
    let poly = def.build(p, &r).unwrap();
    // Rebuild with the face list reversed; the predicate must agree
    // everywhere (only the short-circuit cost may differ).
    let reversed: Vec<&[usize]> = def.faces.iter().rev().copied().collect();
    let poly_rev = Polyhedron::build(p, &r, &def.vertices, &reversed).unwrap();
    for probe in [
        v3(p, 0.0, 0.0, 0.0),
        v3(p, 1.0, 1.0, 1.0),
        v3(p, -0.9, 0.3, 0.8),
        v3(p, 2.5, 0.0, 0.0),
    ] {
        assert_eq!(poly.in_bounds(&probe), poly_rev.in_bounds(&probe));
    }
}
