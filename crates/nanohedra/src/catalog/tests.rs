//! Catalog-wide invariant checks.
//!
//! The `EXPECTED` table pins each entry's combinatorics (vertex, edge and
//! face counts, the face-arity histogram) and the mean basis radius, which
//! together catch transcription slips in the data tables. The build-based
//! tests exercise the properties every carved particle relies on:
//! circumradius normalization, outward normals, an interior origin and a
//! rejected far exterior.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::geom::normal::centroid;

struct Expected {
    name: &'static str,
    vertices: usize,
    edges: usize,
    faces: usize,
    arities: &'static [(usize, usize)],
    mean_radius: f64,
}

static EXPECTED: &[Expected] = &[
    Expected { name: "tetrahedron", vertices: 4, edges: 6, faces: 4, arities: &[(3, 4)], mean_radius: 1.732050807569 },
    Expected { name: "cube", vertices: 8, edges: 12, faces: 6, arities: &[(4, 6)], mean_radius: 1.732050807569 },
    Expected { name: "octahedron", vertices: 6, edges: 12, faces: 8, arities: &[(3, 8)], mean_radius: 1.000000000000 },
    Expected { name: "dodecahedron", vertices: 20, edges: 30, faces: 12, arities: &[(5, 12)], mean_radius: 1.732050807569 },
    Expected { name: "icosahedron", vertices: 12, edges: 30, faces: 20, arities: &[(3, 20)], mean_radius: 1.902113032590 },
    Expected { name: "truncated tetrahedron", vertices: 12, edges: 18, faces: 8, arities: &[(3, 4), (6, 4)], mean_radius: 3.316624790355 },
    Expected { name: "cuboctahedron", vertices: 12, edges: 24, faces: 14, arities: &[(3, 8), (4, 6)], mean_radius: 1.414213562373 },
    Expected { name: "truncated cube", vertices: 24, edges: 36, faces: 14, arities: &[(3, 8), (8, 6)], mean_radius: 1.473625758208 },
    Expected { name: "truncated octahedron", vertices: 24, edges: 36, faces: 14, arities: &[(4, 6), (6, 8)], mean_radius: 2.236067977500 },
    Expected { name: "truncated cuboctahedron", vertices: 48, edges: 72, faces: 26, arities: &[(4, 12), (6, 8), (8, 6)], mean_radius: 4.635221825786 },
    Expected { name: "icosidodecahedron", vertices: 30, edges: 60, faces: 32, arities: &[(3, 20), (5, 12)], mean_radius: 1.618033988750 },
    Expected { name: "truncated dodecahedron", vertices: 60, edges: 90, faces: 32, arities: &[(3, 20), (10, 12)], mean_radius: 3.670440839327 },
    Expected { name: "truncated icosahedron", vertices: 60, edges: 90, faces: 32, arities: &[(5, 12), (6, 20)], mean_radius: 4.956037318135 },
    Expected { name: "truncated icosidodecahedron", vertices: 120, edges: 180, faces: 62, arities: &[(4, 30), (6, 20), (10, 12)], mean_radius: 4.700018079088 },
    Expected { name: "rhombicuboctahedron", vertices: 24, edges: 48, faces: 26, arities: &[(3, 8), (4, 18)], mean_radius: 2.797932651932 },
    Expected { name: "rhombicosidodecahedron", vertices: 60, edges: 120, faces: 62, arities: &[(3, 20), (4, 30), (5, 12)], mean_radius: 4.465901018831 },
    Expected { name: "snub cube", vertices: 24, edges: 60, faces: 38, arities: &[(3, 32), (4, 6)], mean_radius: 2.163001042632 },
    Expected { name: "snub dodecahedron", vertices: 60, edges: 150, faces: 92, arities: &[(3, 80), (5, 12)], mean_radius: 13.029316447183 },
    Expected { name: "triakis tetrahedron", vertices: 8, edges: 18, faces: 12, arities: &[(3, 12)], mean_radius: 0.461880215352 },
    Expected { name: "rhombic dodecahedron", vertices: 14, edges: 24, faces: 12, arities: &[(4, 12)], mean_radius: 0.923443087877 },
    Expected { name: "triakis octahedron", vertices: 14, edges: 36, faces: 24, arities: &[(3, 24)], mean_radius: 0.838536534408 },
    Expected { name: "tetrakis hexahedron", vertices: 14, edges: 36, faces: 24, arities: &[(3, 24)], mean_radius: 0.544200153823 },
    Expected { name: "deltoidal icositetrahedron", vertices: 26, edges: 48, faces: 24, arities: &[(4, 24)], mean_radius: 0.407495660980 },
    Expected { name: "disdyakis dodecahedron", vertices: 26, edges: 72, faces: 48, arities: &[(3, 48)], mean_radius: 0.238418645370 },
    Expected { name: "rhombic triacontahedron", vertices: 32, edges: 60, faces: 30, arities: &[(4, 30)], mean_radius: 0.685943784408 },
    Expected { name: "triakis icosahedron", vertices: 32, edges: 90, faces: 60, arities: &[(3, 60)], mean_radius: 0.295436924955 },
    Expected { name: "pentakis dodecahedron", vertices: 32, edges: 90, faces: 60, arities: &[(3, 60)], mean_radius: 0.218390782200 },
    Expected { name: "deltoidal hexecontahedron", vertices: 62, edges: 120, faces: 60, arities: &[(4, 60)], mean_radius: 0.235874764225 },
    Expected { name: "disdyakis triacontahedron", vertices: 62, edges: 180, faces: 120, arities: &[(3, 120)], mean_radius: 0.221422640953 },
    Expected { name: "pentagonal icositetrahedron", vertices: 38, edges: 60, faces: 24, arities: &[(5, 24)], mean_radius: 0.516995367184 },
    Expected { name: "pentagonal hexecontahedron", vertices: 92, edges: 150, faces: 60, arities: &[(5, 60)], mean_radius: 0.080164238897 },
    Expected { name: "chamfered tetrahedron", vertices: 16, edges: 24, faces: 10, arities: &[(3, 4), (6, 6)], mean_radius: 0.691411330420 },
    Expected { name: "chamfered cube", vertices: 32, edges: 48, faces: 18, arities: &[(4, 6), (6, 12)], mean_radius: 1.097537975364 },
    Expected { name: "chamfered octahedron", vertices: 30, edges: 48, faces: 20, arities: &[(3, 8), (6, 12)], mean_radius: 0.651849957403 },
    Expected { name: "chamfered dodecahedron", vertices: 80, edges: 120, faces: 42, arities: &[(5, 12), (6, 30)], mean_radius: 1.443303343975 },
    Expected { name: "chamfered icosahedron", vertices: 72, edges: 120, faces: 50, arities: &[(3, 20), (6, 30)], mean_radius: 1.591505048203 },
    Expected { name: "triangular bipyramid", vertices: 5, edges: 9, faces: 6, arities: &[(3, 6)], mean_radius: 1.165685424949 },
    Expected { name: "pentagonal bipyramid", vertices: 7, edges: 15, faces: 10, arities: &[(3, 10)], mean_radius: 0.890866853929 },
    Expected { name: "elongated square bipyramid", vertices: 10, edges: 20, faces: 12, arities: &[(3, 8), (4, 4)], mean_radius: 1.868483358530 },
    Expected { name: "elongated square gyrobicupola", vertices: 24, edges: 48, faces: 26, arities: &[(3, 8), (4, 18)], mean_radius: 2.797932651932 },
    Expected { name: "gyrate rhombicosidodecahedron", vertices: 60, edges: 120, faces: 62, arities: &[(3, 20), (4, 30), (5, 12)], mean_radius: 4.465901018831 },
    Expected { name: "parabigyrate rhombicosidodecahedron", vertices: 60, edges: 120, faces: 62, arities: &[(3, 20), (4, 30), (5, 12)], mean_radius: 4.465901018831 },
    Expected { name: "metabigyrate rhombicosidodecahedron", vertices: 60, edges: 120, faces: 62, arities: &[(3, 20), (4, 30), (5, 12)], mean_radius: 4.465901018831 },
    Expected { name: "trigyrate rhombicosidodecahedron", vertices: 60, edges: 120, faces: 62, arities: &[(3, 20), (4, 30), (5, 12)], mean_radius: 4.465901018831 },
];

fn edge_count(def: &ShapeDef) -> usize {
    let mut edges = HashSet::new();
    for face in def.faces {
        for (k, &a) in face.iter().enumerate() {
            let b = face[(k + 1) % face.len()];
            edges.insert((a.min(b), a.max(b)));
        }
    }
    edges.len()
}

#[test]
fn registry_covers_every_expected_entry() {
    assert_eq!(CATALOG.len(), EXPECTED.len());
    let p = Prec::decimal(25);
    for exp in EXPECTED {
        assert!(by_name(exp.name, p).is_some(), "missing {}", exp.name);
    }
    assert!(by_name("pentagonal garden shed", p).is_none());
}

#[test]
fn tables_match_expected_combinatorics() {
    let p = Prec::decimal(25);
    for exp in EXPECTED {
        let def = by_name(exp.name, p).unwrap();
        assert_eq!(def.vertices.len(), exp.vertices, "{} V", exp.name);
        assert_eq!(def.faces.len(), exp.faces, "{} F", exp.name);
        let edges = edge_count(&def);
        assert_eq!(edges, exp.edges, "{} E", exp.name);
        // Convex polyhedra satisfy Euler's formula.
        assert_eq!(
            def.vertices.len() + def.faces.len(),
            edges + 2,
            "{} Euler",
            exp.name
        );
        let mut hist: Vec<(usize, usize)> = Vec::new();
        for face in def.faces {
            match hist.iter_mut().find(|(a, _)| *a == face.len()) {
                Some((_, n)) => *n += 1,
                None => hist.push((face.len(), 1)),
            }
        }
        hist.sort_unstable();
        assert_eq!(hist, exp.arities, "{} arity histogram", exp.name);
    }
}

#[test]
fn tables_match_expected_mean_radius() {
    let p = Prec::decimal(25);
    for exp in EXPECTED {
        let def = by_name(exp.name, p).unwrap();
        let mean: f64 = def
            .vertices
            .iter()
            .map(|v| v.norm().to_f64())
            .sum::<f64>()
            / def.vertices.len() as f64;
        assert!(
            (mean - exp.mean_radius).abs() < 1e-9,
            "{}: mean basis radius {mean} != {}",
            exp.name,
            exp.mean_radius
        );
    }
}

#[test]
fn every_scaled_vertex_sits_on_the_circumsphere() {
    let p = Prec::decimal(40);
    let radius = p.scalar("17.5").unwrap();
    let eps = p.epsilon();
    for def in all(p) {
        let poly = def.build(p, &radius).unwrap();
        for v in poly.vertices() {
            assert!(
                (v.norm() - &radius).abs() < eps,
                "{}: vertex off the circumsphere",
                def.name
            );
        }
    }
}

#[test]
fn every_face_normal_is_unit_and_outward() {
    let p = Prec::decimal(40);
    let radius = p.int(10);
    let eps = p.epsilon();
    for def in all(p) {
        let poly = def.build(p, &radius).unwrap();
        for face in poly.faces() {
            assert!(
                (face.normal.norm() - p.one()).abs() < eps,
                "{}: non-unit normal",
                def.name
            );
            let ring: Vec<_> = face
                .indices
                .iter()
                .map(|&i| poly.vertices()[i].clone())
                .collect();
            assert!(
                !face.normal.dot(&centroid(&ring)).is_sign_negative(),
                "{}: inward normal",
                def.name
            );
        }
    }
}

#[test]
fn origin_and_near_origin_points_are_inside() {
    let p = Prec::decimal(30);
    let radius = p.int(8);
    for def in all(p) {
        let poly = def.build(p, &radius).unwrap();
        assert!(
            poly.in_bounds_f64(nalgebra::Vector3::zeros()),
            "{}: origin escaped",
            def.name
        );
        // A quarter-radius probe along the first vertex direction stays
        // well behind every face plane.
        let probe = poly.vertices()[0].scale(&p.frac(1, 4));
        assert!(poly.in_bounds(&probe), "{}: interior probe escaped", def.name);
    }
}

#[test]
fn far_exterior_points_are_rejected_in_every_direction() {
    let p = Prec::decimal(30);
    let radius = p.int(8);
    let mut rng = StdRng::seed_from_u64(7);
    let mut dirs = vec![
        nalgebra::Vector3::new(1.0, 0.0, 0.0),
        nalgebra::Vector3::new(0.0, 1.0, 0.0),
        nalgebra::Vector3::new(0.0, 0.0, 1.0),
        nalgebra::Vector3::new(1.0, 1.0, 1.0),
    ];
    for _ in 0..8 {
        dirs.push(nalgebra::Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        ));
    }
    for def in all(p) {
        let poly = def.build(p, &radius).unwrap();
        for dir in &dirs {
            if dir.norm() < 1e-3 {
                continue;
            }
            let probe = dir.normalize() * (poly.radius_f64() * 10.0);
            assert!(
                !poly.in_bounds_f64(probe),
                "{}: {probe:?} should be far outside",
                def.name
            );
        }
    }
}

#[test]
fn chirality_mirrors_the_containment_region() {
    let p = Prec::decimal(30);
    let radius = p.int(5);
    let laevo = archimedean::snub_cube(p, Chirality::Laevo)
        .build(p, &radius)
        .unwrap();
    let dextro = archimedean::snub_cube(p, Chirality::Dextro)
        .build(p, &radius)
        .unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let q = nalgebra::Vector3::new(
            rng.gen_range(-6.0..6.0),
            rng.gen_range(-6.0..6.0),
            rng.gen_range(-6.0..6.0),
        );
        let mirror = nalgebra::Vector3::new(-q.x, q.y, q.z);
        assert_eq!(laevo.in_bounds_f64(q), dextro.in_bounds_f64(mirror));
    }
    // The two hands genuinely differ: the mirrored vertex set is not a
    // rotation of the original, so at least one dextro vertex matches no
    // laevo vertex.
    let laevo_set: Vec<_> = laevo.vertices().iter().map(|v| v.to_f64()).collect();
    let strange = dextro
        .vertices()
        .iter()
        .map(|v| v.to_f64())
        .filter(|d| laevo_set.iter().all(|l| (d - l).norm() > 1e-6))
        .count();
    assert!(strange > 0, "dextro table coincides with laevo table");
}

#[test]
fn gyration_moves_only_the_cupola_caps() {
    let p = Prec::decimal(30);
    let base = archimedean::rhombicosidodecahedron(p);
    let gyrate = johnson::gyrate_rhombicosidodecahedron(p);
    let moved = base
        .vertices
        .iter()
        .zip(&gyrate.vertices)
        .filter(|(a, b)| a.sub(b).norm().to_f64() > 1e-9)
        .count();
    assert_eq!(moved, 5, "one pentagonal cap of five vertices moves");

    let para = johnson::parabigyrate_rhombicosidodecahedron(p);
    let moved = base
        .vertices
        .iter()
        .zip(&para.vertices)
        .filter(|(a, b)| a.sub(b).norm().to_f64() > 1e-9)
        .count();
    assert_eq!(moved, 10);
}

#[test]
fn pentagonal_duals_reciprocate_their_snubs() {
    // Each dual vertex is the pole of one snub face plane: its dot product
    // with every vertex of that face equals 1 exactly (reciprocation about
    // the unit sphere).
    let p = Prec::decimal(40);
    let eps = p.epsilon();
    let snub = archimedean::snub_cube(p, Chirality::Laevo);
    let dual = catalan::pentagonal_icositetrahedron(p, Chirality::Laevo);
    assert_eq!(dual.vertices.len(), snub.faces.len());
    for (pole, face) in dual.vertices.iter().zip(snub.faces) {
        for &vi in *face {
            assert!((pole.dot(&snub.vertices[vi]) - p.one()).abs() < eps);
        }
    }
}
