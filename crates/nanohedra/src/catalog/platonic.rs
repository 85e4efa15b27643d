//! Platonic solids: canonical vertex tables and face data.
//!
//! Coordinates are the classical algebraic forms (golden-ratio pairs for the
//! icosahedral pair), evaluated once per call at the caller's precision. The
//! natural scale of a basis table is arbitrary; the polyhedron builder
//! renormalizes every vertex onto the circumsphere.

use crate::geom::Vec3;
use crate::num::Prec;

use super::ShapeDef;

/// Tetrahedron: 4 vertices, 4 faces (4 triangles).
pub fn tetrahedron(p: Prec) -> ShapeDef {
    let vertices = vec![
        Vec3::new(p.one(), p.one(), p.one()),
        Vec3::new(p.one(), -p.one(), -p.one()),
        Vec3::new(-p.one(), p.one(), -p.one()),
        Vec3::new(-p.one(), -p.one(), p.one()),
    ];
    ShapeDef::new("tetrahedron", vertices, TETRAHEDRON_FACES)
}

static TETRAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2], &[0, 3, 1], &[0, 2, 3], &[1, 3, 2],
];

/// Cube: 8 vertices, 6 faces (6 squares).
pub fn cube(p: Prec) -> ShapeDef {
    let vertices = vec![
        Vec3::new(p.one(), p.one(), p.one()),
        Vec3::new(p.one(), p.one(), -p.one()),
        Vec3::new(p.one(), -p.one(), p.one()),
        Vec3::new(p.one(), -p.one(), -p.one()),
        Vec3::new(-p.one(), p.one(), p.one()),
        Vec3::new(-p.one(), p.one(), -p.one()),
        Vec3::new(-p.one(), -p.one(), p.one()),
        Vec3::new(-p.one(), -p.one(), -p.one()),
    ];
    ShapeDef::new("cube", vertices, CUBE_FACES)
}

static CUBE_FACES: &[&[usize]] = &[
    &[0, 2, 3, 1], &[0, 1, 5, 4], &[0, 4, 6, 2], &[1, 3, 7, 5], &[2, 6, 7, 3], &[4, 5, 7, 6],
];

/// Octahedron: 6 vertices, 8 faces (8 triangles).
pub fn octahedron(p: Prec) -> ShapeDef {
    let vertices = vec![
        Vec3::new(p.one(), p.zero(), p.zero()),
        Vec3::new(-p.one(), p.zero(), p.zero()),
        Vec3::new(p.zero(), p.one(), p.zero()),
        Vec3::new(p.zero(), -p.one(), p.zero()),
        Vec3::new(p.zero(), p.zero(), p.one()),
        Vec3::new(p.zero(), p.zero(), -p.one()),
    ];
    ShapeDef::new("octahedron", vertices, OCTAHEDRON_FACES)
}

static OCTAHEDRON_FACES: &[&[usize]] = &[
    &[0, 2, 4], &[0, 5, 2], &[0, 4, 3], &[0, 3, 5], &[1, 4, 2], &[1, 2, 5], &[1, 3, 4],
    &[1, 5, 3],
];

/// Dodecahedron: 20 vertices, 12 faces (12 pentagons).
pub fn dodecahedron(p: Prec) -> ShapeDef {
    let c0 = (p.frac(1, 2) * p.int(5).sqrt()) - p.frac(1, 2); // 0.6180339887
    let c1 = p.frac(1, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 1.6180339887
    let vertices = vec![
        Vec3::new(p.one(), p.one(), p.one()),
        Vec3::new(p.one(), p.one(), -p.one()),
        Vec3::new(p.one(), -p.one(), p.one()),
        Vec3::new(p.one(), -p.one(), -p.one()),
        Vec3::new(-p.one(), p.one(), p.one()),
        Vec3::new(-p.one(), p.one(), -p.one()),
        Vec3::new(-p.one(), -p.one(), p.one()),
        Vec3::new(-p.one(), -p.one(), -p.one()),
        Vec3::new(p.zero(), c0.clone(), c1.clone()),
        Vec3::new(c1.clone(), p.zero(), c0.clone()),
        Vec3::new(c0.clone(), c1.clone(), p.zero()),
        Vec3::new(p.zero(), c0.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), p.zero(), c0.clone()),
        Vec3::new(c0.clone(), -c1.clone(), p.zero()),
        Vec3::new(p.zero(), -c0.clone(), c1.clone()),
        Vec3::new(c1.clone(), p.zero(), -c0.clone()),
        Vec3::new(-c0.clone(), c1.clone(), p.zero()),
        Vec3::new(p.zero(), -c0.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), p.zero(), -c0.clone()),
        Vec3::new(-c0.clone(), -c1.clone(), p.zero()),
    ];
    ShapeDef::new("dodecahedron", vertices, DODECAHEDRON_FACES)
}

static DODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 9, 15, 1, 10], &[0, 8, 14, 2, 9], &[0, 10, 16, 4, 8], &[1, 15, 3, 17, 11],
    &[1, 11, 5, 16, 10], &[2, 13, 3, 15, 9], &[2, 14, 6, 19, 13], &[3, 13, 19, 7, 17],
    &[4, 16, 5, 18, 12], &[4, 12, 6, 14, 8], &[5, 11, 17, 7, 18], &[6, 12, 18, 7, 19],
];

/// Icosahedron: 12 vertices, 20 faces (20 triangles).
pub fn icosahedron(p: Prec) -> ShapeDef {
    let c0 = p.frac(1, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 1.6180339887
    let vertices = vec![
        Vec3::new(p.zero(), p.one(), c0.clone()),
        Vec3::new(c0.clone(), p.zero(), p.one()),
        Vec3::new(p.one(), c0.clone(), p.zero()),
        Vec3::new(p.zero(), p.one(), -c0.clone()),
        Vec3::new(-c0.clone(), p.zero(), p.one()),
        Vec3::new(p.one(), -c0.clone(), p.zero()),
        Vec3::new(p.zero(), -p.one(), c0.clone()),
        Vec3::new(c0.clone(), p.zero(), -p.one()),
        Vec3::new(-p.one(), c0.clone(), p.zero()),
        Vec3::new(p.zero(), -p.one(), -c0.clone()),
        Vec3::new(-c0.clone(), p.zero(), -p.one()),
        Vec3::new(-p.one(), -c0.clone(), p.zero()),
    ];
    ShapeDef::new("icosahedron", vertices, ICOSAHEDRON_FACES)
}

static ICOSAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2], &[0, 6, 1], &[0, 2, 8], &[0, 4, 6], &[0, 8, 4], &[1, 7, 2], &[1, 6, 5],
    &[1, 5, 7], &[2, 7, 3], &[2, 3, 8], &[3, 7, 9], &[3, 10, 8], &[3, 9, 10], &[4, 11, 6],
    &[4, 8, 10], &[4, 10, 11], &[5, 6, 11], &[5, 9, 7], &[5, 11, 9], &[9, 11, 10],
];
