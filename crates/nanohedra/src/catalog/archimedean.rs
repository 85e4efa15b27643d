//! Archimedean solids: canonical vertex tables and face data.
//!
//! Vertex tables follow the standard sign/permutation constructions over a
//! handful of algebraic constants per solid (silver-ratio forms for the
//! octahedral family, golden-ratio forms for the icosahedral family, the
//! tribonacci constant for the snub cube and the real root of
//! x^3 = 2x + phi for the snub dodecahedron). The two snub solids are
//! chiral and take a [`Chirality`] argument; their raw vertex builders are
//! crate-visible so the dual catalog can reciprocate them.

use crate::geom::Vec3;
use crate::num::Prec;

use super::{Chirality, ShapeDef};

/// Truncated tetrahedron: 12 vertices, 8 faces (4 triangles, 4 hexagons).
pub fn truncated_tetrahedron(p: Prec) -> ShapeDef {
    let vertices = vec![
        Vec3::new(p.int(3), p.one(), p.one()),
        Vec3::new(p.int(3), -p.one(), -p.one()),
        Vec3::new(-p.int(3), p.one(), -p.one()),
        Vec3::new(-p.int(3), -p.one(), p.one()),
        Vec3::new(p.one(), p.int(3), p.one()),
        Vec3::new(p.one(), -p.int(3), -p.one()),
        Vec3::new(-p.one(), p.int(3), -p.one()),
        Vec3::new(-p.one(), -p.int(3), p.one()),
        Vec3::new(p.one(), p.one(), p.int(3)),
        Vec3::new(p.one(), -p.one(), -p.int(3)),
        Vec3::new(-p.one(), p.one(), -p.int(3)),
        Vec3::new(-p.one(), -p.one(), p.int(3)),
    ];
    ShapeDef::new("truncated tetrahedron", vertices, TRUNCATED_TETRAHEDRON_FACES)
}

static TRUNCATED_TETRAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 9, 10, 6, 4], &[0, 8, 11, 7, 5, 1], &[0, 4, 8], &[1, 5, 9], &[2, 3, 11, 8, 4, 6],
    &[2, 10, 9, 5, 7, 3], &[2, 6, 10], &[3, 7, 11],
];

/// Cuboctahedron: 12 vertices, 14 faces (8 triangles, 6 squares).
pub fn cuboctahedron(p: Prec) -> ShapeDef {
    let vertices = vec![
        Vec3::new(p.one(), p.one(), p.zero()),
        Vec3::new(p.one(), -p.one(), p.zero()),
        Vec3::new(-p.one(), p.one(), p.zero()),
        Vec3::new(-p.one(), -p.one(), p.zero()),
        Vec3::new(p.one(), p.zero(), p.one()),
        Vec3::new(p.one(), p.zero(), -p.one()),
        Vec3::new(-p.one(), p.zero(), p.one()),
        Vec3::new(-p.one(), p.zero(), -p.one()),
        Vec3::new(p.zero(), p.one(), p.one()),
        Vec3::new(p.zero(), p.one(), -p.one()),
        Vec3::new(p.zero(), -p.one(), p.one()),
        Vec3::new(p.zero(), -p.one(), -p.one()),
    ];
    ShapeDef::new("cuboctahedron", vertices, CUBOCTAHEDRON_FACES)
}

static CUBOCTAHEDRON_FACES: &[&[usize]] = &[
    &[0, 4, 1, 5], &[0, 9, 2, 8], &[0, 8, 4], &[0, 5, 9], &[1, 10, 3, 11], &[1, 4, 10],
    &[1, 11, 5], &[2, 7, 3, 6], &[2, 6, 8], &[2, 9, 7], &[3, 10, 6], &[3, 7, 11],
    &[4, 8, 6, 10], &[5, 11, 7, 9],
];

/// Truncated cube: 24 vertices, 14 faces (8 triangles, 6 octagons).
pub fn truncated_cube(p: Prec) -> ShapeDef {
    let c0 = p.int(2).sqrt() - p.int(1); // 0.4142135624
    let vertices = vec![
        Vec3::new(c0.clone(), p.one(), p.one()),
        Vec3::new(c0.clone(), p.one(), -p.one()),
        Vec3::new(c0.clone(), -p.one(), p.one()),
        Vec3::new(c0.clone(), -p.one(), -p.one()),
        Vec3::new(-c0.clone(), p.one(), p.one()),
        Vec3::new(-c0.clone(), p.one(), -p.one()),
        Vec3::new(-c0.clone(), -p.one(), p.one()),
        Vec3::new(-c0.clone(), -p.one(), -p.one()),
        Vec3::new(p.one(), c0.clone(), p.one()),
        Vec3::new(p.one(), c0.clone(), -p.one()),
        Vec3::new(p.one(), -c0.clone(), p.one()),
        Vec3::new(p.one(), -c0.clone(), -p.one()),
        Vec3::new(-p.one(), c0.clone(), p.one()),
        Vec3::new(-p.one(), c0.clone(), -p.one()),
        Vec3::new(-p.one(), -c0.clone(), p.one()),
        Vec3::new(-p.one(), -c0.clone(), -p.one()),
        Vec3::new(p.one(), p.one(), c0.clone()),
        Vec3::new(p.one(), p.one(), -c0.clone()),
        Vec3::new(p.one(), -p.one(), c0.clone()),
        Vec3::new(p.one(), -p.one(), -c0.clone()),
        Vec3::new(-p.one(), p.one(), c0.clone()),
        Vec3::new(-p.one(), p.one(), -c0.clone()),
        Vec3::new(-p.one(), -p.one(), c0.clone()),
        Vec3::new(-p.one(), -p.one(), -c0.clone()),
    ];
    ShapeDef::new("truncated cube", vertices, TRUNCATED_CUBE_FACES)
}

static TRUNCATED_CUBE_FACES: &[&[usize]] = &[
    &[0, 16, 17, 1, 5, 21, 20, 4], &[0, 4, 12, 14, 6, 2, 10, 8], &[0, 8, 16],
    &[1, 9, 11, 3, 7, 15, 13, 5], &[1, 17, 9], &[2, 6, 22, 23, 7, 3, 19, 18], &[2, 18, 10],
    &[3, 11, 19], &[4, 20, 12], &[5, 13, 21], &[6, 14, 22], &[7, 23, 15],
    &[8, 10, 18, 19, 11, 9, 17, 16], &[12, 20, 21, 13, 15, 23, 22, 14],
];

/// Truncated octahedron: 24 vertices, 14 faces (6 squares, 8 hexagons).
pub fn truncated_octahedron(p: Prec) -> ShapeDef {
    let vertices = vec![
        Vec3::new(p.zero(), p.one(), p.int(2)),
        Vec3::new(p.zero(), p.one(), -p.int(2)),
        Vec3::new(p.zero(), -p.one(), p.int(2)),
        Vec3::new(p.zero(), -p.one(), -p.int(2)),
        Vec3::new(p.zero(), p.int(2), p.one()),
        Vec3::new(p.zero(), p.int(2), -p.one()),
        Vec3::new(p.zero(), -p.int(2), p.one()),
        Vec3::new(p.zero(), -p.int(2), -p.one()),
        Vec3::new(p.one(), p.zero(), p.int(2)),
        Vec3::new(p.one(), p.zero(), -p.int(2)),
        Vec3::new(-p.one(), p.zero(), p.int(2)),
        Vec3::new(-p.one(), p.zero(), -p.int(2)),
        Vec3::new(p.one(), p.int(2), p.zero()),
        Vec3::new(p.one(), -p.int(2), p.zero()),
        Vec3::new(-p.one(), p.int(2), p.zero()),
        Vec3::new(-p.one(), -p.int(2), p.zero()),
        Vec3::new(p.int(2), p.zero(), p.one()),
        Vec3::new(p.int(2), p.zero(), -p.one()),
        Vec3::new(-p.int(2), p.zero(), p.one()),
        Vec3::new(-p.int(2), p.zero(), -p.one()),
        Vec3::new(p.int(2), p.one(), p.zero()),
        Vec3::new(p.int(2), -p.one(), p.zero()),
        Vec3::new(-p.int(2), p.one(), p.zero()),
        Vec3::new(-p.int(2), -p.one(), p.zero()),
    ];
    ShapeDef::new("truncated octahedron", vertices, TRUNCATED_OCTAHEDRON_FACES)
}

static TRUNCATED_OCTAHEDRON_FACES: &[&[usize]] = &[
    &[0, 10, 2, 8], &[0, 8, 16, 20, 12, 4], &[0, 4, 14, 22, 18, 10], &[1, 9, 3, 11],
    &[1, 5, 12, 20, 17, 9], &[1, 11, 19, 22, 14, 5], &[2, 6, 13, 21, 16, 8],
    &[2, 10, 18, 23, 15, 6], &[3, 9, 17, 21, 13, 7], &[3, 7, 15, 23, 19, 11], &[4, 12, 5, 14],
    &[6, 15, 7, 13], &[16, 21, 17, 20], &[18, 22, 19, 23],
];

/// Truncated cuboctahedron: 48 vertices, 26 faces (12 squares, 8 hexagons, 6 octagons).
pub fn truncated_cuboctahedron(p: Prec) -> ShapeDef {
    let c0 = p.int(1) + p.int(2).sqrt(); // 2.4142135624
    let c1 = p.int(1) + (p.int(2) * p.int(2).sqrt()); // 3.8284271247
    let vertices = vec![
        Vec3::new(p.one(), c0.clone(), c1.clone()),
        Vec3::new(p.one(), c0.clone(), -c1.clone()),
        Vec3::new(p.one(), -c0.clone(), c1.clone()),
        Vec3::new(p.one(), -c0.clone(), -c1.clone()),
        Vec3::new(-p.one(), c0.clone(), c1.clone()),
        Vec3::new(-p.one(), c0.clone(), -c1.clone()),
        Vec3::new(-p.one(), -c0.clone(), c1.clone()),
        Vec3::new(-p.one(), -c0.clone(), -c1.clone()),
        Vec3::new(p.one(), c1.clone(), c0.clone()),
        Vec3::new(p.one(), c1.clone(), -c0.clone()),
        Vec3::new(p.one(), -c1.clone(), c0.clone()),
        Vec3::new(p.one(), -c1.clone(), -c0.clone()),
        Vec3::new(-p.one(), c1.clone(), c0.clone()),
        Vec3::new(-p.one(), c1.clone(), -c0.clone()),
        Vec3::new(-p.one(), -c1.clone(), c0.clone()),
        Vec3::new(-p.one(), -c1.clone(), -c0.clone()),
        Vec3::new(c0.clone(), p.one(), c1.clone()),
        Vec3::new(c0.clone(), p.one(), -c1.clone()),
        Vec3::new(c0.clone(), -p.one(), c1.clone()),
        Vec3::new(c0.clone(), -p.one(), -c1.clone()),
        Vec3::new(-c0.clone(), p.one(), c1.clone()),
        Vec3::new(-c0.clone(), p.one(), -c1.clone()),
        Vec3::new(-c0.clone(), -p.one(), c1.clone()),
        Vec3::new(-c0.clone(), -p.one(), -c1.clone()),
        Vec3::new(c0.clone(), c1.clone(), p.one()),
        Vec3::new(c0.clone(), c1.clone(), -p.one()),
        Vec3::new(c0.clone(), -c1.clone(), p.one()),
        Vec3::new(c0.clone(), -c1.clone(), -p.one()),
        Vec3::new(-c0.clone(), c1.clone(), p.one()),
        Vec3::new(-c0.clone(), c1.clone(), -p.one()),
        Vec3::new(-c0.clone(), -c1.clone(), p.one()),
        Vec3::new(-c0.clone(), -c1.clone(), -p.one()),
        Vec3::new(c1.clone(), p.one(), c0.clone()),
        Vec3::new(c1.clone(), p.one(), -c0.clone()),
        Vec3::new(c1.clone(), -p.one(), c0.clone()),
        Vec3::new(c1.clone(), -p.one(), -c0.clone()),
        Vec3::new(-c1.clone(), p.one(), c0.clone()),
        Vec3::new(-c1.clone(), p.one(), -c0.clone()),
        Vec3::new(-c1.clone(), -p.one(), c0.clone()),
        Vec3::new(-c1.clone(), -p.one(), -c0.clone()),
        Vec3::new(c1.clone(), c0.clone(), p.one()),
        Vec3::new(c1.clone(), c0.clone(), -p.one()),
        Vec3::new(c1.clone(), -c0.clone(), p.one()),
        Vec3::new(c1.clone(), -c0.clone(), -p.one()),
        Vec3::new(-c1.clone(), c0.clone(), p.one()),
        Vec3::new(-c1.clone(), c0.clone(), -p.one()),
        Vec3::new(-c1.clone(), -c0.clone(), p.one()),
        Vec3::new(-c1.clone(), -c0.clone(), -p.one()),
    ];
    ShapeDef::new("truncated cuboctahedron", vertices, TRUNCATED_CUBOCTAHEDRON_FACES)
}

static TRUNCATED_CUBOCTAHEDRON_FACES: &[&[usize]] = &[
    &[0, 4, 20, 22, 6, 2, 18, 16], &[0, 8, 12, 4], &[0, 16, 32, 40, 24, 8],
    &[1, 17, 19, 3, 7, 23, 21, 5], &[1, 5, 13, 9], &[1, 9, 25, 41, 33, 17], &[2, 6, 14, 10],
    &[2, 10, 26, 42, 34, 18], &[3, 11, 15, 7], &[3, 19, 35, 43, 27, 11],
    &[4, 12, 28, 44, 36, 20], &[5, 21, 37, 45, 29, 13], &[6, 22, 38, 46, 30, 14],
    &[7, 15, 31, 47, 39, 23], &[8, 24, 25, 9, 13, 29, 28, 12],
    &[10, 14, 30, 31, 15, 11, 27, 26], &[16, 18, 34, 32], &[17, 33, 35, 19], &[20, 36, 38, 22],
    &[21, 23, 39, 37], &[24, 40, 41, 25], &[26, 27, 43, 42], &[28, 29, 45, 44],
    &[30, 46, 47, 31], &[32, 34, 42, 43, 35, 33, 41, 40], &[36, 44, 45, 37, 39, 47, 46, 38],
];

/// Icosidodecahedron: 30 vertices, 32 faces (20 triangles, 12 pentagons).
pub fn icosidodecahedron(p: Prec) -> ShapeDef {
    let c0 = p.frac(1, 4) + (p.frac(1, 4) * p.int(5).sqrt()); // 0.8090169944
    let c1 = p.frac(3, 4) + (p.frac(1, 4) * p.int(5).sqrt()); // 1.3090169944
    let c2 = p.frac(1, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 1.6180339887
    let vertices = vec![
        Vec3::new(p.zero(), p.zero(), c2.clone()),
        Vec3::new(c2.clone(), p.zero(), p.zero()),
        Vec3::new(p.zero(), c2.clone(), p.zero()),
        Vec3::new(p.zero(), p.zero(), -c2.clone()),
        Vec3::new(-c2.clone(), p.zero(), p.zero()),
        Vec3::new(p.zero(), -c2.clone(), p.zero()),
        Vec3::new(p.frac(1, 2), c0.clone(), c1.clone()),
        Vec3::new(c1.clone(), p.frac(1, 2), c0.clone()),
        Vec3::new(c0.clone(), c1.clone(), p.frac(1, 2)),
        Vec3::new(p.frac(1, 2), c0.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), p.frac(1, 2), c0.clone()),
        Vec3::new(c0.clone(), -c1.clone(), p.frac(1, 2)),
        Vec3::new(p.frac(1, 2), -c0.clone(), c1.clone()),
        Vec3::new(c1.clone(), p.frac(1, 2), -c0.clone()),
        Vec3::new(-c0.clone(), c1.clone(), p.frac(1, 2)),
        Vec3::new(p.frac(1, 2), -c0.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), p.frac(1, 2), -c0.clone()),
        Vec3::new(-c0.clone(), -c1.clone(), p.frac(1, 2)),
        Vec3::new(-p.frac(1, 2), c0.clone(), c1.clone()),
        Vec3::new(c1.clone(), -p.frac(1, 2), c0.clone()),
        Vec3::new(c0.clone(), c1.clone(), -p.frac(1, 2)),
        Vec3::new(-p.frac(1, 2), c0.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -p.frac(1, 2), c0.clone()),
        Vec3::new(c0.clone(), -c1.clone(), -p.frac(1, 2)),
        Vec3::new(-p.frac(1, 2), -c0.clone(), c1.clone()),
        Vec3::new(c1.clone(), -p.frac(1, 2), -c0.clone()),
        Vec3::new(-c0.clone(), c1.clone(), -p.frac(1, 2)),
        Vec3::new(-p.frac(1, 2), -c0.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -p.frac(1, 2), -c0.clone()),
        Vec3::new(-c0.clone(), -c1.clone(), -p.frac(1, 2)),
    ];
    ShapeDef::new("icosidodecahedron", vertices, ICOSIDODECAHEDRON_FACES)
}

static ICOSIDODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 12, 19, 7, 6], &[0, 6, 18], &[0, 18, 10, 22, 24], &[0, 24, 12], &[1, 13, 20, 8, 7],
    &[1, 7, 19], &[1, 19, 11, 23, 25], &[1, 25, 13], &[2, 14, 18, 6, 8], &[2, 8, 20],
    &[2, 20, 9, 21, 26], &[2, 26, 14], &[3, 9, 13, 25, 15], &[3, 21, 9], &[3, 15, 27],
    &[3, 27, 28, 16, 21], &[4, 10, 14, 26, 16], &[4, 22, 10], &[4, 16, 28],
    &[4, 28, 29, 17, 22], &[5, 11, 12, 24, 17], &[5, 23, 11], &[5, 29, 27, 15, 23],
    &[5, 17, 29], &[6, 7, 8], &[9, 20, 13], &[10, 18, 14], &[11, 19, 12], &[15, 25, 23],
    &[16, 26, 21], &[17, 24, 22], &[27, 29, 28],
];

/// Truncated dodecahedron: 60 vertices, 32 faces (20 triangles, 12 decagons).
pub fn truncated_dodecahedron(p: Prec) -> ShapeDef {
    let c0 = (p.frac(1, 2) * p.int(5).sqrt()) - p.frac(1, 2); // 0.6180339887
    let c1 = p.frac(1, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 1.6180339887
    let c2 = p.frac(3, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 2.6180339887
    let c3 = p.int(1) + p.int(5).sqrt(); // 3.2360679775
    let c4 = p.frac(5, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 3.6180339887
    let vertices = vec![
        Vec3::new(p.zero(), c0.clone(), c4.clone()),
        Vec3::new(c4.clone(), p.zero(), c0.clone()),
        Vec3::new(c0.clone(), c4.clone(), p.zero()),
        Vec3::new(p.zero(), c0.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), p.zero(), c0.clone()),
        Vec3::new(c0.clone(), -c4.clone(), p.zero()),
        Vec3::new(p.zero(), -c0.clone(), c4.clone()),
        Vec3::new(c4.clone(), p.zero(), -c0.clone()),
        Vec3::new(-c0.clone(), c4.clone(), p.zero()),
        Vec3::new(p.zero(), -c0.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), p.zero(), -c0.clone()),
        Vec3::new(-c0.clone(), -c4.clone(), p.zero()),
        Vec3::new(c0.clone(), c1.clone(), c3.clone()),
        Vec3::new(c3.clone(), c0.clone(), c1.clone()),
        Vec3::new(c1.clone(), c3.clone(), c0.clone()),
        Vec3::new(c0.clone(), c1.clone(), -c3.clone()),
        Vec3::new(-c3.clone(), c0.clone(), c1.clone()),
        Vec3::new(c1.clone(), -c3.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c1.clone(), c3.clone()),
        Vec3::new(c3.clone(), c0.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), c3.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c1.clone(), -c3.clone()),
        Vec3::new(-c3.clone(), c0.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -c3.clone(), c0.clone()),
        Vec3::new(-c0.clone(), c1.clone(), c3.clone()),
        Vec3::new(c3.clone(), -c0.clone(), c1.clone()),
        Vec3::new(c1.clone(), c3.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), c1.clone(), -c3.clone()),
        Vec3::new(-c3.clone(), -c0.clone(), c1.clone()),
        Vec3::new(c1.clone(), -c3.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c1.clone(), c3.clone()),
        Vec3::new(c3.clone(), -c0.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), c3.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c1.clone(), -c3.clone()),
        Vec3::new(-c3.clone(), -c0.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -c3.clone(), -c0.clone()),
        Vec3::new(c1.clone(), p.int(2), c2.clone()),
        Vec3::new(c2.clone(), c1.clone(), p.int(2)),
        Vec3::new(p.int(2), c2.clone(), c1.clone()),
        Vec3::new(c1.clone(), p.int(2), -c2.clone()),
        Vec3::new(-c2.clone(), c1.clone(), p.int(2)),
        Vec3::new(p.int(2), -c2.clone(), c1.clone()),
        Vec3::new(c1.clone(), -p.int(2), c2.clone()),
        Vec3::new(c2.clone(), c1.clone(), -p.int(2)),
        Vec3::new(-p.int(2), c2.clone(), c1.clone()),
        Vec3::new(c1.clone(), -p.int(2), -c2.clone()),
        Vec3::new(-c2.clone(), c1.clone(), -p.int(2)),
        Vec3::new(-p.int(2), -c2.clone(), c1.clone()),
        Vec3::new(-c1.clone(), p.int(2), c2.clone()),
        Vec3::new(c2.clone(), -c1.clone(), p.int(2)),
        Vec3::new(p.int(2), c2.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), p.int(2), -c2.clone()),
        Vec3::new(-c2.clone(), -c1.clone(), p.int(2)),
        Vec3::new(p.int(2), -c2.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -p.int(2), c2.clone()),
        Vec3::new(c2.clone(), -c1.clone(), -p.int(2)),
        Vec3::new(-p.int(2), c2.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -p.int(2), -c2.clone()),
        Vec3::new(-c2.clone(), -c1.clone(), -p.int(2)),
        Vec3::new(-p.int(2), -c2.clone(), -c1.clone()),
    ];
    ShapeDef::new("truncated dodecahedron", vertices, TRUNCATED_DODECAHEDRON_FACES)
}

static TRUNCATED_DODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 6, 18, 42, 49, 25, 13, 37, 36, 12], &[0, 24, 48, 40, 16, 28, 52, 54, 30, 6],
    &[0, 12, 24], &[1, 7, 19, 43, 50, 26, 14, 38, 37, 13],
    &[1, 25, 49, 41, 17, 29, 53, 55, 31, 7], &[1, 13, 25],
    &[2, 8, 20, 44, 48, 24, 12, 36, 38, 14], &[2, 26, 50, 39, 15, 27, 51, 56, 32, 8],
    &[2, 14, 26], &[3, 15, 39, 43, 19, 31, 55, 45, 21, 9],
    &[3, 9, 33, 57, 58, 34, 22, 46, 51, 27], &[3, 27, 15],
    &[4, 16, 40, 44, 20, 32, 56, 46, 22, 10], &[4, 10, 34, 58, 59, 35, 23, 47, 52, 28],
    &[4, 28, 16], &[5, 17, 41, 42, 18, 30, 54, 47, 23, 11],
    &[5, 11, 35, 59, 57, 33, 21, 45, 53, 29], &[5, 29, 17], &[6, 30, 18], &[7, 31, 19],
    &[8, 32, 20], &[9, 21, 33], &[10, 22, 34], &[11, 23, 35], &[36, 37, 38], &[39, 50, 43],
    &[40, 48, 44], &[41, 49, 42], &[45, 55, 53], &[46, 56, 51], &[47, 54, 52], &[57, 59, 58],
];

/// Truncated icosahedron: 60 vertices, 32 faces (12 pentagons, 20 hexagons).
pub fn truncated_icosahedron(p: Prec) -> ShapeDef {
    let c0 = p.frac(1, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 1.6180339887
    let c1 = p.int(1) + p.int(5).sqrt(); // 3.2360679775
    let c2 = p.frac(5, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 3.6180339887
    let c3 = p.int(2) + p.int(5).sqrt(); // 4.2360679775
    let c4 = p.frac(3, 2) + (p.frac(3, 2) * p.int(5).sqrt()); // 4.8541019662
    let vertices = vec![
        Vec3::new(p.zero(), p.one(), c4.clone()),
        Vec3::new(c4.clone(), p.zero(), p.one()),
        Vec3::new(p.one(), c4.clone(), p.zero()),
        Vec3::new(p.zero(), p.one(), -c4.clone()),
        Vec3::new(-c4.clone(), p.zero(), p.one()),
        Vec3::new(p.one(), -c4.clone(), p.zero()),
        Vec3::new(p.zero(), -p.one(), c4.clone()),
        Vec3::new(c4.clone(), p.zero(), -p.one()),
        Vec3::new(-p.one(), c4.clone(), p.zero()),
        Vec3::new(p.zero(), -p.one(), -c4.clone()),
        Vec3::new(-c4.clone(), p.zero(), -p.one()),
        Vec3::new(-p.one(), -c4.clone(), p.zero()),
        Vec3::new(p.one(), c2.clone(), c1.clone()),
        Vec3::new(c1.clone(), p.one(), c2.clone()),
        Vec3::new(c2.clone(), c1.clone(), p.one()),
        Vec3::new(p.one(), c2.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), p.one(), c2.clone()),
        Vec3::new(c2.clone(), -c1.clone(), p.one()),
        Vec3::new(p.one(), -c2.clone(), c1.clone()),
        Vec3::new(c1.clone(), p.one(), -c2.clone()),
        Vec3::new(-c2.clone(), c1.clone(), p.one()),
        Vec3::new(p.one(), -c2.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), p.one(), -c2.clone()),
        Vec3::new(-c2.clone(), -c1.clone(), p.one()),
        Vec3::new(-p.one(), c2.clone(), c1.clone()),
        Vec3::new(c1.clone(), -p.one(), c2.clone()),
        Vec3::new(c2.clone(), c1.clone(), -p.one()),
        Vec3::new(-p.one(), c2.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -p.one(), c2.clone()),
        Vec3::new(c2.clone(), -c1.clone(), -p.one()),
        Vec3::new(-p.one(), -c2.clone(), c1.clone()),
        Vec3::new(c1.clone(), -p.one(), -c2.clone()),
        Vec3::new(-c2.clone(), c1.clone(), -p.one()),
        Vec3::new(-p.one(), -c2.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -p.one(), -c2.clone()),
        Vec3::new(-c2.clone(), -c1.clone(), -p.one()),
        Vec3::new(c0.clone(), p.int(2), c3.clone()),
        Vec3::new(c3.clone(), c0.clone(), p.int(2)),
        Vec3::new(p.int(2), c3.clone(), c0.clone()),
        Vec3::new(c0.clone(), p.int(2), -c3.clone()),
        Vec3::new(-c3.clone(), c0.clone(), p.int(2)),
        Vec3::new(p.int(2), -c3.clone(), c0.clone()),
        Vec3::new(c0.clone(), -p.int(2), c3.clone()),
        Vec3::new(c3.clone(), c0.clone(), -p.int(2)),
        Vec3::new(-p.int(2), c3.clone(), c0.clone()),
        Vec3::new(c0.clone(), -p.int(2), -c3.clone()),
        Vec3::new(-c3.clone(), c0.clone(), -p.int(2)),
        Vec3::new(-p.int(2), -c3.clone(), c0.clone()),
        Vec3::new(-c0.clone(), p.int(2), c3.clone()),
        Vec3::new(c3.clone(), -c0.clone(), p.int(2)),
        Vec3::new(p.int(2), c3.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), p.int(2), -c3.clone()),
        Vec3::new(-c3.clone(), -c0.clone(), p.int(2)),
        Vec3::new(p.int(2), -c3.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -p.int(2), c3.clone()),
        Vec3::new(c3.clone(), -c0.clone(), -p.int(2)),
        Vec3::new(-p.int(2), c3.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -p.int(2), -c3.clone()),
        Vec3::new(-c3.clone(), -c0.clone(), -p.int(2)),
        Vec3::new(-p.int(2), -c3.clone(), -c0.clone()),
    ];
    ShapeDef::new("truncated icosahedron", vertices, TRUNCATED_ICOSAHEDRON_FACES)
}

static TRUNCATED_ICOSAHEDRON_FACES: &[&[usize]] = &[
    &[0, 6, 42, 25, 13, 36], &[0, 48, 16, 28, 54, 6], &[0, 36, 12, 24, 48],
    &[1, 7, 43, 26, 14, 37], &[1, 49, 17, 29, 55, 7], &[1, 37, 13, 25, 49],
    &[2, 8, 44, 24, 12, 38], &[2, 50, 15, 27, 56, 8], &[2, 38, 14, 26, 50],
    &[3, 39, 19, 31, 45, 9], &[3, 9, 57, 34, 22, 51], &[3, 51, 27, 15, 39],
    &[4, 40, 20, 32, 46, 10], &[4, 10, 58, 35, 23, 52], &[4, 52, 28, 16, 40],
    &[5, 41, 18, 30, 47, 11], &[5, 11, 59, 33, 21, 53], &[5, 53, 29, 17, 41],
    &[6, 54, 30, 18, 42], &[7, 55, 31, 19, 43], &[8, 56, 32, 20, 44], &[9, 45, 21, 33, 57],
    &[10, 46, 22, 34, 58], &[11, 47, 23, 35, 59], &[12, 36, 13, 37, 14, 38],
    &[15, 50, 26, 43, 19, 39], &[16, 48, 24, 44, 20, 40], &[17, 49, 25, 42, 18, 41],
    &[21, 45, 31, 55, 29, 53], &[22, 46, 32, 56, 27, 51], &[23, 47, 30, 54, 28, 52],
    &[33, 59, 35, 58, 34, 57],
];

/// Truncated icosidodecahedron: 120 vertices, 62 faces (30 squares, 20 hexagons, 12 decagons).
pub fn truncated_icosidodecahedron(p: Prec) -> ShapeDef {
    let c0 = (p.frac(1, 2) * p.int(5).sqrt()) - p.frac(1, 2); // 0.6180339887
    let c1 = p.int(5).sqrt() - p.int(1); // 1.2360679775
    let c2 = p.frac(1, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 1.6180339887
    let c3 = p.int(5).sqrt(); // 2.2360679775
    let c4 = p.frac(3, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 2.6180339887
    let c5 = p.int(1) + p.int(5).sqrt(); // 3.2360679775
    let c6 = p.frac(5, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 3.6180339887
    let c7 = p.frac(1, 2) + (p.frac(3, 2) * p.int(5).sqrt()); // 3.8541019662
    let c8 = p.int(2) + p.int(5).sqrt(); // 4.2360679775
    let c9 = p.frac(7, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 4.6180339887
    let vertices = vec![
        Vec3::new(c0.clone(), c0.clone(), c9.clone()),
        Vec3::new(c9.clone(), c0.clone(), c0.clone()),
        Vec3::new(c0.clone(), c9.clone(), c0.clone()),
        Vec3::new(c0.clone(), c0.clone(), -c9.clone()),
        Vec3::new(-c9.clone(), c0.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c9.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c0.clone(), c9.clone()),
        Vec3::new(c9.clone(), c0.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), c9.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c0.clone(), -c9.clone()),
        Vec3::new(-c9.clone(), c0.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c9.clone(), c0.clone()),
        Vec3::new(-c0.clone(), c0.clone(), c9.clone()),
        Vec3::new(c9.clone(), -c0.clone(), c0.clone()),
        Vec3::new(c0.clone(), c9.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), c0.clone(), -c9.clone()),
        Vec3::new(-c9.clone(), -c0.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c9.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c0.clone(), c9.clone()),
        Vec3::new(c9.clone(), -c0.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), c9.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c0.clone(), -c9.clone()),
        Vec3::new(-c9.clone(), -c0.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c9.clone(), -c0.clone()),
        Vec3::new(c1.clone(), c2.clone(), c8.clone()),
        Vec3::new(c8.clone(), c1.clone(), c2.clone()),
        Vec3::new(c2.clone(), c8.clone(), c1.clone()),
        Vec3::new(c1.clone(), c2.clone(), -c8.clone()),
        Vec3::new(-c8.clone(), c1.clone(), c2.clone()),
        Vec3::new(c2.clone(), -c8.clone(), c1.clone()),
        Vec3::new(c1.clone(), -c2.clone(), c8.clone()),
        Vec3::new(c8.clone(), c1.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), c8.clone(), c1.clone()),
        Vec3::new(c1.clone(), -c2.clone(), -c8.clone()),
        Vec3::new(-c8.clone(), c1.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), -c8.clone(), c1.clone()),
        Vec3::new(-c1.clone(), c2.clone(), c8.clone()),
        Vec3::new(c8.clone(), -c1.clone(), c2.clone()),
        Vec3::new(c2.clone(), c8.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), c2.clone(), -c8.clone()),
        Vec3::new(-c8.clone(), -c1.clone(), c2.clone()),
        Vec3::new(c2.clone(), -c8.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -c2.clone(), c8.clone()),
        Vec3::new(c8.clone(), -c1.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), c8.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -c2.clone(), -c8.clone()),
        Vec3::new(-c8.clone(), -c1.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), -c8.clone(), -c1.clone()),
        Vec3::new(c0.clone(), c4.clone(), c7.clone()),
        Vec3::new(c7.clone(), c0.clone(), c4.clone()),
        Vec3::new(c4.clone(), c7.clone(), c0.clone()),
        Vec3::new(c0.clone(), c4.clone(), -c7.clone()),
        Vec3::new(-c7.clone(), c0.clone(), c4.clone()),
        Vec3::new(c4.clone(), -c7.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c4.clone(), c7.clone()),
        Vec3::new(c7.clone(), c0.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), c7.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c4.clone(), -c7.clone()),
        Vec3::new(-c7.clone(), c0.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), -c7.clone(), c0.clone()),
        Vec3::new(-c0.clone(), c4.clone(), c7.clone()),
        Vec3::new(c7.clone(), -c0.clone(), c4.clone()),
        Vec3::new(c4.clone(), c7.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), c4.clone(), -c7.clone()),
        Vec3::new(-c7.clone(), -c0.clone(), c4.clone()),
        Vec3::new(c4.clone(), -c7.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c4.clone(), c7.clone()),
        Vec3::new(c7.clone(), -c0.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), c7.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c4.clone(), -c7.clone()),
        Vec3::new(-c7.clone(), -c0.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), -c7.clone(), -c0.clone()),
        Vec3::new(c3.clone(), p.int(2), c6.clone()),
        Vec3::new(c6.clone(), c3.clone(), p.int(2)),
        Vec3::new(p.int(2), c6.clone(), c3.clone()),
        Vec3::new(c3.clone(), p.int(2), -c6.clone()),
        Vec3::new(-c6.clone(), c3.clone(), p.int(2)),
        Vec3::new(p.int(2), -c6.clone(), c3.clone()),
        Vec3::new(c3.clone(), -p.int(2), c6.clone()),
        Vec3::new(c6.clone(), c3.clone(), -p.int(2)),
        Vec3::new(-p.int(2), c6.clone(), c3.clone()),
        Vec3::new(c3.clone(), -p.int(2), -c6.clone()),
        Vec3::new(-c6.clone(), c3.clone(), -p.int(2)),
        Vec3::new(-p.int(2), -c6.clone(), c3.clone()),
        Vec3::new(-c3.clone(), p.int(2), c6.clone()),
        Vec3::new(c6.clone(), -c3.clone(), p.int(2)),
        Vec3::new(p.int(2), c6.clone(), -c3.clone()),
        Vec3::new(-c3.clone(), p.int(2), -c6.clone()),
        Vec3::new(-c6.clone(), -c3.clone(), p.int(2)),
        Vec3::new(p.int(2), -c6.clone(), -c3.clone()),
        Vec3::new(-c3.clone(), -p.int(2), c6.clone()),
        Vec3::new(c6.clone(), -c3.clone(), -p.int(2)),
        Vec3::new(-p.int(2), c6.clone(), -c3.clone()),
        Vec3::new(-c3.clone(), -p.int(2), -c6.clone()),
        Vec3::new(-c6.clone(), -c3.clone(), -p.int(2)),
        Vec3::new(-p.int(2), -c6.clone(), -c3.clone()),
        Vec3::new(c2.clone(), p.int(3), c5.clone()),
        Vec3::new(c5.clone(), c2.clone(), p.int(3)),
        Vec3::new(p.int(3), c5.clone(), c2.clone()),
        Vec3::new(c2.clone(), p.int(3), -c5.clone()),
        Vec3::new(-c5.clone(), c2.clone(), p.int(3)),
        Vec3::new(p.int(3), -c5.clone(), c2.clone()),
        Vec3::new(c2.clone(), -p.int(3), c5.clone()),
        Vec3::new(c5.clone(), c2.clone(), -p.int(3)),
        Vec3::new(-p.int(3), c5.clone(), c2.clone()),
        Vec3::new(c2.clone(), -p.int(3), -c5.clone()),
        Vec3::new(-c5.clone(), c2.clone(), -p.int(3)),
        Vec3::new(-p.int(3), -c5.clone(), c2.clone()),
        Vec3::new(-c2.clone(), p.int(3), c5.clone()),
        Vec3::new(c5.clone(), -c2.clone(), p.int(3)),
        Vec3::new(p.int(3), c5.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), p.int(3), -c5.clone()),
        Vec3::new(-c5.clone(), -c2.clone(), p.int(3)),
        Vec3::new(p.int(3), -c5.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), -p.int(3), c5.clone()),
        Vec3::new(c5.clone(), -c2.clone(), -p.int(3)),
        Vec3::new(-p.int(3), c5.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), -p.int(3), -c5.clone()),
        Vec3::new(-c5.clone(), -c2.clone(), -p.int(3)),
        Vec3::new(-p.int(3), -c5.clone(), -c2.clone()),
    ];
    ShapeDef::new("truncated icosidodecahedron", vertices, TRUNCATED_ICOSIDODECAHEDRON_FACES)
}

static TRUNCATED_ICOSIDODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 12, 18, 6], &[0, 6, 30, 78, 109, 61, 49, 97, 72, 24], &[0, 24, 48, 60, 36, 12],
    &[1, 13, 19, 7], &[1, 7, 31, 79, 110, 62, 50, 98, 73, 25], &[1, 25, 49, 61, 37, 13],
    &[2, 14, 20, 8], &[2, 8, 32, 80, 108, 60, 48, 96, 74, 26], &[2, 26, 50, 62, 38, 14],
    &[3, 9, 21, 15], &[3, 27, 75, 103, 55, 67, 115, 81, 33, 9], &[3, 15, 39, 63, 51, 27],
    &[4, 10, 22, 16], &[4, 28, 76, 104, 56, 68, 116, 82, 34, 10], &[4, 16, 40, 64, 52, 28],
    &[5, 11, 23, 17], &[5, 29, 77, 102, 54, 66, 114, 83, 35, 11], &[5, 17, 41, 65, 53, 29],
    &[6, 18, 42, 66, 54, 30], &[7, 19, 43, 67, 55, 31], &[8, 20, 44, 68, 56, 32],
    &[9, 33, 57, 69, 45, 21], &[10, 34, 58, 70, 46, 22], &[11, 35, 59, 71, 47, 23],
    &[12, 36, 84, 100, 52, 64, 112, 90, 42, 18], &[13, 37, 85, 101, 53, 65, 113, 91, 43, 19],
    &[14, 38, 86, 99, 51, 63, 111, 92, 44, 20], &[15, 21, 45, 93, 118, 70, 58, 106, 87, 39],
    &[16, 22, 46, 94, 119, 71, 59, 107, 88, 40], &[17, 23, 47, 95, 117, 69, 57, 105, 89, 41],
    &[24, 72, 96, 48], &[25, 73, 97, 49], &[26, 74, 98, 50], &[27, 51, 99, 75],
    &[28, 52, 100, 76], &[29, 53, 101, 77], &[30, 54, 102, 78], &[31, 55, 103, 79],
    &[32, 56, 104, 80], &[33, 81, 105, 57], &[34, 82, 106, 58], &[35, 83, 107, 59],
    &[36, 60, 108, 84], &[37, 61, 109, 85], &[38, 62, 110, 86], &[39, 87, 111, 63],
    &[40, 88, 112, 64], &[41, 89, 113, 65], &[42, 90, 114, 66], &[43, 91, 115, 67],
    &[44, 92, 116, 68], &[45, 69, 117, 93], &[46, 70, 118, 94], &[47, 71, 119, 95],
    &[72, 97, 73, 98, 74, 96], &[75, 99, 86, 110, 79, 103], &[76, 100, 84, 108, 80, 104],
    &[77, 101, 85, 109, 78, 102], &[81, 115, 91, 113, 89, 105], &[82, 116, 92, 111, 87, 106],
    &[83, 114, 90, 112, 88, 107], &[93, 117, 95, 119, 94, 118],
];

/// Rhombicuboctahedron basis vertices, shared with derived catalog entries.
pub(crate) fn rhombicuboctahedron_vertices(p: Prec) -> Vec<Vec3> {
    let c0 = p.int(1) + p.int(2).sqrt(); // 2.4142135624
    let vertices = vec![
        Vec3::new(p.one(), p.one(), c0.clone()),
        Vec3::new(p.one(), p.one(), -c0.clone()),
        Vec3::new(p.one(), -p.one(), c0.clone()),
        Vec3::new(p.one(), -p.one(), -c0.clone()),
        Vec3::new(-p.one(), p.one(), c0.clone()),
        Vec3::new(-p.one(), p.one(), -c0.clone()),
        Vec3::new(-p.one(), -p.one(), c0.clone()),
        Vec3::new(-p.one(), -p.one(), -c0.clone()),
        Vec3::new(p.one(), c0.clone(), p.one()),
        Vec3::new(p.one(), c0.clone(), -p.one()),
        Vec3::new(p.one(), -c0.clone(), p.one()),
        Vec3::new(p.one(), -c0.clone(), -p.one()),
        Vec3::new(-p.one(), c0.clone(), p.one()),
        Vec3::new(-p.one(), c0.clone(), -p.one()),
        Vec3::new(-p.one(), -c0.clone(), p.one()),
        Vec3::new(-p.one(), -c0.clone(), -p.one()),
        Vec3::new(c0.clone(), p.one(), p.one()),
        Vec3::new(c0.clone(), p.one(), -p.one()),
        Vec3::new(c0.clone(), -p.one(), p.one()),
        Vec3::new(c0.clone(), -p.one(), -p.one()),
        Vec3::new(-c0.clone(), p.one(), p.one()),
        Vec3::new(-c0.clone(), p.one(), -p.one()),
        Vec3::new(-c0.clone(), -p.one(), p.one()),
        Vec3::new(-c0.clone(), -p.one(), -p.one()),
    ];
    vertices
}

/// Rhombicuboctahedron: 24 vertices, 26 faces (8 triangles, 18 squares).
pub fn rhombicuboctahedron(p: Prec) -> ShapeDef {
    ShapeDef::new("rhombicuboctahedron", rhombicuboctahedron_vertices(p), RHOMBICUBOCTAHEDRON_FACES)
}

static RHOMBICUBOCTAHEDRON_FACES: &[&[usize]] = &[
    &[0, 4, 6, 2], &[0, 2, 18, 16], &[0, 8, 12, 4], &[0, 16, 8], &[1, 3, 7, 5],
    &[1, 17, 19, 3], &[1, 5, 13, 9], &[1, 9, 17], &[2, 6, 14, 10], &[2, 10, 18],
    &[3, 11, 15, 7], &[3, 19, 11], &[4, 20, 22, 6], &[4, 12, 20], &[5, 7, 23, 21],
    &[5, 21, 13], &[6, 22, 14], &[7, 15, 23], &[8, 9, 13, 12], &[8, 16, 17, 9],
    &[10, 14, 15, 11], &[10, 11, 19, 18], &[12, 13, 21, 20], &[14, 22, 23, 15],
    &[16, 18, 19, 17], &[20, 21, 23, 22],
];

/// Rhombicosidodecahedron basis vertices, shared with derived catalog entries.
pub(crate) fn rhombicosidodecahedron_vertices(p: Prec) -> Vec<Vec3> {
    let c0 = p.frac(1, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 1.6180339887
    let c1 = p.frac(3, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 2.6180339887
    let c2 = p.int(1) + p.int(5).sqrt(); // 3.2360679775
    let c3 = p.frac(5, 2) + (p.frac(1, 2) * p.int(5).sqrt()); // 3.6180339887
    let c4 = p.int(2) + p.int(5).sqrt(); // 4.2360679775
    let vertices = vec![
        Vec3::new(p.one(), p.one(), c4.clone()),
        Vec3::new(c4.clone(), p.one(), p.one()),
        Vec3::new(p.one(), c4.clone(), p.one()),
        Vec3::new(p.one(), p.one(), -c4.clone()),
        Vec3::new(-c4.clone(), p.one(), p.one()),
        Vec3::new(p.one(), -c4.clone(), p.one()),
        Vec3::new(p.one(), -p.one(), c4.clone()),
        Vec3::new(c4.clone(), p.one(), -p.one()),
        Vec3::new(-p.one(), c4.clone(), p.one()),
        Vec3::new(p.one(), -p.one(), -c4.clone()),
        Vec3::new(-c4.clone(), p.one(), -p.one()),
        Vec3::new(-p.one(), -c4.clone(), p.one()),
        Vec3::new(-p.one(), p.one(), c4.clone()),
        Vec3::new(c4.clone(), -p.one(), p.one()),
        Vec3::new(p.one(), c4.clone(), -p.one()),
        Vec3::new(-p.one(), p.one(), -c4.clone()),
        Vec3::new(-c4.clone(), -p.one(), p.one()),
        Vec3::new(p.one(), -c4.clone(), -p.one()),
        Vec3::new(-p.one(), -p.one(), c4.clone()),
        Vec3::new(c4.clone(), -p.one(), -p.one()),
        Vec3::new(-p.one(), c4.clone(), -p.one()),
        Vec3::new(-p.one(), -p.one(), -c4.clone()),
        Vec3::new(-c4.clone(), -p.one(), -p.one()),
        Vec3::new(-p.one(), -c4.clone(), -p.one()),
        Vec3::new(c1.clone(), c0.clone(), c2.clone()),
        Vec3::new(c2.clone(), c1.clone(), c0.clone()),
        Vec3::new(c0.clone(), c2.clone(), c1.clone()),
        Vec3::new(c1.clone(), c0.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), c1.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c2.clone(), c1.clone()),
        Vec3::new(c1.clone(), -c0.clone(), c2.clone()),
        Vec3::new(c2.clone(), c1.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), c2.clone(), c1.clone()),
        Vec3::new(c1.clone(), -c0.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), c1.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c2.clone(), c1.clone()),
        Vec3::new(-c1.clone(), c0.clone(), c2.clone()),
        Vec3::new(c2.clone(), -c1.clone(), c0.clone()),
        Vec3::new(c0.clone(), c2.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), c0.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), -c1.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c2.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -c0.clone(), c2.clone()),
        Vec3::new(c2.clone(), -c1.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), c2.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -c0.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), -c1.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c2.clone(), -c1.clone()),
        Vec3::new(c3.clone(), p.zero(), c1.clone()),
        Vec3::new(c1.clone(), c3.clone(), p.zero()),
        Vec3::new(p.zero(), c1.clone(), c3.clone()),
        Vec3::new(c3.clone(), p.zero(), -c1.clone()),
        Vec3::new(-c1.clone(), c3.clone(), p.zero()),
        Vec3::new(p.zero(), -c1.clone(), c3.clone()),
        Vec3::new(-c3.clone(), p.zero(), c1.clone()),
        Vec3::new(c1.clone(), -c3.clone(), p.zero()),
        Vec3::new(p.zero(), c1.clone(), -c3.clone()),
        Vec3::new(-c3.clone(), p.zero(), -c1.clone()),
        Vec3::new(-c1.clone(), -c3.clone(), p.zero()),
        Vec3::new(p.zero(), -c1.clone(), -c3.clone()),
    ];
    vertices
}

/// Rhombicosidodecahedron: 60 vertices, 62 faces (20 triangles, 30 squares, 12 pentagons).
pub fn rhombicosidodecahedron(p: Prec) -> ShapeDef {
    ShapeDef::new("rhombicosidodecahedron", rhombicosidodecahedron_vertices(p), RHOMBICOSIDODECAHEDRON_FACES)
}

static RHOMBICOSIDODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 12, 18, 6], &[0, 6, 30, 48, 24], &[0, 50, 12], &[0, 24, 26, 50], &[1, 13, 19, 7],
    &[1, 7, 31, 49, 25], &[1, 48, 13], &[1, 25, 24, 48], &[2, 14, 20, 8], &[2, 8, 32, 50, 26],
    &[2, 49, 14], &[2, 26, 25, 49], &[3, 9, 21, 15], &[3, 27, 51, 33, 9], &[3, 15, 56],
    &[3, 56, 38, 27], &[4, 10, 22, 16], &[4, 28, 52, 34, 10], &[4, 16, 54], &[4, 54, 36, 28],
    &[5, 11, 23, 17], &[5, 29, 53, 35, 11], &[5, 17, 55], &[5, 55, 37, 29], &[6, 18, 53],
    &[6, 53, 29, 30], &[7, 19, 51], &[7, 51, 27, 31], &[8, 20, 52], &[8, 52, 28, 32],
    &[9, 59, 21], &[9, 33, 41, 59], &[10, 57, 22], &[10, 34, 39, 57], &[11, 58, 23],
    &[11, 35, 40, 58], &[12, 36, 54, 42, 18], &[12, 50, 32, 36], &[13, 37, 55, 43, 19],
    &[13, 48, 30, 37], &[14, 38, 56, 44, 20], &[14, 49, 31, 38], &[15, 21, 45, 57, 39],
    &[15, 39, 44, 56], &[16, 22, 46, 58, 40], &[16, 40, 42, 54], &[17, 23, 47, 59, 41],
    &[17, 41, 43, 55], &[18, 42, 35, 53], &[19, 43, 33, 51], &[20, 44, 34, 52],
    &[21, 59, 47, 45], &[22, 57, 45, 46], &[23, 58, 46, 47], &[24, 25, 26], &[27, 38, 31],
    &[28, 36, 32], &[29, 37, 30], &[33, 43, 41], &[34, 44, 39], &[35, 42, 40], &[45, 47, 46],
];

/// Snub cube basis vertices, shared with derived catalog entries.
pub(crate) fn snub_cube_vertices(p: Prec) -> Vec<Vec3> {
    let s33 = p.int(33).sqrt();
    // Tribonacci constant, the real root of t^3 = t^2 + t + 1.
    let t = (p.one() + (p.int(19) + p.int(3) * s33.clone()).cbrt() + (p.int(19) - p.int(3) * s33).cbrt()) / p.int(3); // 1.8392867552
    let c0 = t.clone().recip(); // 0.5436890127
    let c1 = t.clone(); // 1.8392867552
    let vertices = vec![
        Vec3::new(p.one(), c0.clone(), c1.clone()),
        Vec3::new(p.one(), -c0.clone(), -c1.clone()),
        Vec3::new(-p.one(), c0.clone(), -c1.clone()),
        Vec3::new(-p.one(), -c0.clone(), c1.clone()),
        Vec3::new(c1.clone(), p.one(), c0.clone()),
        Vec3::new(c1.clone(), -p.one(), -c0.clone()),
        Vec3::new(-c1.clone(), p.one(), -c0.clone()),
        Vec3::new(-c1.clone(), -p.one(), c0.clone()),
        Vec3::new(c0.clone(), c1.clone(), p.one()),
        Vec3::new(c0.clone(), -c1.clone(), -p.one()),
        Vec3::new(-c0.clone(), c1.clone(), -p.one()),
        Vec3::new(-c0.clone(), -c1.clone(), p.one()),
        Vec3::new(p.one(), c1.clone(), -c0.clone()),
        Vec3::new(p.one(), -c1.clone(), c0.clone()),
        Vec3::new(-p.one(), c1.clone(), c0.clone()),
        Vec3::new(-p.one(), -c1.clone(), -c0.clone()),
        Vec3::new(c0.clone(), p.one(), -c1.clone()),
        Vec3::new(c0.clone(), -p.one(), c1.clone()),
        Vec3::new(-c0.clone(), p.one(), c1.clone()),
        Vec3::new(-c0.clone(), -p.one(), -c1.clone()),
        Vec3::new(c1.clone(), c0.clone(), -p.one()),
        Vec3::new(c1.clone(), -c0.clone(), p.one()),
        Vec3::new(-c1.clone(), c0.clone(), p.one()),
        Vec3::new(-c1.clone(), -c0.clone(), -p.one()),
    ];
    vertices
}

/// Snub cube: 24 vertices, 38 faces (32 triangles, 6 squares). Chiral.
pub fn snub_cube(p: Prec, hand: Chirality) -> ShapeDef {
    ShapeDef::new("snub cube", hand.apply(snub_cube_vertices(p)), SNUB_CUBE_FACES)
}

pub(crate) static SNUB_CUBE_FACES: &[&[usize]] = &[
    &[0, 18, 3, 17], &[0, 4, 8], &[0, 21, 4], &[0, 8, 18], &[0, 17, 21], &[1, 19, 2, 16],
    &[1, 5, 9], &[1, 20, 5], &[1, 9, 19], &[1, 16, 20], &[2, 6, 10], &[2, 23, 6], &[2, 10, 16],
    &[2, 19, 23], &[3, 7, 11], &[3, 22, 7], &[3, 11, 17], &[3, 18, 22], &[4, 21, 5, 20],
    &[4, 12, 8], &[4, 20, 12], &[5, 13, 9], &[5, 21, 13], &[6, 23, 7, 22], &[6, 14, 10],
    &[6, 22, 14], &[7, 15, 11], &[7, 23, 15], &[8, 12, 10, 14], &[8, 14, 18], &[9, 13, 11, 15],
    &[9, 15, 19], &[10, 12, 16], &[11, 13, 17], &[12, 20, 16], &[13, 21, 17], &[14, 22, 18],
    &[15, 23, 19],
];

/// Snub dodecahedron basis vertices, shared with derived catalog entries.
pub(crate) fn snub_dodecahedron_vertices(p: Prec) -> Vec<Vec3> {
    let phi = p.phi();
    // Real root of x^3 = 2x + phi.
    let d = (phi.clone() / p.int(4) - p.frac(5, 108)).sqrt();
    let x = (phi.clone() / p.int(2) + d.clone()).cbrt() + (phi.clone() / p.int(2) - d).cbrt(); // 1.7155614997
    let a = x.clone() - x.clone().recip(); // 1.1326619650
    let b = x.clone() * phi.clone() + phi.clone().square() + phi.clone() / x; // 6.3370220643
    let c0 = (b.clone() * phi.clone().recip()) - a.clone() - phi.clone(); // 1.1657990695
    let c1 = p.int(2) * a.clone(); // 2.2653239299
    let c2 = a.clone() + (b.clone() * phi.clone().recip()) - phi.clone(); // 3.4311229994
    let c3 = b.clone() - phi.clone().recip() - (a.clone() * phi.clone()); // 3.8863025185
    let c4 = phi.clone() + (b.clone() * phi.clone().recip()) - a.clone(); // 4.4018670470
    let c5 = b.clone() + phi.clone().recip() - (a.clone() * phi.clone()); // 5.1223704960
    let c6 = a.clone() + phi.clone() + (b.clone() * phi.clone().recip()); // 6.6671909769
    let c7 = b.clone() + (a.clone() * phi.clone()) - phi.clone().recip(); // 7.5516736326
    let c8 = (b.clone() * phi.clone()) - p.int(1) - (a.clone() * phi.clone().recip()); // 8.5534934954
    let c9 = b.clone() + phi.clone().recip() + (a.clone() * phi.clone()); // 8.7877416101
    let c10 = (a.clone() * phi.clone().recip()) + (b.clone() * phi.clone()) - p.int(1); // 9.9535406796
    let c11 = p.int(1) + (b.clone() * phi.clone()) - (a.clone() * phi.clone().recip()); // 10.5534934954
    let c12 = p.int(1) + (a.clone() * phi.clone().recip()) + (b.clone() * phi.clone()); // 11.9535406796
    let c13 = p.int(2) * b.clone(); // 12.6740441286
    let vertices = vec![
        Vec3::new(c1.clone(), p.int(2), c13.clone()),
        Vec3::new(c1.clone(), -p.int(2), -c13.clone()),
        Vec3::new(-c1.clone(), p.int(2), -c13.clone()),
        Vec3::new(-c1.clone(), -p.int(2), c13.clone()),
        Vec3::new(c13.clone(), c1.clone(), p.int(2)),
        Vec3::new(c13.clone(), -c1.clone(), -p.int(2)),
        Vec3::new(-c13.clone(), c1.clone(), -p.int(2)),
        Vec3::new(-c13.clone(), -c1.clone(), p.int(2)),
        Vec3::new(p.int(2), c13.clone(), c1.clone()),
        Vec3::new(p.int(2), -c13.clone(), -c1.clone()),
        Vec3::new(-p.int(2), c13.clone(), -c1.clone()),
        Vec3::new(-p.int(2), -c13.clone(), c1.clone()),
        Vec3::new(c6.clone(), c5.clone(), c10.clone()),
        Vec3::new(c6.clone(), -c5.clone(), -c10.clone()),
        Vec3::new(-c6.clone(), c5.clone(), -c10.clone()),
        Vec3::new(-c6.clone(), -c5.clone(), c10.clone()),
        Vec3::new(c10.clone(), c6.clone(), c5.clone()),
        Vec3::new(c10.clone(), -c6.clone(), -c5.clone()),
        Vec3::new(-c10.clone(), c6.clone(), -c5.clone()),
        Vec3::new(-c10.clone(), -c6.clone(), c5.clone()),
        Vec3::new(c5.clone(), c10.clone(), c6.clone()),
        Vec3::new(c5.clone(), -c10.clone(), -c6.clone()),
        Vec3::new(-c5.clone(), c10.clone(), -c6.clone()),
        Vec3::new(-c5.clone(), -c10.clone(), c6.clone()),
        Vec3::new(c2.clone(), -c3.clone(), c12.clone()),
        Vec3::new(c2.clone(), c3.clone(), -c12.clone()),
        Vec3::new(-c2.clone(), -c3.clone(), -c12.clone()),
        Vec3::new(-c2.clone(), c3.clone(), c12.clone()),
        Vec3::new(c12.clone(), c2.clone(), -c3.clone()),
        Vec3::new(c12.clone(), -c2.clone(), c3.clone()),
        Vec3::new(-c12.clone(), c2.clone(), c3.clone()),
        Vec3::new(-c12.clone(), -c2.clone(), -c3.clone()),
        Vec3::new(-c3.clone(), c12.clone(), c2.clone()),
        Vec3::new(-c3.clone(), -c12.clone(), -c2.clone()),
        Vec3::new(c3.clone(), c12.clone(), -c2.clone()),
        Vec3::new(c3.clone(), -c12.clone(), c2.clone()),
        Vec3::new(c11.clone(), c0.clone(), c7.clone()),
        Vec3::new(c11.clone(), -c0.clone(), -c7.clone()),
        Vec3::new(-c11.clone(), c0.clone(), -c7.clone()),
        Vec3::new(-c11.clone(), -c0.clone(), c7.clone()),
        Vec3::new(c7.clone(), c11.clone(), c0.clone()),
        Vec3::new(c7.clone(), -c11.clone(), -c0.clone()),
        Vec3::new(-c7.clone(), c11.clone(), -c0.clone()),
        Vec3::new(-c7.clone(), -c11.clone(), c0.clone()),
        Vec3::new(c0.clone(), c7.clone(), c11.clone()),
        Vec3::new(c0.clone(), -c7.clone(), -c11.clone()),
        Vec3::new(-c0.clone(), c7.clone(), -c11.clone()),
        Vec3::new(-c0.clone(), -c7.clone(), c11.clone()),
        Vec3::new(c8.clone(), -c4.clone(), c9.clone()),
        Vec3::new(c8.clone(), c4.clone(), -c9.clone()),
        Vec3::new(-c8.clone(), -c4.clone(), -c9.clone()),
        Vec3::new(-c8.clone(), c4.clone(), c9.clone()),
        Vec3::new(c9.clone(), c8.clone(), -c4.clone()),
        Vec3::new(c9.clone(), -c8.clone(), c4.clone()),
        Vec3::new(-c9.clone(), c8.clone(), c4.clone()),
        Vec3::new(-c9.clone(), -c8.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), c9.clone(), c8.clone()),
        Vec3::new(-c4.clone(), -c9.clone(), -c8.clone()),
        Vec3::new(c4.clone(), c9.clone(), -c8.clone()),
        Vec3::new(c4.clone(), -c9.clone(), c8.clone()),
    ];
    vertices
}

/// Snub dodecahedron: 60 vertices, 92 faces (80 triangles, 12 pentagons). Chiral.
pub fn snub_dodecahedron(p: Prec, hand: Chirality) -> ShapeDef {
    ShapeDef::new(
        "snub dodecahedron",
        hand.apply(snub_dodecahedron_vertices(p)),
        SNUB_DODECAHEDRON_FACES,
    )
}

pub(crate) static SNUB_DODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 3, 24], &[0, 27, 3], &[0, 24, 48, 36, 12], &[0, 12, 44], &[0, 44, 27], &[1, 2, 25],
    &[1, 26, 2], &[1, 25, 49, 37, 13], &[1, 13, 45], &[1, 45, 26], &[2, 26, 50, 38, 14],
    &[2, 14, 46], &[2, 46, 25], &[3, 27, 51, 39, 15], &[3, 15, 47], &[3, 47, 24], &[4, 5, 28],
    &[4, 29, 5], &[4, 28, 52, 40, 16], &[4, 16, 36], &[4, 36, 29], &[5, 29, 53, 41, 17],
    &[5, 17, 37], &[5, 37, 28], &[6, 7, 30], &[6, 31, 7], &[6, 30, 54, 42, 18], &[6, 18, 38],
    &[6, 38, 31], &[7, 31, 55, 43, 19], &[7, 19, 39], &[7, 39, 30], &[8, 10, 32], &[8, 34, 10],
    &[8, 32, 56, 44, 20], &[8, 20, 40], &[8, 40, 34], &[9, 11, 33], &[9, 35, 11],
    &[9, 33, 57, 45, 21], &[9, 21, 41], &[9, 41, 35], &[10, 34, 58, 46, 22], &[10, 22, 42],
    &[10, 42, 32], &[11, 35, 59, 47, 23], &[11, 23, 43], &[11, 43, 33], &[12, 16, 20],
    &[12, 36, 16], &[12, 20, 44], &[13, 17, 21], &[13, 37, 17], &[13, 21, 45], &[14, 18, 22],
    &[14, 38, 18], &[14, 22, 46], &[15, 19, 23], &[15, 39, 19], &[15, 23, 47], &[16, 40, 20],
    &[17, 41, 21], &[18, 42, 22], &[19, 43, 23], &[24, 47, 59], &[24, 59, 48], &[25, 46, 58],
    &[25, 58, 49], &[26, 45, 57], &[26, 57, 50], &[27, 44, 56], &[27, 56, 51], &[28, 37, 49],
    &[28, 49, 52], &[29, 36, 48], &[29, 48, 53], &[30, 39, 51], &[30, 51, 54], &[31, 38, 50],
    &[31, 50, 55], &[32, 42, 54], &[32, 54, 56], &[33, 43, 55], &[33, 55, 57], &[34, 40, 52],
    &[34, 52, 58], &[35, 41, 53], &[35, 53, 59], &[48, 59, 53], &[49, 58, 52], &[50, 57, 55],
    &[51, 56, 54],
];
