//! Catalan solids: duals of the Archimedean solids.
//!
//! Vertex tables are the exact polar duals (face-plane poles) of the
//! partner Archimedean tables, listed in face-table order. The two
//! pentagonal duals reciprocate the snub vertex builders at run time since
//! their coordinates have no compact closed form; everything else is a
//! literal table.
//!
//! Catalan solids are not inscribable: their vertices lie on two or three
//! distinct radii, so the builder's circumsphere normalization projects
//! them onto the sphere and the faces come out near-planar rather than
//! planar. The Newell normals absorb that.

use crate::geom::Vec3;
use crate::num::Prec;

use super::archimedean::{
    snub_cube_vertices, snub_dodecahedron_vertices, SNUB_CUBE_FACES,
    SNUB_DODECAHEDRON_FACES,
};
use super::{Chirality, ShapeDef};

/// Poles of a solid's face planes with respect to the unit sphere, in
/// face-table order: the vertex table of the dual solid.
fn face_poles(vertices: &[Vec3], faces: &'static [&'static [usize]]) -> Vec<Vec3> {
    faces
        .iter()
        .map(|f| {
            let (v0, v1, v2) = (&vertices[f[0]], &vertices[f[1]], &vertices[f[2]]);
            let n = v1.sub(v0).cross(&v2.sub(v0));
            let d = n.dot(v0);
            n.scale(&d.recip())
        })
        .collect()
}

/// Triakis tetrahedron: 8 vertices, 12 faces (12 isosceles triangles). Dual of the truncated tetrahedron.
pub fn triakis_tetrahedron(p: Prec) -> ShapeDef {
    let vertices = vec![
        Vec3::new(p.frac(1, 3), p.frac(1, 3), -p.frac(1, 3)),
        Vec3::new(p.frac(1, 3), -p.frac(1, 3), p.frac(1, 3)),
        Vec3::new(p.frac(1, 5), p.frac(1, 5), p.frac(1, 5)),
        Vec3::new(p.frac(1, 5), -p.frac(1, 5), -p.frac(1, 5)),
        Vec3::new(-p.frac(1, 3), p.frac(1, 3), p.frac(1, 3)),
        Vec3::new(-p.frac(1, 3), -p.frac(1, 3), -p.frac(1, 3)),
        Vec3::new(-p.frac(1, 5), p.frac(1, 5), -p.frac(1, 5)),
        Vec3::new(-p.frac(1, 5), -p.frac(1, 5), p.frac(1, 5)),
    ];
    ShapeDef::new("triakis tetrahedron", vertices, TRIAKIS_TETRAHEDRON_FACES)
}

static TRIAKIS_TETRAHEDRON_FACES: &[&[usize]] = &[
    &[0, 2, 1], &[0, 1, 3], &[0, 4, 2], &[0, 3, 5], &[0, 6, 4], &[0, 5, 6], &[1, 2, 4],
    &[1, 5, 3], &[1, 4, 7], &[1, 7, 5], &[4, 6, 5], &[4, 5, 7],
];

/// Rhombic dodecahedron: 14 vertices, 12 faces (12 rhombi). Dual of the cuboctahedron.
pub fn rhombic_dodecahedron(p: Prec) -> ShapeDef {
    let vertices = vec![
        Vec3::new(p.one(), p.zero(), p.zero()),
        Vec3::new(p.zero(), p.one(), p.zero()),
        Vec3::new(p.frac(1, 2), p.frac(1, 2), p.frac(1, 2)),
        Vec3::new(p.frac(1, 2), p.frac(1, 2), -p.frac(1, 2)),
        Vec3::new(p.zero(), -p.one(), p.zero()),
        Vec3::new(p.frac(1, 2), -p.frac(1, 2), p.frac(1, 2)),
        Vec3::new(p.frac(1, 2), -p.frac(1, 2), -p.frac(1, 2)),
        Vec3::new(-p.one(), p.zero(), p.zero()),
        Vec3::new(-p.frac(1, 2), p.frac(1, 2), p.frac(1, 2)),
        Vec3::new(-p.frac(1, 2), p.frac(1, 2), -p.frac(1, 2)),
        Vec3::new(-p.frac(1, 2), -p.frac(1, 2), p.frac(1, 2)),
        Vec3::new(-p.frac(1, 2), -p.frac(1, 2), -p.frac(1, 2)),
        Vec3::new(p.zero(), p.zero(), p.one()),
        Vec3::new(p.zero(), p.zero(), -p.one()),
    ];
    ShapeDef::new("rhombic dodecahedron", vertices, RHOMBIC_DODECAHEDRON_FACES)
}

static RHOMBIC_DODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 3, 1, 2], &[0, 2, 12, 5], &[0, 6, 13, 3], &[0, 5, 4, 6], &[1, 8, 12, 2],
    &[1, 3, 13, 9], &[1, 9, 7, 8], &[4, 5, 12, 10], &[4, 11, 13, 6], &[4, 10, 7, 11],
    &[7, 10, 12, 8], &[7, 9, 13, 11],
];

/// Triakis octahedron: 14 vertices, 24 faces (24 isosceles triangles). Dual of the truncated cube.
pub fn triakis_octahedron(p: Prec) -> ShapeDef {
    let c0 = p.int(2).sqrt() - p.int(1); // 0.4142135624
    let vertices = vec![
        Vec3::new(p.zero(), p.one(), p.zero()),
        Vec3::new(p.zero(), p.zero(), p.one()),
        Vec3::new(c0.clone(), c0.clone(), c0.clone()),
        Vec3::new(p.zero(), p.zero(), -p.one()),
        Vec3::new(c0.clone(), c0.clone(), -c0.clone()),
        Vec3::new(p.zero(), -p.one(), p.zero()),
        Vec3::new(c0.clone(), -c0.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c0.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), c0.clone(), c0.clone()),
        Vec3::new(-c0.clone(), c0.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c0.clone(), c0.clone()),
        Vec3::new(-c0.clone(), -c0.clone(), -c0.clone()),
        Vec3::new(p.one(), p.zero(), p.zero()),
        Vec3::new(-p.one(), p.zero(), p.zero()),
    ];
    ShapeDef::new("triakis octahedron", vertices, TRIAKIS_OCTAHEDRON_FACES)
}

static TRIAKIS_OCTAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2], &[0, 8, 1], &[0, 2, 12], &[0, 4, 3], &[0, 3, 9], &[0, 12, 4], &[0, 13, 8],
    &[0, 9, 13], &[1, 12, 2], &[1, 5, 6], &[1, 10, 5], &[1, 6, 12], &[1, 8, 13], &[1, 13, 10],
    &[3, 4, 12], &[3, 7, 5], &[3, 5, 11], &[3, 12, 7], &[3, 13, 9], &[3, 11, 13], &[5, 12, 6],
    &[5, 7, 12], &[5, 10, 13], &[5, 13, 11],
];

/// Tetrakis hexahedron: 14 vertices, 24 faces (24 isosceles triangles). Dual of the truncated octahedron.
pub fn tetrakis_hexahedron(p: Prec) -> ShapeDef {
    let vertices = vec![
        Vec3::new(p.zero(), p.zero(), p.frac(1, 2)),
        Vec3::new(p.frac(1, 3), p.frac(1, 3), p.frac(1, 3)),
        Vec3::new(-p.frac(1, 3), p.frac(1, 3), p.frac(1, 3)),
        Vec3::new(p.zero(), p.zero(), -p.frac(1, 2)),
        Vec3::new(p.frac(1, 3), p.frac(1, 3), -p.frac(1, 3)),
        Vec3::new(-p.frac(1, 3), p.frac(1, 3), -p.frac(1, 3)),
        Vec3::new(p.frac(1, 3), -p.frac(1, 3), p.frac(1, 3)),
        Vec3::new(-p.frac(1, 3), -p.frac(1, 3), p.frac(1, 3)),
        Vec3::new(p.frac(1, 3), -p.frac(1, 3), -p.frac(1, 3)),
        Vec3::new(-p.frac(1, 3), -p.frac(1, 3), -p.frac(1, 3)),
        Vec3::new(p.zero(), p.frac(1, 2), p.zero()),
        Vec3::new(p.zero(), -p.frac(1, 2), p.zero()),
        Vec3::new(p.frac(1, 2), p.zero(), p.zero()),
        Vec3::new(-p.frac(1, 2), p.zero(), p.zero()),
    ];
    ShapeDef::new("tetrakis hexahedron", vertices, TETRAKIS_HEXAHEDRON_FACES)
}

static TETRAKIS_HEXAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2], &[0, 6, 1], &[0, 2, 7], &[0, 7, 6], &[1, 10, 2], &[1, 4, 10], &[1, 12, 4],
    &[1, 6, 12], &[2, 10, 5], &[2, 5, 13], &[2, 13, 7], &[3, 5, 4], &[3, 4, 8], &[3, 9, 5],
    &[3, 8, 9], &[4, 5, 10], &[4, 12, 8], &[5, 9, 13], &[6, 7, 11], &[6, 11, 8], &[6, 8, 12],
    &[7, 9, 11], &[7, 13, 9], &[8, 11, 9],
];

/// Deltoidal icositetrahedron: 26 vertices, 24 faces (24 kites). Dual of the rhombicuboctahedron.
pub fn deltoidal_icositetrahedron(p: Prec) -> ShapeDef {
    let c0 = p.frac(3, 7) - (p.frac(1, 7) * p.int(2).sqrt()); // 0.2265409197
    let c1 = p.int(1) - (p.frac(1, 2) * p.int(2).sqrt()); // 0.2928932188
    let c2 = p.int(2).sqrt() - p.int(1); // 0.4142135624
    let vertices = vec![
        Vec3::new(p.zero(), p.zero(), c2.clone()),
        Vec3::new(c1.clone(), p.zero(), c1.clone()),
        Vec3::new(p.zero(), c1.clone(), c1.clone()),
        Vec3::new(c0.clone(), c0.clone(), c0.clone()),
        Vec3::new(p.zero(), p.zero(), -c2.clone()),
        Vec3::new(c1.clone(), p.zero(), -c1.clone()),
        Vec3::new(p.zero(), c1.clone(), -c1.clone()),
        Vec3::new(c0.clone(), c0.clone(), -c0.clone()),
        Vec3::new(p.zero(), -c1.clone(), c1.clone()),
        Vec3::new(c0.clone(), -c0.clone(), c0.clone()),
        Vec3::new(p.zero(), -c1.clone(), -c1.clone()),
        Vec3::new(c0.clone(), -c0.clone(), -c0.clone()),
        Vec3::new(-c1.clone(), p.zero(), c1.clone()),
        Vec3::new(-c0.clone(), c0.clone(), c0.clone()),
        Vec3::new(-c1.clone(), p.zero(), -c1.clone()),
        Vec3::new(-c0.clone(), c0.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c0.clone(), c0.clone()),
        Vec3::new(-c0.clone(), -c0.clone(), -c0.clone()),
        Vec3::new(p.zero(), c2.clone(), p.zero()),
        Vec3::new(c1.clone(), c1.clone(), p.zero()),
        Vec3::new(p.zero(), -c2.clone(), p.zero()),
        Vec3::new(c1.clone(), -c1.clone(), p.zero()),
        Vec3::new(-c1.clone(), c1.clone(), p.zero()),
        Vec3::new(-c1.clone(), -c1.clone(), p.zero()),
        Vec3::new(c2.clone(), p.zero(), p.zero()),
        Vec3::new(-c2.clone(), p.zero(), p.zero()),
    ];
    ShapeDef::new("deltoidal icositetrahedron", vertices, DELTOIDAL_ICOSITETRAHEDRON_FACES)
}

static DELTOIDAL_ICOSITETRAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 3, 2], &[0, 8, 9, 1], &[0, 2, 13, 12], &[0, 12, 16, 8], &[1, 24, 19, 3],
    &[1, 9, 21, 24], &[2, 3, 19, 18], &[2, 18, 22, 13], &[4, 6, 7, 5], &[4, 5, 11, 10],
    &[4, 14, 15, 6], &[4, 10, 17, 14], &[5, 7, 19, 24], &[5, 24, 21, 11], &[6, 18, 19, 7],
    &[6, 15, 22, 18], &[8, 20, 21, 9], &[8, 16, 23, 20], &[10, 11, 21, 20], &[10, 20, 23, 17],
    &[12, 13, 22, 25], &[12, 25, 23, 16], &[14, 25, 22, 15], &[14, 17, 23, 25],
];

/// Disdyakis dodecahedron: 26 vertices, 48 faces (48 scalene triangles). Dual of the truncated cuboctahedron.
pub fn disdyakis_dodecahedron(p: Prec) -> ShapeDef {
    let c0 = (p.frac(1, 3) * p.int(2).sqrt()) - p.frac(1, 3); // 0.1380711875
    let c1 = (p.frac(3, 14) * p.int(2).sqrt()) - p.frac(1, 7); // 0.1601886205
    let c2 = (p.frac(2, 7) * p.int(2).sqrt()) - p.frac(1, 7); // 0.2612038750
    let vertices = vec![
        Vec3::new(p.zero(), p.zero(), c2.clone()),
        Vec3::new(p.zero(), c1.clone(), c1.clone()),
        Vec3::new(c0.clone(), c0.clone(), c0.clone()),
        Vec3::new(p.zero(), p.zero(), -c2.clone()),
        Vec3::new(p.zero(), c1.clone(), -c1.clone()),
        Vec3::new(c0.clone(), c0.clone(), -c0.clone()),
        Vec3::new(p.zero(), -c1.clone(), c1.clone()),
        Vec3::new(c0.clone(), -c0.clone(), c0.clone()),
        Vec3::new(p.zero(), -c1.clone(), -c1.clone()),
        Vec3::new(c0.clone(), -c0.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), c0.clone(), c0.clone()),
        Vec3::new(-c0.clone(), c0.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c0.clone(), c0.clone()),
        Vec3::new(-c0.clone(), -c0.clone(), -c0.clone()),
        Vec3::new(p.zero(), c2.clone(), p.zero()),
        Vec3::new(p.zero(), -c2.clone(), p.zero()),
        Vec3::new(c1.clone(), p.zero(), c1.clone()),
        Vec3::new(c1.clone(), p.zero(), -c1.clone()),
        Vec3::new(-c1.clone(), p.zero(), c1.clone()),
        Vec3::new(-c1.clone(), p.zero(), -c1.clone()),
        Vec3::new(c1.clone(), c1.clone(), p.zero()),
        Vec3::new(c1.clone(), -c1.clone(), p.zero()),
        Vec3::new(-c1.clone(), c1.clone(), p.zero()),
        Vec3::new(-c1.clone(), -c1.clone(), p.zero()),
        Vec3::new(c2.clone(), p.zero(), p.zero()),
        Vec3::new(-c2.clone(), p.zero(), p.zero()),
    ];
    ShapeDef::new("disdyakis dodecahedron", vertices, DISDYAKIS_DODECAHEDRON_FACES)
}

static DISDYAKIS_DODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 2, 1], &[0, 1, 10], &[0, 16, 2], &[0, 6, 7], &[0, 12, 6], &[0, 7, 16], &[0, 10, 18],
    &[0, 18, 12], &[1, 2, 14], &[1, 14, 10], &[2, 20, 14], &[2, 16, 24], &[2, 24, 20],
    &[3, 4, 5], &[3, 11, 4], &[3, 5, 17], &[3, 9, 8], &[3, 8, 13], &[3, 17, 9], &[3, 19, 11],
    &[3, 13, 19], &[4, 14, 5], &[4, 11, 14], &[5, 14, 20], &[5, 24, 17], &[5, 20, 24],
    &[6, 15, 7], &[6, 12, 15], &[7, 15, 21], &[7, 24, 16], &[7, 21, 24], &[8, 9, 15],
    &[8, 15, 13], &[9, 21, 15], &[9, 17, 24], &[9, 24, 21], &[10, 14, 22], &[10, 25, 18],
    &[10, 22, 25], &[11, 22, 14], &[11, 19, 25], &[11, 25, 22], &[12, 23, 15], &[12, 18, 25],
    &[12, 25, 23], &[13, 15, 23], &[13, 25, 19], &[13, 23, 25],
];

/// Rhombic triacontahedron: 32 vertices, 30 faces (30 rhombi). Dual of the icosidodecahedron.
pub fn rhombic_triacontahedron(p: Prec) -> ShapeDef {
    let c0 = p.int(5).sqrt() - p.int(2); // 0.2360679775
    let c1 = p.frac(3, 2) - (p.frac(1, 2) * p.int(5).sqrt()); // 0.3819660113
    let c2 = (p.frac(1, 2) * p.int(5).sqrt()) - p.frac(1, 2); // 0.6180339887
    let vertices = vec![
        Vec3::new(c1.clone(), p.zero(), c2.clone()),
        Vec3::new(p.zero(), c0.clone(), c2.clone()),
        Vec3::new(-c1.clone(), p.zero(), c2.clone()),
        Vec3::new(p.zero(), -c0.clone(), c2.clone()),
        Vec3::new(c2.clone(), c1.clone(), p.zero()),
        Vec3::new(c2.clone(), p.zero(), c0.clone()),
        Vec3::new(c2.clone(), -c1.clone(), p.zero()),
        Vec3::new(c2.clone(), p.zero(), -c0.clone()),
        Vec3::new(p.zero(), c2.clone(), c1.clone()),
        Vec3::new(c0.clone(), c2.clone(), p.zero()),
        Vec3::new(p.zero(), c2.clone(), -c1.clone()),
        Vec3::new(-c0.clone(), c2.clone(), p.zero()),
        Vec3::new(c1.clone(), p.zero(), -c2.clone()),
        Vec3::new(p.zero(), c0.clone(), -c2.clone()),
        Vec3::new(p.zero(), -c0.clone(), -c2.clone()),
        Vec3::new(-c1.clone(), p.zero(), -c2.clone()),
        Vec3::new(-c2.clone(), c1.clone(), p.zero()),
        Vec3::new(-c2.clone(), p.zero(), c0.clone()),
        Vec3::new(-c2.clone(), p.zero(), -c0.clone()),
        Vec3::new(-c2.clone(), -c1.clone(), p.zero()),
        Vec3::new(p.zero(), -c2.clone(), c1.clone()),
        Vec3::new(c0.clone(), -c2.clone(), p.zero()),
        Vec3::new(p.zero(), -c2.clone(), -c1.clone()),
        Vec3::new(-c0.clone(), -c2.clone(), p.zero()),
        Vec3::new(c1.clone(), c1.clone(), c1.clone()),
        Vec3::new(c1.clone(), c1.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), c1.clone(), c1.clone()),
        Vec3::new(c1.clone(), -c1.clone(), c1.clone()),
        Vec3::new(c1.clone(), -c1.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), c1.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -c1.clone(), c1.clone()),
        Vec3::new(-c1.clone(), -c1.clone(), -c1.clone()),
    ];
    ShapeDef::new("rhombic triacontahedron", vertices, RHOMBIC_TRIACONTAHEDRON_FACES)
}

static RHOMBIC_TRIACONTAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2, 3], &[0, 24, 8, 1], &[0, 3, 20, 27], &[0, 5, 4, 24], &[0, 27, 6, 5],
    &[1, 8, 26, 2], &[2, 30, 20, 3], &[2, 26, 16, 17], &[2, 17, 19, 30], &[4, 5, 6, 7],
    &[4, 7, 12, 25], &[4, 9, 8, 24], &[4, 25, 10, 9], &[6, 28, 12, 7], &[6, 27, 20, 21],
    &[6, 21, 22, 28], &[8, 9, 10, 11], &[8, 11, 16, 26], &[10, 29, 16, 11], &[10, 25, 12, 13],
    &[10, 13, 15, 29], &[12, 14, 15, 13], &[12, 28, 22, 14], &[14, 22, 31, 15],
    &[15, 18, 16, 29], &[15, 31, 19, 18], &[16, 18, 19, 17], &[19, 23, 20, 30],
    &[19, 31, 22, 23], &[20, 23, 22, 21],
];

/// Triakis icosahedron: 32 vertices, 60 faces (60 isosceles triangles). Dual of the truncated dodecahedron.
pub fn triakis_icosahedron(p: Prec) -> ShapeDef {
    let c0 = (p.frac(5, 22) * p.int(5).sqrt()) - p.frac(9, 22); // 0.0991063585
    let c1 = p.frac(4, 11) - (p.frac(1, 11) * p.int(5).sqrt()); // 0.1603574566
    let c2 = (p.frac(3, 10) * p.int(5).sqrt()) - p.frac(1, 2); // 0.1708203932
    let c3 = (p.frac(3, 22) * p.int(5).sqrt()) - p.frac(1, 22); // 0.2594638151
    let c4 = p.frac(1, 2) - (p.frac(1, 10) * p.int(5).sqrt()); // 0.2763932023
    let vertices = vec![
        Vec3::new(c2.clone(), p.zero(), c4.clone()),
        Vec3::new(-c2.clone(), p.zero(), c4.clone()),
        Vec3::new(p.zero(), c0.clone(), c3.clone()),
        Vec3::new(c4.clone(), c2.clone(), p.zero()),
        Vec3::new(c4.clone(), -c2.clone(), p.zero()),
        Vec3::new(c3.clone(), p.zero(), c0.clone()),
        Vec3::new(p.zero(), c4.clone(), c2.clone()),
        Vec3::new(p.zero(), c4.clone(), -c2.clone()),
        Vec3::new(c0.clone(), c3.clone(), p.zero()),
        Vec3::new(c2.clone(), p.zero(), -c4.clone()),
        Vec3::new(-c2.clone(), p.zero(), -c4.clone()),
        Vec3::new(p.zero(), c0.clone(), -c3.clone()),
        Vec3::new(-c4.clone(), c2.clone(), p.zero()),
        Vec3::new(-c4.clone(), -c2.clone(), p.zero()),
        Vec3::new(-c3.clone(), p.zero(), c0.clone()),
        Vec3::new(p.zero(), -c4.clone(), c2.clone()),
        Vec3::new(p.zero(), -c4.clone(), -c2.clone()),
        Vec3::new(c0.clone(), -c3.clone(), p.zero()),
        Vec3::new(p.zero(), -c0.clone(), c3.clone()),
        Vec3::new(c3.clone(), p.zero(), -c0.clone()),
        Vec3::new(-c0.clone(), c3.clone(), p.zero()),
        Vec3::new(p.zero(), -c0.clone(), -c3.clone()),
        Vec3::new(-c3.clone(), p.zero(), -c0.clone()),
        Vec3::new(-c0.clone(), -c3.clone(), p.zero()),
        Vec3::new(c1.clone(), c1.clone(), c1.clone()),
        Vec3::new(c1.clone(), c1.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), c1.clone(), c1.clone()),
        Vec3::new(c1.clone(), -c1.clone(), c1.clone()),
        Vec3::new(c1.clone(), -c1.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), c1.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -c1.clone(), c1.clone()),
        Vec3::new(-c1.clone(), -c1.clone(), -c1.clone()),
    ];
    ShapeDef::new("triakis icosahedron", vertices, TRIAKIS_ICOSAHEDRON_FACES)
}

static TRIAKIS_ICOSAHEDRON_FACES: &[&[usize]] = &[
    &[0, 2, 1], &[0, 1, 18], &[0, 6, 2], &[0, 5, 3], &[0, 3, 24], &[0, 4, 5], &[0, 27, 4],
    &[0, 24, 6], &[0, 18, 15], &[0, 15, 27], &[1, 2, 6], &[1, 6, 26], &[1, 12, 14],
    &[1, 26, 12], &[1, 14, 13], &[1, 13, 30], &[1, 15, 18], &[1, 30, 15], &[3, 5, 4],
    &[3, 4, 19], &[3, 8, 6], &[3, 6, 24], &[3, 7, 8], &[3, 25, 7], &[3, 19, 9], &[3, 9, 25],
    &[4, 9, 19], &[4, 28, 9], &[4, 15, 17], &[4, 27, 15], &[4, 17, 16], &[4, 16, 28],
    &[6, 8, 7], &[6, 7, 20], &[6, 20, 12], &[6, 12, 26], &[7, 9, 11], &[7, 25, 9],
    &[7, 11, 10], &[7, 10, 29], &[7, 12, 20], &[7, 29, 12], &[9, 10, 11], &[9, 21, 10],
    &[9, 16, 21], &[9, 28, 16], &[10, 22, 12], &[10, 12, 29], &[10, 13, 22], &[10, 31, 13],
    &[10, 21, 16], &[10, 16, 31], &[12, 13, 14], &[12, 22, 13], &[13, 23, 15], &[13, 15, 30],
    &[13, 16, 23], &[13, 31, 16], &[15, 16, 17], &[15, 23, 16],
];

/// Pentakis dodecahedron: 32 vertices, 60 faces (60 isosceles triangles). Dual of the truncated icosahedron.
pub fn pentakis_dodecahedron(p: Prec) -> ShapeDef {
    let c0 = (p.frac(1, 3) * p.int(5).sqrt()) - p.frac(2, 3); // 0.0786893258
    let c1 = p.frac(11, 38) - (p.frac(3, 38) * p.int(5).sqrt()); // 0.1129420018
    let c2 = p.frac(1, 2) - (p.frac(1, 6) * p.int(5).sqrt()); // 0.1273220038
    let c3 = (p.frac(2, 19) * p.int(5).sqrt()) - p.frac(1, 19); // 0.1827439976
    let c4 = (p.frac(1, 6) * p.int(5).sqrt()) - p.frac(1, 6); // 0.2060113296
    let vertices = vec![
        Vec3::new(c0.clone(), p.zero(), c4.clone()),
        Vec3::new(-c0.clone(), p.zero(), c4.clone()),
        Vec3::new(p.zero(), c1.clone(), c3.clone()),
        Vec3::new(c4.clone(), c0.clone(), p.zero()),
        Vec3::new(c4.clone(), -c0.clone(), p.zero()),
        Vec3::new(c3.clone(), p.zero(), c1.clone()),
        Vec3::new(p.zero(), c4.clone(), c0.clone()),
        Vec3::new(p.zero(), c4.clone(), -c0.clone()),
        Vec3::new(c1.clone(), c3.clone(), p.zero()),
        Vec3::new(c0.clone(), p.zero(), -c4.clone()),
        Vec3::new(-c0.clone(), p.zero(), -c4.clone()),
        Vec3::new(p.zero(), c1.clone(), -c3.clone()),
        Vec3::new(-c4.clone(), c0.clone(), p.zero()),
        Vec3::new(-c4.clone(), -c0.clone(), p.zero()),
        Vec3::new(-c3.clone(), p.zero(), c1.clone()),
        Vec3::new(p.zero(), -c4.clone(), c0.clone()),
        Vec3::new(p.zero(), -c4.clone(), -c0.clone()),
        Vec3::new(c1.clone(), -c3.clone(), p.zero()),
        Vec3::new(p.zero(), -c1.clone(), c3.clone()),
        Vec3::new(c3.clone(), p.zero(), -c1.clone()),
        Vec3::new(-c1.clone(), c3.clone(), p.zero()),
        Vec3::new(p.zero(), -c1.clone(), -c3.clone()),
        Vec3::new(-c3.clone(), p.zero(), -c1.clone()),
        Vec3::new(-c1.clone(), -c3.clone(), p.zero()),
        Vec3::new(c2.clone(), c2.clone(), c2.clone()),
        Vec3::new(c2.clone(), c2.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), c2.clone(), c2.clone()),
        Vec3::new(c2.clone(), -c2.clone(), c2.clone()),
        Vec3::new(c2.clone(), -c2.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), c2.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), -c2.clone(), c2.clone()),
        Vec3::new(-c2.clone(), -c2.clone(), -c2.clone()),
    ];
    ShapeDef::new("pentakis dodecahedron", vertices, PENTAKIS_DODECAHEDRON_FACES)
}

static PENTAKIS_DODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 2, 1], &[0, 1, 18], &[0, 24, 2], &[0, 5, 24], &[0, 27, 5], &[0, 18, 27], &[1, 2, 26],
    &[1, 26, 14], &[1, 14, 30], &[1, 30, 18], &[2, 24, 6], &[2, 6, 26], &[3, 5, 4],
    &[3, 4, 19], &[3, 24, 5], &[3, 8, 24], &[3, 25, 8], &[3, 19, 25], &[4, 5, 27],
    &[4, 27, 17], &[4, 17, 28], &[4, 28, 19], &[6, 8, 7], &[6, 7, 20], &[6, 24, 8],
    &[6, 20, 26], &[7, 8, 25], &[7, 25, 11], &[7, 11, 29], &[7, 29, 20], &[9, 10, 11],
    &[9, 21, 10], &[9, 11, 25], &[9, 25, 19], &[9, 19, 28], &[9, 28, 21], &[10, 29, 11],
    &[10, 21, 31], &[10, 22, 29], &[10, 31, 22], &[12, 13, 14], &[12, 22, 13], &[12, 14, 26],
    &[12, 26, 20], &[12, 20, 29], &[12, 29, 22], &[13, 30, 14], &[13, 22, 31], &[13, 23, 30],
    &[13, 31, 23], &[15, 16, 17], &[15, 23, 16], &[15, 17, 27], &[15, 27, 18], &[15, 18, 30],
    &[15, 30, 23], &[16, 28, 17], &[16, 21, 28], &[16, 31, 21], &[16, 23, 31],
];

/// Deltoidal hexecontahedron: 62 vertices, 60 faces (60 kites). Dual of the rhombicosidodecahedron.
pub fn deltoidal_hexecontahedron(p: Prec) -> ShapeDef {
    let c0 = p.frac(7, 4) - (p.frac(3, 4) * p.int(5).sqrt()); // 0.0729490169
    let c1 = p.frac(13, 22) - (p.frac(5, 22) * p.int(5).sqrt()); // 0.0827118233
    let c2 = (p.frac(1, 2) * p.int(5).sqrt()) - p.int(1); // 0.1180339887
    let c3 = p.frac(1, 2) - (p.frac(1, 6) * p.int(5).sqrt()); // 0.1273220038
    let c4 = (p.frac(2, 11) * p.int(5).sqrt()) - p.frac(3, 11); // 0.1338305414
    let c5 = p.frac(3, 4) - (p.frac(1, 4) * p.int(5).sqrt()); // 0.1909830056
    let c6 = (p.frac(1, 6) * p.int(5).sqrt()) - p.frac(1, 6); // 0.2060113296
    let c7 = p.frac(7, 22) - (p.frac(1, 22) * p.int(5).sqrt()); // 0.2165423647
    let c8 = p.int(5).sqrt() - p.int(2); // 0.2360679775
    let vertices = vec![
        Vec3::new(p.zero(), p.zero(), c8.clone()),
        Vec3::new(c3.clone(), p.zero(), c6.clone()),
        Vec3::new(p.zero(), c1.clone(), c7.clone()),
        Vec3::new(c0.clone(), c2.clone(), c5.clone()),
        Vec3::new(c8.clone(), p.zero(), p.zero()),
        Vec3::new(c6.clone(), c3.clone(), p.zero()),
        Vec3::new(c7.clone(), p.zero(), c1.clone()),
        Vec3::new(c5.clone(), c0.clone(), c2.clone()),
        Vec3::new(p.zero(), c8.clone(), p.zero()),
        Vec3::new(p.zero(), c6.clone(), c3.clone()),
        Vec3::new(c1.clone(), c7.clone(), p.zero()),
        Vec3::new(c2.clone(), c5.clone(), c0.clone()),
        Vec3::new(p.zero(), p.zero(), -c8.clone()),
        Vec3::new(c3.clone(), p.zero(), -c6.clone()),
        Vec3::new(p.zero(), c1.clone(), -c7.clone()),
        Vec3::new(c0.clone(), c2.clone(), -c5.clone()),
        Vec3::new(-c8.clone(), p.zero(), p.zero()),
        Vec3::new(-c6.clone(), c3.clone(), p.zero()),
        Vec3::new(-c7.clone(), p.zero(), c1.clone()),
        Vec3::new(-c5.clone(), c0.clone(), c2.clone()),
        Vec3::new(p.zero(), -c8.clone(), p.zero()),
        Vec3::new(p.zero(), -c6.clone(), c3.clone()),
        Vec3::new(c1.clone(), -c7.clone(), p.zero()),
        Vec3::new(c2.clone(), -c5.clone(), c0.clone()),
        Vec3::new(p.zero(), -c1.clone(), c7.clone()),
        Vec3::new(c0.clone(), -c2.clone(), c5.clone()),
        Vec3::new(c7.clone(), p.zero(), -c1.clone()),
        Vec3::new(c5.clone(), c0.clone(), -c2.clone()),
        Vec3::new(-c1.clone(), c7.clone(), p.zero()),
        Vec3::new(-c2.clone(), c5.clone(), c0.clone()),
        Vec3::new(p.zero(), -c1.clone(), -c7.clone()),
        Vec3::new(c0.clone(), -c2.clone(), -c5.clone()),
        Vec3::new(-c7.clone(), p.zero(), -c1.clone()),
        Vec3::new(-c5.clone(), c0.clone(), -c2.clone()),
        Vec3::new(-c1.clone(), -c7.clone(), p.zero()),
        Vec3::new(-c2.clone(), -c5.clone(), c0.clone()),
        Vec3::new(-c3.clone(), p.zero(), c6.clone()),
        Vec3::new(-c0.clone(), c2.clone(), c5.clone()),
        Vec3::new(c6.clone(), -c3.clone(), p.zero()),
        Vec3::new(c5.clone(), -c0.clone(), c2.clone()),
        Vec3::new(p.zero(), c6.clone(), -c3.clone()),
        Vec3::new(c2.clone(), c5.clone(), -c0.clone()),
        Vec3::new(-c3.clone(), p.zero(), -c6.clone()),
        Vec3::new(-c0.clone(), c2.clone(), -c5.clone()),
        Vec3::new(-c6.clone(), -c3.clone(), p.zero()),
        Vec3::new(-c5.clone(), -c0.clone(), c2.clone()),
        Vec3::new(p.zero(), -c6.clone(), -c3.clone()),
        Vec3::new(c2.clone(), -c5.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c2.clone(), c5.clone()),
        Vec3::new(c5.clone(), -c0.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), c5.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c2.clone(), -c5.clone()),
        Vec3::new(-c5.clone(), -c0.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), -c5.clone(), -c0.clone()),
        Vec3::new(c4.clone(), c4.clone(), c4.clone()),
        Vec3::new(c4.clone(), c4.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), c4.clone(), c4.clone()),
        Vec3::new(c4.clone(), -c4.clone(), c4.clone()),
        Vec3::new(c4.clone(), -c4.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), c4.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), -c4.clone(), c4.clone()),
        Vec3::new(-c4.clone(), -c4.clone(), -c4.clone()),
    ];
    ShapeDef::new("deltoidal hexecontahedron", vertices, DELTOIDAL_HEXECONTAHEDRON_FACES)
}

static DELTOIDAL_HEXECONTAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 3, 2], &[0, 24, 25, 1], &[0, 2, 37, 36], &[0, 36, 48, 24], &[1, 7, 54, 3],
    &[1, 39, 6, 7], &[1, 25, 57, 39], &[2, 3, 9, 37], &[3, 54, 11, 9], &[4, 5, 7, 6],
    &[4, 26, 27, 5], &[4, 6, 39, 38], &[4, 38, 49, 26], &[5, 11, 54, 7], &[5, 41, 10, 11],
    &[5, 27, 55, 41], &[8, 9, 11, 10], &[8, 28, 29, 9], &[8, 10, 41, 40], &[8, 40, 50, 28],
    &[9, 29, 56, 37], &[12, 14, 15, 13], &[12, 13, 31, 30], &[12, 42, 43, 14],
    &[12, 30, 51, 42], &[13, 15, 55, 27], &[13, 27, 26, 49], &[13, 49, 58, 31],
    &[14, 43, 40, 15], &[15, 40, 41, 55], &[16, 18, 19, 17], &[16, 17, 33, 32],
    &[16, 44, 45, 18], &[16, 32, 52, 44], &[17, 19, 56, 29], &[17, 29, 28, 50],
    &[17, 50, 59, 33], &[18, 45, 36, 19], &[19, 36, 37, 56], &[20, 22, 23, 21],
    &[20, 21, 35, 34], &[20, 46, 47, 22], &[20, 34, 53, 46], &[21, 23, 57, 25],
    &[21, 25, 24, 48], &[21, 48, 60, 35], &[22, 47, 38, 23], &[23, 38, 39, 57],
    &[30, 31, 46, 51], &[31, 58, 47, 46], &[32, 33, 42, 52], &[33, 59, 43, 42],
    &[34, 35, 44, 53], &[35, 60, 45, 44], &[36, 45, 60, 48], &[38, 47, 58, 49],
    &[40, 43, 59, 50], &[42, 51, 61, 52], &[44, 52, 61, 53], &[46, 53, 61, 51],
];

/// Disdyakis triacontahedron: 62 vertices, 120 faces (120 scalene triangles). Dual of the truncated icosidodecahedron.
pub fn disdyakis_triacontahedron(p: Prec) -> ShapeDef {
    let c0 = (p.frac(1, 11) * p.int(5).sqrt()) - p.frac(3, 22); // 0.0669152707
    let c1 = (p.frac(1, 3) * p.int(5).sqrt()) - p.frac(2, 3); // 0.0786893258
    let c2 = p.frac(7, 44) - (p.frac(1, 44) * p.int(5).sqrt()); // 0.1082711823
    let c3 = (p.frac(1, 10) * p.int(5).sqrt()) - p.frac(1, 10); // 0.1236067977
    let c4 = p.frac(1, 2) - (p.frac(1, 6) * p.int(5).sqrt()); // 0.1273220038
    let c5 = p.frac(1, 44) + (p.frac(3, 44) * p.int(5).sqrt()); // 0.1751864530
    let c6 = (p.frac(1, 6) * p.int(5).sqrt()) - p.frac(1, 6); // 0.2060113296
    let c7 = p.frac(7, 22) - (p.frac(1, 22) * p.int(5).sqrt()); // 0.2165423647
    let vertices = vec![
        Vec3::new(p.zero(), p.zero(), c7.clone()),
        Vec3::new(c3.clone(), p.zero(), p.frac(1, 5)),
        Vec3::new(p.zero(), c1.clone(), c6.clone()),
        Vec3::new(c7.clone(), p.zero(), p.zero()),
        Vec3::new(p.frac(1, 5), c3.clone(), p.zero()),
        Vec3::new(c6.clone(), p.zero(), c1.clone()),
        Vec3::new(p.zero(), c7.clone(), p.zero()),
        Vec3::new(p.zero(), p.frac(1, 5), c3.clone()),
        Vec3::new(c1.clone(), c6.clone(), p.zero()),
        Vec3::new(p.zero(), p.zero(), -c7.clone()),
        Vec3::new(c3.clone(), p.zero(), -p.frac(1, 5)),
        Vec3::new(p.zero(), c1.clone(), -c6.clone()),
        Vec3::new(-c7.clone(), p.zero(), p.zero()),
        Vec3::new(-p.frac(1, 5), c3.clone(), p.zero()),
        Vec3::new(-c6.clone(), p.zero(), c1.clone()),
        Vec3::new(p.zero(), -c7.clone(), p.zero()),
        Vec3::new(p.zero(), -p.frac(1, 5), c3.clone()),
        Vec3::new(c1.clone(), -c6.clone(), p.zero()),
        Vec3::new(p.zero(), -c1.clone(), c6.clone()),
        Vec3::new(c6.clone(), p.zero(), -c1.clone()),
        Vec3::new(-c1.clone(), c6.clone(), p.zero()),
        Vec3::new(p.zero(), -c1.clone(), -c6.clone()),
        Vec3::new(-c6.clone(), p.zero(), -c1.clone()),
        Vec3::new(-c1.clone(), -c6.clone(), p.zero()),
        Vec3::new(-c3.clone(), p.zero(), p.frac(1, 5)),
        Vec3::new(p.frac(1, 5), -c3.clone(), p.zero()),
        Vec3::new(p.zero(), p.frac(1, 5), -c3.clone()),
        Vec3::new(-c3.clone(), p.zero(), -p.frac(1, 5)),
        Vec3::new(-p.frac(1, 5), -c3.clone(), p.zero()),
        Vec3::new(p.zero(), -p.frac(1, 5), -c3.clone()),
        Vec3::new(c0.clone(), c2.clone(), c5.clone()),
        Vec3::new(c5.clone(), c0.clone(), c2.clone()),
        Vec3::new(c2.clone(), c5.clone(), c0.clone()),
        Vec3::new(c0.clone(), c2.clone(), -c5.clone()),
        Vec3::new(-c5.clone(), c0.clone(), c2.clone()),
        Vec3::new(c2.clone(), -c5.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c2.clone(), c5.clone()),
        Vec3::new(c5.clone(), c0.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), c5.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c2.clone(), -c5.clone()),
        Vec3::new(-c5.clone(), c0.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), -c5.clone(), c0.clone()),
        Vec3::new(-c0.clone(), c2.clone(), c5.clone()),
        Vec3::new(c5.clone(), -c0.clone(), c2.clone()),
        Vec3::new(c2.clone(), c5.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), c2.clone(), -c5.clone()),
        Vec3::new(-c5.clone(), -c0.clone(), c2.clone()),
        Vec3::new(c2.clone(), -c5.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c2.clone(), c5.clone()),
        Vec3::new(c5.clone(), -c0.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), c5.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c2.clone(), -c5.clone()),
        Vec3::new(-c5.clone(), -c0.clone(), -c2.clone()),
        Vec3::new(-c2.clone(), -c5.clone(), -c0.clone()),
        Vec3::new(c4.clone(), c4.clone(), c4.clone()),
        Vec3::new(c4.clone(), c4.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), c4.clone(), c4.clone()),
        Vec3::new(c4.clone(), -c4.clone(), c4.clone()),
        Vec3::new(c4.clone(), -c4.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), c4.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), -c4.clone(), c4.clone()),
        Vec3::new(-c4.clone(), -c4.clone(), -c4.clone()),
    ];
    ShapeDef::new("disdyakis triacontahedron", vertices, DISDYAKIS_TRIACONTAHEDRON_FACES)
}

static DISDYAKIS_TRIACONTAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2], &[0, 18, 1], &[0, 2, 24], &[0, 24, 18], &[1, 30, 2], &[1, 5, 31], &[1, 43, 5],
    &[1, 18, 36], &[1, 54, 30], &[1, 31, 54], &[1, 36, 57], &[1, 57, 43], &[2, 30, 7],
    &[2, 7, 42], &[2, 42, 24], &[3, 4, 5], &[3, 19, 4], &[3, 5, 25], &[3, 25, 19], &[4, 31, 5],
    &[4, 8, 32], &[4, 44, 8], &[4, 19, 37], &[4, 54, 31], &[4, 32, 54], &[4, 37, 55],
    &[4, 55, 44], &[5, 43, 25], &[6, 7, 8], &[6, 20, 7], &[6, 8, 26], &[6, 26, 20],
    &[7, 32, 8], &[7, 20, 38], &[7, 30, 54], &[7, 54, 32], &[7, 38, 56], &[7, 56, 42],
    &[8, 44, 26], &[9, 11, 10], &[9, 10, 21], &[9, 27, 11], &[9, 21, 27], &[10, 11, 33],
    &[10, 37, 19], &[10, 19, 49], &[10, 39, 21], &[10, 33, 55], &[10, 55, 37], &[10, 58, 39],
    &[10, 49, 58], &[11, 26, 33], &[11, 45, 26], &[11, 27, 45], &[12, 14, 13], &[12, 13, 22],
    &[12, 28, 14], &[12, 22, 28], &[13, 14, 34], &[13, 38, 20], &[13, 20, 50], &[13, 40, 22],
    &[13, 34, 56], &[13, 56, 38], &[13, 59, 40], &[13, 50, 59], &[14, 24, 34], &[14, 46, 24],
    &[14, 28, 46], &[15, 17, 16], &[15, 16, 23], &[15, 29, 17], &[15, 23, 29], &[16, 17, 35],
    &[16, 36, 18], &[16, 18, 48], &[16, 41, 23], &[16, 35, 57], &[16, 57, 36], &[16, 60, 41],
    &[16, 48, 60], &[17, 25, 35], &[17, 47, 25], &[17, 29, 47], &[18, 24, 48], &[19, 25, 49],
    &[20, 26, 50], &[21, 51, 27], &[21, 39, 29], &[21, 29, 51], &[22, 40, 27], &[22, 27, 52],
    &[22, 52, 28], &[23, 41, 28], &[23, 28, 53], &[23, 53, 29], &[24, 56, 34], &[24, 42, 56],
    &[24, 46, 60], &[24, 60, 48], &[25, 57, 35], &[25, 43, 57], &[25, 47, 58], &[25, 58, 49],
    &[26, 55, 33], &[26, 44, 55], &[26, 45, 59], &[26, 59, 50], &[27, 40, 59], &[27, 59, 45],
    &[27, 51, 61], &[27, 61, 52], &[28, 41, 60], &[28, 60, 46], &[28, 52, 61], &[28, 61, 53],
    &[29, 39, 58], &[29, 58, 47], &[29, 61, 51], &[29, 53, 61],
];

/// Pentagonal icositetrahedron: 38 vertices, 24 irregular-pentagon faces. Dual of the snub cube. Chiral.
pub fn pentagonal_icositetrahedron(p: Prec, hand: Chirality) -> ShapeDef {
    let base = snub_cube_vertices(p);
    let vertices = face_poles(&base, SNUB_CUBE_FACES);
    ShapeDef::new("pentagonal icositetrahedron", hand.apply(vertices), PENTAGONAL_ICOSITETRAHEDRON_FACES)
}

static PENTAGONAL_ICOSITETRAHEDRON_FACES: &[&[usize]] = &[
    &[0, 4, 2, 1, 3], &[0, 3, 29, 36, 17], &[0, 16, 33, 35, 4], &[0, 17, 15, 14, 16],
    &[1, 2, 18, 20, 19], &[1, 19, 28, 29, 3], &[2, 4, 35, 22, 18], &[5, 9, 7, 6, 8],
    &[5, 8, 31, 37, 13], &[5, 12, 32, 34, 9], &[5, 13, 11, 10, 12], &[6, 7, 18, 22, 21],
    &[6, 21, 30, 31, 8], &[7, 9, 34, 20, 18], &[10, 11, 23, 25, 24], &[10, 24, 28, 32, 12],
    &[11, 13, 37, 27, 23], &[14, 15, 23, 27, 26], &[14, 26, 30, 33, 16], &[15, 17, 36, 25, 23],
    &[19, 20, 34, 32, 28], &[21, 22, 35, 33, 30], &[24, 25, 36, 29, 28], &[26, 27, 37, 31, 30],
];

/// Pentagonal hexecontahedron: 92 vertices, 60 irregular-pentagon faces. Dual of the snub dodecahedron. Chiral.
pub fn pentagonal_hexecontahedron(p: Prec, hand: Chirality) -> ShapeDef {
    let base = snub_dodecahedron_vertices(p);
    let vertices = face_poles(&base, SNUB_DODECAHEDRON_FACES);
    ShapeDef::new("pentagonal hexecontahedron", hand.apply(vertices), PENTAGONAL_HEXECONTAHEDRON_FACES)
}

static PENTAGONAL_HEXECONTAHEDRON_FACES: &[&[usize]] = &[
    &[0, 2, 3, 4, 1], &[0, 1, 13, 14, 15], &[0, 15, 64, 65, 2], &[1, 4, 70, 71, 13],
    &[2, 49, 48, 50, 3], &[2, 74, 20, 19, 49], &[2, 65, 88, 75, 74], &[3, 50, 34, 70, 4],
    &[5, 7, 8, 9, 6], &[5, 6, 10, 11, 12], &[5, 12, 66, 67, 7], &[6, 9, 68, 69, 10],
    &[7, 52, 51, 53, 8], &[7, 72, 23, 22, 52], &[7, 67, 89, 73, 72], &[8, 53, 39, 68, 9],
    &[10, 55, 54, 56, 11], &[10, 78, 28, 27, 55], &[10, 69, 90, 79, 78], &[11, 56, 42, 66, 12],
    &[13, 58, 57, 59, 14], &[13, 76, 31, 30, 58], &[13, 71, 91, 77, 76], &[14, 59, 45, 64, 15],
    &[16, 18, 19, 20, 17], &[16, 17, 21, 22, 23], &[16, 23, 72, 73, 18], &[17, 20, 74, 75, 21],
    &[18, 60, 48, 49, 19], &[18, 84, 36, 35, 60], &[18, 73, 89, 85, 84], &[21, 61, 51, 52, 22],
    &[21, 86, 41, 40, 61], &[21, 75, 88, 87, 86], &[24, 26, 27, 28, 25], &[24, 25, 29, 30, 31],
    &[24, 31, 76, 77, 26], &[25, 28, 78, 79, 29], &[26, 62, 54, 55, 27], &[26, 80, 44, 43, 62],
    &[26, 77, 91, 81, 80], &[29, 63, 57, 58, 30], &[29, 82, 47, 46, 63], &[29, 79, 90, 83, 82],
    &[32, 34, 35, 36, 33], &[32, 33, 42, 43, 44], &[32, 44, 80, 81, 34], &[33, 36, 84, 85, 42],
    &[34, 50, 48, 60, 35], &[34, 81, 91, 71, 70], &[37, 39, 40, 41, 38], &[37, 38, 45, 46, 47],
    &[37, 47, 82, 83, 39], &[38, 41, 86, 87, 45], &[39, 53, 51, 61, 40], &[39, 83, 90, 69, 68],
    &[42, 56, 54, 62, 43], &[42, 85, 89, 67, 66], &[45, 59, 57, 63, 46], &[45, 87, 88, 65, 64],
];
