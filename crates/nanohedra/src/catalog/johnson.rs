//! Johnson solids: bipyramids and the gyrated cupola families.
//!
//! The bipyramids are literal tables. The gyrated forms reuse the
//! rhombicuboctahedron / rhombicosidodecahedron vertex builders and turn
//! the affected cupola caps in place with an exact Rodrigues rotation
//! (45 degrees about a four-fold axis, 36 degrees about a five-fold axis),
//! so each variant is the base vertex table plus a rotation recipe; only
//! the face tables differ per variant.

use rug::Float;

use crate::geom::Vec3;
use crate::num::Prec;

use super::archimedean::{rhombicosidodecahedron_vertices, rhombicuboctahedron_vertices};
use super::ShapeDef;

/// Triangular bipyramid: 5 vertices, 6 faces (6 triangles). Johnson solid J12.
pub fn triangular_bipyramid(p: Prec) -> ShapeDef {
    let c0 = p.frac(1, 2) * p.int(3).sqrt(); // 0.8660254038
    let c1 = p.int(2).sqrt(); // 1.4142135624
    let vertices = vec![
        Vec3::new(p.one(), p.zero(), p.zero()),
        Vec3::new(-p.frac(1, 2), c0.clone(), p.zero()),
        Vec3::new(-p.frac(1, 2), -c0.clone(), p.zero()),
        Vec3::new(p.zero(), p.zero(), c1.clone()),
        Vec3::new(p.zero(), p.zero(), -c1.clone()),
    ];
    ShapeDef::new("triangular bipyramid", vertices, TRIANGULAR_BIPYRAMID_FACES)
}

static TRIANGULAR_BIPYRAMID_FACES: &[&[usize]] = &[
    &[0, 1, 3], &[0, 4, 1], &[0, 3, 2], &[0, 2, 4], &[1, 2, 3], &[1, 4, 2],
];

/// Pentagonal bipyramid: 7 vertices, 10 faces (10 triangles). Johnson solid J13.
pub fn pentagonal_bipyramid(p: Prec) -> ShapeDef {
    let c0 = (p.frac(1, 4) * p.int(5).sqrt()) - p.frac(1, 4); // 0.3090169944
    let c1 = p.frac(1, 4) * (p.int(10) - (p.int(2) * p.int(5).sqrt())).sqrt(); // 0.5877852523
    let c2 = (p.frac(1, 2) * p.int(5).sqrt()) - p.frac(1, 2); // 0.6180339887
    let c3 = p.frac(1, 4) + (p.frac(1, 4) * p.int(5).sqrt()); // 0.8090169944
    let c4 = p.frac(1, 4) * (p.int(10) + (p.int(2) * p.int(5).sqrt())).sqrt(); // 0.9510565163
    let vertices = vec![
        Vec3::new(p.one(), p.zero(), p.zero()),
        Vec3::new(c0.clone(), c4.clone(), p.zero()),
        Vec3::new(-c3.clone(), c1.clone(), p.zero()),
        Vec3::new(-c3.clone(), -c1.clone(), p.zero()),
        Vec3::new(c0.clone(), -c4.clone(), p.zero()),
        Vec3::new(p.zero(), p.zero(), c2.clone()),
        Vec3::new(p.zero(), p.zero(), -c2.clone()),
    ];
    ShapeDef::new("pentagonal bipyramid", vertices, PENTAGONAL_BIPYRAMID_FACES)
}

static PENTAGONAL_BIPYRAMID_FACES: &[&[usize]] = &[
    &[0, 1, 5], &[0, 6, 1], &[0, 5, 4], &[0, 4, 6], &[1, 2, 5], &[1, 6, 2], &[2, 3, 5],
    &[2, 6, 3], &[3, 4, 5], &[3, 6, 4],
];

/// Elongated square bipyramid: 10 vertices, 12 faces (8 triangles, 4 squares). Johnson solid J15.
pub fn elongated_square_bipyramid(p: Prec) -> ShapeDef {
    let c0 = p.int(1) + p.int(2).sqrt(); // 2.4142135624
    let vertices = vec![
        Vec3::new(p.one(), p.one(), p.one()),
        Vec3::new(p.one(), p.one(), -p.one()),
        Vec3::new(p.one(), -p.one(), p.one()),
        Vec3::new(p.one(), -p.one(), -p.one()),
        Vec3::new(-p.one(), p.one(), p.one()),
        Vec3::new(-p.one(), p.one(), -p.one()),
        Vec3::new(-p.one(), -p.one(), p.one()),
        Vec3::new(-p.one(), -p.one(), -p.one()),
        Vec3::new(p.zero(), p.zero(), c0.clone()),
        Vec3::new(p.zero(), p.zero(), -c0.clone()),
    ];
    ShapeDef::new("elongated square bipyramid", vertices, ELONGATED_SQUARE_BIPYRAMID_FACES)
}

static ELONGATED_SQUARE_BIPYRAMID_FACES: &[&[usize]] = &[
    &[0, 2, 3, 1], &[0, 1, 5, 4], &[0, 8, 2], &[0, 4, 8], &[1, 3, 9], &[1, 9, 5],
    &[2, 6, 7, 3], &[2, 8, 6], &[3, 7, 9], &[4, 5, 7, 6], &[4, 6, 8], &[5, 9, 7],
];

/// Elongated square gyrobicupola (J37), the pseudo-rhombicuboctahedron:
/// the rhombicuboctahedron with one square cupola turned 45 degrees.
pub fn elongated_square_gyrobicupola(p: Prec) -> ShapeDef {
    let mut vertices = rhombicuboctahedron_vertices(p);
    let half_sqrt2 = p.int(2).sqrt() / p.int(2);
    let axis = Vec3::new(p.zero(), p.zero(), p.one());
    rotate_set(&mut vertices, J37_CAP, &axis, &half_sqrt2, &half_sqrt2);
    ShapeDef::new(
        "elongated square gyrobicupola",
        vertices,
        ELONGATED_SQUARE_GYROBICUPOLA_FACES,
    )
}

const J37_CAP: &[usize] = &[0, 2, 4, 6];

static ELONGATED_SQUARE_GYROBICUPOLA_FACES: &[&[usize]] = &[
    &[0, 4, 6, 2], &[0, 2, 16, 8], &[0, 12, 20, 4], &[0, 8, 12], &[1, 3, 7, 5],
    &[1, 17, 19, 3], &[1, 5, 13, 9], &[1, 9, 17], &[2, 6, 10, 18], &[2, 18, 16],
    &[3, 11, 15, 7], &[3, 19, 11], &[4, 22, 14, 6], &[4, 20, 22], &[5, 7, 23, 21],
    &[5, 21, 13], &[6, 14, 10], &[7, 15, 23], &[8, 9, 13, 12], &[8, 16, 17, 9],
    &[10, 14, 15, 11], &[10, 11, 19, 18], &[12, 13, 21, 20], &[14, 22, 23, 15],
    &[16, 18, 19, 17], &[20, 21, 23, 22],
];

/// Gyrate rhombicosidodecahedron (J72).
pub fn gyrate_rhombicosidodecahedron(p: Prec) -> ShapeDef {
    gyrated_rhombicosidodecahedron(
        p,
        "gyrate rhombicosidodecahedron",
        &[0],
        GYRATE_RHOMBICOSIDODECAHEDRON_FACES,
    )
}

static GYRATE_RHOMBICOSIDODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 18, 53, 6], &[0, 6, 30, 48, 24], &[0, 12, 18], &[0, 24, 50, 12], &[1, 13, 19, 7],
    &[1, 7, 31, 49, 25], &[1, 48, 30, 13], &[1, 25, 48], &[2, 14, 20, 8], &[2, 8, 32, 50, 26],
    &[2, 49, 14], &[2, 26, 25, 49], &[3, 9, 21, 15], &[3, 27, 51, 33, 9], &[3, 15, 56],
    &[3, 56, 38, 27], &[4, 10, 22, 16], &[4, 28, 52, 34, 10], &[4, 16, 54], &[4, 54, 36, 28],
    &[5, 11, 23, 17], &[5, 29, 53, 35, 11], &[5, 17, 55], &[5, 55, 37, 29], &[6, 29, 37, 30],
    &[6, 53, 29], &[7, 19, 51], &[7, 51, 27, 31], &[8, 20, 52], &[8, 52, 28, 32], &[9, 59, 21],
    &[9, 33, 41, 59], &[10, 57, 22], &[10, 34, 39, 57], &[11, 58, 23], &[11, 35, 40, 58],
    &[12, 36, 54, 42, 18], &[12, 50, 32, 36], &[13, 37, 55, 43, 19], &[13, 30, 37],
    &[14, 38, 56, 44, 20], &[14, 49, 31, 38], &[15, 21, 45, 57, 39], &[15, 39, 44, 56],
    &[16, 22, 46, 58, 40], &[16, 40, 42, 54], &[17, 23, 47, 59, 41], &[17, 41, 43, 55],
    &[18, 42, 35, 53], &[19, 43, 33, 51], &[20, 44, 34, 52], &[21, 59, 47, 45],
    &[22, 57, 45, 46], &[23, 58, 46, 47], &[24, 48, 25, 26], &[24, 26, 50], &[27, 38, 31],
    &[28, 36, 32], &[33, 43, 41], &[34, 44, 39], &[35, 42, 40], &[45, 47, 46],
];

/// Parabigyrate rhombicosidodecahedron (J73).
pub fn parabigyrate_rhombicosidodecahedron(p: Prec) -> ShapeDef {
    gyrated_rhombicosidodecahedron(
        p,
        "parabigyrate rhombicosidodecahedron",
        &[0, 2],
        PARABIGYRATE_RHOMBICOSIDODECAHEDRON_FACES,
    )
}

static PARABIGYRATE_RHOMBICOSIDODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 18, 53, 6], &[0, 6, 30, 48, 24], &[0, 12, 18], &[0, 24, 50, 12], &[1, 13, 19, 7],
    &[1, 7, 31, 49, 25], &[1, 48, 30, 13], &[1, 25, 48], &[2, 14, 20, 8], &[2, 8, 32, 50, 26],
    &[2, 49, 14], &[2, 26, 25, 49], &[3, 9, 15], &[3, 27, 51, 33, 9], &[3, 15, 39, 56],
    &[3, 56, 38, 27], &[4, 10, 22, 16], &[4, 28, 52, 34, 10], &[4, 16, 54], &[4, 54, 36, 28],
    &[5, 11, 23, 17], &[5, 29, 53, 35, 11], &[5, 17, 55], &[5, 55, 37, 29], &[6, 29, 37, 30],
    &[6, 53, 29], &[7, 19, 51], &[7, 51, 27, 31], &[8, 20, 52], &[8, 52, 28, 32],
    &[9, 59, 21, 15], &[9, 33, 41, 59], &[10, 57, 45, 22], &[10, 34, 57], &[11, 58, 23],
    &[11, 35, 40, 58], &[12, 36, 54, 42, 18], &[12, 50, 32, 36], &[13, 37, 55, 43, 19],
    &[13, 30, 37], &[14, 38, 56, 44, 20], &[14, 49, 31, 38], &[15, 21, 45, 57, 39],
    &[16, 22, 46, 58, 40], &[16, 40, 42, 54], &[17, 23, 47, 59, 41], &[17, 41, 43, 55],
    &[18, 42, 35, 53], &[19, 43, 33, 51], &[20, 44, 34, 52], &[21, 47, 46, 45], &[21, 59, 47],
    &[22, 45, 46], &[23, 58, 46, 47], &[24, 48, 25, 26], &[24, 26, 50], &[27, 38, 31],
    &[28, 36, 32], &[33, 43, 41], &[34, 44, 39, 57], &[35, 42, 40], &[39, 44, 56],
];

/// Metabigyrate rhombicosidodecahedron (J74).
pub fn metabigyrate_rhombicosidodecahedron(p: Prec) -> ShapeDef {
    gyrated_rhombicosidodecahedron(
        p,
        "metabigyrate rhombicosidodecahedron",
        &[0, 1],
        METABIGYRATE_RHOMBICOSIDODECAHEDRON_FACES,
    )
}

static METABIGYRATE_RHOMBICOSIDODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 18, 53, 6], &[0, 6, 30, 48, 24], &[0, 12, 18], &[0, 24, 50, 12], &[1, 13, 19, 7],
    &[1, 7, 31, 49, 25], &[1, 48, 30, 13], &[1, 25, 48], &[2, 14, 20, 8], &[2, 8, 32, 50, 26],
    &[2, 49, 14], &[2, 26, 25, 49], &[3, 9, 15, 56], &[3, 27, 51, 33, 9], &[3, 38, 31, 27],
    &[3, 56, 38], &[4, 10, 22, 16], &[4, 28, 52, 34, 10], &[4, 16, 54], &[4, 54, 36, 28],
    &[5, 11, 23, 17], &[5, 29, 53, 35, 11], &[5, 17, 55], &[5, 55, 37, 29], &[6, 29, 37, 30],
    &[6, 53, 29], &[7, 19, 51, 27], &[7, 27, 31], &[8, 20, 52], &[8, 52, 28, 32], &[9, 21, 15],
    &[9, 33, 59, 21], &[10, 57, 22], &[10, 34, 39, 57], &[11, 58, 23], &[11, 35, 40, 58],
    &[12, 36, 54, 42, 18], &[12, 50, 32, 36], &[13, 37, 55, 43, 19], &[13, 30, 37],
    &[14, 38, 56, 44, 20], &[14, 49, 31, 38], &[15, 21, 45, 57, 39], &[15, 39, 44, 56],
    &[16, 22, 46, 58, 40], &[16, 40, 42, 54], &[17, 23, 47, 59, 41], &[17, 41, 43, 55],
    &[18, 42, 35, 53], &[19, 43, 51], &[20, 44, 34, 52], &[21, 59, 47, 45], &[22, 57, 45, 46],
    &[23, 58, 46, 47], &[24, 48, 25, 26], &[24, 26, 50], &[28, 36, 32], &[33, 51, 43, 41],
    &[33, 41, 59], &[34, 44, 39], &[35, 42, 40], &[45, 47, 46],
];

/// Trigyrate rhombicosidodecahedron (J75).
pub fn trigyrate_rhombicosidodecahedron(p: Prec) -> ShapeDef {
    gyrated_rhombicosidodecahedron(
        p,
        "trigyrate rhombicosidodecahedron",
        &[0, 1, 3],
        TRIGYRATE_RHOMBICOSIDODECAHEDRON_FACES,
    )
}

static TRIGYRATE_RHOMBICOSIDODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 18, 53, 6], &[0, 6, 30, 48, 24], &[0, 12, 18], &[0, 24, 50, 12], &[1, 13, 19, 7],
    &[1, 7, 31, 49, 25], &[1, 48, 30, 13], &[1, 25, 48], &[2, 14, 20, 8], &[2, 8, 32, 50, 26],
    &[2, 49, 14], &[2, 26, 25, 49], &[3, 9, 15, 56], &[3, 27, 51, 33, 9], &[3, 38, 31, 27],
    &[3, 56, 38], &[4, 10, 16, 54], &[4, 28, 52, 34, 10], &[4, 36, 32, 28], &[4, 54, 36],
    &[5, 11, 23, 17], &[5, 29, 53, 35, 11], &[5, 17, 55], &[5, 55, 37, 29], &[6, 29, 37, 30],
    &[6, 53, 29], &[7, 19, 51, 27], &[7, 27, 31], &[8, 20, 52, 28], &[8, 28, 32], &[9, 21, 15],
    &[9, 33, 59, 21], &[10, 22, 16], &[10, 34, 57, 22], &[11, 58, 23], &[11, 35, 40, 58],
    &[12, 36, 54, 42, 18], &[12, 50, 32, 36], &[13, 37, 55, 43, 19], &[13, 30, 37],
    &[14, 38, 56, 44, 20], &[14, 49, 31, 38], &[15, 21, 45, 57, 39], &[15, 39, 44, 56],
    &[16, 22, 46, 58, 40], &[16, 40, 42, 54], &[17, 23, 47, 59, 41], &[17, 41, 43, 55],
    &[18, 42, 35, 53], &[19, 43, 51], &[20, 44, 52], &[21, 59, 47, 45], &[22, 57, 45, 46],
    &[23, 58, 46, 47], &[24, 48, 25, 26], &[24, 26, 50], &[33, 51, 43, 41], &[33, 41, 59],
    &[34, 52, 44, 39], &[34, 39, 57], &[35, 42, 40], &[45, 47, 46],
];

/// Shared generator for the gyrate rhombicosidodecahedra: turn the
/// pentagonal cap of each listed cupola 36 degrees about its five-fold axis.
/// Only the five cap vertices move; the decagonal ring maps onto itself.
fn gyrated_rhombicosidodecahedron(
    p: Prec,
    name: &'static str,
    caps: &[usize],
    faces: &'static [&'static [usize]],
) -> ShapeDef {
    let mut vertices = rhombicosidodecahedron_vertices(p);
    let cos36 = p.phi() / p.int(2);
    let sin36 = (p.int(10) - p.int(2) * p.int(5).sqrt()).sqrt() / p.int(4);
    for &cap in caps {
        let axis = five_fold_axis(p, &GYRATE_AXES[cap]);
        rotate_set(&mut vertices, GYRATE_CAPS[cap], &axis, &cos36, &sin36);
    }
    ShapeDef::new(name, vertices, faces)
}

/// Five-fold axes used by the gyrations, as integer coefficients of (1, phi)
/// per coordinate.
const GYRATE_AXES: &[[[i64; 2]; 3]] = &[
    [[1, 0], [0, 0], [0, 1]],
    [[1, 0], [0, 0], [0, -1]],
    [[-1, 0], [0, 0], [0, -1]],
    [[0, -1], [1, 0], [0, 0]],
];

/// Cap vertex indices (the pentagonal face) for each axis above.
const GYRATE_CAPS: &[&[usize]] = &[
    &[0, 6, 24, 30, 48],
    &[3, 9, 27, 33, 51],
    &[15, 21, 39, 45, 57],
    &[4, 10, 28, 34, 52],
];

fn five_fold_axis(p: Prec, coeffs: &[[i64; 2]; 3]) -> Vec3 {
    let phi = p.phi();
    let comp = |c: [i64; 2]| p.int(c[0]) + p.int(c[1]) * phi.clone();
    Vec3::new(comp(coeffs[0]), comp(coeffs[1]), comp(coeffs[2]))
}

/// Rodrigues rotation of the listed vertices about `axis` (not necessarily
/// unit length) by the angle whose cosine/sine are given.
fn rotate_set(
    vertices: &mut [Vec3],
    idxs: &[usize],
    axis: &Vec3,
    cos_t: &Float,
    sin_t: &Float,
) {
    let k = axis.scale(&axis.norm().recip());
    let one = Float::with_val(cos_t.prec(), 1);
    for &i in idxs {
        let v = vertices[i].clone();
        let radial = v.scale(cos_t);
        let tangential = k.cross(&v).scale(sin_t);
        let axial = k.scale(&(k.dot(&v) * (one.clone() - cos_t.clone())));
        vertices[i] = radial.add(&tangential).add(&axial);
    }
}
