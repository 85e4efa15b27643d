//! Chamfered Platonic solids (edges replaced by equilateral hexagons).
//!
//! Each table keeps the seed's faces (shrunk in their planes) and the seed's
//! vertices (rescaled), with one hexagon per seed edge. The shrink and
//! rescale factors are the exact solutions of the hexagon planarity and
//! equal-edge conditions, so the constants below carry nested radicals.

use crate::geom::Vec3;
use crate::num::Prec;

use super::ShapeDef;

/// Chamfered tetrahedron: 16 vertices, 10 faces (4 triangles, 6 hexagons). Chamfer of the tetrahedron.
pub fn chamfered_tetrahedron(p: Prec) -> ShapeDef {
    let c0 = p.frac(7, 17) - (p.frac(4, 17) * p.int(2).sqrt()); // 0.0790085736
    let c1 = p.frac(5, 17) + (p.frac(2, 17) * p.int(2).sqrt()); // 0.4604957132
    let vertices = vec![
        Vec3::new(c1.clone(), c1.clone(), -c0.clone()),
        Vec3::new(c1.clone(), c0.clone(), -c1.clone()),
        Vec3::new(c0.clone(), c1.clone(), -c1.clone()),
        Vec3::new(c1.clone(), -c0.clone(), c1.clone()),
        Vec3::new(c0.clone(), -c1.clone(), c1.clone()),
        Vec3::new(c1.clone(), -c1.clone(), c0.clone()),
        Vec3::new(-c0.clone(), c1.clone(), c1.clone()),
        Vec3::new(-c1.clone(), c1.clone(), c0.clone()),
        Vec3::new(-c1.clone(), c0.clone(), c1.clone()),
        Vec3::new(-c0.clone(), -c1.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -c1.clone(), -c0.clone()),
        Vec3::new(-c1.clone(), -c0.clone(), -c1.clone()),
        Vec3::new(c1.clone(), c1.clone(), c1.clone()),
        Vec3::new(c1.clone(), -c1.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), c1.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -c1.clone(), c1.clone()),
    ];
    ShapeDef::new("chamfered tetrahedron", vertices, CHAMFERED_TETRAHEDRON_FACES)
}

static CHAMFERED_TETRAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2], &[0, 12, 3, 5, 13, 1], &[0, 2, 14, 7, 6, 12], &[1, 13, 9, 11, 14, 2],
    &[3, 4, 5], &[3, 12, 6, 8, 15, 4], &[4, 15, 10, 9, 13, 5], &[6, 7, 8],
    &[7, 14, 11, 10, 15, 8], &[9, 10, 11],
];

/// Chamfered cube: 32 vertices, 18 faces (6 squares, 12 hexagons). Chamfer of the cube.
pub fn chamfered_cube(p: Prec) -> ShapeDef {
    let c0 = (p.frac(4, 13) * p.int(3).sqrt()) - p.frac(3, 13); // 0.3021694793
    let c1 = p.frac(5, 13) + (p.frac(2, 13) * p.int(3).sqrt()); // 0.6510847396
    let vertices = vec![
        Vec3::new(p.one(), c0.clone(), c0.clone()),
        Vec3::new(p.one(), -c0.clone(), c0.clone()),
        Vec3::new(p.one(), -c0.clone(), -c0.clone()),
        Vec3::new(p.one(), c0.clone(), -c0.clone()),
        Vec3::new(c0.clone(), p.one(), c0.clone()),
        Vec3::new(c0.clone(), p.one(), -c0.clone()),
        Vec3::new(-c0.clone(), p.one(), -c0.clone()),
        Vec3::new(-c0.clone(), p.one(), c0.clone()),
        Vec3::new(c0.clone(), c0.clone(), p.one()),
        Vec3::new(-c0.clone(), c0.clone(), p.one()),
        Vec3::new(-c0.clone(), -c0.clone(), p.one()),
        Vec3::new(c0.clone(), -c0.clone(), p.one()),
        Vec3::new(c0.clone(), c0.clone(), -p.one()),
        Vec3::new(c0.clone(), -c0.clone(), -p.one()),
        Vec3::new(-c0.clone(), -c0.clone(), -p.one()),
        Vec3::new(-c0.clone(), c0.clone(), -p.one()),
        Vec3::new(c0.clone(), -p.one(), c0.clone()),
        Vec3::new(-c0.clone(), -p.one(), c0.clone()),
        Vec3::new(-c0.clone(), -p.one(), -c0.clone()),
        Vec3::new(c0.clone(), -p.one(), -c0.clone()),
        Vec3::new(-p.one(), c0.clone(), c0.clone()),
        Vec3::new(-p.one(), c0.clone(), -c0.clone()),
        Vec3::new(-p.one(), -c0.clone(), -c0.clone()),
        Vec3::new(-p.one(), -c0.clone(), c0.clone()),
        Vec3::new(c1.clone(), c1.clone(), c1.clone()),
        Vec3::new(c1.clone(), c1.clone(), -c1.clone()),
        Vec3::new(c1.clone(), -c1.clone(), c1.clone()),
        Vec3::new(c1.clone(), -c1.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), c1.clone(), c1.clone()),
        Vec3::new(-c1.clone(), c1.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -c1.clone(), c1.clone()),
        Vec3::new(-c1.clone(), -c1.clone(), -c1.clone()),
    ];
    ShapeDef::new("chamfered cube", vertices, CHAMFERED_CUBE_FACES)
}

static CHAMFERED_CUBE_FACES: &[&[usize]] = &[
    &[0, 1, 2, 3], &[0, 24, 8, 11, 26, 1], &[0, 3, 25, 5, 4, 24], &[1, 26, 16, 19, 27, 2],
    &[2, 27, 13, 12, 25, 3], &[4, 5, 6, 7], &[4, 7, 28, 9, 8, 24], &[5, 25, 12, 15, 29, 6],
    &[6, 29, 21, 20, 28, 7], &[8, 9, 10, 11], &[9, 28, 20, 23, 30, 10],
    &[10, 30, 17, 16, 26, 11], &[12, 13, 14, 15], &[13, 27, 19, 18, 31, 14],
    &[14, 31, 22, 21, 29, 15], &[16, 17, 18, 19], &[17, 30, 23, 22, 31, 18], &[20, 21, 22, 23],
];

/// Chamfered octahedron: 30 vertices, 20 faces (8 triangles, 12 hexagons). Chamfer of the octahedron.
pub fn chamfered_octahedron(p: Prec) -> ShapeDef {
    let c0 = p.frac(2, 5) - (p.frac(1, 15) * p.int(6).sqrt()); // 0.2367006838
    let c1 = p.frac(1, 5) + (p.frac(2, 15) * p.int(6).sqrt()); // 0.5265986324
    let c2 = p.frac(3, 5) + (p.frac(1, 15) * p.int(6).sqrt()); // 0.7632993162
    let vertices = vec![
        Vec3::new(c1.clone(), c0.clone(), c0.clone()),
        Vec3::new(c0.clone(), c1.clone(), c0.clone()),
        Vec3::new(c0.clone(), c0.clone(), c1.clone()),
        Vec3::new(c1.clone(), c0.clone(), -c0.clone()),
        Vec3::new(c0.clone(), c0.clone(), -c1.clone()),
        Vec3::new(c0.clone(), c1.clone(), -c0.clone()),
        Vec3::new(c1.clone(), -c0.clone(), c0.clone()),
        Vec3::new(c0.clone(), -c0.clone(), c1.clone()),
        Vec3::new(c0.clone(), -c1.clone(), c0.clone()),
        Vec3::new(c1.clone(), -c0.clone(), -c0.clone()),
        Vec3::new(c0.clone(), -c1.clone(), -c0.clone()),
        Vec3::new(c0.clone(), -c0.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), c0.clone(), c0.clone()),
        Vec3::new(-c0.clone(), c0.clone(), c1.clone()),
        Vec3::new(-c0.clone(), c1.clone(), c0.clone()),
        Vec3::new(-c1.clone(), c0.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), c1.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), c0.clone(), -c1.clone()),
        Vec3::new(-c1.clone(), -c0.clone(), c0.clone()),
        Vec3::new(-c0.clone(), -c1.clone(), c0.clone()),
        Vec3::new(-c0.clone(), -c0.clone(), c1.clone()),
        Vec3::new(-c1.clone(), -c0.clone(), -c0.clone()),
        Vec3::new(-c0.clone(), -c0.clone(), -c1.clone()),
        Vec3::new(-c0.clone(), -c1.clone(), -c0.clone()),
        Vec3::new(c2.clone(), p.zero(), p.zero()),
        Vec3::new(-c2.clone(), p.zero(), p.zero()),
        Vec3::new(p.zero(), c2.clone(), p.zero()),
        Vec3::new(p.zero(), -c2.clone(), p.zero()),
        Vec3::new(p.zero(), p.zero(), c2.clone()),
        Vec3::new(p.zero(), p.zero(), -c2.clone()),
    ];
    ShapeDef::new("chamfered octahedron", vertices, CHAMFERED_OCTAHEDRON_FACES)
}

static CHAMFERED_OCTAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2], &[0, 24, 3, 5, 26, 1], &[0, 2, 28, 7, 6, 24], &[1, 26, 14, 13, 28, 2],
    &[3, 4, 5], &[3, 24, 9, 11, 29, 4], &[4, 29, 17, 16, 26, 5], &[6, 7, 8],
    &[6, 8, 27, 10, 9, 24], &[7, 28, 20, 19, 27, 8], &[9, 10, 11], &[10, 27, 23, 22, 29, 11],
    &[12, 13, 14], &[12, 25, 18, 20, 28, 13], &[12, 14, 26, 16, 15, 25], &[15, 16, 17],
    &[15, 17, 29, 22, 21, 25], &[18, 19, 20], &[18, 25, 21, 23, 27, 19], &[21, 22, 23],
];

/// Chamfered dodecahedron: 80 vertices, 42 faces (12 pentagons, 30 hexagons). Chamfer of the dodecahedron.
pub fn chamfered_dodecahedron(p: Prec) -> ShapeDef {
    let s5 = p.int(5).sqrt();
    let r10 = (p.int(10) - p.int(2) * s5.clone()).sqrt();
    let r50 = (p.int(50) - p.int(10) * s5.clone()).sqrt();
    let c0 = (p.frac(1, 82) * ((p.int(5) * r50.clone()) + (p.int(17) * r10.clone()) - (p.int(11) * s5.clone()))) - p.frac(21, 82); // 0.2519415245
    let c1 = (p.frac(1, 82) * ((p.int(11) * r50.clone()) + (p.int(21) * r10.clone()) - (p.int(16) * s5.clone()))) - p.frac(19, 41); // 0.4076499498
    let c2 = p.frac(34, 41) + (p.frac(1, 205) * ((p.int(50) * s5.clone()) - (p.int(40) * r10.clone()) - (p.int(19) * r50.clone()))); // 0.4286285230
    let c3 = (p.frac(1, 410) * ((p.int(4) * r50.clone()) + (p.int(30) * r10.clone()) + (p.int(65) * s5.clone()))) - p.frac(5, 82); // 0.5168485202
    let c4 = p.frac(15, 41) + (p.frac(1, 410) * ((p.int(17) * r50.clone()) + (p.int(20) * s5.clone()) + (p.int(25) * r10.clone()))); // 0.8362784728
    let c5 = p.frac(63, 82) + (p.frac(1, 410) * ((p.int(165) * s5.clone()) - (p.int(50) * r10.clone()) - (p.int(34) * r50.clone()))); // 0.9454770432
    let c6 = p.frac(9, 82) + (p.frac(1, 410) * ((p.int(42) * r50.clone()) + (p.int(110) * r10.clone()) - (p.int(35) * s5.clone()))); // 1.0882199973
    let c7 = p.frac(23, 41) + (p.frac(1, 205) * ((p.int(70) * s5.clone()) - (p.int(15) * r10.clone()) - (p.int(2) * r50.clone()))); // 1.1011854685
    let c8 = p.frac(25, 82) + (p.frac(1, 410) * ((p.int(21) * r50.clone()) + (p.int(55) * r10.clone()) + (p.int(85) * s5.clone()))); // 1.3531269930
    let vertices = vec![
        Vec3::new(c7.clone(), c4.clone(), c1.clone()),
        Vec3::new(c8.clone(), c2.clone(), c0.clone()),
        Vec3::new(c8.clone(), c2.clone(), -c0.clone()),
        Vec3::new(c7.clone(), c4.clone(), -c1.clone()),
        Vec3::new(c5.clone(), c6.clone(), p.zero()),
        Vec3::new(c4.clone(), c1.clone(), c7.clone()),
        Vec3::new(c2.clone(), c0.clone(), c8.clone()),
        Vec3::new(c2.clone(), -c0.clone(), c8.clone()),
        Vec3::new(c4.clone(), -c1.clone(), c7.clone()),
        Vec3::new(c6.clone(), p.zero(), c5.clone()),
        Vec3::new(c1.clone(), c7.clone(), c4.clone()),
        Vec3::new(c0.clone(), c8.clone(), c2.clone()),
        Vec3::new(-c0.clone(), c8.clone(), c2.clone()),
        Vec3::new(-c1.clone(), c7.clone(), c4.clone()),
        Vec3::new(p.zero(), c5.clone(), c6.clone()),
        Vec3::new(c4.clone(), c1.clone(), -c7.clone()),
        Vec3::new(c6.clone(), p.zero(), -c5.clone()),
        Vec3::new(c4.clone(), -c1.clone(), -c7.clone()),
        Vec3::new(c2.clone(), -c0.clone(), -c8.clone()),
        Vec3::new(c2.clone(), c0.clone(), -c8.clone()),
        Vec3::new(c1.clone(), c7.clone(), -c4.clone()),
        Vec3::new(p.zero(), c5.clone(), -c6.clone()),
        Vec3::new(-c1.clone(), c7.clone(), -c4.clone()),
        Vec3::new(-c0.clone(), c8.clone(), -c2.clone()),
        Vec3::new(c0.clone(), c8.clone(), -c2.clone()),
        Vec3::new(c7.clone(), -c4.clone(), c1.clone()),
        Vec3::new(c5.clone(), -c6.clone(), p.zero()),
        Vec3::new(c7.clone(), -c4.clone(), -c1.clone()),
        Vec3::new(c8.clone(), -c2.clone(), -c0.clone()),
        Vec3::new(c8.clone(), -c2.clone(), c0.clone()),
        Vec3::new(c1.clone(), -c7.clone(), c4.clone()),
        Vec3::new(p.zero(), -c5.clone(), c6.clone()),
        Vec3::new(-c1.clone(), -c7.clone(), c4.clone()),
        Vec3::new(-c0.clone(), -c8.clone(), c2.clone()),
        Vec3::new(c0.clone(), -c8.clone(), c2.clone()),
        Vec3::new(c1.clone(), -c7.clone(), -c4.clone()),
        Vec3::new(c0.clone(), -c8.clone(), -c2.clone()),
        Vec3::new(-c0.clone(), -c8.clone(), -c2.clone()),
        Vec3::new(-c1.clone(), -c7.clone(), -c4.clone()),
        Vec3::new(p.zero(), -c5.clone(), -c6.clone()),
        Vec3::new(-c7.clone(), c4.clone(), c1.clone()),
        Vec3::new(-c5.clone(), c6.clone(), p.zero()),
        Vec3::new(-c7.clone(), c4.clone(), -c1.clone()),
        Vec3::new(-c8.clone(), c2.clone(), -c0.clone()),
        Vec3::new(-c8.clone(), c2.clone(), c0.clone()),
        Vec3::new(-c4.clone(), c1.clone(), c7.clone()),
        Vec3::new(-c6.clone(), p.zero(), c5.clone()),
        Vec3::new(-c4.clone(), -c1.clone(), c7.clone()),
        Vec3::new(-c2.clone(), -c0.clone(), c8.clone()),
        Vec3::new(-c2.clone(), c0.clone(), c8.clone()),
        Vec3::new(-c4.clone(), c1.clone(), -c7.clone()),
        Vec3::new(-c2.clone(), c0.clone(), -c8.clone()),
        Vec3::new(-c2.clone(), -c0.clone(), -c8.clone()),
        Vec3::new(-c4.clone(), -c1.clone(), -c7.clone()),
        Vec3::new(-c6.clone(), p.zero(), -c5.clone()),
        Vec3::new(-c7.clone(), -c4.clone(), c1.clone()),
        Vec3::new(-c8.clone(), -c2.clone(), c0.clone()),
        Vec3::new(-c8.clone(), -c2.clone(), -c0.clone()),
        Vec3::new(-c7.clone(), -c4.clone(), -c1.clone()),
        Vec3::new(-c5.clone(), -c6.clone(), p.zero()),
        Vec3::new(c4.clone(), c4.clone(), c4.clone()),
        Vec3::new(c4.clone(), c4.clone(), -c4.clone()),
        Vec3::new(c4.clone(), -c4.clone(), c4.clone()),
        Vec3::new(c4.clone(), -c4.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), c4.clone(), c4.clone()),
        Vec3::new(-c4.clone(), c4.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), -c4.clone(), c4.clone()),
        Vec3::new(-c4.clone(), -c4.clone(), -c4.clone()),
        Vec3::new(p.zero(), c3.clone(), c8.clone()),
        Vec3::new(c8.clone(), p.zero(), c3.clone()),
        Vec3::new(c3.clone(), c8.clone(), p.zero()),
        Vec3::new(p.zero(), c3.clone(), -c8.clone()),
        Vec3::new(-c8.clone(), p.zero(), c3.clone()),
        Vec3::new(c3.clone(), -c8.clone(), p.zero()),
        Vec3::new(p.zero(), -c3.clone(), c8.clone()),
        Vec3::new(c8.clone(), p.zero(), -c3.clone()),
        Vec3::new(-c3.clone(), c8.clone(), p.zero()),
        Vec3::new(p.zero(), -c3.clone(), -c8.clone()),
        Vec3::new(-c8.clone(), p.zero(), -c3.clone()),
        Vec3::new(-c3.clone(), -c8.clone(), p.zero()),
    ];
    ShapeDef::new("chamfered dodecahedron", vertices, CHAMFERED_DODECAHEDRON_FACES)
}

static CHAMFERED_DODECAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2, 3, 4], &[0, 60, 5, 9, 69, 1], &[0, 4, 70, 11, 10, 60], &[1, 69, 29, 28, 75, 2],
    &[2, 75, 16, 15, 61, 3], &[3, 61, 20, 24, 70, 4], &[5, 6, 7, 8, 9],
    &[5, 60, 10, 14, 68, 6], &[6, 68, 49, 48, 74, 7], &[7, 74, 31, 30, 62, 8],
    &[8, 62, 25, 29, 69, 9], &[10, 11, 12, 13, 14], &[11, 70, 24, 23, 76, 12],
    &[12, 76, 41, 40, 64, 13], &[13, 64, 45, 49, 68, 14], &[15, 16, 17, 18, 19],
    &[15, 19, 71, 21, 20, 61], &[16, 75, 28, 27, 63, 17], &[17, 63, 35, 39, 77, 18],
    &[18, 77, 52, 51, 71, 19], &[20, 21, 22, 23, 24], &[21, 71, 51, 50, 65, 22],
    &[22, 65, 42, 41, 76, 23], &[25, 26, 27, 28, 29], &[25, 62, 30, 34, 73, 26],
    &[26, 73, 36, 35, 63, 27], &[30, 31, 32, 33, 34], &[31, 74, 48, 47, 66, 32],
    &[32, 66, 55, 59, 79, 33], &[33, 79, 37, 36, 73, 34], &[35, 36, 37, 38, 39],
    &[37, 79, 59, 58, 67, 38], &[38, 67, 53, 52, 77, 39], &[40, 41, 42, 43, 44],
    &[40, 44, 72, 46, 45, 64], &[42, 65, 50, 54, 78, 43], &[43, 78, 57, 56, 72, 44],
    &[45, 46, 47, 48, 49], &[46, 72, 56, 55, 66, 47], &[50, 51, 52, 53, 54],
    &[53, 67, 58, 57, 78, 54], &[55, 56, 57, 58, 59],
];

/// Chamfered icosahedron: 72 vertices, 50 faces (20 triangles, 30 hexagons). Chamfer of the icosahedron.
pub fn chamfered_icosahedron(p: Prec) -> ShapeDef {
    let s5 = p.int(5).sqrt();
    let r5 = (p.int(5) + p.int(2) * s5.clone()).sqrt();
    let r25 = (p.int(25) + p.int(10) * s5.clone()).sqrt();
    let c0 = (p.frac(1, 941) * ((p.int(12) * r25.clone()) + (p.int(186) * r5.clone()) - (p.int(72) * s5.clone()))) - p.frac(175, 941); // 0.3390384259
    let c1 = p.frac(246, 941) + (p.frac(1, 941) * ((p.int(198) * s5.clone()) - (p.int(41) * r5.clone()) - (p.int(33) * r25.clone()))); // 0.3564860974
    let c2 = p.frac(618, 941) + (p.frac(1, 941) * ((p.int(222) * s5.clone()) - (p.int(103) * r5.clone()) - (p.int(37) * r25.clone()))); // 0.5768066221
    let c3 = (p.frac(1, 1882) * ((p.int(132) * r25.clone()) + (p.int(149) * s5.clone()) + (p.int(164) * r5.clone()))) - p.frac(43, 1882); // 0.9050617940
    let c4 = p.frac(443, 941) + (p.frac(1, 941) * ((p.int(83) * r5.clone()) + (p.int(150) * s5.clone()) - (p.int(25) * r25.clone()))); // 0.9158450480
    let c5 = p.frac(701, 1882) + (p.frac(1, 1882) * ((p.int(40) * r5.clone()) + (p.int(124) * r25.clone()) + (p.int(197) * s5.clone()))); // 1.1253823187
    let c6 = p.frac(689, 941) + (p.frac(1, 941) * ((p.int(42) * r5.clone()) + (p.int(348) * s5.clone()) - (p.int(58) * r25.clone()))); // 1.2723311454
    let c7 = p.frac(1193, 1882) + (p.frac(1, 1882) * ((p.int(58) * r25.clone()) + (p.int(593) * s5.clone()) - (p.int(42) * r5.clone()))); // 1.4818684161
    let vertices = vec![
        Vec3::new(c2.clone(), c4.clone(), c5.clone()),
        Vec3::new(c5.clone(), c2.clone(), c4.clone()),
        Vec3::new(c4.clone(), c5.clone(), c2.clone()),
        Vec3::new(c1.clone(), c0.clone(), c7.clone()),
        Vec3::new(c1.clone(), -c0.clone(), c7.clone()),
        Vec3::new(c3.clone(), p.zero(), c6.clone()),
        Vec3::new(p.zero(), c6.clone(), c3.clone()),
        Vec3::new(c0.clone(), c7.clone(), c1.clone()),
        Vec3::new(-c0.clone(), c7.clone(), c1.clone()),
        Vec3::new(-c1.clone(), c0.clone(), c7.clone()),
        Vec3::new(-c3.clone(), p.zero(), c6.clone()),
        Vec3::new(-c1.clone(), -c0.clone(), c7.clone()),
        Vec3::new(-c2.clone(), c4.clone(), c5.clone()),
        Vec3::new(-c4.clone(), c5.clone(), c2.clone()),
        Vec3::new(-c5.clone(), c2.clone(), c4.clone()),
        Vec3::new(c7.clone(), c1.clone(), c0.clone()),
        Vec3::new(c7.clone(), c1.clone(), -c0.clone()),
        Vec3::new(c6.clone(), c3.clone(), p.zero()),
        Vec3::new(c5.clone(), -c2.clone(), c4.clone()),
        Vec3::new(c2.clone(), -c4.clone(), c5.clone()),
        Vec3::new(c4.clone(), -c5.clone(), c2.clone()),
        Vec3::new(c7.clone(), -c1.clone(), c0.clone()),
        Vec3::new(c6.clone(), -c3.clone(), p.zero()),
        Vec3::new(c7.clone(), -c1.clone(), -c0.clone()),
        Vec3::new(c4.clone(), c5.clone(), -c2.clone()),
        Vec3::new(c5.clone(), c2.clone(), -c4.clone()),
        Vec3::new(c2.clone(), c4.clone(), -c5.clone()),
        Vec3::new(c0.clone(), c7.clone(), -c1.clone()),
        Vec3::new(p.zero(), c6.clone(), -c3.clone()),
        Vec3::new(-c0.clone(), c7.clone(), -c1.clone()),
        Vec3::new(c1.clone(), c0.clone(), -c7.clone()),
        Vec3::new(c3.clone(), p.zero(), -c6.clone()),
        Vec3::new(c1.clone(), -c0.clone(), -c7.clone()),
        Vec3::new(-c2.clone(), c4.clone(), -c5.clone()),
        Vec3::new(-c5.clone(), c2.clone(), -c4.clone()),
        Vec3::new(-c4.clone(), c5.clone(), -c2.clone()),
        Vec3::new(-c1.clone(), c0.clone(), -c7.clone()),
        Vec3::new(-c1.clone(), -c0.clone(), -c7.clone()),
        Vec3::new(-c3.clone(), p.zero(), -c6.clone()),
        Vec3::new(-c5.clone(), -c2.clone(), c4.clone()),
        Vec3::new(-c4.clone(), -c5.clone(), c2.clone()),
        Vec3::new(-c2.clone(), -c4.clone(), c5.clone()),
        Vec3::new(-c7.clone(), c1.clone(), c0.clone()),
        Vec3::new(-c6.clone(), c3.clone(), p.zero()),
        Vec3::new(-c7.clone(), c1.clone(), -c0.clone()),
        Vec3::new(-c7.clone(), -c1.clone(), c0.clone()),
        Vec3::new(-c7.clone(), -c1.clone(), -c0.clone()),
        Vec3::new(-c6.clone(), -c3.clone(), p.zero()),
        Vec3::new(c0.clone(), -c7.clone(), c1.clone()),
        Vec3::new(p.zero(), -c6.clone(), c3.clone()),
        Vec3::new(-c0.clone(), -c7.clone(), c1.clone()),
        Vec3::new(c4.clone(), -c5.clone(), -c2.clone()),
        Vec3::new(c2.clone(), -c4.clone(), -c5.clone()),
        Vec3::new(c5.clone(), -c2.clone(), -c4.clone()),
        Vec3::new(c0.clone(), -c7.clone(), -c1.clone()),
        Vec3::new(-c0.clone(), -c7.clone(), -c1.clone()),
        Vec3::new(p.zero(), -c6.clone(), -c3.clone()),
        Vec3::new(-c2.clone(), -c4.clone(), -c5.clone()),
        Vec3::new(-c4.clone(), -c5.clone(), -c2.clone()),
        Vec3::new(-c5.clone(), -c2.clone(), -c4.clone()),
        Vec3::new(p.zero(), c4.clone(), c7.clone()),
        Vec3::new(c7.clone(), p.zero(), c4.clone()),
        Vec3::new(c4.clone(), c7.clone(), p.zero()),
        Vec3::new(p.zero(), c4.clone(), -c7.clone()),
        Vec3::new(-c7.clone(), p.zero(), c4.clone()),
        Vec3::new(c4.clone(), -c7.clone(), p.zero()),
        Vec3::new(p.zero(), -c4.clone(), c7.clone()),
        Vec3::new(c7.clone(), p.zero(), -c4.clone()),
        Vec3::new(-c4.clone(), c7.clone(), p.zero()),
        Vec3::new(p.zero(), -c4.clone(), -c7.clone()),
        Vec3::new(-c7.clone(), p.zero(), -c4.clone()),
        Vec3::new(-c4.clone(), -c7.clone(), p.zero()),
    ];
    ShapeDef::new("chamfered icosahedron", vertices, CHAMFERED_ICOSAHEDRON_FACES)
}

static CHAMFERED_ICOSAHEDRON_FACES: &[&[usize]] = &[
    &[0, 1, 2], &[0, 60, 3, 5, 61, 1], &[0, 2, 62, 7, 6, 60], &[1, 61, 15, 17, 62, 2],
    &[3, 4, 5], &[3, 60, 9, 11, 66, 4], &[4, 66, 19, 18, 61, 5], &[6, 7, 8],
    &[6, 8, 68, 13, 12, 60], &[7, 62, 27, 29, 68, 8], &[9, 10, 11], &[9, 60, 12, 14, 64, 10],
    &[10, 64, 39, 41, 66, 11], &[12, 13, 14], &[13, 68, 43, 42, 64, 14], &[15, 16, 17],
    &[15, 61, 21, 23, 67, 16], &[16, 67, 25, 24, 62, 17], &[18, 19, 20],
    &[18, 20, 65, 22, 21, 61], &[19, 66, 49, 48, 65, 20], &[21, 22, 23],
    &[22, 65, 51, 53, 67, 23], &[24, 25, 26], &[24, 26, 63, 28, 27, 62],
    &[25, 67, 31, 30, 63, 26], &[27, 28, 29], &[28, 63, 33, 35, 68, 29], &[30, 31, 32],
    &[30, 32, 69, 37, 36, 63], &[31, 67, 53, 52, 69, 32], &[33, 34, 35],
    &[33, 63, 36, 38, 70, 34], &[34, 70, 44, 43, 68, 35], &[36, 37, 38],
    &[37, 69, 57, 59, 70, 38], &[39, 40, 41], &[39, 64, 45, 47, 71, 40],
    &[40, 71, 50, 49, 66, 41], &[42, 43, 44], &[42, 44, 70, 46, 45, 64], &[45, 46, 47],
    &[46, 70, 59, 58, 71, 47], &[48, 49, 50], &[48, 50, 71, 55, 54, 65], &[51, 52, 53],
    &[51, 65, 54, 56, 69, 52], &[54, 55, 56], &[55, 71, 58, 57, 69, 56], &[57, 58, 59],
];
