//! The shape catalog: vertex tables and face data for every supported solid.
//!
//! Each entry is a free factory function returning a [`ShapeDef`], i.e. the
//! canonical basis vertices (exact algebraic coordinates evaluated at the
//! requested precision) plus a static face index table. Families that share
//! a topology share a vertex builder and differ only in a small generator
//! step (the gyrated cupolas) or a reciprocation step (the snub duals); no
//! entry carries any logic beyond producing its data.
//!
//! Basis tables come at their natural scales; the polyhedron builder
//! renormalizes every vertex onto the caller's circumsphere.

pub mod archimedean;
pub mod catalan;
pub mod chamfered;
pub mod johnson;
pub mod platonic;

use rug::Float;

use crate::error::BuildError;
use crate::geom::{Polyhedron, Vec3};
use crate::num::Prec;

#[cfg(test)]
mod tests;

/// A catalog entry: basis vertices plus face index lists, ready for the
/// polyhedron builder.
#[derive(Clone, Debug)]
pub struct ShapeDef {
    pub name: &'static str,
    pub vertices: Vec<Vec3>,
    pub faces: &'static [&'static [usize]],
}

impl ShapeDef {
    pub(crate) fn new(
        name: &'static str,
        vertices: Vec<Vec3>,
        faces: &'static [&'static [usize]],
    ) -> Self {
        Self {
            name,
            vertices,
            faces,
        }
    }

    /// Build the solid at the given circumradius.
    pub fn build(&self, prec: Prec, radius: &Float) -> Result<Polyhedron, BuildError> {
        Polyhedron::build(prec, radius, &self.vertices, self.faces)
    }
}

/// Handedness of the chiral entries (both snub solids and their duals).
///
/// `Laevo` is the canonical table; `Dextro` mirrors it through the yz
/// plane. The face tables are shared: the builder's orientation correction
/// re-derives outward normals for either hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Chirality {
    #[default]
    Laevo,
    Dextro,
}

impl Chirality {
    pub(crate) fn apply(self, vertices: Vec<Vec3>) -> Vec<Vec3> {
        match self {
            Chirality::Laevo => vertices,
            Chirality::Dextro => vertices
                .into_iter()
                .map(|v| Vec3::new(-v.x, v.y, v.z))
                .collect(),
        }
    }
}

/// Every catalog entry by name. Chiral entries appear in their laevo form;
/// call their factories directly to choose a hand.
pub const CATALOG: &[(&str, fn(Prec) -> ShapeDef)] = &[
    // Platonic
    ("tetrahedron", platonic::tetrahedron),
    ("cube", platonic::cube),
    ("octahedron", platonic::octahedron),
    ("dodecahedron", platonic::dodecahedron),
    ("icosahedron", platonic::icosahedron),
    // Archimedean
    ("truncated tetrahedron", archimedean::truncated_tetrahedron),
    ("cuboctahedron", archimedean::cuboctahedron),
    ("truncated cube", archimedean::truncated_cube),
    ("truncated octahedron", archimedean::truncated_octahedron),
    ("rhombicuboctahedron", archimedean::rhombicuboctahedron),
    ("truncated cuboctahedron", archimedean::truncated_cuboctahedron),
    ("snub cube", snub_cube_laevo),
    ("icosidodecahedron", archimedean::icosidodecahedron),
    ("truncated dodecahedron", archimedean::truncated_dodecahedron),
    ("truncated icosahedron", archimedean::truncated_icosahedron),
    ("rhombicosidodecahedron", archimedean::rhombicosidodecahedron),
    (
        "truncated icosidodecahedron",
        archimedean::truncated_icosidodecahedron,
    ),
    ("snub dodecahedron", snub_dodecahedron_laevo),
    // Catalan
    ("triakis tetrahedron", catalan::triakis_tetrahedron),
    ("rhombic dodecahedron", catalan::rhombic_dodecahedron),
    ("triakis octahedron", catalan::triakis_octahedron),
    ("tetrakis hexahedron", catalan::tetrakis_hexahedron),
    (
        "deltoidal icositetrahedron",
        catalan::deltoidal_icositetrahedron,
    ),
    ("disdyakis dodecahedron", catalan::disdyakis_dodecahedron),
    (
        "pentagonal icositetrahedron",
        pentagonal_icositetrahedron_laevo,
    ),
    ("rhombic triacontahedron", catalan::rhombic_triacontahedron),
    ("triakis icosahedron", catalan::triakis_icosahedron),
    ("pentakis dodecahedron", catalan::pentakis_dodecahedron),
    (
        "deltoidal hexecontahedron",
        catalan::deltoidal_hexecontahedron,
    ),
    (
        "disdyakis triacontahedron",
        catalan::disdyakis_triacontahedron,
    ),
    (
        "pentagonal hexecontahedron",
        pentagonal_hexecontahedron_laevo,
    ),
    // Chamfered
    ("chamfered tetrahedron", chamfered::chamfered_tetrahedron),
    ("chamfered cube", chamfered::chamfered_cube),
    ("chamfered octahedron", chamfered::chamfered_octahedron),
    ("chamfered dodecahedron", chamfered::chamfered_dodecahedron),
    ("chamfered icosahedron", chamfered::chamfered_icosahedron),
    // Johnson
    ("triangular bipyramid", johnson::triangular_bipyramid),
    ("pentagonal bipyramid", johnson::pentagonal_bipyramid),
    (
        "elongated square bipyramid",
        johnson::elongated_square_bipyramid,
    ),
    (
        "elongated square gyrobicupola",
        johnson::elongated_square_gyrobicupola,
    ),
    (
        "gyrate rhombicosidodecahedron",
        johnson::gyrate_rhombicosidodecahedron,
    ),
    (
        "parabigyrate rhombicosidodecahedron",
        johnson::parabigyrate_rhombicosidodecahedron,
    ),
    (
        "metabigyrate rhombicosidodecahedron",
        johnson::metabigyrate_rhombicosidodecahedron,
    ),
    (
        "trigyrate rhombicosidodecahedron",
        johnson::trigyrate_rhombicosidodecahedron,
    ),
];

fn snub_cube_laevo(p: Prec) -> ShapeDef {
    archimedean::snub_cube(p, Chirality::Laevo)
}

fn snub_dodecahedron_laevo(p: Prec) -> ShapeDef {
    archimedean::snub_dodecahedron(p, Chirality::Laevo)
}

fn pentagonal_icositetrahedron_laevo(p: Prec) -> ShapeDef {
    catalan::pentagonal_icositetrahedron(p, Chirality::Laevo)
}

fn pentagonal_hexecontahedron_laevo(p: Prec) -> ShapeDef {
    catalan::pentagonal_hexecontahedron(p, Chirality::Laevo)
}

/// All entries instantiated at one precision.
pub fn all(p: Prec) -> Vec<ShapeDef> {
    CATALOG.iter().map(|(_, factory)| factory(p)).collect()
}

/// Look an entry up by its catalog name.
pub fn by_name(name: &str, p: Prec) -> Option<ShapeDef> {
    CATALOG
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, factory)| factory(p))
}
