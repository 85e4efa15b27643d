//! Exact 3D geometry: vectors, face normals, half-space containment.
//!
//! Purpose
//! - Provide the generic machinery every catalog entry instantiates: scale
//!   a basis vertex table onto a circumsphere, derive one outward normal
//!   per face ring, and classify points against the resulting half-space
//!   intersection.
//!
//! Why this design
//! - Faces live in one flat list with their normal and anchor precomputed,
//!   so the containment sweep is a uniform loop over `(normal, anchor)`
//!   pairs whatever the face arities are.
//! - All arithmetic runs at the precision fixed by the build; tolerances
//!   derive from it rather than from ad-hoc constants.

pub mod normal;
pub mod polyhedron;
pub mod vec3;

pub use normal::polygon_normal;
pub use polyhedron::{Face, Polyhedron};
pub use vec3::Vec3;

#[cfg(test)]
mod tests;
