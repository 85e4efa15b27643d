//! Polyhedral boundary kernel for faceted-nanoparticle models.
//!
//! Purpose
//! - Build origin-centred convex solids from exact algebraic vertex tables
//!   at a caller-chosen decimal precision, derive outward face normals, and
//!   answer point-containment queries for lattice carving.
//! - Keep the API minimal and numerically explicit: every tolerance derives
//!   from the requested precision, and all validation happens at build time
//!   so the containment test itself never fails.
//!
//! Layout
//! - [`num`]: precision plumbing over MPFR floats.
//! - [`geom`]: vectors, Newell normals, the polyhedron builder and the
//!   containment predicate.
//! - [`catalog`]: shape data for the Platonic, Archimedean, Catalan,
//!   chamfered and Johnson families.
//! - [`lattice`]: cubic unit cells and the sequential/parallel carving
//!   drivers.
//! - [`error`]: the build-time error type.

pub mod catalog;
pub mod error;
pub mod geom;
pub mod lattice;
pub mod num;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::catalog::{all, by_name, Chirality, ShapeDef, CATALOG};
    pub use crate::error::BuildError;
    pub use crate::geom::{Polyhedron, Vec3};
    pub use crate::lattice::{carve, par_carve, Centering, UnitCell};
    pub use crate::num::Prec;
}
