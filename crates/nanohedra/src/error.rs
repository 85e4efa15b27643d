//! Construction-time error type.
//!
//! All validation happens while a polyhedron is built. A built polyhedron
//! answers containment queries without any error path, which matters because
//! the lattice driver issues one query per candidate site.

use thiserror::Error;

/// Everything that can go wrong while assembling a polyhedron.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A scalar literal did not parse as a decimal number.
    #[error("invalid decimal literal {literal:?}")]
    BadLiteral { literal: String },

    /// No vertices or no faces were supplied.
    #[error("empty polyhedron: {vertices} vertices, {faces} faces")]
    Empty { vertices: usize, faces: usize },

    /// A face lists fewer than three vertices.
    #[error("face {face} has {arity} vertices, need at least 3")]
    BadFaceArity { face: usize, arity: usize },

    /// A face references a vertex index outside the vertex table.
    #[error("face {face} references vertex {index}, table holds {vertices}")]
    FaceIndexOutOfRange {
        face: usize,
        index: usize,
        vertices: usize,
    },

    /// A face lists the same vertex twice.
    #[error("face {face} repeats vertex {index}")]
    RepeatedVertex { face: usize, index: usize },

    /// A zero-length vector where a direction was required.
    #[error("degenerate geometry: zero-length vector")]
    DegenerateGeometry,

    /// A face ring is collinear at the working precision, so no normal
    /// direction can be derived from it.
    #[error("degenerate face {face}: vertex ring is collinear at this precision")]
    DegenerateFace { face: usize },

    /// Two adjacent vertices of a face rounded onto each other, i.e. the
    /// requested precision cannot separate algebraically close coordinates.
    #[error("precision too low: vertices {a} and {b} of face {face} coincide")]
    InsufficientPrecision { face: usize, a: usize, b: usize },
}
