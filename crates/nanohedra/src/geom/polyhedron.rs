//! Origin-centred polyhedra: builder, validation, containment.
//!
//! Why this design
//! - One flat face list regardless of arity. Each face keeps its outward
//!   unit normal and an anchor vertex on the face plane, which is everything
//!   the half-space test reads.
//! - All validation happens once, at build time. `in_bounds` is total over
//!   finite points and holds no mutable state, so the lattice driver can
//!   issue millions of queries against one shared instance from any number
//!   of threads.

use std::cmp::Ordering;

use nalgebra::Vector3;
use rug::Float;
use tracing::debug;

use crate::error::BuildError;
use crate::num::Prec;

use super::normal::polygon_normal;
use super::Vec3;

/// One boundary polygon: the vertex indices in ring order, the outward unit
/// normal, and an anchor (the ring's first vertex, on the face plane).
#[derive(Clone, Debug)]
pub struct Face {
    pub indices: Vec<usize>,
    pub normal: Vec3,
    pub anchor: Vec3,
}

/// A bounded, origin-centred solid as an intersection of face half-spaces.
///
/// Invariants, established by [`Polyhedron::build`] and never revalidated:
/// - every vertex lies on the circumsphere of `radius`;
/// - every face normal is unit length and points away from the origin;
/// - face indices are in range and each face ring has three or more
///   distinct vertices.
#[derive(Clone, Debug)]
pub struct Polyhedron {
    prec: Prec,
    radius: Float,
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Polyhedron {
    /// Build from a basis vertex table and face index lists.
    ///
    /// Every basis vertex is renormalized onto the sphere of `radius`, so
    /// tables at any natural scale produce solids of a common size. The
    /// construction cost is `O(V + F k)` for faces of mean arity `k` and is
    /// paid once per shape instantiation.
    pub fn build(
        prec: Prec,
        radius: &Float,
        basis: &[Vec3],
        faces: &[&[usize]],
    ) -> Result<Self, BuildError> {
        if basis.is_empty() || faces.is_empty() {
            return Err(BuildError::Empty {
                vertices: basis.len(),
                faces: faces.len(),
            });
        }
        for (fi, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(BuildError::BadFaceArity {
                    face: fi,
                    arity: face.len(),
                });
            }
            for (k, &index) in face.iter().enumerate() {
                if index >= basis.len() {
                    return Err(BuildError::FaceIndexOutOfRange {
                        face: fi,
                        index,
                        vertices: basis.len(),
                    });
                }
                if face[..k].contains(&index) {
                    return Err(BuildError::RepeatedVertex { face: fi, index });
                }
            }
        }

        let eps = prec.epsilon();
        let mut vertices = Vec::with_capacity(basis.len());
        for v in basis {
            vertices.push(v.normalized(&eps)?.scale(radius));
        }

        let mut built = Vec::with_capacity(faces.len());
        for (fi, face) in faces.iter().enumerate() {
            let ring: Vec<Vec3> = face.iter().map(|&i| vertices[i].clone()).collect();
            for (k, a) in ring.iter().enumerate() {
                let b = &ring[(k + 1) % ring.len()];
                if a.sub(b).norm() <= eps {
                    return Err(BuildError::InsufficientPrecision {
                        face: fi,
                        a: face[k],
                        b: face[(k + 1) % face.len()],
                    });
                }
            }
            let normal = polygon_normal(&ring, &eps)
                .map_err(|_| BuildError::DegenerateFace { face: fi })?;
            built.push(Face {
                indices: face.to_vec(),
                normal,
                anchor: ring[0].clone(),
            });
        }
        debug!(
            vertices = vertices.len(),
            faces = built.len(),
            digits = prec.digits(),
            "built polyhedron"
        );
        Ok(Self {
            prec,
            radius: radius.clone(),
            vertices,
            faces: built,
        })
    }

    /// True iff `point` is behind or exactly on every face plane.
    ///
    /// The first violated half-space wins and short-circuits the sweep;
    /// boundary points count as inside. Never fails and never mutates.
    pub fn in_bounds(&self, point: &Vec3) -> bool {
        for face in &self.faces {
            let d = face.normal.dot(&point.sub(&face.anchor));
            if d.cmp0() == Some(Ordering::Greater) {
                return false;
            }
        }
        true
    }

    /// [`Polyhedron::in_bounds`] for an `f64` point, lifted to the working
    /// precision first.
    pub fn in_bounds_f64(&self, point: Vector3<f64>) -> bool {
        self.in_bounds(&Vec3::from_f64(self.prec, point))
    }

    #[inline]
    pub fn prec(&self) -> Prec {
        self.prec
    }

    #[inline]
    pub fn radius(&self) -> &Float {
        &self.radius
    }

    /// Circumradius as `f64`, for bounding-box arithmetic on the lattice
    /// side.
    #[inline]
    pub fn radius_f64(&self) -> f64 {
        self.radius.to_f64()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}
