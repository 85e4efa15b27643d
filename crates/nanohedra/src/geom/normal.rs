//! Outward unit normals for polygonal face rings.
//!
//! Triangles use the plain edge cross product. Larger rings accumulate
//! Newell's sum of successive vertex cross products, which stays well
//! conditioned on the near-planar rings that circumsphere normalization
//! produces for the non-inscribable catalog entries.
//!
//! Orientation correction is unconditional: every catalog solid surrounds
//! the origin, so a normal whose dot product with the ring centroid is
//! negative points inward and gets flipped here, not by the callers.

use rug::Float;

use crate::error::BuildError;

use super::Vec3;

/// Outward unit normal of an ordered vertex ring with three or more entries.
///
/// A ring that is collinear at the working precision accumulates a
/// near-zero vector and fails as degenerate geometry; the polyhedron
/// builder turns that into a per-face error.
pub fn polygon_normal(ring: &[Vec3], eps: &Float) -> Result<Vec3, BuildError> {
    if ring.len() < 3 {
        return Err(BuildError::DegenerateGeometry);
    }
    let accumulated = if ring.len() == 3 {
        ring[1].sub(&ring[0]).cross(&ring[2].sub(&ring[0]))
    } else {
        let mut acc = zero_vec(&ring[0].x);
        for (i, a) in ring.iter().enumerate() {
            let b = &ring[(i + 1) % ring.len()];
            acc = acc.add(&a.cross(b));
        }
        acc
    };
    let normal = accumulated.normalized(eps)?;
    if normal.dot(&centroid(ring)).is_sign_negative() {
        Ok(normal.neg())
    } else {
        Ok(normal)
    }
}

/// Mean of the ring vertices.
pub(crate) fn centroid(ring: &[Vec3]) -> Vec3 {
    let mut sum = zero_vec(&ring[0].x);
    for v in ring {
        sum = sum.add(v);
    }
    let count = Float::with_val(ring[0].x.prec(), ring.len() as u32);
    sum.scale(&count.recip())
}

fn zero_vec(like: &Float) -> Vec3 {
    let prec = like.prec();
    Vec3::new(Float::new(prec), Float::new(prec), Float::new(prec))
}
