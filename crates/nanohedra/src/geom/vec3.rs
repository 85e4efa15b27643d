//! 3-component vectors of arbitrary-precision scalars.

use nalgebra::Vector3;
use rug::Float;

use crate::error::BuildError;
use crate::num::Prec;

/// An ordered triple of scalars, all at one precision.
///
/// The operation set is the minimum the kernel needs: componentwise
/// subtraction and addition, scalar multiplication, dot and cross products,
/// and normalization. Values are treated as immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Vec3 {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vec3 {
    #[inline]
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Lift an `f64` point to precision `p`.
    pub fn from_f64(p: Prec, v: Vector3<f64>) -> Self {
        Self::new(p.from_f64(v.x), p.from_f64(v.y), p.from_f64(v.z))
    }

    /// Nearest-`f64` image of this vector.
    pub fn to_f64(&self) -> Vector3<f64> {
        Vector3::new(self.x.to_f64(), self.y.to_f64(), self.z.to_f64())
    }

    #[inline]
    pub fn sub(&self, rhs: &Vec3) -> Vec3 {
        Vec3::new(
            self.x.clone() - &rhs.x,
            self.y.clone() - &rhs.y,
            self.z.clone() - &rhs.z,
        )
    }

    #[inline]
    pub fn add(&self, rhs: &Vec3) -> Vec3 {
        Vec3::new(
            self.x.clone() + &rhs.x,
            self.y.clone() + &rhs.y,
            self.z.clone() + &rhs.z,
        )
    }

    #[inline]
    pub fn neg(&self) -> Vec3 {
        Vec3::new(-self.x.clone(), -self.y.clone(), -self.z.clone())
    }

    #[inline]
    pub fn scale(&self, s: &Float) -> Vec3 {
        Vec3::new(self.x.clone() * s, self.y.clone() * s, self.z.clone() * s)
    }

    #[inline]
    pub fn dot(&self, rhs: &Vec3) -> Float {
        self.x.clone() * &rhs.x + self.y.clone() * &rhs.y + self.z.clone() * &rhs.z
    }

    #[inline]
    pub fn cross(&self, rhs: &Vec3) -> Vec3 {
        Vec3::new(
            self.y.clone() * &rhs.z - self.z.clone() * &rhs.y,
            self.z.clone() * &rhs.x - self.x.clone() * &rhs.z,
            self.x.clone() * &rhs.y - self.y.clone() * &rhs.x,
        )
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> Float {
        self.dot(self).sqrt()
    }

    /// Unit vector in this direction; a length at or below `eps` is a
    /// degenerate-geometry error.
    pub fn normalized(&self, eps: &Float) -> Result<Vec3, BuildError> {
        let n = self.norm();
        if n <= *eps {
            return Err(BuildError::DegenerateGeometry);
        }
        Ok(self.scale(&n.recip()))
    }
}
