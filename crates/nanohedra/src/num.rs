//! Arbitrary-precision scalars at a fixed decimal precision.
//!
//! Every scalar that belongs to one polyhedron carries the same working
//! precision, chosen once by the caller in decimal digits and converted here
//! to MPFR bits. The catalog's algebraic constants (nested radicals,
//! golden-ratio forms, the snub cube roots) are all expressed through the
//! small constructor set below, so a shape table is a pure function of this
//! module evaluated once per build.

use rug::ops::Pow;
use rug::Float;

use crate::error::BuildError;

/// Extra bits on top of the decimal-digit request, so that chains of
/// radical evaluations do not eat into the requested digits.
const GUARD_BITS: u32 = 32;

/// Working precision for one polyhedron build.
///
/// Invariants:
/// - `bits >= digits * log2(10)`, rounded up, plus the guard bits.
/// - Copyable; every constructor below yields a `Float` of exactly `bits`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prec {
    digits: u32,
    bits: u32,
}

impl Prec {
    /// Precision of `digits` decimal digits.
    pub fn decimal(digits: u32) -> Self {
        let bits = (f64::from(digits) * std::f64::consts::LOG2_10).ceil() as u32 + GUARD_BITS;
        Self { digits, bits }
    }

    /// Requested decimal digit count.
    #[inline]
    pub fn digits(self) -> u32 {
        self.digits
    }

    /// MPFR mantissa precision in bits.
    #[inline]
    pub fn bits(self) -> u32 {
        self.bits
    }

    /// Parse a decimal literal at this precision.
    pub fn scalar(self, literal: &str) -> Result<Float, BuildError> {
        match Float::parse(literal) {
            Ok(parsed) => Ok(Float::with_val(self.bits, parsed)),
            Err(_) => Err(BuildError::BadLiteral {
                literal: literal.to_owned(),
            }),
        }
    }

    #[inline]
    pub fn zero(self) -> Float {
        Float::new(self.bits)
    }

    #[inline]
    pub fn one(self) -> Float {
        Float::with_val(self.bits, 1)
    }

    #[inline]
    pub fn int(self, n: i64) -> Float {
        Float::with_val(self.bits, n)
    }

    /// Exact ratio `num / den`.
    #[inline]
    pub fn frac(self, num: i64, den: i64) -> Float {
        Float::with_val(self.bits, num) / Float::with_val(self.bits, den)
    }

    #[inline]
    pub fn from_f64(self, x: f64) -> Float {
        Float::with_val(self.bits, x)
    }

    /// Golden ratio `(1 + sqrt 5) / 2` at this precision.
    pub fn phi(self) -> Float {
        (self.one() + self.int(5).sqrt()) / self.int(2)
    }

    /// Degeneracy tolerance: `10^-(digits - 4)`.
    ///
    /// Collinearity and coincident-vertex checks compare against this, so a
    /// few digits of slack remain between "distinct at this precision" and
    /// the raw rounding error of the radical evaluations.
    pub fn epsilon(self) -> Float {
        let exp = -(self.digits.saturating_sub(4) as i32);
        self.int(10).pow(exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_precision_covers_requested_digits() {
        let p = Prec::decimal(50);
        assert_eq!(p.digits(), 50);
        // 50 digits need at least ceil(50 * 3.32...) = 167 bits.
        assert!(p.bits() >= 167 + GUARD_BITS);
    }

    #[test]
    fn scalar_parses_decimal_literals() {
        let p = Prec::decimal(30);
        let x = p.scalar("1.25").unwrap();
        assert_eq!(x.to_f64(), 1.25);
        assert!(p.scalar("not a number").is_err());
    }

    #[test]
    fn phi_satisfies_its_quadratic() {
        let p = Prec::decimal(60);
        let phi = p.phi();
        // phi^2 = phi + 1, far below epsilon at 60 digits.
        let residue = phi.clone().square() - phi - p.one();
        assert!(residue.abs() < p.epsilon());
    }

    #[test]
    fn epsilon_tracks_digit_count() {
        assert_eq!(Prec::decimal(10).epsilon().to_f64(), 1e-6);
        let tight = Prec::decimal(40).epsilon();
        assert!(tight < Prec::decimal(10).epsilon());
    }
}
