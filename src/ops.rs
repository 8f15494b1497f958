//! Quaternion arithmetic
//!
//! The operation layer over [`Quaternion`]: componentwise addition and
//! subtraction, negation, scalar multiplication, the Hamilton product,
//! and the fallible operations (inverse, division). Every operation
//! returns a new value and leaves its operands untouched.

use crate::error::{QuatError, QuatResult};
use crate::quaternion::Quaternion;
use std::ops::{Add, Mul, Neg, Sub};

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.w + other.w,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.w - other.w,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(
            self.w * scalar,
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product via the Howell–Lafon factoring.
    ///
    /// Eight products of sums replace the sixteen products of the direct
    /// expansion (a Karatsuba-style reduction). Agreement with the direct
    /// expansion is within floating-point tolerance for all finite inputs
    /// and is asserted in the tests below.
    fn mul(self, other: Self) -> Self {
        let (a1, b1, c1, d1) = (self.w, self.x, self.y, self.z);
        let (a2, b2, c2, d2) = (other.w, other.x, other.y, other.z);

        let p1 = (a1 + b1) * (a2 + b2);
        let p2 = (d1 - c1) * (c2 - d2);
        let p3 = (a1 - b1) * (c2 + d2);
        let p4 = (c1 + d1) * (a2 - b2);
        let p5 = (b1 + d1) * (b2 + c2);
        let p6 = (b1 - d1) * (b2 - c2);
        let p7 = (a1 + c1) * (a2 - d2);
        let p8 = (a1 - c1) * (a2 + d2);

        let s1 = 0.5 * (p5 + p6);
        let s2 = 0.5 * (p5 - p6);
        let s3 = 0.5 * (p7 + p8);
        let s4 = 0.5 * (p7 - p8);

        Self::new(
            p2 - s1 + s3,
            p1 - s1 - s3,
            p3 + s2 + s4,
            p4 + s2 - s4,
        )
    }
}

impl Quaternion {
    /// Multiplicative inverse: q⁻¹ = q* / |q|²
    ///
    /// Errors with [`QuatError::ZeroNorm`] when the norm is exactly zero.
    /// Satisfies q · q⁻¹ ≈ identity for every nonzero q, unit or not.
    pub fn inverse(&self) -> QuatResult<Self> {
        let n2 = self.norm_squared();
        if n2 == 0.0 {
            return Err(QuatError::ZeroNorm);
        }
        Ok(self.conjugate() * (1.0 / n2))
    }

    /// Quotient defined as left-multiplication by the divisor's inverse:
    /// `q1.div(q2)` = q2⁻¹ · q1.
    ///
    /// The operand order matters: the Hamilton product is non-commutative,
    /// so q2⁻¹ · q1 and q1 · q2⁻¹ are different values in general.
    pub fn div(&self, divisor: &Self) -> QuatResult<Self> {
        Ok(divisor.inverse()? * *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Direct 16-multiply Hamilton product, the reference the fast
    /// factoring must agree with.
    fn hamilton_reference(q1: &Quaternion, q2: &Quaternion) -> Quaternion {
        let (a, b, c, d) = (q1.w, q1.x, q1.y, q1.z);
        let (x, y, z, w) = (q2.w, q2.x, q2.y, q2.z);
        Quaternion::new(
            a * x - b * y - c * z - d * w,
            a * y + b * x + c * w - d * z,
            a * z - b * w + c * x + d * y,
            a * w + b * z - c * y + d * x,
        )
    }

    #[test]
    fn test_add_sub() {
        let q1 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q2 = Quaternion::new(0.5, -1.0, 2.5, -4.0);

        assert_eq!(q1 + q2, Quaternion::new(1.5, 1.0, 5.5, 0.0));
        assert_eq!(q1 - q2, q1 + (-q2));
    }

    #[test]
    fn test_scalar_mul() {
        let q = Quaternion::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(q * 2.0, Quaternion::new(2.0, -4.0, 6.0, -8.0));
        assert_eq!(q * 0.0, Quaternion::zero());
    }

    #[test]
    fn test_basis_products() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        let minus_one = Quaternion::new(-1.0, 0.0, 0.0, 0.0);

        assert!((i * j).approx_eq(&k, 1e-12));
        assert!((j * k).approx_eq(&i, 1e-12));
        assert!((k * i).approx_eq(&j, 1e-12));
        assert!((i * i).approx_eq(&minus_one, 1e-12));
        assert!((j * j).approx_eq(&minus_one, 1e-12));
        assert!((k * k).approx_eq(&minus_one, 1e-12));
    }

    #[test]
    fn test_mul_identity() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let id = Quaternion::identity();
        assert!((q * id).approx_eq(&q, 1e-12));
        assert!((id * q).approx_eq(&q, 1e-12));
    }

    #[test]
    fn test_fast_product_matches_reference() {
        let samples = [
            Quaternion::new(1.0, 2.0, 3.0, 4.0),
            Quaternion::new(5.0, 6.0, 7.0, 8.0),
            Quaternion::new(-0.3, 0.7, -1.9, 2.4),
            Quaternion::new(1e-8, -3.5e3, 0.0, 12.25),
            Quaternion::new(0.0, 1.0, 0.0, 0.0),
            Quaternion::identity(),
        ];

        for q1 in &samples {
            for q2 in &samples {
                let fast = *q1 * *q2;
                let reference = hamilton_reference(q1, q2);
                let scale = q1.norm() * q2.norm();
                assert!(
                    fast.approx_eq(&reference, 1e-12 * scale.max(1.0)),
                    "fast {fast} != reference {reference}"
                );
            }
        }
    }

    #[test]
    fn test_inverse() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let qi = q.inverse().unwrap();
        assert!((q * qi).approx_eq(&Quaternion::identity(), 1e-12));
        assert!((qi * q).approx_eq(&Quaternion::identity(), 1e-12));
    }

    #[test]
    fn test_inverse_zero_errors() {
        assert_eq!(Quaternion::zero().inverse().unwrap_err(), QuatError::ZeroNorm);
    }

    #[test]
    fn test_div_operand_order() {
        let q1 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q2 = Quaternion::new(4.0, -3.0, 2.0, -1.0);

        let quotient = q1.div(&q2).unwrap();
        let left = q2.inverse().unwrap() * q1;
        let right = q1 * q2.inverse().unwrap();

        assert!(quotient.approx_eq(&left, 1e-12));
        assert!(!quotient.approx_eq(&right, 1e-6));

        // dividing restores the multiplicand: (q2 · q1) / q2 = q1
        let product = q2 * q1;
        let restored = product.div(&q2).unwrap();
        assert!(restored.approx_eq(&q1, 1e-12));
    }

    #[test]
    fn test_div_by_zero_errors() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.div(&Quaternion::zero()).unwrap_err(), QuatError::ZeroNorm);
    }

    #[test]
    fn test_operands_unmodified() {
        let q1 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q2 = Quaternion::new(5.0, 6.0, 7.0, 8.0);
        let _ = q1 + q2;
        let _ = q1 * q2;
        let _ = -q1;
        assert_eq!(q1, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(q2, Quaternion::new(5.0, 6.0, 7.0, 8.0));
    }

    #[test]
    fn test_norm_is_multiplicative() {
        let q1 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q2 = Quaternion::new(-2.0, 0.5, 1.0, -1.5);
        assert_abs_diff_eq!((q1 * q2).norm(), q1.norm() * q2.norm(), epsilon = 1e-10);
    }
}
