//! Element type trait for matrices.
//!
//! Every matrix and transform routine is generic over [`Float`], which is
//! implemented for `f32` and `f64`. The engine is written against `f64`
//! (see [`Matrixd`](crate::Matrixd)); `f32` exists for callers that feed
//! GPU buffers.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::RelativeEq;

/// Trait for floating-point element types (`f32`, `f64`).
pub trait Float:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + Default
    + RelativeEq<Epsilon = Self>
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Machine epsilon.
    fn epsilon() -> Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;

    /// Convert from an `f64` literal (used for constants).
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_float {
    ($ty:ty) => {
        impl Float for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn epsilon() -> Self {
                <$ty>::EPSILON
            }
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }
            #[inline]
            fn sin(self) -> Self {
                <$ty>::sin(self)
            }
            #[inline]
            fn cos(self) -> Self {
                <$ty>::cos(self)
            }
            #[inline]
            fn tan(self) -> Self {
                <$ty>::tan(self)
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

/// Threshold below which a pivot or a diagonal entry of `R` counts as zero,
/// for a problem of extent `size` whose largest entry has size `magnitude`.
///
/// Multiplying a matrix by a non-zero constant does not change the outcome
/// of a test against this threshold.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn singular_tolerance<T: Float>(size: usize, magnitude: T) -> T {
    T::epsilon() * T::from_f64(size as f64) * magnitude
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert_eq!(f32::one(), 1.0_f32);
    }

    #[test]
    fn test_float_ops() {
        let x: f64 = 4.0;
        assert_eq!(Float::sqrt(x), 2.0);
        assert_eq!(Float::abs(-3.0_f64), 3.0);
    }

    #[test]
    fn test_singular_tolerance_scales_with_input() {
        let unit: f64 = singular_tolerance(3, 1.0);
        assert_eq!(unit, 3.0 * f64::EPSILON);
        assert_eq!(singular_tolerance(3, 1e6), unit * 1e6);
        assert_eq!(singular_tolerance(3, 0.0_f64), 0.0);
    }
}
