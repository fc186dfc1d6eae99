//! Arithmetic operators for [`Matrix`].
//!
//! Implements:
//! - `Matrix + Matrix`, `Matrix - Matrix` (element-wise, same shape)
//! - `Matrix * Matrix` (matrix product)
//! - `Matrix * T`, `Matrix / T` (every element by a scalar)
//! - `-Matrix`
//!
//! The operator forms panic on incompatible shapes, like slice indexing
//! does. The `*_checked` methods and [`Matrix::matmul`] return
//! [`CoreError::DimensionMismatch`](crate::CoreError::DimensionMismatch)
//! instead.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::Float;
use crate::error::Result;

use super::Matrix;

// ======================================================================
// Matrix + Matrix  (element-wise, same shape, panics on mismatch)
// ======================================================================

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Float> $trait for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Float> $trait for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                assert_eq!(
                    self.shape(), rhs.shape(),
                    "shape mismatch in element-wise {}: {:?} vs {:?}",
                    stringify!($method), self.shape(), rhs.shape(),
                );
                let data = self.data.iter()
                    .zip(rhs.data.iter())
                    .map(|(&a, &b)| a $op b)
                    .collect();
                Matrix::from_parts(data, self.rows, self.cols)
            }
        }
    };
}

impl_matrix_binop!(Add, add, +);
impl_matrix_binop!(Sub, sub, -);

// ======================================================================
// Matrix * Matrix  (matrix product, panics on inner dimension mismatch)
// ======================================================================

impl<T: Float> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.matmul(rhs) {
            Ok(product) => product,
            Err(e) => panic!("matrix product: {e}"),
        }
    }
}

impl<T: Float> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Float> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Float> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

// ======================================================================
// Matrix * scalar, Matrix / scalar
// ======================================================================

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Float> $trait<T> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(mut self, rhs: T) -> Matrix<T> {
                for a in &mut self.data {
                    *a = *a $op rhs;
                }
                self
            }
        }

        impl<T: Float> $trait<T> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: T) -> Matrix<T> {
                self.map(|a| a $op rhs)
            }
        }
    };
}

impl_scalar_binop!(Mul, mul, *);
impl_scalar_binop!(Div, div, /);

// ======================================================================
// Negation
// ======================================================================

impl<T: Float> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        for a in &mut self.data {
            *a = -*a;
        }
        self
    }
}

impl<T: Float> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|a| -a)
    }
}

// ======================================================================
// Fallible (Result-returning) arithmetic for non-panicking callers
// ======================================================================

impl<T: Float> Matrix<T> {
    /// Element-wise addition, returning `Err` on shape mismatch.
    pub fn add_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Element-wise subtraction, returning `Err` on shape mismatch.
    pub fn sub_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, |a, b| a - b)
    }
}
