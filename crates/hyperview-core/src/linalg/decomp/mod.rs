//! Matrix decompositions.
//!
//! | Decomposition | Module  | Factorization | Accepts         |
//! |---------------|---------|---------------|-----------------|
//! | LU            | [`lu`]  | `PA = LU`     | square          |
//! | QR            | [`qr`]  | `A = QR`      | rows >= columns |
//!
//! [`Factorization`] picks between the two by shape and is what
//! [`Matrix::solve`](crate::Matrix::solve) goes through.

pub mod lu;
pub mod qr;

pub use lu::LuDecomposition;
pub use qr::QrDecomposition;

use crate::Float;
use crate::error::Result;
use crate::matrix::Matrix;

/// A single-use factorization of a coefficient matrix.
#[derive(Debug, Clone)]
pub enum Factorization<T: Float> {
    /// Square input.
    Lu(LuDecomposition<T>),
    /// Rectangular input with at least as many rows as columns.
    Qr(QrDecomposition<T>),
}

impl<T: Float> Factorization<T> {
    /// Factor `a` with LU if it is square, with QR otherwise.
    pub fn new(a: &Matrix<T>) -> Result<Self> {
        if a.is_square() {
            log::trace!("factoring {}x{} matrix with LU", a.rows(), a.cols());
            LuDecomposition::decompose(a).map(Self::Lu)
        } else {
            log::trace!("factoring {}x{} matrix with QR", a.rows(), a.cols());
            QrDecomposition::decompose(a).map(Self::Qr)
        }
    }

    /// Solve `AX = B` (least squares for the QR case).
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>> {
        match self {
            Self::Lu(lu) => lu.solve(b),
            Self::Qr(qr) => qr.solve(b),
        }
    }
}
