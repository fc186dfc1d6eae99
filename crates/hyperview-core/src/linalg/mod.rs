//! Linear algebra operations.
//!
//! All routines are implemented from scratch, no external BLAS/LAPACK
//! bindings:
//!
//! | Group  | Operations                          | Complexity |
//! |--------|-------------------------------------|------------|
//! | Vector | `dot`, `cross`, `nrm2`              | O(n)       |
//! | Matrix | `gemm`                              | O(n^3)     |
//! | Solve  | `solve`, `inverse`, `det`, `lstsq`  | O(n^3)     |
//!
//! Decompositions: [`LuDecomposition`], [`QrDecomposition`], unified by
//! [`Factorization`].

pub mod blas;
pub mod decomp;

pub use blas::{cross, dot, gemm, nrm2};
pub use decomp::{Factorization, LuDecomposition, QrDecomposition};

use crate::Float;
use crate::error::Result;
use crate::matrix::Matrix;

/// Solve `AX = B`.
///
/// Square `A` goes through LU with partial pivoting; a tall `A` goes
/// through QR and yields the least-squares solution.
///
/// ```
/// # use hyperview_core::Matrixd;
/// # use hyperview_core::linalg;
/// let a = Matrixd::from_vec(vec![2.0, 1.0, 1.0, 4.0], 2).unwrap();
/// let b = Matrixd::column(&[5.0, 6.0]);
/// let x = linalg::solve(&a, &b).unwrap();
/// assert!((x[(0, 0)] - 2.0).abs() < 1e-10);
/// assert!((x[(1, 0)] - 1.0).abs() < 1e-10);
/// ```
pub fn solve<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    Factorization::new(a)?.solve(b)
}

/// The inverse of `a`, defined as `solve(a, I)`.
///
/// For a tall matrix this is the least-squares pseudo-inverse. Returns
/// [`CoreError::SingularMatrix`](crate::CoreError::SingularMatrix) or
/// [`CoreError::RankDeficient`](crate::CoreError::RankDeficient) when no
/// solution exists.
///
/// ```
/// # use hyperview_core::Matrixd;
/// # use hyperview_core::linalg;
/// let a = Matrixd::from_vec(vec![2.0, 1.0, 1.0, 4.0], 2).unwrap();
/// let inv = linalg::inverse(&a).unwrap();
/// let eye = a.matmul(&inv).unwrap();
/// assert!((eye[(0, 0)] - 1.0).abs() < 1e-10);
/// assert!(eye[(0, 1)].abs() < 1e-10);
/// ```
pub fn inverse<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>> {
    solve(a, &Matrix::identity(a.rows()))
}

/// Determinant of a square matrix, via LU.
pub fn det<T: Float>(a: &Matrix<T>) -> Result<T> {
    Ok(LuDecomposition::decompose(a)?.det())
}

/// Least-squares solution of `min ||AX - B||_2` via QR, whatever the shape
/// of `A` (rows >= columns).
pub fn lstsq<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    QrDecomposition::decompose(a)?.solve(b)
}

impl<T: Float> Matrix<T> {
    /// Solve `self * X = rhs`. See [`solve`].
    pub fn solve(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        solve(self, rhs)
    }

    /// The inverse (pseudo-inverse when `self` is tall). See [`inverse`].
    pub fn inverse(&self) -> Result<Matrix<T>> {
        inverse(self)
    }

    /// Determinant of a square matrix.
    pub fn det(&self) -> Result<T> {
        det(self)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::Matrixd;
    use crate::error::CoreError;

    fn approx_eq(a: &[f64], b: &[f64], tol: f64) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| (x - y).abs() < tol)
    }

    #[test]
    fn test_identity_solve_returns_rhs() {
        let b = Matrixd::column(&[1.0, 2.0, 3.0]);
        let x = Matrixd::identity(3).solve(&b).unwrap();
        assert_eq!(x, b);
    }

    #[test]
    fn test_square_solve_uses_lu() {
        let a = Matrixd::from_rows([[2.0, 0.0], [0.0, 2.0]]).unwrap();
        let x = a.solve(&Matrixd::column(&[4.0, 6.0])).unwrap();
        assert!(approx_eq(x.as_slice(), &[2.0, 3.0], 1e-12));
    }

    #[test]
    fn test_tall_solve_is_least_squares() {
        // Exact solution [1, 2] of a consistent 3x2 system
        let a = Matrixd::from_rows([[1.0, 1.0], [2.0, -1.0], [0.0, 3.0]]).unwrap();
        let b = Matrixd::column(&[3.0, 0.0, 6.0]);
        let x = a.solve(&b).unwrap();
        assert!(approx_eq(x.as_slice(), &[1.0, 2.0], 1e-10));
    }

    #[test]
    fn test_inverse_4x4() {
        let a = Matrixd::from_rows([
            [4.0, 7.0, 2.0, 3.0],
            [0.0, 5.0, 1.0, 1.0],
            [1.0, 0.0, 6.0, 2.0],
            [3.0, 1.0, 1.0, 8.0],
        ])
        .unwrap();
        let inv = a.inverse().unwrap();
        let eye = &a * &inv;
        assert!(approx_eq(eye.as_slice(), Matrixd::identity(4).as_slice(), 1e-9));
    }

    #[test]
    fn test_pseudo_inverse_of_tall_matrix() {
        let a = Matrixd::from_rows([[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]).unwrap();
        let pinv = a.inverse().unwrap();
        assert_eq!(pinv.shape(), (2, 3));
        // A^+ A = I for full column rank
        let eye = pinv.matmul(&a).unwrap();
        assert!(approx_eq(eye.as_slice(), Matrixd::identity(2).as_slice(), 1e-10));
    }

    #[test]
    fn test_singular_inverse_fails() {
        let a = Matrixd::from_rows([[1.0, 2.0], [2.0, 4.0]]).unwrap();
        assert_eq!(a.inverse(), Err(CoreError::SingularMatrix));
    }

    #[test]
    fn test_rank_deficient_solve_fails() {
        let a = Matrixd::from_rows([[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]]).unwrap();
        let b = Matrixd::column(&[1.0, 2.0, 3.0]);
        assert_eq!(a.solve(&b), Err(CoreError::RankDeficient));
    }

    #[test]
    fn test_large_singular_inverse_fails() {
        let a = Matrixd::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
        assert_eq!((a * 1e5).inverse(), Err(CoreError::SingularMatrix));
    }

    #[test]
    fn test_small_scale_transform_inverts() {
        let s = crate::transform::scale(&[1e-14, 1e-14, 1e-14]);
        let inv = s.inverse().unwrap();
        let expected = crate::transform::scale(&[1e14, 1e14, 1e14]);
        assert!(approx_eq(inv.as_slice(), expected.as_slice(), 1.0));
        assert!(approx_eq((&s * &inv).as_slice(), Matrixd::identity(4).as_slice(), 1e-12));
    }

    #[test]
    fn test_det() {
        let a = Matrixd::from_rows([[2.0, 1.0], [1.0, 4.0]]).unwrap();
        assert!((a.det().unwrap() - 7.0).abs() < 1e-10);
        assert!(Matrixd::zeros(2, 3).det().is_err());
    }

    #[test]
    fn test_lstsq_square() {
        let a = Matrixd::from_rows([[2.0, 1.0], [1.0, 4.0]]).unwrap();
        let x = lstsq(&a, &Matrixd::column(&[5.0, 6.0])).unwrap();
        assert!(approx_eq(x.as_slice(), &[2.0, 1.0], 1e-10));
    }
}
