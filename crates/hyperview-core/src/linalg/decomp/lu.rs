//! LU decomposition with partial pivoting.
//!
//! Decomposes a square matrix `A` into `PA = LU` where:
//! - `P` is a permutation matrix (stored as a pivot vector)
//! - `L` is lower triangular with unit diagonal
//! - `U` is upper triangular

use crate::Float;
use crate::dtype::singular_tolerance;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Result of an LU decomposition with partial pivoting.
///
/// Stores the factorization `PA = LU` in compact form: `L` and `U` are
/// packed into a single matrix (the unit diagonal of `L` is implicit),
/// and the permutation is stored as a pivot index vector.
///
/// Factorization never fails on a square input. A pivot no larger than
/// `n * epsilon * max|a_ij|` marks the decomposition singular, and [`solve`](Self::solve) then
/// reports [`CoreError::SingularMatrix`].
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: Float> {
    /// Packed LU matrix: lower triangle holds L (without diagonal),
    /// upper triangle (including diagonal) holds U.
    lu: Vec<T>,
    /// Pivot order: row `i` of `PA` is row `pivots[i]` of `A`.
    pivots: Vec<usize>,
    /// Matrix dimension (n x n).
    n: usize,
    /// Sign of the permutation (+1 or -1), for determinant computation.
    sign: T,
    /// Set when any pivot was numerically zero.
    singular: bool,
}

impl<T: Float> LuDecomposition<T> {
    /// Perform LU decomposition with partial pivoting on a square matrix.
    ///
    /// ```
    /// # use hyperview_core::Matrixd;
    /// # use hyperview_core::linalg::decomp::LuDecomposition;
    /// let a = Matrixd::from_vec(vec![2.0, 1.0, 1.0, 4.0], 2).unwrap();
    /// let lu = LuDecomposition::decompose(&a).unwrap();
    /// assert!((lu.det() - 7.0).abs() < 1e-10);
    /// ```
    pub fn decompose(a: &Matrix<T>) -> Result<Self> {
        if !a.is_square() {
            return Err(CoreError::InvalidArgument {
                reason: "LU decomposition requires a square matrix",
            });
        }
        let n = a.rows();

        // Copy matrix data into working buffer
        let mut lu: Vec<T> = a.as_slice().to_vec();
        let mut pivots: Vec<usize> = (0..n).collect();
        let mut sign = T::one();
        let mut singular = false;
        let magnitude = lu
            .iter()
            .fold(T::zero(), |acc, &x| if x.abs() > acc { x.abs() } else { acc });
        let tolerance = singular_tolerance(n, magnitude);

        for k in 0..n {
            // Find pivot: row with largest |lu[i, k]| for i >= k
            let mut max_val = lu[k * n + k].abs();
            let mut max_row = k;
            for i in (k + 1)..n {
                let val = lu[i * n + k].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_row != k {
                log::trace!("LU: swapping rows {k} and {max_row}");
                for j in 0..n {
                    lu.swap(k * n + j, max_row * n + j);
                }
                pivots.swap(k, max_row);
                sign = -sign;
            }

            let pivot = lu[k * n + k];
            if pivot.abs() <= tolerance {
                // Everything below is at most as large, so column k is
                // already eliminated.
                log::debug!(
                    "LU: pivot {pivot} in column {k} is within {tolerance} of zero, matrix is singular"
                );
                singular = true;
                continue;
            }

            // Eliminate below the pivot
            for i in (k + 1)..n {
                let factor = lu[i * n + k] / pivot;
                lu[i * n + k] = factor; // Store L factor

                for j in (k + 1)..n {
                    let ukj = lu[k * n + j];
                    lu[i * n + j] -= factor * ukj;
                }
            }
        }

        Ok(Self {
            lu,
            pivots,
            n,
            sign,
            singular,
        })
    }

    /// Whether every pivot was non-zero, i.e. [`solve`](Self::solve) can
    /// succeed.
    pub fn is_nonsingular(&self) -> bool {
        !self.singular
    }

    /// Extract the lower triangular matrix `L` (with unit diagonal).
    pub fn l(&self) -> Matrix<T> {
        let n = self.n;
        let mut l = Matrix::identity(n);
        let data = l.as_mut_slice();
        for i in 0..n {
            for j in 0..i {
                data[i * n + j] = self.lu[i * n + j];
            }
        }
        l
    }

    /// Extract the upper triangular matrix `U`.
    pub fn u(&self) -> Matrix<T> {
        let n = self.n;
        let mut u = Matrix::zeros(n, n);
        let data = u.as_mut_slice();
        for i in 0..n {
            for j in i..n {
                data[i * n + j] = self.lu[i * n + j];
            }
        }
        u
    }

    /// Extract the permutation matrix `P`.
    pub fn p(&self) -> Matrix<T> {
        let n = self.n;
        let mut p = Matrix::zeros(n, n);
        let data = p.as_mut_slice();
        for (i, &pi) in self.pivots.iter().enumerate() {
            data[i * n + pi] = T::one();
        }
        p
    }

    /// The permutation pivot vector.
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Compute the determinant from the LU factorization.
    ///
    /// `det(A) = sign * product(diag(U))`
    pub fn det(&self) -> T {
        let n = self.n;
        let mut d = self.sign;
        for i in 0..n {
            d *= self.lu[i * n + i];
        }
        d
    }

    /// Solve `AX = B` for every column of `B`.
    ///
    /// `b` must have `n` rows; any number of columns is accepted.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>> {
        if b.rows() != self.n {
            return Err(CoreError::DimensionMismatch {
                expected: (self.n, b.cols()),
                got: b.shape(),
            });
        }
        if self.singular {
            return Err(CoreError::SingularMatrix);
        }

        let n = self.n;
        let m = b.cols();

        // Apply permutation: PB
        let mut x = b.select_rows(&self.pivots, 0, m - 1)?;
        let xs = x.as_mut_slice();

        for c in 0..m {
            // Forward substitution: LY = PB
            for i in 1..n {
                for j in 0..i {
                    let lij_yj = self.lu[i * n + j] * xs[j * m + c];
                    xs[i * m + c] -= lij_yj;
                }
            }

            // Back substitution: UX = Y
            for i in (0..n).rev() {
                for j in (i + 1)..n {
                    let uij_xj = self.lu[i * n + j] * xs[j * m + c];
                    xs[i * m + c] -= uij_xj;
                }
                xs[i * m + c] /= self.lu[i * n + i];
            }
        }

        Ok(x)
    }

    /// Compute the inverse matrix using the LU factorization.
    ///
    /// Solves `AX = I`.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        self.solve(&Matrix::identity(self.n))
    }
}
