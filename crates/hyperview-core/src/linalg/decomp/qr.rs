//! QR decomposition via Householder reflections.
//!
//! Decomposes a matrix `A` (m x n, m >= n) into `A = QR` where:
//! - `Q` is an orthogonal matrix (m x m) such that `Q^T Q = I`
//! - `R` is upper triangular (m x n)

use crate::Float;
use crate::dtype::singular_tolerance;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Result of a QR decomposition via Householder reflections.
///
/// Stores the factorization `A = QR` in compact form: the Householder
/// vectors are stored in the lower triangle of the working matrix,
/// and `R` is stored in the upper triangle.
#[derive(Debug, Clone)]
pub struct QrDecomposition<T: Float> {
    /// Working matrix: upper triangle holds R, columns below the diagonal
    /// hold the Householder vectors (without their leading 1).
    qr: Vec<T>,
    /// Diagonal of R stored separately (the Householder reflections
    /// overwrite the diagonal of the working matrix).
    r_diag: Vec<T>,
    /// Number of rows.
    m: usize,
    /// Number of columns.
    n: usize,
    /// Magnitude at or below which a diagonal entry of R counts as zero.
    tolerance: T,
}

#[allow(clippy::many_single_char_names)]
impl<T: Float> QrDecomposition<T> {
    /// Perform QR decomposition on a matrix `A` (m x n, m >= n).
    ///
    /// ```
    /// # use hyperview_core::Matrixd;
    /// # use hyperview_core::linalg::decomp::QrDecomposition;
    /// let a = Matrixd::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2).unwrap();
    /// let qr = QrDecomposition::decompose(&a).unwrap();
    /// let q = qr.q();
    /// // Q is orthogonal: Q^T Q ≈ I
    /// let qtq = q.transpose().matmul(&q).unwrap();
    /// for (a, b) in qtq.iter().zip(Matrixd::identity(3).iter()) {
    ///     assert!((a - b).abs() < 1e-10);
    /// }
    /// ```
    pub fn decompose(a: &Matrix<T>) -> Result<Self> {
        let (m, n) = a.shape();
        if m < n {
            // At least as many rows as columns
            return Err(CoreError::DimensionMismatch {
                expected: (n, n),
                got: (m, n),
            });
        }

        let mut qr: Vec<T> = a.as_slice().to_vec();
        let mut r_diag = vec![T::zero(); n];

        // Every |R[k, k]| is bounded by the norm of column k of A.
        let mut largest_column = T::zero();
        for k in 0..n {
            let norm = (0..m).map(|i| qr[i * n + k] * qr[i * n + k]).sum::<T>().sqrt();
            if norm > largest_column {
                largest_column = norm;
            }
        }
        let tolerance = singular_tolerance(m, largest_column);

        for k in 0..n {
            // Compute the norm of the k-th column below the diagonal
            let mut norm_sq = T::zero();
            for i in k..m {
                norm_sq += qr[i * n + k] * qr[i * n + k];
            }
            let mut norm = norm_sq.sqrt();

            if norm <= tolerance {
                log::debug!("QR: column {k} is within {tolerance} of the span of earlier columns");
                r_diag[k] = T::zero();
                // No reflection for this column; `q` and `solve` skip it.
                qr[k * n + k] = T::zero();
                continue;
            }

            // Choose sign to avoid cancellation
            if qr[k * n + k] > T::zero() {
                norm = -norm;
            }

            // Scale the Householder vector
            for i in k..m {
                qr[i * n + k] /= -norm;
            }
            qr[k * n + k] += T::one();

            // Apply the Householder reflection to remaining columns
            for j in (k + 1)..n {
                let mut s = T::zero();
                for i in k..m {
                    s += qr[i * n + k] * qr[i * n + j];
                }
                s = -s / qr[k * n + k];
                for i in k..m {
                    let v = qr[i * n + k];
                    qr[i * n + j] += s * v;
                }
            }

            r_diag[k] = norm;
        }

        log::trace!("QR: factored {m}x{n} matrix, diag(R) = {r_diag:?}");
        Ok(Self {
            qr,
            r_diag,
            m,
            n,
            tolerance,
        })
    }

    /// Whether the matrix has full column rank: every diagonal entry of `R`
    /// exceeds `m * epsilon` times the largest column norm of `A`.
    pub fn is_full_rank(&self) -> bool {
        self.r_diag.iter().all(|d| d.abs() > self.tolerance)
    }

    /// Extract the upper triangular matrix `R` (m x n).
    pub fn r(&self) -> Matrix<T> {
        let (m, n) = (self.m, self.n);
        let mut r = Matrix::zeros(m, n);
        let data = r.as_mut_slice();
        for i in 0..n {
            data[i * n + i] = self.r_diag[i];
            for j in (i + 1)..n {
                data[i * n + j] = self.qr[i * n + j];
            }
        }
        r
    }

    /// Extract the orthogonal matrix `Q` (m x m).
    pub fn q(&self) -> Matrix<T> {
        let (m, n) = (self.m, self.n);
        let mut q = Matrix::identity(m);
        let q_data = q.as_mut_slice();

        // Apply Householder reflections in reverse order
        for k in (0..n).rev() {
            if self.qr[k * n + k] == T::zero() {
                continue;
            }
            // Apply H_k = I - v*v^T/v[k] to Q
            for j in 0..m {
                let mut s = T::zero();
                for i in k..m {
                    s += self.qr[i * n + k] * q_data[i * m + j];
                }
                s = -s / self.qr[k * n + k];
                for i in k..m {
                    q_data[i * m + j] += s * self.qr[i * n + k];
                }
            }
        }

        q
    }

    /// Solve the least-squares problem `min ||AX - B||_2` column by column.
    ///
    /// For a full-rank system where `m == n`, this is equivalent to solving
    /// `AX = B`. For overdetermined systems (`m > n`), it returns the
    /// least-squares solution, an `n x p` matrix for a `m x p` right-hand
    /// side.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>> {
        if b.rows() != self.m {
            return Err(CoreError::DimensionMismatch {
                expected: (self.m, b.cols()),
                got: b.shape(),
            });
        }
        if !self.is_full_rank() {
            return Err(CoreError::RankDeficient);
        }

        let (m, n) = (self.m, self.n);
        let p = b.cols();
        let mut x = b.clone();
        let xs = x.as_mut_slice();

        for c in 0..p {
            // Compute Q^T b by applying Householder reflections
            for k in 0..n {
                if self.qr[k * n + k] == T::zero() {
                    continue;
                }
                let mut s = T::zero();
                for i in k..m {
                    s += self.qr[i * n + k] * xs[i * p + c];
                }
                s = -s / self.qr[k * n + k];
                for i in k..m {
                    xs[i * p + c] += s * self.qr[i * n + k];
                }
            }

            // Back substitution on the upper triangular part: Rx = Q^T b
            for i in (0..n).rev() {
                for j in (i + 1)..n {
                    let xj = xs[j * p + c];
                    xs[i * p + c] -= self.qr[i * n + j] * xj;
                }
                xs[i * p + c] /= self.r_diag[i];
            }
        }

        // Only the first n rows are the solution
        x.submatrix(0, n - 1, 0, p - 1)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::Matrixd;

    fn approx_eq(a: &[f64], b: &[f64], tol: f64) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| (x - y).abs() < tol)
    }

    #[test]
    fn test_qr_3x3() {
        let a = Matrixd::from_vec(
            vec![12.0, -51.0, 4.0, 6.0, 167.0, -68.0, -4.0, 24.0, -41.0],
            3,
        )
        .unwrap();
        let qr = QrDecomposition::decompose(&a).unwrap();

        let q = qr.q();
        let r = qr.r();

        // Verify A = QR
        let qr_prod = q.matmul(&r).unwrap();
        assert!(approx_eq(qr_prod.as_slice(), a.as_slice(), 1e-10));

        // Verify Q is orthogonal: Q^T Q = I
        let qtq = q.transpose().matmul(&q).unwrap();
        assert!(approx_eq(qtq.as_slice(), Matrixd::identity(3).as_slice(), 1e-10));
    }

    #[test]
    fn test_qr_tall_matrix() {
        let a = Matrixd::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 2).unwrap();
        let qr = QrDecomposition::decompose(&a).unwrap();

        let q = qr.q();
        let r = qr.r();
        assert_eq!(q.shape(), (4, 4));
        assert_eq!(r.shape(), (4, 2));

        let qr_prod = q.matmul(&r).unwrap();
        assert!(approx_eq(qr_prod.as_slice(), a.as_slice(), 1e-10));

        // R is zero below the diagonal
        for i in 0..4 {
            for j in 0..i.min(2) {
                assert_eq!(r[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn test_qr_solve_square() {
        // 2x + y = 5, x + 4y = 6 => x=2, y=1
        let a = Matrixd::from_vec(vec![2.0, 1.0, 1.0, 4.0], 2).unwrap();
        let b = Matrixd::column(&[5.0, 6.0]);
        let x = QrDecomposition::decompose(&a).unwrap().solve(&b).unwrap();
        assert!(approx_eq(x.as_slice(), &[2.0, 1.0], 1e-10));
    }

    #[test]
    fn test_lstsq_overdetermined() {
        // Fit y = a + b*x to points (1,6), (2,5), (3,7)
        // Normal equations: A^T A = [[3,6],[6,14]], A^T b = [18,37]
        // Solution: x = [5.0, 0.5]
        let a = Matrixd::from_vec(vec![1.0, 1.0, 1.0, 2.0, 1.0, 3.0], 2).unwrap();
        let b = Matrixd::column(&[6.0, 5.0, 7.0]);
        let x = QrDecomposition::decompose(&a).unwrap().solve(&b).unwrap();
        assert_eq!(x.shape(), (2, 1));
        assert!(approx_eq(x.as_slice(), &[5.0, 0.5], 1e-10));
    }

    #[test]
    fn test_lstsq_exact_fit() {
        // y = 2x + 1 at x=0,1,2 => b=[1,3,5]
        let a = Matrixd::from_vec(vec![1.0, 0.0, 1.0, 1.0, 1.0, 2.0], 2).unwrap();
        let b = Matrixd::column(&[1.0, 3.0, 5.0]);
        let x = QrDecomposition::decompose(&a).unwrap().solve(&b).unwrap();
        assert!(approx_eq(x.as_slice(), &[1.0, 2.0], 1e-10));
    }

    #[test]
    fn test_lstsq_multiple_columns() {
        // Two exact fits at once: y = 2x + 1 and y = -x + 4
        let a = Matrixd::from_vec(vec![1.0, 0.0, 1.0, 1.0, 1.0, 2.0], 2).unwrap();
        let b = Matrixd::from_vec(vec![1.0, 4.0, 3.0, 3.0, 5.0, 2.0], 2).unwrap();
        let x = QrDecomposition::decompose(&a).unwrap().solve(&b).unwrap();
        assert_eq!(x.shape(), (2, 2));
        assert!(approx_eq(x.as_slice(), &[1.0, 4.0, 2.0, -1.0], 1e-10));
    }

    #[test]
    fn test_lstsq_4x3_numpy() {
        // >>> A = np.array([[1,1,1],[1,2,4],[1,3,9],[1,4,16]], dtype=float)
        // >>> b = np.array([2,3,5,8], dtype=float)
        // Normal equations solution: x = [2.0, -0.5, 0.5]
        let a = Matrixd::from_vec(
            vec![1.0, 1.0, 1.0, 1.0, 2.0, 4.0, 1.0, 3.0, 9.0, 1.0, 4.0, 16.0],
            3,
        )
        .unwrap();
        let b = Matrixd::column(&[2.0, 3.0, 5.0, 8.0]);
        let x = QrDecomposition::decompose(&a).unwrap().solve(&b).unwrap();
        assert!(approx_eq(x.as_slice(), &[2.0, -0.5, 0.5], 1e-10));
    }

    #[test]
    fn test_qr_not_full_rank() {
        // Columns are linearly dependent
        let a = Matrixd::from_vec(vec![1.0, 2.0, 2.0, 4.0, 3.0, 6.0], 2).unwrap();
        let qr = QrDecomposition::decompose(&a).unwrap();
        assert!(!qr.is_full_rank());
        let b = Matrixd::column(&[1.0, 2.0, 3.0]);
        assert_eq!(qr.solve(&b), Err(CoreError::RankDeficient));
    }

    #[test]
    fn test_qr_wide_matrix() {
        let a = Matrixd::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
        assert!(matches!(
            QrDecomposition::decompose(&a),
            Err(CoreError::DimensionMismatch {
                expected: (3, 3),
                got: (2, 3)
            })
        ));
    }

    #[test]
    fn test_rank_deficiency_ignores_scale() {
        // Second column is 3x the first, at three magnitudes
        for scale in [1e-9, 1.0, 1e6] {
            let a = Matrixd::from_rows([[1.0, 3.0], [2.0, 6.0], [5.0, 15.0]]).unwrap() * scale;
            let qr = QrDecomposition::decompose(&a).unwrap();
            assert!(!qr.is_full_rank(), "scale {scale}");
            let b = Matrixd::column(&[1.0, 2.0, 3.0]);
            assert_eq!(qr.solve(&b), Err(CoreError::RankDeficient));
        }
    }

    #[test]
    fn test_tiny_full_rank_matrix() {
        let a = Matrixd::from_rows([[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]).unwrap() * 1e-14;
        let qr = QrDecomposition::decompose(&a).unwrap();
        assert!(qr.is_full_rank());
        // Consistent system with solution [3, -1]
        let b = Matrixd::column(&[3e-14, -1e-14, 2e-14]);
        let x = qr.solve(&b).unwrap();
        assert!(approx_eq(x.as_slice(), &[3.0, -1.0], 1e-10));
    }

    #[test]
    fn test_qr_solve_dimension_mismatch() {
        let qr = QrDecomposition::decompose(&Matrixd::identity(2)).unwrap();
        let b = Matrixd::column(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            qr.solve(&b),
            Err(CoreError::DimensionMismatch { .. })
        ));
    }
}
