//! BLAS-style kernels on [`Matrix`]: vector products, norms, and the
//! general matrix-matrix multiply.
//!
//! All functions validate shapes and return [`Result`] on mismatches.

use crate::Float;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

// ======================================================================
// Level 1: column vector operations, O(n)
// ======================================================================

/// Inner (dot) product of two column vectors: `sum(x_i * y_i)`.
///
/// Both operands must be column vectors with the same number of rows.
///
/// ```
/// # use hyperview_core::Matrixd;
/// # use hyperview_core::linalg::dot;
/// let x = Matrixd::column(&[1.0, 2.0, 3.0]);
/// let y = Matrixd::column(&[4.0, 5.0, 6.0]);
/// assert!((dot(&x, &y).unwrap() - 32.0).abs() < 1e-10);
/// ```
pub fn dot<T: Float>(x: &Matrix<T>, y: &Matrix<T>) -> Result<T> {
    if !x.is_column() || !y.is_column() || x.rows() != y.rows() {
        return Err(CoreError::InvalidArgument {
            reason: "dot: operands must be column vectors of equal length",
        });
    }
    let result = x
        .as_slice()
        .iter()
        .zip(y.as_slice().iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
    Ok(result)
}

/// Cross product of two 3-row column vectors.
///
/// ```
/// # use hyperview_core::Matrixd;
/// # use hyperview_core::linalg::cross;
/// let x = Matrixd::column(&[1.0, 0.0, 0.0]);
/// let y = Matrixd::column(&[0.0, 1.0, 0.0]);
/// assert_eq!(cross(&x, &y).unwrap(), Matrixd::column(&[0.0, 0.0, 1.0]));
/// ```
pub fn cross<T: Float>(u: &Matrix<T>, v: &Matrix<T>) -> Result<Matrix<T>> {
    if !u.is_column() || !v.is_column() || u.rows() != 3 || v.rows() != 3 {
        return Err(CoreError::InvalidArgument {
            reason: "cross: operands must be 3-row column vectors",
        });
    }
    let (u, v) = (u.as_slice(), v.as_slice());
    Ok(Matrix::column(&[
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]))
}

/// Euclidean norm (L2 norm) of a column vector: `sqrt(sum(x_i^2))`.
///
/// ```
/// # use hyperview_core::Matrixd;
/// # use hyperview_core::linalg::nrm2;
/// let x = Matrixd::column(&[3.0, 4.0]);
/// assert!((nrm2(&x).unwrap() - 5.0).abs() < 1e-10);
/// ```
pub fn nrm2<T: Float>(x: &Matrix<T>) -> Result<T> {
    if !x.is_column() {
        return Err(CoreError::InvalidOperation {
            reason: "norm requires a column vector",
        });
    }
    let sum_sq = x.as_slice().iter().fold(T::zero(), |acc, &v| acc + v * v);
    Ok(sum_sq.sqrt())
}

// ======================================================================
// Level 3: matrix-matrix operations, O(n^3)
// ======================================================================

/// General matrix-matrix multiply: `C = alpha * A * B + beta * C`.
///
/// - `a` must have shape `[m, k]`.
/// - `b` must have shape `[k, n]`.
/// - `c` must have shape `[m, n]`.
///
/// If `beta` is zero, `c` is overwritten (not read).
///
/// ```
/// # use hyperview_core::Matrixd;
/// # use hyperview_core::linalg::gemm;
/// let a = Matrixd::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
/// let b = Matrixd::from_vec(vec![5.0, 6.0, 7.0, 8.0], 2).unwrap();
/// let mut c = Matrixd::zeros(2, 2);
/// gemm(1.0, &a, &b, 0.0, &mut c).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn gemm<T: Float>(
    alpha: T,
    a: &Matrix<T>,
    b: &Matrix<T>,
    beta: T,
    c: &mut Matrix<T>,
) -> Result<()> {
    let (m, k) = a.shape();
    let n = b.cols();

    if b.rows() != k {
        return Err(CoreError::DimensionMismatch {
            expected: (k, n),
            got: b.shape(),
        });
    }
    if c.shape() != (m, n) {
        return Err(CoreError::DimensionMismatch {
            expected: (m, n),
            got: c.shape(),
        });
    }

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let overwrite = beta == T::zero();
    let c_data = c.as_mut_slice();

    // ijk loop order (row-major friendly for A and C)
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            let a_row = i * k;
            for p in 0..k {
                sum += a_data[a_row + p] * b_data[p * n + j];
            }
            let c_idx = i * n + j;
            c_data[c_idx] = if overwrite {
                alpha * sum
            } else {
                alpha * sum + beta * c_data[c_idx]
            };
        }
    }

    Ok(())
}

// ======================================================================
// Convenience methods on Matrix
// ======================================================================

impl<T: Float> Matrix<T> {
    /// Matrix-matrix multiply: returns `self * other` as a new matrix.
    ///
    /// Requires `self.cols() == other.rows()`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols() != other.rows() {
            return Err(CoreError::DimensionMismatch {
                expected: (self.cols(), other.cols()),
                got: other.shape(),
            });
        }
        let mut c = Matrix::zeros(self.rows(), other.cols());
        gemm(T::one(), self, other, T::zero(), &mut c)?;
        Ok(c)
    }

    /// Dot product with another column vector.
    pub fn dot(&self, other: &Matrix<T>) -> Result<T> {
        dot(self, other)
    }

    /// Cross product with another 3-row column vector.
    pub fn cross(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        cross(self, other)
    }

    /// Euclidean norm of a column vector.
    pub fn norm(&self) -> Result<T> {
        nrm2(self)
    }

    /// The column vector scaled to unit length.
    ///
    /// Fails with [`CoreError::InvalidOperation`] if `self` is not a column
    /// vector or has zero length.
    ///
    /// ```
    /// # use hyperview_core::Matrixd;
    /// let v = Matrixd::column(&[3.0, 0.0, 4.0]).normalized().unwrap();
    /// assert!((v.as_slice()[0] - 0.6).abs() < 1e-12);
    /// assert!((v.as_slice()[2] - 0.8).abs() < 1e-12);
    /// ```
    pub fn normalized(&self) -> Result<Matrix<T>> {
        let norm = self.norm()?;
        if norm == T::zero() {
            return Err(CoreError::InvalidOperation {
                reason: "cannot normalize a zero-length vector",
            });
        }
        Ok(self / norm)
    }

    /// Apply this transform to every point in `points`.
    ///
    /// Each point must have as many rows as `self` has columns.
    pub fn transform_points(&self, points: &[Matrix<T>]) -> Result<Vec<Matrix<T>>> {
        points.iter().map(|p| self.matmul(p)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::Matrixd;

    #[test]
    fn test_dot() {
        let x = Matrixd::column(&[1.0, 2.0, 3.0]);
        let y = Matrixd::column(&[4.0, -5.0, 6.0]);
        assert_eq!(dot(&x, &y).unwrap(), 12.0);
    }

    #[test]
    fn test_dot_rejects_rows_and_mismatch() {
        let x = Matrixd::column(&[1.0, 2.0]);
        let y = Matrixd::column(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            dot(&x, &y),
            Err(CoreError::InvalidArgument { .. })
        ));
        let r = Matrixd::row_vector(&[1.0, 2.0]);
        assert!(dot(&r, &r).is_err());
    }

    #[test]
    fn test_cross_basis() {
        let x = Matrixd::column(&[1.0, 0.0, 0.0]);
        let y = Matrixd::column(&[0.0, 1.0, 0.0]);
        let z = Matrixd::column(&[0.0, 0.0, 1.0]);
        assert_eq!(x.cross(&y).unwrap(), z);
        assert_eq!(y.cross(&z).unwrap(), x);
        assert_eq!(y.cross(&x).unwrap(), -z);
    }

    #[test]
    fn test_cross_rejects_wrong_shape() {
        let a = Matrixd::column(&[1.0, 2.0, 3.0, 4.0]);
        let b = Matrixd::column(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            cross(&a, &b),
            Err(CoreError::InvalidArgument { .. })
        ));
        assert!(cross(&b.transpose(), &b).is_err());
    }

    #[test]
    fn test_nrm2() {
        let x = Matrixd::column(&[1.0, 2.0, 2.0]);
        assert_eq!(nrm2(&x).unwrap(), 3.0);
        assert!(nrm2(&Matrixd::zeros(2, 2)).is_err());
    }

    #[test]
    fn test_normalized() {
        let v = Matrixd::column(&[0.0, 5.0]).normalized().unwrap();
        assert_eq!(v, Matrixd::column(&[0.0, 1.0]));
    }

    #[test]
    fn test_normalized_requires_column() {
        let r = Matrixd::row_vector(&[1.0, 2.0]);
        assert!(matches!(
            r.normalized(),
            Err(CoreError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_normalized_zero_vector_fails() {
        let z = Matrixd::column(&[0.0, 0.0, 0.0]);
        assert!(matches!(
            z.normalized(),
            Err(CoreError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_gemm_accumulates() {
        let a = Matrixd::identity(2);
        let b = Matrixd::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
        let mut c = Matrixd::full(2, 2, 1.0);
        gemm(2.0, &a, &b, 1.0, &mut c).unwrap();
        assert_eq!(c.as_slice(), &[3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_gemm_shape_errors() {
        let a = Matrixd::zeros(2, 3);
        let b = Matrixd::zeros(2, 2);
        let mut c = Matrixd::zeros(2, 2);
        assert!(gemm(1.0, &a, &b, 0.0, &mut c).is_err());
        let b = Matrixd::zeros(3, 4);
        assert!(gemm(1.0, &a, &b, 0.0, &mut c).is_err());
    }

    #[test]
    fn test_matmul_row_times_column() {
        let r = Matrixd::row_vector(&[1.0, 2.0, 3.0]);
        let c = Matrixd::column(&[4.0, 5.0, 6.0]);
        let p = r.matmul(&c).unwrap();
        assert_eq!(p.shape(), (1, 1));
        assert_eq!(p[(0, 0)], 32.0);
        assert_eq!(c.matmul(&r).unwrap().shape(), (3, 3));
    }

    #[test]
    fn test_matmul_mismatch() {
        let a = Matrixd::zeros(2, 3);
        assert!(matches!(
            a.matmul(&Matrixd::zeros(2, 3)),
            Err(CoreError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_transform_points() {
        let t = Matrixd::from_rows([[2.0, 0.0], [0.0, 3.0]]).unwrap();
        let pts = vec![Matrixd::column(&[1.0, 1.0]), Matrixd::column(&[-1.0, 2.0])];
        let out = t.transform_points(&pts).unwrap();
        assert_eq!(out[0], Matrixd::column(&[2.0, 3.0]));
        assert_eq!(out[1], Matrixd::column(&[-2.0, 6.0]));
        assert!(t.transform_points(&[Matrixd::column(&[1.0])]).is_err());
    }
}
