//! Matrix creation functions: zeros, identity, diagonal, and vectors.

use crate::Float;

use super::Matrix;

impl<T: Float> Matrix<T> {
    /// Create a matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    ///
    /// ```
    /// # use hyperview_core::Matrixd;
    /// let m = Matrixd::zeros(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::full(rows, cols, T::zero())
    }

    /// Create a matrix filled with a constant value.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn full(rows: usize, cols: usize, value: T) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "matrix shape must be at least 1x1, got {rows}x{cols}"
        );
        Self::from_parts(vec![value; rows * cols], rows, cols)
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// # use hyperview_core::Matrixd;
    /// let eye = Matrixd::identity(3);
    /// assert_eq!(eye[(1, 1)], 1.0);
    /// assert_eq!(eye[(0, 1)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        Self::diagonal(n, n, T::one())
    }

    /// Create a `rows x cols` matrix with `value` on the main diagonal and
    /// zero elsewhere.
    pub fn diagonal(rows: usize, cols: usize, value: T) -> Self {
        let mut m = Self::zeros(rows, cols);
        for i in 0..rows.min(cols) {
            m.data[i * cols + i] = value;
        }
        m
    }

    /// Create a column vector (`n x 1`).
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    ///
    /// ```
    /// # use hyperview_core::Matrixd;
    /// let p = Matrixd::column(&[1.0, 2.0, 3.0]);
    /// assert_eq!(p.shape(), (3, 1));
    /// ```
    pub fn column(values: &[T]) -> Self {
        assert!(!values.is_empty(), "a column vector needs at least one value");
        Self::from_parts(values.to_vec(), values.len(), 1)
    }

    /// Create a row vector (`1 x n`).
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn row_vector(values: &[T]) -> Self {
        assert!(!values.is_empty(), "a row vector needs at least one value");
        Self::from_parts(values.to_vec(), 1, values.len())
    }
}
