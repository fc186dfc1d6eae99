//! Transposition.

use crate::Float;

use super::Matrix;

impl<T: Float> Matrix<T> {
    /// Return the transpose as a new matrix, leaving `self` unchanged.
    ///
    /// ```
    /// # use hyperview_core::Matrixd;
    /// let m = Matrixd::from_rows([[1.0, 2.0, 3.0]]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 1));
    /// assert_eq!(m.shape(), (1, 3));
    /// ```
    pub fn transpose(&self) -> Self {
        let (rows, cols) = (self.rows, self.cols);
        let mut data = vec![T::zero(); self.data.len()];

        for r in 0..rows {
            for c in 0..cols {
                data[c * rows + r] = self.data[r * cols + c];
            }
        }

        Self::from_parts(data, cols, rows)
    }

    /// Replace `self` with its transpose and return it for chaining.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        if self.is_square() {
            let n = self.rows;
            for r in 0..n {
                for c in (r + 1)..n {
                    self.data.swap(r * n + c, c * n + r);
                }
            }
        } else {
            *self = self.transpose();
        }
        self
    }
}
