//! Sub-block extraction for [`Matrix`].

use crate::Float;
use crate::error::{CoreError, Result};

use super::Matrix;

impl<T: Float> Matrix<T> {
    /// Extract the inclusive block `start_row..=end_row`, `start_col..=end_col`.
    ///
    /// Requires `start <= end < extent` on both axes; anything else is an
    /// [`CoreError::InvalidArgument`].
    ///
    /// ```
    /// # use hyperview_core::Matrixd;
    /// let m = Matrixd::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
    /// let s = m.submatrix(0, 1, 1, 2).unwrap();
    /// assert_eq!(s.as_slice(), &[2.0, 3.0, 5.0, 6.0]);
    /// ```
    pub fn submatrix(
        &self,
        start_row: usize,
        end_row: usize,
        start_col: usize,
        end_col: usize,
    ) -> Result<Self> {
        if start_row > end_row || start_col > end_col {
            return Err(CoreError::InvalidArgument {
                reason: "submatrix range starts after it ends",
            });
        }
        if end_row >= self.rows || end_col >= self.cols {
            return Err(CoreError::InvalidArgument {
                reason: "submatrix range exceeds the matrix",
            });
        }

        let width = end_col - start_col + 1;
        let mut data = Vec::with_capacity((end_row - start_row + 1) * width);
        for r in start_row..=end_row {
            let offset = r * self.cols;
            data.extend_from_slice(&self.data[offset + start_col..=offset + end_col]);
        }
        Ok(Self::from_parts(data, end_row - start_row + 1, width))
    }

    /// Gather the listed rows, in the listed order, restricted to the
    /// inclusive column range `start_col..=end_col`.
    ///
    /// Rows may repeat. Any row index outside the matrix, an empty row list,
    /// or an invalid column range is an [`CoreError::InvalidArgument`].
    ///
    /// ```
    /// # use hyperview_core::Matrixd;
    /// let m = Matrixd::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    /// let s = m.select_rows(&[2, 0], 0, 1).unwrap();
    /// assert_eq!(s.as_slice(), &[5.0, 6.0, 1.0, 2.0]);
    /// ```
    pub fn select_rows(&self, rows: &[usize], start_col: usize, end_col: usize) -> Result<Self> {
        if start_col > end_col || end_col >= self.cols {
            return Err(CoreError::InvalidArgument {
                reason: "column range is outside the matrix",
            });
        }
        if rows.is_empty() {
            return Err(CoreError::InvalidArgument {
                reason: "row selection is empty",
            });
        }

        let width = end_col - start_col + 1;
        let mut data = Vec::with_capacity(rows.len() * width);
        for &r in rows {
            if r >= self.rows {
                return Err(CoreError::InvalidArgument {
                    reason: "selected row is outside the matrix",
                });
            }
            let offset = r * self.cols;
            data.extend_from_slice(&self.data[offset + start_col..=offset + end_col]);
        }
        Ok(Self::from_parts(data, rows.len(), width))
    }
}
