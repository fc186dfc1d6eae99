//! Dense, fixed-shape matrix of floating-point values.
//!
//! The [`Matrix`] type is the only data structure of the engine: points are
//! column vectors in homogeneous coordinates and transforms are square (or,
//! for projections, rectangular) matrices. Elements are stored contiguously
//! in row-major order.

mod create;
mod display;
mod indexing;
mod ops;
mod reshape;
#[cfg(feature = "serde")]
mod serialize;

use core::ops::{Index, IndexMut};

use approx::{AbsDiffEq, RelativeEq};

use crate::Float;
use crate::error::{CoreError, Result};

/// A dense matrix with a shape fixed at construction.
///
/// Rows and columns are both at least 1. Element values may change through
/// [`set`](Self::set) or [`IndexMut`], but the shape never does, except
/// through [`transpose_in_place`](Self::transpose_in_place).
///
/// # Element Access
///
/// [`Matrix::get`] and [`Matrix::set`] are checked and return
/// [`CoreError::IndexOutOfBounds`] outside the matrix. The [`Index`] and
/// [`IndexMut`] implementations take a `(row, column)` tuple and panic on
/// out-of-bounds access, like slices do.
///
/// ```
/// # use hyperview_core::Matrixd;
/// let mut m = Matrixd::zeros(2, 3);
/// m[(1, 2)] = 5.0;
/// assert_eq!(m.get(1, 2).unwrap(), 5.0);
/// assert!(m.get(2, 0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Matrix<T: Float> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Float> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a matrix from a flat, row-major value list and a row width.
    ///
    /// The number of rows is `data.len() / width`. Returns
    /// [`CoreError::DimensionMismatch`] if the list is empty, `width` is
    /// zero, or the length is not an exact multiple of `width`.
    ///
    /// ```
    /// # use hyperview_core::Matrixd;
    /// let m = Matrixd::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(Matrixd::from_vec(vec![1.0, 2.0, 3.0], 2).is_err());
    /// ```
    pub fn from_vec(data: Vec<T>, width: usize) -> Result<Self> {
        if width == 0 || data.is_empty() || data.len() % width != 0 {
            // `expected` is the smallest full shape that holds the values
            let width = width.max(1);
            return Err(CoreError::DimensionMismatch {
                expected: (data.len().div_ceil(width).max(1), width),
                got: (1, data.len()),
            });
        }
        let rows = data.len() / width;
        Ok(Self {
            data,
            rows,
            cols: width,
        })
    }

    /// Create a matrix from a flat slice and a row width (copies the data).
    pub fn from_slice(data: &[T], width: usize) -> Result<Self> {
        Self::from_vec(data.to_vec(), width)
    }

    /// Create a matrix by wrapping nested rows.
    ///
    /// Every row must have the same, non-zero length.
    ///
    /// ```
    /// # use hyperview_core::Matrixd;
    /// let m = Matrixd::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert!(Matrixd::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: impl IntoIterator<Item = R>) -> Result<Self> {
        let mut data = Vec::new();
        let mut width = None;
        for row in rows {
            let row = row.as_ref();
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(CoreError::DimensionMismatch {
                        expected: (1, w),
                        got: (1, row.len()),
                    });
                }
                Some(_) => {}
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(data, width.unwrap_or(0))
    }

    /// Build a matrix whose shape is already known to be consistent.
    pub(crate) fn from_parts(data: Vec<T>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has exactly one row.
    #[inline]
    pub fn is_row(&self) -> bool {
        self.rows == 1
    }

    /// Whether the matrix has exactly one column.
    #[inline]
    pub fn is_column(&self) -> bool {
        self.cols == 1
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// A flat, row-major slice of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A mutable flat, row-major slice of all elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and return the row-major `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    fn flat_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                index: (row, col),
                shape: self.shape(),
            });
        }
        Ok(row * self.cols + col)
    }

    /// The element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let flat = self.flat_index(row, col)?;
        Ok(self.data[flat])
    }

    /// Set the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let flat = self.flat_index(row, col)?;
        self.data[flat] = value;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Vector components
    // ------------------------------------------------------------------

    /// Flat index of component `i` of a row or column vector.
    fn component_index(&self, i: usize) -> Result<usize> {
        let len = if self.is_row() {
            self.cols
        } else if self.is_column() {
            self.rows
        } else {
            return Err(CoreError::InvalidOperation {
                reason: "component access requires a row or column vector",
            });
        };
        if i >= len {
            return Err(CoreError::InvalidOperation {
                reason: "component index exceeds the vector length",
            });
        }
        // Row and column vectors are both contiguous in row-major storage.
        Ok(i)
    }

    /// Component `i` of a row or column vector.
    pub fn component(&self, i: usize) -> Result<T> {
        let flat = self.component_index(i)?;
        Ok(self.data[flat])
    }

    /// Set component `i` of a row or column vector.
    pub fn set_component(&mut self, i: usize, value: T) -> Result<()> {
        let flat = self.component_index(i)?;
        self.data[flat] = value;
        Ok(())
    }

    /// First component of a vector.
    ///
    /// ```
    /// # use hyperview_core::Matrixd;
    /// let p = Matrixd::column(&[1.0, 2.0, 3.0, 1.0]);
    /// assert_eq!(p.x().unwrap(), 1.0);
    /// assert_eq!(p.w().unwrap(), 1.0);
    /// assert!(Matrixd::zeros(2, 2).x().is_err());
    /// ```
    pub fn x(&self) -> Result<T> {
        self.component(0)
    }

    /// Second component of a vector.
    pub fn y(&self) -> Result<T> {
        self.component(1)
    }

    /// Third component of a vector.
    pub fn z(&self) -> Result<T> {
        self.component(2)
    }

    /// Fourth component of a vector, the homogeneous `W` of a 3-D point.
    pub fn w(&self) -> Result<T> {
        self.component(3)
    }

    pub fn set_x(&mut self, value: T) -> Result<()> {
        self.set_component(0, value)
    }

    pub fn set_y(&mut self, value: T) -> Result<()> {
        self.set_component(1, value)
    }

    pub fn set_z(&mut self, value: T) -> Result<()> {
        self.set_component(2, value)
    }

    pub fn set_w(&mut self, value: T) -> Result<()> {
        self.set_component(3, value)
    }

    // ------------------------------------------------------------------
    // Iterators
    // ------------------------------------------------------------------

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }

    // ------------------------------------------------------------------
    // Map / apply
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new matrix.
    pub fn map<F>(&self, f: F) -> Matrix<T>
    where
        F: Fn(T) -> T,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Apply a function element-wise to two matrices of the same shape.
    pub fn zip_map<F>(&self, other: &Matrix<T>, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape() != other.shape() {
            return Err(CoreError::DimensionMismatch {
                expected: self.shape(),
                got: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T: Float> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols,
        );
        &self.data[row * self.cols + col]
    }
}

impl<T: Float> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols,
        );
        &mut self.data[row * self.cols + col]
    }
}

impl<T: Float> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}

impl<T: Float> AbsDiffEq for Matrix<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: Float> RelativeEq for Matrix<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
