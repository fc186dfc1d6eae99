//! `hyperview-core`: dense matrices and transforms for N-dimensional
//! visualization.
//!
//! Points are homogeneous column vectors, transforms are square matrices,
//! and composing a frame's view is a chain of matrix products. The crate
//! provides the matrix type and its arithmetic, constructors for rotations,
//! translations, scales and projections in any dimension, and an LU/QR
//! solver behind [`Matrix::inverse`].
//!
//! ```
//! use hyperview_core::prelude::*;
//!
//! let world = transform::rotation(0, 3, 4, 0.5).unwrap();
//! let project = transform::orthographic(4, 3).unwrap();
//! let point = Matrixd::column(&[1.0, 1.0, 1.0, 1.0, 1.0]);
//! let projected = &project * &(&world * &point);
//! assert_eq!(projected.shape(), (4, 1));
//! ```
//!
//! # Design
//!
//! - Row-major `Vec` storage, generic over `f32`/`f64` through [`Float`].
//! - Operators (`+`, `-`, `*`) panic on shape mismatch; the `*_checked`
//!   methods and [`Matrix::matmul`] report it as [`CoreError`] instead.
//! - No external BLAS/LAPACK; decompositions are written from scratch.

pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod plane;
pub mod transform;

// Re-export key types at crate root for convenience.
pub use dtype::Float;
pub use error::{CoreError, Result};
pub use matrix::Matrix;

/// Double-precision matrix.
pub type Matrixd = Matrix<f64>;
/// Single-precision matrix.
pub type Matrixf = Matrix<f32>;

/// Items intended for glob-import: `use hyperview_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::Float;
    pub use crate::error::{CoreError, Result};
    pub use crate::linalg::{Factorization, LuDecomposition, QrDecomposition};
    pub use crate::matrix::Matrix;
    pub use crate::plane::{PlaneAngles, RotationPlane};
    pub use crate::transform;
    pub use crate::{Matrixd, Matrixf};
}
