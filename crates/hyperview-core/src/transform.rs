//! Constructors for transformation matrices in homogeneous coordinates.
//!
//! An N-dimensional point is an `(N+1) x 1` column vector whose last
//! component is the homogeneous `W` (1 for points). Every transform here
//! acts on such vectors by left multiplication:
//!
//! ```
//! # use hyperview_core::{Matrixd, transform};
//! let t = transform::translation(&[1.0, 2.0, 3.0]);
//! let p = Matrixd::column(&[0.0, 0.0, 0.0, 1.0]);
//! assert_eq!(&t * &p, Matrixd::column(&[1.0, 2.0, 3.0, 1.0]));
//! ```
//!
//! Rotations work in any dimension by rotating within one coordinate plane
//! at a time, so a 4-D "hyper-rotation" is just [`rotation`] with a plane
//! that involves the fourth axis. Projections reduce dimension:
//! [`orthographic`] drops an axis, [`perspective`] divides by depth.

use crate::Float;
use crate::error::{CoreError, Result};
use crate::linalg::{cross, dot};
use crate::matrix::Matrix;

/// `n x n` identity.
pub fn identity<T: Float>(n: usize) -> Matrix<T> {
    Matrix::identity(n)
}

/// `rows x cols` matrix with `value` on the main diagonal.
pub fn diagonal<T: Float>(rows: usize, cols: usize, value: T) -> Matrix<T> {
    Matrix::diagonal(rows, cols, value)
}

/// Rotation by `angle` radians in the plane of axes `i` and `j` of a
/// `dimension`-dimensional space.
///
/// Returns a `(dimension+1) x (dimension+1)` homogeneous matrix. A positive
/// angle rotates axis `i` toward axis `j`. Both axes must be distinct and
/// less than `dimension`.
///
/// ```
/// # use hyperview_core::{Matrixd, transform};
/// use std::f64::consts::FRAC_PI_2;
/// let r = transform::rotation(0, 1, 2, FRAC_PI_2).unwrap();
/// let p = &r * &Matrixd::column(&[1.0, 0.0, 1.0]);
/// assert!(p[(0, 0)].abs() < 1e-12);
/// assert!((p[(1, 0)] - 1.0).abs() < 1e-12);
/// ```
pub fn rotation<T: Float>(i: usize, j: usize, dimension: usize, angle: T) -> Result<Matrix<T>> {
    if i == j {
        return Err(CoreError::InvalidArgument {
            reason: "rotation plane needs two distinct axes",
        });
    }
    if i >= dimension || j >= dimension {
        return Err(CoreError::InvalidArgument {
            reason: "rotation axis exceeds the dimension",
        });
    }

    let (sin, cos) = (angle.sin(), angle.cos());
    let mut m = Matrix::identity(dimension + 1);
    m[(i, i)] = cos;
    m[(i, j)] = -sin;
    m[(j, i)] = sin;
    m[(j, j)] = cos;
    Ok(m)
}

/// Homogeneous translation by `offsets`, an `(n+1) x (n+1)` matrix for
/// `n` offsets.
pub fn translation<T: Float>(offsets: &[T]) -> Matrix<T> {
    let n = offsets.len();
    let mut m = Matrix::identity(n + 1);
    for (i, &offset) in offsets.iter().enumerate() {
        m[(i, n)] = offset;
    }
    m
}

/// Homogeneous per-axis scale, an `(n+1) x (n+1)` diagonal matrix for `n`
/// factors with a trailing 1.
pub fn scale<T: Float>(factors: &[T]) -> Matrix<T> {
    let n = factors.len();
    let mut m = Matrix::identity(n + 1);
    for (i, &factor) in factors.iter().enumerate() {
        m[(i, i)] = factor;
    }
    m
}

/// 4x4 perspective projection from a vertical field of view (radians) and
/// an aspect ratio (width / height).
///
/// The third row passes the view-space depth through unchanged and the
/// fourth row copies it into `W`, so the rows are identical: after the
/// divide by `W`, `x` and `y` are in normalized device coordinates while the
/// undivided `Z` still tells the caller whether a point lies in front of the
/// eye. Use [`perspective_with_depth`] for a depth-range mapping.
///
/// ```
/// # use hyperview_core::{Matrixd, transform};
/// use std::f64::consts::FRAC_PI_2;
/// let p = transform::perspective(FRAC_PI_2, 1.0);
/// let v = &p * &Matrixd::column(&[1.0, 1.0, 2.0, 1.0]);
/// let w = v.w().unwrap();
/// assert!((v.x().unwrap() / w - 0.5).abs() < 1e-12);
/// ```
pub fn perspective<T: Float>(fovy: T, aspect: T) -> Matrix<T> {
    let f = T::one() / (fovy / T::from_f64(2.0)).tan();
    let (zero, one) = (T::zero(), T::one());
    #[rustfmt::skip]
    let data = vec![
        f / aspect, zero, zero, zero,
        zero,       f,    zero, zero,
        zero,       zero, one,  zero,
        zero,       zero, one,  zero,
    ];
    Matrix::from_parts(data, 4, 4)
}

/// 4x4 perspective projection that also maps depth `near..far` onto
/// `-1..1` after the divide by `W`.
///
/// Requires `0 < near < far`.
pub fn perspective_with_depth<T: Float>(fovy: T, aspect: T, near: T, far: T) -> Result<Matrix<T>> {
    if !(near > T::zero() && far > near) {
        return Err(CoreError::InvalidArgument {
            reason: "perspective depth range needs 0 < near < far",
        });
    }
    let mut m = perspective(fovy, aspect);
    let range = far - near;
    m[(2, 2)] = (far + near) / range;
    m[(2, 3)] = -(T::from_f64(2.0) * far * near) / range;
    Ok(m)
}

/// Parallel projection from `dimension`-D to `(dimension-1)`-D that drops
/// coordinate `axis`.
///
/// Returns a `dimension x (dimension+1)` matrix: it takes a homogeneous
/// `dimension`-D point and yields a homogeneous `(dimension-1)`-D point,
/// keeping `W`. Use `orthographic(4, 3)` to view a 4-D object in 3-D.
///
/// ```
/// # use hyperview_core::{Matrixd, transform};
/// let drop_z = transform::orthographic(3, 2).unwrap();
/// let p = &drop_z * &Matrixd::column(&[1.0, 2.0, 3.0, 1.0]);
/// assert_eq!(p, Matrixd::column(&[1.0, 2.0, 1.0]));
/// ```
pub fn orthographic<T: Float>(dimension: usize, axis: usize) -> Result<Matrix<T>> {
    if axis >= dimension {
        return Err(CoreError::InvalidArgument {
            reason: "projected axis exceeds the dimension",
        });
    }
    let mut m = Matrix::zeros(dimension, dimension + 1);
    for i in 0..dimension - 1 {
        let source = if i >= axis { i + 1 } else { i };
        m[(i, source)] = T::one();
    }
    m[(dimension - 1, dimension)] = T::one();
    Ok(m)
}

/// View matrix for an eye at `eye` looking at `at`, both 3-row column
/// vectors, with world up `(0, 1, 0)`.
///
/// The rows are the camera's right, up and forward axes, each with a
/// translation of `-dot(axis, eye)`, followed by `(0, 0, 0, 1)`. The eye
/// maps to the origin and `at` onto the positive third axis.
///
/// Fails with [`CoreError::InvalidOperation`] when `eye == at` or when the
/// view direction is parallel to world up, since no camera frame exists.
///
/// ```
/// # use hyperview_core::{Matrixd, transform};
/// let eye = Matrixd::column(&[0.0, 0.0, -5.0]);
/// let view = transform::look_at(&eye, &Matrixd::column(&[0.0, 0.0, 0.0])).unwrap();
/// let origin = &view * &Matrixd::column(&[0.0, 0.0, 0.0, 1.0]);
/// assert_eq!(origin, Matrixd::column(&[0.0, 0.0, 5.0, 1.0]));
/// ```
pub fn look_at<T: Float>(eye: &Matrix<T>, at: &Matrix<T>) -> Result<Matrix<T>> {
    if !eye.is_column() || !at.is_column() || eye.rows() != 3 || at.rows() != 3 {
        return Err(CoreError::InvalidArgument {
            reason: "look_at expects 3-row column vectors",
        });
    }
    let world_up = Matrix::column(&[T::zero(), T::one(), T::zero()]);

    let forward = at.sub_checked(eye)?.normalized()?;
    let right = cross(&world_up, &forward)?.normalized()?;
    let up = cross(&forward, &right)?;

    let mut data = Vec::with_capacity(16);
    for axis in [&right, &up, &forward] {
        data.extend_from_slice(axis.as_slice());
        data.push(-dot(axis, eye)?);
    }
    data.extend_from_slice(&[T::zero(), T::zero(), T::zero(), T::one()]);
    Ok(Matrix::from_parts(data, 4, 4))
}
