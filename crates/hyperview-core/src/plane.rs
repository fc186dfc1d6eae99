//! Per-plane rotation angles for animating 4-D objects.
//!
//! A rotation in 4-space decomposes into rotations within the six coordinate
//! planes. [`PlaneAngles`] holds one angle per plane, each either fixed or
//! scaled by elapsed time, and composes them into a single world matrix.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Float;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::transform;

/// One of the six coordinate planes of 4-space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RotationPlane {
    Xy,
    Xz,
    Xw,
    Yz,
    Yw,
    Zw,
}

impl RotationPlane {
    /// Every plane, in composition order.
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::Xy,
        RotationPlane::Xz,
        RotationPlane::Xw,
        RotationPlane::Yz,
        RotationPlane::Yw,
        RotationPlane::Zw,
    ];

    /// The pair of axes spanning this plane.
    pub fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::Xy => (0, 1),
            RotationPlane::Xz => (0, 2),
            RotationPlane::Xw => (0, 3),
            RotationPlane::Yz => (1, 2),
            RotationPlane::Yw => (1, 3),
            RotationPlane::Zw => (2, 3),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Six rotation-plane angles (radians), each optionally animated.
///
/// A timed plane turns at `angle` radians per unit of time; an untimed one
/// holds `angle` fixed.
///
/// ```
/// # use hyperview_core::plane::{PlaneAngles, RotationPlane};
/// let mut angles = PlaneAngles::<f64>::default();
/// angles.set(RotationPlane::Xw, 0.5, true);
/// assert_eq!(angles.resolve(2.0)[2], 1.0);
/// assert_eq!(angles.rotation(4, 0.0).unwrap().shape(), (5, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaneAngles<T> {
    pub angles: [T; 6],
    pub timed: [bool; 6],
}

impl<T: Float> Default for PlaneAngles<T> {
    fn default() -> Self {
        Self {
            angles: [T::zero(); 6],
            timed: [false; 6],
        }
    }
}

impl<T: Float> PlaneAngles<T> {
    /// The configured angle of `plane` and whether it is timed.
    pub fn get(&self, plane: RotationPlane) -> (T, bool) {
        let i = plane.index();
        (self.angles[i], self.timed[i])
    }

    pub fn set(&mut self, plane: RotationPlane, angle: T, timed: bool) {
        let i = plane.index();
        self.angles[i] = angle;
        self.timed[i] = timed;
    }

    /// Effective angle per plane at time `t`, in [`RotationPlane::ALL`] order.
    pub fn resolve(&self, t: T) -> [T; 6] {
        let mut out = self.angles;
        for (value, &timed) in out.iter_mut().zip(&self.timed) {
            if timed {
                *value = t * *value;
            }
        }
        out
    }

    /// Product of the six plane rotations at time `t` as a homogeneous
    /// `(dimension+1) x (dimension+1)` matrix.
    ///
    /// `dimension` must be at least 4 since the planes span all four axes.
    pub fn rotation(&self, dimension: usize, t: T) -> Result<Matrix<T>> {
        let effective = self.resolve(t);
        RotationPlane::ALL.iter().zip(effective).try_fold(
            Matrix::identity(dimension + 1),
            |acc, (plane, angle)| {
                let (i, j) = plane.axes();
                Ok(&acc * &transform::rotation(i, j, dimension, angle)?)
            },
        )
    }
}
