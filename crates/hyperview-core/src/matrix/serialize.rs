//! `serde` support for [`Matrix`], enabled by the `serde` feature.
//!
//! A matrix is written as `{ "rows": R, "cols": C, "data": [...] }` with
//! row-major data. Deserialization re-checks the shape invariant.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Float;

use super::Matrix;

#[derive(Serialize)]
#[serde(rename = "Matrix")]
struct MatrixRef<'a, T> {
    rows: usize,
    cols: usize,
    data: &'a [T],
}

#[derive(Deserialize)]
#[serde(rename = "Matrix")]
struct MatrixOwned<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float + Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatrixRef {
            rows: self.rows,
            cols: self.cols,
            data: &self.data,
        }
        .serialize(serializer)
    }
}

impl<'de, T: Float + Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = MatrixOwned::<T>::deserialize(deserializer)?;
        let m = Matrix::from_vec(raw.data, raw.cols).map_err(D::Error::custom)?;
        if m.rows != raw.rows {
            return Err(D::Error::custom(format!(
                "matrix data holds {} rows, header says {}",
                m.rows, raw.rows
            )));
        }
        Ok(m)
    }
}
