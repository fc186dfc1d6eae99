//! `Display` formatting for [`Matrix`].

use core::fmt;

use crate::Float;

use super::Matrix;

impl<T: Float> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_row() {
            write!(f, "matrix([")?;
            write_row(f, &self.data)?;
            return write!(f, "])");
        }

        writeln!(f, "matrix([")?;
        for (r, row) in self.row_slices().enumerate() {
            write!(f, "  [")?;
            write_row(f, row)?;
            if r + 1 < self.rows {
                writeln!(f, "],")?;
            } else {
                writeln!(f, "]")?;
            }
        }
        write!(f, "])")
    }
}

fn write_row<T: fmt::Display>(f: &mut fmt::Formatter<'_>, row: &[T]) -> fmt::Result {
    for (i, v) in row.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        // Forward precision flags such as `{:.3}` to every element.
        fmt::Display::fmt(v, f)?;
    }
    Ok(())
}
