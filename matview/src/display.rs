use std::fmt;

use matview_core::RowMajor;

use crate::traits::Matrix;

/// Write one line per row, cells separated by a single space
pub(crate) fn write_grid<M>(matrix: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    M: Matrix + ?Sized,
    M::Element: fmt::Display,
{
    let columns = matrix.size().columns;

    for (position, index) in RowMajor::new(matrix.size()).enumerate() {
        let value = matrix.get(index).map_err(|_| fmt::Error)?;
        if position % columns != 0 {
            f.write_str(" ")?;
        }
        write!(f, "{value}")?;
        if position % columns == columns - 1 {
            writeln!(f)?;
        }
    }
    Ok(())
}
