//! Dense root matrix
//!
//! A [`DenseMatrix`] owns its elements in a row-major `Vec`, addressed by
//! the linear offset `row * columns + column`. Every view ultimately reads
//! and writes through one of these.

use log::debug;
use matview_core::{
    check_access, check_window, BoundsPolicy, Index, MatrixError, Rectangle, Result, RowMajor,
    Size,
};

use crate::traits::{Matrix, MutableMatrix};
use crate::view::{Submatrix, SubmatrixMut};

/// Owning, fixed-size matrix stored in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseMatrix<T> {
    size: Size,
    cells: Vec<T>,
}

impl<T> DenseMatrix<T> {
    /// Create a matrix by calling `init` once per cell in row-major order
    pub fn from_fn<F>(size: Size, init: F) -> Self
    where
        F: FnMut(Index) -> T,
    {
        let cells = RowMajor::new(size).map(init).collect();
        Self { size, cells }
    }

    /// Create a matrix from equally long rows
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let size = Size::new(rows.len(), columns);
        let mut cells = Vec::with_capacity(size.area());

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != columns {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: columns,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    /// Elements in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        let columns = self.size.columns;
        (0..self.size.rows).map(move |row| &self.cells[row * columns..(row + 1) * columns])
    }

    /// Iterate over `(index, element)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Index, &T)> + '_ {
        RowMajor::new(self.size).zip(self.cells.iter())
    }

    pub(crate) fn cell(&self, (row, column): (usize, usize)) -> &T {
        &self.cells[row * self.size.columns + column]
    }

    pub(crate) fn cell_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self.cells[row * self.size.columns + column]
    }
}

impl<T: Clone> DenseMatrix<T> {
    /// Create a matrix with every cell set to `value`
    pub fn filled(size: Size, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size.area()],
        }
    }
}

/// Validate a window taken directly from the root
fn root_window(rectangle: Rectangle, size: Size) -> Result<()> {
    check_window(rectangle, size)
        .inspect_err(|err| debug!("Rejected submatrix of root {size}: {err}"))
}

impl<T> Matrix for DenseMatrix<T> {
    type Element = T;

    fn size(&self) -> Size {
        self.size
    }

    fn rectangle(&self) -> Rectangle {
        Rectangle::from_size(self.size)
    }

    fn get(&self, index: Index) -> Result<&T> {
        let position = check_access(index, self.size)?;
        Ok(self.cell(position))
    }

    fn submatrix(&self, rectangle: Rectangle, policy: BoundsPolicy) -> Result<Submatrix<'_, T>> {
        root_window(rectangle, self.size)?;
        Ok(Submatrix::new(self, rectangle, policy))
    }
}

impl<T> MutableMatrix for DenseMatrix<T> {
    fn get_mut(&mut self, index: Index) -> Result<&mut T> {
        let position = check_access(index, self.size)?;
        Ok(self.cell_mut(position))
    }

    fn submatrix_mut(
        &mut self,
        rectangle: Rectangle,
        policy: BoundsPolicy,
    ) -> Result<SubmatrixMut<'_, T>> {
        root_window(rectangle, self.size)?;
        Ok(SubmatrixMut::new(self, rectangle, policy))
    }
}

impl<T> std::ops::Index<Index> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, index: Index) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> std::ops::IndexMut<Index> for DenseMatrix<T> {
    fn index_mut(&mut self, index: Index) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> std::ops::Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(
            row < self.size.rows && column < self.size.columns,
            "Position ({row}, {column}) out of bounds for size {}",
            self.size
        );
        self.cell((row, column))
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        assert!(
            row < self.size.rows && column < self.size.columns,
            "Position ({row}, {column}) out of bounds for size {}",
            self.size
        );
        self.cell_mut((row, column))
    }
}

impl<T: std::fmt::Display> std::fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::display::write_grid(self, f)
    }
}
