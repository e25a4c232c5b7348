//! Row-major cursors over matrices and views
//!
//! A cursor walks the local indices of one matrix or view and reads each
//! element through that matrix's own [`Matrix::get`]. [`CursorMut`] can
//! also overwrite the element it yielded last, going through the owner's
//! bounds-checked [`MutableMatrix::set`] rather than touching storage
//! directly. Cursors cannot be restarted; ask the matrix for a new one.

use matview_core::{Index, MatrixError, Result, RowMajor};

use crate::traits::{Matrix, MutableMatrix};

/// Read-only row-major cursor
///
/// Also an [`Iterator`] over element references, for use with the usual
/// adapters.
pub struct Cursor<'a, M: Matrix + ?Sized> {
    matrix: &'a M,
    traversal: RowMajor,
}

impl<'a, M: Matrix + ?Sized> Cursor<'a, M> {
    pub fn new(matrix: &'a M) -> Self {
        Self {
            traversal: RowMajor::new(matrix.size()),
            matrix,
        }
    }

    pub fn has_next(&self) -> bool {
        self.traversal.has_next()
    }

    /// Local index the next call to [`Cursor::try_next`] will consume
    ///
    /// `None` once the cursor is exhausted, including straight away for an
    /// empty matrix.
    pub fn next_index(&self) -> Option<Index> {
        self.traversal.peek()
    }

    /// Return the element at the current position and advance
    pub fn try_next(&mut self) -> Result<&'a M::Element> {
        let index = self.traversal.advance().ok_or(MatrixError::Exhausted)?;
        self.matrix.get(index)
    }
}

impl<'a, M: Matrix + ?Sized> Iterator for Cursor<'a, M> {
    type Item = &'a M::Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.traversal.size_hint()
    }
}

impl<M: Matrix + ?Sized> std::iter::FusedIterator for Cursor<'_, M> {}

/// Row-major cursor that can overwrite the element it yielded last
pub struct CursorMut<'a, M: MutableMatrix + ?Sized> {
    matrix: &'a mut M,
    traversal: RowMajor,
}

impl<'a, M: MutableMatrix + ?Sized> CursorMut<'a, M> {
    pub fn new(matrix: &'a mut M) -> Self {
        Self {
            traversal: RowMajor::new(matrix.size()),
            matrix,
        }
    }

    pub fn has_next(&self) -> bool {
        self.traversal.has_next()
    }

    /// Local index the next call to [`CursorMut::try_next`] will consume
    pub fn next_index(&self) -> Option<Index> {
        self.traversal.peek()
    }

    /// Local index of the element most recently returned
    pub fn current_index(&self) -> Option<Index> {
        self.traversal.current()
    }

    /// Return the element at the current position and advance
    pub fn try_next(&mut self) -> Result<&M::Element> {
        let index = self.traversal.advance().ok_or(MatrixError::Exhausted)?;
        self.matrix.get(index)
    }

    /// Overwrite the element most recently returned by [`CursorMut::try_next`]
    pub fn set(&mut self, value: M::Element) -> Result<()> {
        let index = self
            .traversal
            .current()
            .ok_or(MatrixError::NoCurrentElement)?;
        self.matrix.set(index, value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use matview_core::{BoundsPolicy, Rectangle, Size};

    use super::*;
    use crate::DenseMatrix;

    fn index_matrix(rows: usize, columns: usize) -> DenseMatrix<Index> {
        DenseMatrix::from_fn(Size::new(rows, columns), |index| index)
    }

    fn rectangle(top: isize, left: isize, bottom: isize, right: isize) -> Rectangle {
        Rectangle::new(Index::new(top, left), Index::new(bottom, right))
    }

    #[test]
    fn test_cursor_visits_every_element_once() {
        let matrix = index_matrix(2, 3);
        let mut cursor = matrix.cursor();
        let mut values = Vec::new();
        while cursor.has_next() {
            values.push(*cursor.try_next().unwrap());
        }

        assert_eq!(values.len(), 6);
        let distinct: HashSet<Index> = values.iter().copied().collect();
        assert_eq!(distinct.len(), 6);
        assert_eq!(
            values,
            vec![
                Index::new(0, 0),
                Index::new(0, 1),
                Index::new(0, 2),
                Index::new(1, 0),
                Index::new(1, 1),
                Index::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_next_index_matches_value() {
        let matrix = index_matrix(2, 3);
        let mut cursor = matrix.cursor();
        while let Some(index) = cursor.next_index() {
            assert_eq!(cursor.try_next(), Ok(&index));
        }
    }

    #[test]
    fn test_next_index_absent_for_empty_matrices() {
        for (rows, columns) in [(0, 0), (0, 1), (1, 0)] {
            let matrix = index_matrix(rows, columns);
            let cursor = matrix.cursor();
            assert!(!cursor.has_next());
            assert_eq!(cursor.next_index(), None);
        }
    }

    #[test]
    fn test_next_index_absent_after_last_element() {
        let matrix = index_matrix(1, 1);
        let mut cursor = matrix.cursor();
        assert_eq!(cursor.next_index(), Some(Index::ZERO));
        cursor.try_next().unwrap();
        assert_eq!(cursor.next_index(), None);
        assert_eq!(cursor.try_next(), Err(MatrixError::Exhausted));
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_submatrix_cursor_covers_window() {
        let matrix = index_matrix(3, 4);
        let submatrix = matrix.submatrix(rectangle(1, 1, 3, 4), BoundsPolicy::Local).unwrap();
        let values: Vec<Index> = submatrix.cursor().copied().collect();
        assert_eq!(
            values,
            vec![
                Index::new(1, 1),
                Index::new(1, 2),
                Index::new(1, 3),
                Index::new(2, 1),
                Index::new(2, 2),
                Index::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_submatrix_cursor_indices_are_local() {
        let matrix = index_matrix(4, 5);
        let submatrix = matrix.submatrix(rectangle(1, 1, 3, 4), BoundsPolicy::Local).unwrap();
        let mut cursor = submatrix.cursor();
        let mut visited = 0;
        while let Some(index) = cursor.next_index() {
            assert_eq!(*cursor.try_next().unwrap(), index + Index::RIGHT + Index::DOWN);
            visited += 1;
        }
        assert_eq!(visited, 6);
    }

    #[test]
    fn test_extended_submatrix_cursor_stays_in_window() {
        let matrix = index_matrix(3, 3);
        let submatrix = matrix.submatrix(rectangle(1, 1, 2, 2), BoundsPolicy::Extended).unwrap();
        let values: Vec<Index> = submatrix.cursor().copied().collect();
        assert_eq!(values, vec![Index::new(1, 1)]);
    }

    #[test]
    fn test_cursor_size_hint() {
        let matrix = index_matrix(2, 3);
        let mut cursor = matrix.cursor();
        assert_eq!(cursor.size_hint(), (6, Some(6)));
        cursor.next();
        assert_eq!(cursor.size_hint(), (5, Some(5)));
    }

    #[test]
    fn test_cursor_mut_set_updates_matrix() {
        let mut matrix = index_matrix(2, 3);
        let mut cursor = matrix.cursor_mut();
        while cursor.has_next() {
            let value = *cursor.try_next().unwrap();
            cursor.set(value + Index::UP).unwrap();
        }

        for (index, value) in matrix.iter() {
            assert_eq!(*value, index + Index::UP);
        }
    }

    #[test]
    fn test_cursor_mut_set_writes_last_yielded_position() {
        let mut matrix = DenseMatrix::filled(Size::new(1, 3), 0);
        let mut cursor = matrix.cursor_mut();
        assert_eq!(cursor.set(9), Err(MatrixError::NoCurrentElement));

        cursor.try_next().unwrap();
        cursor.try_next().unwrap();
        assert_eq!(cursor.current_index(), Some(Index::new(0, 1)));
        assert_eq!(cursor.next_index(), Some(Index::new(0, 2)));
        cursor.set(9).unwrap();

        assert_eq!(matrix.into_vec(), vec![0, 9, 0]);
    }

    #[test]
    fn test_submatrix_cursor_mut_set_updates_parent() {
        let mut matrix = index_matrix(3, 4);
        let mut submatrix = matrix
            .submatrix_mut(rectangle(1, 1, 3, 4), BoundsPolicy::Local)
            .unwrap();

        let mut cursor = submatrix.cursor_mut();
        while cursor.has_next() {
            let value = *cursor.try_next().unwrap();
            cursor.set(value + Index::UP).unwrap();
        }

        let written: [(isize, isize); 6] = [(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)];
        for index in written.map(Index::from) {
            assert_eq!(submatrix.get(index + Index::UP + Index::LEFT), Ok(&(index + Index::UP)));
        }
        assert_eq!(matrix.get_at(0, 0), Ok(&Index::new(0, 0)));
        assert_eq!(matrix.get_at(1, 1), Ok(&Index::new(0, 1)));
    }

    #[test]
    fn test_cursor_mut_exhausted() {
        let mut matrix = index_matrix(0, 2);
        let mut cursor = matrix.cursor_mut();
        assert_eq!(cursor.next_index(), None);
        assert_eq!(cursor.try_next(), Err(MatrixError::Exhausted));
    }
}
