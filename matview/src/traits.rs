//! Capability traits shared by root matrices and views
//!
//! [`Matrix`] is the read-only capability set and [`MutableMatrix`] extends
//! it with writes. Both are implemented by [`DenseMatrix`](crate::DenseMatrix)
//! and by the view types, so code written against them behaves the same no
//! matter how deeply a view is nested.

use matview_core::{BoundsPolicy, Index, Rectangle, Result, Size};

use crate::cursor::{Cursor, CursorMut};
use crate::view::{Submatrix, SubmatrixMut};

/// Read access to a two-dimensional matrix or view
pub trait Matrix {
    /// The element type stored in this matrix
    type Element;

    /// Number of rows and columns addressable through local bounds
    fn size(&self) -> Size;

    /// Rectangle covered by this matrix in root coordinates
    ///
    /// Always anchored at the origin for a root matrix. For views it is
    /// expressed relative to the topmost root, never the immediate parent.
    fn rectangle(&self) -> Rectangle;

    /// Get the element at a local index
    fn get(&self, index: Index) -> Result<&Self::Element>;

    fn get_at(&self, row: isize, column: isize) -> Result<&Self::Element> {
        self.get(Index::new(row, column))
    }

    /// Whether [`Matrix::get`] would succeed for `index`
    fn contains(&self, index: Index) -> bool {
        self.get(index).is_ok()
    }

    /// Create a read-only view over `rectangle`
    ///
    /// The rectangle is relative to this matrix and must fit inside its
    /// size, whatever bounds policy this matrix itself uses.
    fn submatrix(
        &self,
        rectangle: Rectangle,
        policy: BoundsPolicy,
    ) -> Result<Submatrix<'_, Self::Element>>;

    /// Row-major cursor over the local indices of this matrix
    fn cursor(&self) -> Cursor<'_, Self>
    where
        Self: Sized,
    {
        Cursor::new(self)
    }
}

/// Write access on top of [`Matrix`]
pub trait MutableMatrix: Matrix {
    /// Get a mutable reference to the element at a local index
    fn get_mut(&mut self, index: Index) -> Result<&mut Self::Element>;

    /// Overwrite the element at a local index
    fn set(&mut self, index: Index, value: Self::Element) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    fn set_at(&mut self, row: isize, column: isize, value: Self::Element) -> Result<()> {
        self.set(Index::new(row, column), value)
    }

    /// Overwrite the element at a local index, returning the old value
    fn replace(&mut self, index: Index, value: Self::Element) -> Result<Self::Element> {
        Ok(core::mem::replace(self.get_mut(index)?, value))
    }

    /// Create a writable view over `rectangle`, relative to this matrix
    fn submatrix_mut(
        &mut self,
        rectangle: Rectangle,
        policy: BoundsPolicy,
    ) -> Result<SubmatrixMut<'_, Self::Element>>;

    /// Row-major cursor that can overwrite the elements it yields
    fn cursor_mut(&mut self) -> CursorMut<'_, Self>
    where
        Self: Sized,
    {
        CursorMut::new(self)
    }
}
