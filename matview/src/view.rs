//! Zero-copy views over a dense root matrix
//!
//! A view never owns elements and never points at the view it was created
//! from. It borrows the topmost [`DenseMatrix`] directly and stores its own
//! rectangle in that root's coordinates, computed once at construction. An
//! access is therefore a single translation plus one bounds check, whatever
//! the nesting depth, and a bounds-extended view can reach every cell of the
//! root rather than only its immediate parent.
//!
//! Construction is checked against the immediate parent's size: a child
//! rectangle is always relative to the view it is taken from and must fit
//! inside that view's own window, even when the parent is bounds-extended.

use log::{debug, trace};
use matview_core::{check_window, resolve, BoundsPolicy, Index, Rectangle, Result, RowMajor, Size};

use crate::dense::DenseMatrix;
use crate::traits::{Matrix, MutableMatrix};

/// Translate a parent-relative rectangle into root coordinates
fn child_window(parent: Rectangle, rectangle: Rectangle) -> Result<Rectangle> {
    check_window(rectangle, parent.size())
        .inspect_err(|err| debug!("Rejected submatrix of view {parent}: {err}"))?;
    Ok(rectangle.translate(parent.top_left))
}

/// Read-only window into a [`DenseMatrix`]
pub struct Submatrix<'a, T> {
    root: &'a DenseMatrix<T>,
    rectangle: Rectangle,
    policy: BoundsPolicy,
}

impl<'a, T> Submatrix<'a, T> {
    pub(crate) fn new(root: &'a DenseMatrix<T>, rectangle: Rectangle, policy: BoundsPolicy) -> Self {
        trace!("Submatrix over {rectangle} of root {} ({policy:?})", root.size());
        Self {
            root,
            rectangle,
            policy,
        }
    }

    pub fn policy(&self) -> BoundsPolicy {
        self.policy
    }

    /// The root matrix backing this view
    pub fn root(&self) -> &'a DenseMatrix<T> {
        self.root
    }

    /// Like [`Matrix::submatrix`], but the child borrows the root for the
    /// full lifetime `'a` instead of borrowing this view
    pub fn narrow(&self, rectangle: Rectangle, policy: BoundsPolicy) -> Result<Submatrix<'a, T>> {
        let absolute = child_window(self.rectangle, rectangle)?;
        Ok(Submatrix::new(self.root, absolute, policy))
    }

    /// Like [`Matrix::get`], but tied to the root borrow
    pub fn get_ref(&self, index: Index) -> Result<&'a T> {
        let position = resolve(index, self.rectangle, self.root.size(), self.policy)?;
        Ok(self.root.cell(position))
    }

    /// Iterate over `(local index, element)` pairs of the window
    pub fn iter(&self) -> impl Iterator<Item = (Index, &'a T)> + 'a {
        let view = *self;
        RowMajor::new(view.size())
            .filter_map(move |index| view.get_ref(index).ok().map(|value| (index, value)))
    }
}

impl<T> Clone for Submatrix<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Submatrix<'_, T> {}

impl<T> std::fmt::Debug for Submatrix<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submatrix")
            .field("rectangle", &self.rectangle)
            .field("root_size", &self.root.size())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<T> Matrix for Submatrix<'_, T> {
    type Element = T;

    fn size(&self) -> Size {
        self.rectangle.size()
    }

    fn rectangle(&self) -> Rectangle {
        self.rectangle
    }

    fn get(&self, index: Index) -> Result<&T> {
        self.get_ref(index)
    }

    fn submatrix(&self, rectangle: Rectangle, policy: BoundsPolicy) -> Result<Submatrix<'_, T>> {
        self.narrow(rectangle, policy)
    }
}

/// Writable window into a [`DenseMatrix`]
///
/// Holds the root exclusively. Nested writable views reborrow it, and a
/// read-only view of the same window is available through
/// [`SubmatrixMut::as_view`].
pub struct SubmatrixMut<'a, T> {
    root: &'a mut DenseMatrix<T>,
    rectangle: Rectangle,
    policy: BoundsPolicy,
}

impl<'a, T> SubmatrixMut<'a, T> {
    pub(crate) fn new(
        root: &'a mut DenseMatrix<T>,
        rectangle: Rectangle,
        policy: BoundsPolicy,
    ) -> Self {
        trace!("SubmatrixMut over {rectangle} of root {} ({policy:?})", root.size());
        Self {
            root,
            rectangle,
            policy,
        }
    }

    pub fn policy(&self) -> BoundsPolicy {
        self.policy
    }

    /// Read-only view of the same window with the same policy
    pub fn as_view(&self) -> Submatrix<'_, T> {
        Submatrix {
            root: &*self.root,
            rectangle: self.rectangle,
            policy: self.policy,
        }
    }

    /// Give up write access, keeping the root borrow for `'a`
    pub fn into_view(self) -> Submatrix<'a, T> {
        Submatrix {
            root: self.root,
            rectangle: self.rectangle,
            policy: self.policy,
        }
    }

    /// Like [`MutableMatrix::submatrix_mut`], but consumes this view so the
    /// child keeps the root borrow for `'a`
    pub fn into_narrow(
        self,
        rectangle: Rectangle,
        policy: BoundsPolicy,
    ) -> Result<SubmatrixMut<'a, T>> {
        let absolute = child_window(self.rectangle, rectangle)?;
        Ok(SubmatrixMut::new(self.root, absolute, policy))
    }

    /// Iterate over `(local index, element)` pairs of the window
    pub fn iter(&self) -> impl Iterator<Item = (Index, &T)> + '_ {
        self.as_view().iter()
    }

    fn position(&self, index: Index) -> Result<(usize, usize)> {
        resolve(index, self.rectangle, self.root.size(), self.policy)
    }
}

impl<T> std::fmt::Debug for SubmatrixMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmatrixMut")
            .field("rectangle", &self.rectangle)
            .field("root_size", &self.root.size())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<T> Matrix for SubmatrixMut<'_, T> {
    type Element = T;

    fn size(&self) -> Size {
        self.rectangle.size()
    }

    fn rectangle(&self) -> Rectangle {
        self.rectangle
    }

    fn get(&self, index: Index) -> Result<&T> {
        let position = self.position(index)?;
        Ok(self.root.cell(position))
    }

    fn submatrix(&self, rectangle: Rectangle, policy: BoundsPolicy) -> Result<Submatrix<'_, T>> {
        let absolute = child_window(self.rectangle, rectangle)?;
        Ok(Submatrix::new(&*self.root, absolute, policy))
    }
}

impl<T> MutableMatrix for SubmatrixMut<'_, T> {
    fn get_mut(&mut self, index: Index) -> Result<&mut T> {
        let position = self.position(index)?;
        Ok(self.root.cell_mut(position))
    }

    fn submatrix_mut(
        &mut self,
        rectangle: Rectangle,
        policy: BoundsPolicy,
    ) -> Result<SubmatrixMut<'_, T>> {
        let absolute = child_window(self.rectangle, rectangle)?;
        Ok(SubmatrixMut::new(&mut *self.root, absolute, policy))
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Submatrix<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::display::write_grid(self, f)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SubmatrixMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::display::write_grid(self, f)
    }
}
