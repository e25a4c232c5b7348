//! Geometry primitives for matrix coordinates
//!
//! All types here are plain `Copy` values with structural equality.
//! Indices are signed so that bounds-extended views can address cells
//! above or to the left of their own window.

pub mod index;
pub mod rectangle;
pub mod size;

pub use index::{Index, ZERO_INDEX};
pub use rectangle::Rectangle;
pub use size::Size;

/// Convert a dimension to a signed coordinate, saturating at `isize::MAX`
pub(crate) fn saturating_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}
