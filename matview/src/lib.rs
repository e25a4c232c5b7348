//! matview - Dense matrices with zero-copy views
//!
//! This library provides an owning row-major matrix and rectangular views
//! over it. Views can be nested to any depth, share the root's storage, and
//! can optionally read and write past their own window up to the bounds of
//! the root matrix.
//!
//! ## Architecture
//!
//! - **matview-core**: geometry, errors, bounds policies and traversal
//!   (no storage, `no_std`)
//! - **matview**: the [`Matrix`] and [`MutableMatrix`] capability traits,
//!   the [`DenseMatrix`] root, the [`Submatrix`] and [`SubmatrixMut`]
//!   views, and the [`Cursor`] and [`CursorMut`] traversals
//!
//! ## Quick Start
//!
//! ```rust
//! use matview::{BoundsPolicy, DenseMatrix, Index, Matrix, MutableMatrix, Rectangle, Size};
//!
//! fn example() -> matview::Result<()> {
//!     let mut board = DenseMatrix::from_fn(Size::new(3, 4), |index| index.row * 10 + index.column);
//!
//!     // A 2x2 window anchored at (1, 1)
//!     let window = Rectangle::new(Index::new(1, 1), Index::new(3, 3));
//!     let mut view = board.submatrix_mut(window, BoundsPolicy::Local)?;
//!     assert_eq!(view.get_at(0, 0)?, &11);
//!     view.set_at(1, 1, -1)?;
//!
//!     // Nested views report their rectangle in root coordinates
//!     let inner = view.submatrix(
//!         Rectangle::new(Index::new(1, 1), Index::new(2, 2)),
//!         BoundsPolicy::Extended,
//!     )?;
//!     assert_eq!(inner.rectangle(), Rectangle::new(Index::new(2, 2), Index::new(3, 3)));
//!     assert_eq!(inner.get_at(0, 0)?, &-1);
//!     assert_eq!(inner.get_at(-2, -2)?, &0);
//!
//!     assert_eq!(board[Index::new(2, 2)], -1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Zero-copy views**: every view borrows the root directly, so access
//!   costs the same at any nesting depth
//! - **Bounds policies**: [`BoundsPolicy::Local`] confines a view to its
//!   window, [`BoundsPolicy::Extended`] lets it reach the whole root
//! - **Cursors**: row-major traversal with in-place, bounds-checked writes

// Re-export core definitions
pub use matview_core::{
    // Geometry
    Index, Rectangle, Size, ZERO_INDEX,
    // Bounds
    check_access, check_window, resolve, BoundsPolicy,
    // Traversal
    RowMajor,
    // Error handling
    MatrixError, Result,
};

// Implementation modules
pub mod cursor;
pub mod dense;
pub mod traits;
pub mod view;

mod display;

// Public exports
pub use cursor::{Cursor, CursorMut};
pub use dense::DenseMatrix;
pub use traits::{Matrix, MutableMatrix};
pub use view::{Submatrix, SubmatrixMut};
