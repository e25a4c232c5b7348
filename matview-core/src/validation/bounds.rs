//! Access and window bounds checks
//!
//! Views keep their rectangle in root coordinates, so every check here
//! takes the root size alongside the view's window and needs no knowledge
//! of how deeply the view is nested.

use crate::{Index, MatrixError, Rectangle, Size};

/// Which bounds a view checks element access against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundsPolicy {
    /// Access is limited to the view's own window
    #[default]
    Local,
    /// Access may leave the window but must stay inside the root matrix
    Extended,
}

impl BoundsPolicy {
    pub const fn is_extended(self) -> bool {
        matches!(self, BoundsPolicy::Extended)
    }
}

impl From<bool> for BoundsPolicy {
    fn from(bounds_extended: bool) -> Self {
        if bounds_extended {
            BoundsPolicy::Extended
        } else {
            BoundsPolicy::Local
        }
    }
}

/// Validate an access on a root matrix of the given size
///
/// Returns the unsigned `(row, column)` position on success.
pub fn check_access(index: Index, size: Size) -> Result<(usize, usize), MatrixError> {
    size.position(index)
        .ok_or(MatrixError::IndexOutOfBounds {
            index,
            bounds: Rectangle::from_size(size),
        })
}

/// Validate a submatrix rectangle against the size of its parent
///
/// The rectangle is relative to the parent. It must start at a
/// non-negative index, must not be inverted and must end within `size`.
/// The parent's bounds policy plays no part here.
pub fn check_window(rectangle: Rectangle, size: Size) -> Result<(), MatrixError> {
    let limit = size.to_index();
    let fits = rectangle.top_left.is_non_negative()
        && !rectangle.is_inverted()
        && rectangle.bottom_right.row <= limit.row
        && rectangle.bottom_right.column <= limit.column;

    if !fits {
        return Err(MatrixError::RectangleOutOfBounds { rectangle, size });
    }
    Ok(())
}

/// Translate a view-local index into a position in the root matrix
///
/// `window` is the view's rectangle in root coordinates and `root` the
/// size of the root backing it. With [`BoundsPolicy::Local`] the index
/// must fall inside the window; with [`BoundsPolicy::Extended`] it only
/// needs to land inside the root. Errors report bounds in the view's local
/// coordinates.
pub fn resolve(
    index: Index,
    window: Rectangle,
    root: Size,
    policy: BoundsPolicy,
) -> Result<(usize, usize), MatrixError> {
    let allowed = match policy {
        BoundsPolicy::Local => window.size().contains(index),
        BoundsPolicy::Extended => true,
    };

    let position = index
        .checked_add(window.top_left)
        .and_then(|absolute| root.position(absolute));

    match position {
        Some(position) if allowed => Ok(position),
        _ => Err(MatrixError::IndexOutOfBounds {
            index,
            bounds: accessible_bounds(window, root, policy),
        }),
    }
}

/// The region a view may access, in its local coordinates
fn accessible_bounds(window: Rectangle, root: Size, policy: BoundsPolicy) -> Rectangle {
    match policy {
        BoundsPolicy::Local => Rectangle::from_size(window.size()),
        BoundsPolicy::Extended => Rectangle::from_size(root).translate(-window.top_left),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(top: isize, left: isize, bottom: isize, right: isize) -> Rectangle {
        Rectangle::new(Index::new(top, left), Index::new(bottom, right))
    }

    #[test]
    fn test_check_access() {
        let size = Size::new(2, 3);
        assert_eq!(check_access(Index::new(1, 2), size), Ok((1, 2)));
        assert_eq!(
            check_access(Index::new(2, 0), size),
            Err(MatrixError::IndexOutOfBounds {
                index: Index::new(2, 0),
                bounds: window(0, 0, 2, 3),
            })
        );
        assert!(check_access(Index::new(0, -1), size).is_err());
        assert!(check_access(Index::ZERO, Size::new(0, 0)).is_err());
    }

    #[test]
    fn test_check_window() {
        let size = Size::new(2, 3);
        assert_eq!(check_window(window(0, 0, 2, 3), size), Ok(()));
        assert_eq!(check_window(window(0, 0, 0, 0), size), Ok(()));
        assert_eq!(check_window(window(0, 0, 0, 0), Size::new(0, 0)), Ok(()));
        assert!(check_window(window(-1, 0, 2, 3), size).is_err());
        assert!(check_window(window(0, -1, 2, 3), size).is_err());
        assert!(check_window(window(0, 0, 3, 3), size).is_err());
        assert!(check_window(window(0, 0, 2, 4), size).is_err());
    }

    #[test]
    fn test_check_window_rejects_inverted() {
        assert_eq!(
            check_window(window(2, 2, 1, 1), Size::new(3, 3)),
            Err(MatrixError::RectangleOutOfBounds {
                rectangle: window(2, 2, 1, 1),
                size: Size::new(3, 3),
            })
        );
    }

    #[test]
    fn test_resolve_local() {
        let root = Size::new(3, 3);
        let view = window(1, 1, 2, 2);
        assert_eq!(resolve(Index::ZERO, view, root, BoundsPolicy::Local), Ok((1, 1)));

        let outside: [(isize, isize); 6] = [(-1, -1), (-1, 0), (0, -1), (1, 1), (1, 0), (0, 1)];
        for index in outside {
            assert_eq!(
                resolve(Index::from(index), view, root, BoundsPolicy::Local),
                Err(MatrixError::IndexOutOfBounds {
                    index: Index::from(index),
                    bounds: window(0, 0, 1, 1),
                })
            );
        }
    }

    #[test]
    fn test_resolve_extended() {
        let root = Size::new(3, 3);
        let view = window(1, 1, 2, 2);
        let extended = BoundsPolicy::Extended;
        assert_eq!(resolve(Index::new(-1, -1), view, root, extended), Ok((0, 0)));
        assert_eq!(resolve(Index::new(1, 1), view, root, extended), Ok((2, 2)));

        let outside: [(isize, isize); 4] = [(-2, 0), (0, -2), (2, 0), (0, 2)];
        for index in outside {
            assert_eq!(
                resolve(Index::from(index), view, root, extended),
                Err(MatrixError::IndexOutOfBounds {
                    index: Index::from(index),
                    bounds: window(-1, -1, 2, 2),
                })
            );
        }
    }

    #[test]
    fn test_resolve_overflow_is_out_of_bounds() {
        let view = window(1, 1, 2, 2);
        let index = Index::new(isize::MAX, 0);
        assert!(resolve(index, view, Size::new(3, 3), BoundsPolicy::Extended).is_err());
    }

    #[test]
    fn test_policy_from_flag() {
        assert_eq!(BoundsPolicy::from(true), BoundsPolicy::Extended);
        assert_eq!(BoundsPolicy::from(false), BoundsPolicy::Local);
        assert_eq!(BoundsPolicy::default(), BoundsPolicy::Local);
        assert!(BoundsPolicy::Extended.is_extended());
    }
}
