//! Error types for matrix access and view construction

use crate::geometry::{Index, Rectangle, Size};

/// Errors that can occur while accessing a matrix or one of its views
///
/// Every variant except [`MatrixError::RaggedRows`] is an index out of
/// bounds condition, see [`MatrixError::is_out_of_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Element access outside the bounds that apply to the matrix
    IndexOutOfBounds {
        /// Requested index, local to the accessed matrix
        index: Index,
        /// Accessible region, in the same local coordinates
        bounds: Rectangle,
    },
    /// Submatrix rectangle not contained in the matrix it was taken from
    RectangleOutOfBounds {
        /// Requested rectangle, local to the parent
        rectangle: Rectangle,
        /// Size of the parent
        size: Size,
    },
    /// Cursor advanced past its last element
    Exhausted,
    /// Cursor written to before any element was yielded
    NoCurrentElement,
    /// Rows of different lengths given to a row-wise constructor
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl MatrixError {
    /// Whether this error is an index out of bounds condition
    pub const fn is_out_of_bounds(&self) -> bool {
        !matches!(self, MatrixError::RaggedRows { .. })
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::IndexOutOfBounds { index, bounds } => {
                write!(f, "Index {index} out of bounds {bounds}")
            }
            MatrixError::RectangleOutOfBounds { rectangle, size } => {
                write!(f, "Rectangle {rectangle} out of bounds for size {size}")
            }
            MatrixError::Exhausted => write!(f, "Cursor is exhausted"),
            MatrixError::NoCurrentElement => write!(f, "Cursor has no current element"),
            MatrixError::RaggedRows {
                row,
                expected,
                found,
            } => write!(f, "Row {row} has {found} columns, expected {expected}"),
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_classification() {
        let access = MatrixError::IndexOutOfBounds {
            index: Index::new(2, 0),
            bounds: Rectangle::from_size(Size::new(1, 1)),
        };
        let window = MatrixError::RectangleOutOfBounds {
            rectangle: Rectangle::new(Index::new(-1, 0), Index::new(1, 1)),
            size: Size::new(1, 1),
        };

        assert!(access.is_out_of_bounds());
        assert!(window.is_out_of_bounds());
        assert!(MatrixError::Exhausted.is_out_of_bounds());
        assert!(MatrixError::NoCurrentElement.is_out_of_bounds());
        assert!(!MatrixError::RaggedRows {
            row: 1,
            expected: 2,
            found: 3
        }
        .is_out_of_bounds());
    }
}
