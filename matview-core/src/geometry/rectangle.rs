use super::{Index, Size};

/// A half-open rectangle of indices
///
/// Contains every index `i` with `top_left.row <= i.row < bottom_right.row`
/// and `top_left.column <= i.column < bottom_right.column`. A rectangle
/// whose corners coincide is empty.
///
/// An inverted rectangle, with a `top_left` component greater than the
/// matching `bottom_right` component, is representable but has its size
/// clamped to zero in that dimension and contains no index. Views refuse
/// to be built over one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub top_left: Index,
    pub bottom_right: Index,
}

impl Rectangle {
    pub const fn new(top_left: Index, bottom_right: Index) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// The rectangle `(ZERO_INDEX, (rows, columns))`
    pub fn from_size(size: Size) -> Self {
        Self::new(Index::ZERO, size.to_index())
    }

    /// Extent of the rectangle, clamped to zero in inverted dimensions
    pub fn size(&self) -> Size {
        let extent = |from: isize, to: isize| usize::try_from(to.saturating_sub(from)).unwrap_or(0);
        Size::new(
            extent(self.top_left.row, self.bottom_right.row),
            extent(self.top_left.column, self.bottom_right.column),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    pub fn is_inverted(&self) -> bool {
        self.top_left.row > self.bottom_right.row || self.top_left.column > self.bottom_right.column
    }

    pub fn contains(&self, index: Index) -> bool {
        self.top_left.row <= index.row
            && index.row < self.bottom_right.row
            && self.top_left.column <= index.column
            && index.column < self.bottom_right.column
    }

    /// Shift both corners by `offset`
    pub fn translate(&self, offset: Index) -> Self {
        Self::new(self.top_left + offset, self.bottom_right + offset)
    }
}

impl core::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{} .. {})", self.top_left, self.bottom_right)
    }
}
