use super::{saturating_isize, Index};

/// Dimensions of a matrix or view
///
/// Either dimension may be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub rows: usize,
    pub columns: usize,
}

impl Size {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of cells, saturating at `usize::MAX`
    pub const fn area(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// True when either dimension is zero
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// The exclusive bottom-right corner of a rectangle of this size
    /// anchored at the origin
    pub fn to_index(&self) -> Index {
        Index::new(saturating_isize(self.rows), saturating_isize(self.columns))
    }

    /// Whether `index` lies in `[0, rows) x [0, columns)`
    pub fn contains(&self, index: Index) -> bool {
        self.position(index).is_some()
    }

    /// Unsigned `(row, column)` of `index` when it lies inside this size
    pub fn position(&self, index: Index) -> Option<(usize, usize)> {
        let row = usize::try_from(index.row).ok()?;
        let column = usize::try_from(index.column).ok()?;
        (row < self.rows && column < self.columns).then_some((row, column))
    }
}

impl core::fmt::Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}
