use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A `(row, column)` coordinate
///
/// Supports component-wise addition and scalar multiplication, so unit
/// steps compose: `2 * Index::DOWN + Index::RIGHT == Index::new(2, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Index {
    pub row: isize,
    pub column: isize,
}

/// The origin of every root matrix
pub const ZERO_INDEX: Index = Index::ZERO;

impl Index {
    pub const ZERO: Index = Index::new(0, 0);
    pub const UP: Index = Index::new(-1, 0);
    pub const DOWN: Index = Index::new(1, 0);
    pub const LEFT: Index = Index::new(0, -1);
    pub const RIGHT: Index = Index::new(0, 1);

    pub const fn new(row: isize, column: isize) -> Self {
        Self { row, column }
    }

    /// Component-wise addition returning `None` on overflow
    pub const fn checked_add(self, other: Index) -> Option<Index> {
        match (
            self.row.checked_add(other.row),
            self.column.checked_add(other.column),
        ) {
            (Some(row), Some(column)) => Some(Index::new(row, column)),
            _ => None,
        }
    }

    /// Whether both components are non-negative
    pub const fn is_non_negative(self) -> bool {
        self.row >= 0 && self.column >= 0
    }
}

impl From<(isize, isize)> for Index {
    fn from((row, column): (isize, isize)) -> Self {
        Index::new(row, column)
    }
}

impl Add for Index {
    type Output = Index;

    fn add(self, other: Index) -> Index {
        Index::new(self.row + other.row, self.column + other.column)
    }
}

impl AddAssign for Index {
    fn add_assign(&mut self, other: Index) {
        *self = *self + other;
    }
}

impl Sub for Index {
    type Output = Index;

    fn sub(self, other: Index) -> Index {
        Index::new(self.row - other.row, self.column - other.column)
    }
}

impl SubAssign for Index {
    fn sub_assign(&mut self, other: Index) {
        *self = *self - other;
    }
}

impl Neg for Index {
    type Output = Index;

    fn neg(self) -> Index {
        Index::new(-self.row, -self.column)
    }
}

impl Mul<Index> for isize {
    type Output = Index;

    fn mul(self, index: Index) -> Index {
        Index::new(self * index.row, self * index.column)
    }
}

impl Mul<isize> for Index {
    type Output = Index;

    fn mul(self, factor: isize) -> Index {
        factor * self
    }
}

impl core::fmt::Display for Index {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
