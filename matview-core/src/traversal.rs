//! Row-major traversal state machine
//!
//! A [`RowMajor`] walks every index of a [`Size`] starting at the origin,
//! row 0 left to right, then row 1, and so on. It is either active, with a
//! next index to hand out, or exhausted. Exhaustion is terminal.

use crate::{Index, Size};

/// Row-major walk over the local indices of a matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMajor {
    size: Size,
    next: Option<Index>,
    current: Option<Index>,
}

impl RowMajor {
    /// Start a walk over `size`; empty sizes start exhausted
    pub fn new(size: Size) -> Self {
        Self {
            size,
            next: (!size.is_empty()).then_some(Index::ZERO),
            current: None,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// The index the next call to [`RowMajor::advance`] will return
    pub fn peek(&self) -> Option<Index> {
        self.next
    }

    /// The index most recently returned by [`RowMajor::advance`]
    pub fn current(&self) -> Option<Index> {
        self.current
    }

    /// Hand out the next index and move past it
    pub fn advance(&mut self) -> Option<Index> {
        let index = self.next?;
        let limit = self.size.to_index();

        let mut following = index + Index::RIGHT;
        if following.column >= limit.column {
            following = Index::new(index.row + 1, 0);
        }

        self.next = (following.row < limit.row).then_some(following);
        self.current = Some(index);
        Some(index)
    }

    /// Number of indices left to hand out
    pub fn remaining(&self) -> usize {
        match self.next.and_then(|index| self.size.position(index)) {
            Some((row, column)) => (self.size.rows - row) * self.size.columns - column,
            None => 0,
        }
    }
}

impl Iterator for RowMajor {
    type Item = Index;

    fn next(&mut self) -> Option<Index> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowMajor {}

impl core::iter::FusedIterator for RowMajor {}
