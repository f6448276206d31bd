use arrayvec::ArrayVec;

use std::ops::Index;

use crate::types::square::Square;

/// An unobstructed queen reaches at most 27 squares, so no piece's
/// destination list can outgrow this.
pub const MAX_LEN: usize = 27;

/// Ordered list of candidate destination squares for one piece.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveList {
    arr: ArrayVec<Square, MAX_LEN>,
}

impl MoveList {
    pub fn push(&mut self, sq: Square) {
        self.arr.push(sq);
    }

    pub fn len(&self) -> usize {
        self.arr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arr.is_empty()
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.arr.contains(&sq)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Square> {
        self.arr.iter()
    }

    pub fn as_slice(&self) -> &[Square] {
        &self.arr
    }
}

impl Index<usize> for MoveList {
    type Output = Square;

    fn index(&self, index: usize) -> &Self::Output {
        &self.arr[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Square;
    type IntoIter = core::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.arr.iter()
    }
}

