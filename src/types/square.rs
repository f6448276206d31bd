use core::fmt;
use core::ops::{Index, IndexMut};

/// A (row, column) board coordinate. Row 0 is black's back rank, row 7
/// white's. Both axes must lie in [0,8) for the square to be valid; callers
/// are free to build an invalid square and must check with [`Square::is_valid`]
/// before indexing a grid with it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

pub const BOARD_DIM: u8 = 8;
pub const NUM_SQUARES: usize = 64;

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn is_valid(self) -> bool {
        self.row < BOARD_DIM && self.col < BOARD_DIM
    }

    /// Applies a signed (row, col) delta, returning `None` if the result
    /// leaves the board.
    pub fn checked_offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if (0..BOARD_DIM as i16).contains(&row) && (0..BOARD_DIM as i16).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Flattened grid index. Only meaningful for valid squares.
    pub fn idx(self) -> usize {
        self.row as usize * BOARD_DIM as usize + self.col as usize
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..BOARD_DIM).flat_map(|row| (0..BOARD_DIM).map(move |col| Self::new(row, col)))
    }
}

impl<T, const N: usize> Index<Square> for [T; N] {
    type Output = T;

    fn index(&self, index: Square) -> &Self::Output {
        &self[index.idx()]
    }
}

impl<T, const N: usize> IndexMut<Square> for [T; N] {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self[index.idx()]
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
