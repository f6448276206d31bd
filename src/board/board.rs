use core::fmt;
use std::error::Error;

use crate::{
    moves::{movegen, movelist::MoveList},
    types::{
        pieces::{AssetCatalog, Color, Piece, PieceName},
        square::{Square, BOARD_DIM, NUM_SQUARES},
    },
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A square's row or column fell outside [0,8).
    OutOfBounds(Square),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(sq) => write!(f, "square {} is off the board", sq),
        }
    }
}

impl Error for BoardError {}

/// Back-rank piece order, queenside to kingside.
const BACK_RANK: [PieceName; 8] = [
    PieceName::Rook,
    PieceName::Knight,
    PieceName::Bishop,
    PieceName::Queen,
    PieceName::King,
    PieceName::Bishop,
    PieceName::Knight,
    PieceName::Rook,
];

const PLACEHOLDER: &str = "..";

/// The 8×8 grid. Row 0 holds black's back rank, row 7 white's. One instance
/// owns the grid for a whole session; every mutation goes through
/// [`Board::move_piece`] or the setup primitives.
///
/// Deliberately absent: turn tracking, king-count invariants, capture
/// bookkeeping, and any legality check at move-application time.
#[derive(Clone, Debug)]
pub struct Board {
    grid: [Option<Piece>; NUM_SQUARES],
    assets: AssetCatalog,
}

impl Default for Board {
    fn default() -> Self {
        Board {
            grid: [None; NUM_SQUARES],
            assets: AssetCatalog::default(),
        }
    }
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting position with the default asset catalog.
    pub fn startpos() -> Self {
        Self::with_assets(AssetCatalog::default())
    }

    /// Standard starting position with caller-supplied display handles. Each
    /// cell gets its own independently owned piece value.
    pub fn with_assets(assets: AssetCatalog) -> Self {
        let mut board = Board {
            grid: [None; NUM_SQUARES],
            assets,
        };
        for (col, &name) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.grid[Square::new(0, col)] = Some(Piece::new(name, Color::Black));
            board.grid[Square::new(1, col)] = Some(Piece::new(PieceName::Pawn, Color::Black));
            board.grid[Square::new(6, col)] = Some(Piece::new(PieceName::Pawn, Color::White));
            board.grid[Square::new(7, col)] = Some(Piece::new(name, Color::White));
        }
        board
    }

    fn check(sq: Square) -> Result<Square, BoardError> {
        if sq.is_valid() {
            Ok(sq)
        } else {
            Err(BoardError::OutOfBounds(sq))
        }
    }

    /// The piece on `sq`, if any. An invalid square holds nothing.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if sq.is_valid() {
            self.grid[sq]
        } else {
            None
        }
    }

    pub fn place_piece(&mut self, piece: Piece, sq: Square) -> Result<(), BoardError> {
        self.grid[Self::check(sq)?] = Some(piece);
        Ok(())
    }

    pub fn remove_piece(&mut self, sq: Square) -> Result<(), BoardError> {
        self.grid[Self::check(sq)?] = None;
        Ok(())
    }

    /// Unconditionally relocates whatever occupies `from` into `to`.
    ///
    /// Bounds are guarded here at the public entry point; nothing else is.
    /// No occupancy or legality check: a capture drops the overwritten piece,
    /// and moving from an empty square writes emptiness into `to`, erasing
    /// any piece there. Callers wanting stricter semantics must check
    /// occupancy themselves.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), BoardError> {
        Self::check(from)?;
        Self::check(to)?;
        self.relocate(from, to);
        Ok(())
    }

    /// Raw grid mutation, no checks of any kind.
    fn relocate(&mut self, from: Square, to: Square) {
        self.grid[to] = self.grid[from];
        self.grid[from] = None;
    }

    /// Candidate destinations for the piece on `position`; empty when the
    /// cell is unoccupied. No turn or check-safety filtering.
    pub fn valid_moves(&self, position: Square) -> Result<MoveList, BoardError> {
        Self::check(position)?;
        Ok(match self.grid[position] {
            Some(piece) => movegen::valid_moves(piece, position, self),
            None => MoveList::default(),
        })
    }

    /// Structured snapshot of the grid for the presentation layer.
    pub fn describe(&self) -> [[Option<Piece>; 8]; 8] {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| self.grid[Square::new(row as u8, col as u8)])
        })
    }

    /// The opaque display handle supplied for this piece at construction.
    pub fn asset(&self, piece: Piece) -> &str {
        self.assets.get(piece)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..BOARD_DIM {
            write!(f, "{row} |")?;
            for col in 0..BOARD_DIM {
                match self.grid[Square::new(row, col)] {
                    Some(piece) => write!(f, " {}", piece.code())?,
                    None => write!(f, " {PLACEHOLDER}")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "    0  1  2  3  4  5  6  7")
    }
}
