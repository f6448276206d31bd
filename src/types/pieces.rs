use crate::impl_index;
use std::ops::{self, Index, IndexMut};

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

impl_index!(Color);
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

#[macro_export]
macro_rules! impl_index {
    ($enum_name:ident) => {
        impl<T, const N: usize> Index<$enum_name> for [T; N] {
            type Output = T;

            fn index(&self, index: $enum_name) -> &Self::Output {
                &self[index as usize]
            }
        }

        impl<T, const N: usize> IndexMut<$enum_name> for [T; N] {
            fn index_mut(&mut self, index: $enum_name) -> &mut Self::Output {
                &mut self[index as usize]
            }
        }
    };
}

impl Color {
    /// Row delta a pawn of this color advances by. White advances toward
    /// row 0, black toward row 7.
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Starting row of this color's pawns, enabling the double-step.
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl ops::Not for Color {
    type Output = Color;
    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

pub const NUM_PIECES: usize = 6;

impl_index!(PieceName);
#[derive(Debug, EnumIter, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceName {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceName {
    pub const fn letter(self) -> char {
        match self {
            PieceName::Pawn => 'P',
            PieceName::Knight => 'N',
            PieceName::Bishop => 'B',
            PieceName::Rook => 'R',
            PieceName::Queen => 'Q',
            PieceName::King => 'K',
        }
    }
}

#[derive(Eq, Copy, Clone, PartialEq, Debug, Hash)]
pub struct Piece {
    pub name: PieceName,
    pub color: Color,
}

impl Piece {
    pub fn new(name: PieceName, color: Color) -> Self {
        Self { name, color }
    }

    /// Two-character display code, e.g. `WP` or `BK`.
    pub fn code(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.color.letter());
        s.push(self.name.letter());
        s
    }
}

/// Display handles for the presentation layer, one per (color, kind).
///
/// The core never reads these; they are handed in at board construction and
/// handed back out verbatim when a frontend asks what to draw for a piece.
#[derive(Clone, Debug)]
pub struct AssetCatalog {
    handles: [[String; NUM_PIECES]; 2],
}

impl AssetCatalog {
    pub fn new(mut supply: impl FnMut(PieceName, Color) -> String) -> Self {
        let mut handles: [[String; NUM_PIECES]; 2] =
            std::array::from_fn(|_| std::array::from_fn(|_| String::new()));
        for color in Color::iter() {
            for name in PieceName::iter() {
                handles[color][name] = supply(name, color);
            }
        }
        Self { handles }
    }

    pub fn get(&self, piece: Piece) -> &str {
        &self.handles[piece.color][piece.name]
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new(|name, color| {
            format!(
                "assets/generic/{}-{}.png",
                format!("{name:?}").to_lowercase(),
                color.letter().to_ascii_lowercase()
            )
        })
    }
}
