pub mod pieces;
pub mod square;
