use std::io;

use itertools::Itertools;
use log::{debug, info, warn};

use crate::{board::board::Board, types::square::Square};

/// Text-mode loop driving one Board for the lifetime of the process.
///
/// Commands:
///   move R C R C   relocate the piece at (R,C) to the second pair
///   moves R C      list candidate destinations for the piece at (R,C)
///   d              reprint the board
///   quit           exit
pub fn main_loop() {
    let mut board = Board::startpos();
    println!("{board}");

    let mut buffer = String::new();
    loop {
        buffer.clear();
        match io::stdin().read_line(&mut buffer) {
            Ok(0) => return,
            Ok(_) => (),
            Err(e) => {
                warn!("stdin read failed: {e}");
                return;
            }
        }
        let line = buffer.trim();

        if line.starts_with("quit") {
            return;
        } else if line == "d" {
            println!("{board}");
        } else if line.starts_with("moves") {
            match parse_squares::<1>(line) {
                Some([sq]) => match board.valid_moves(sq) {
                    Ok(moves) => {
                        debug!("{} candidate destinations from {sq}", moves.len());
                        println!("{}", moves.iter().map(Square::to_string).join(" "));
                    }
                    Err(e) => println!("Error: {e}"),
                },
                None => println!("Invalid input format. Use: moves row col"),
            }
        } else if line.starts_with("move") {
            match parse_squares::<2>(line) {
                Some([from, to]) => match board.move_piece(from, to) {
                    Ok(()) => {
                        info!("moved {from} -> {to}");
                        println!("{board}");
                    }
                    Err(e) => println!("Error: {e}"),
                },
                None => {
                    println!("Invalid input format. Use: move from_row from_col to_row to_col")
                }
            }
        } else if !line.is_empty() {
            println!("Command not handled: {line}");
        }
    }
}

/// Reads `N` squares (2N integers) from everything after the command word.
/// Returns `None` on the wrong count or non-integer tokens; range checking is
/// the board's job.
fn parse_squares<const N: usize>(line: &str) -> Option<[Square; N]> {
    let coords: Vec<u8> = line
        .split_whitespace()
        .skip(1)
        .map(|token| token.parse().ok())
        .collect::<Option<_>>()?;
    if coords.len() != N * 2 {
        return None;
    }
    let squares: Vec<Square> = coords
        .into_iter()
        .tuples()
        .map(|(row, col)| Square::new(row, col))
        .collect();
    squares.try_into().ok()
}
