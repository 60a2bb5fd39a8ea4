use crate::engine::Move;
use crate::logic::board::{Board, BoardCoordinate, Side};
use crate::logic::generator::MoveGenerator;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    NoPieceAtSource,
    NotYourTurn,
    IllegalMove,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::GameOver => "the game is already over",
            Self::NoPieceAtSource => "no piece on the selected square",
            Self::NotYourTurn => "the selected piece belongs to the other side",
            Self::IllegalMove => "the selected destination is not a legal move",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MoveError {}

/// Winner of the position, if any. A side with no pieces left or no legal
/// moves has lost; White's condition is checked first, then Red's,
/// independent of whose turn it is. Callers interpret the result relative to
/// the side about to move.
#[must_use]
pub fn winner(board: &Board) -> Option<Side> {
    let generator = MoveGenerator::new();
    let count = board.piece_count();

    if count.total(Side::White) == 0 || !generator.has_legal_moves(board, Side::White) {
        return Some(Side::Red);
    }
    if count.total(Side::Red) == 0 || !generator.has_legal_moves(board, Side::Red) {
        return Some(Side::White);
    }
    None
}

/// Resolves a driver's from/to selection against the legal moves of `side`,
/// yielding the full move, capture list included, or a typed rejection.
/// Because the result always comes out of `generate_moves` for this exact
/// board, it is safe to hand straight to `Board::apply_move`.
pub fn find_move(
    board: &Board,
    from: BoardCoordinate,
    to: BoardCoordinate,
    side: Side,
) -> Result<Move, MoveError> {
    let piece_side = board.get(from).side().ok_or(MoveError::NoPieceAtSource)?;
    if piece_side != side {
        return Err(MoveError::NotYourTurn);
    }

    MoveGenerator::new()
        .generate_moves(board, side)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to)
        .ok_or(MoveError::IllegalMove)
}
