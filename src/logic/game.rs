use crate::engine::Move;
use crate::logic::board::{Board, BoardCoordinate, Side};
use crate::logic::generator::MoveGenerator;
use crate::logic::rules::{find_move, winner, MoveError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won(Side),
}

/// Turn-by-turn bookkeeping for a driver: the position, whose move it is,
/// whether the game has ended, and the last move for highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Side,
    pub status: GameStatus,
    pub last_move: Option<(BoardCoordinate, BoardCoordinate)>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Side::White,
            status: GameStatus::Playing,
            last_move: None,
        }
    }

    /// Moves available to the side to move; empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status != GameStatus::Playing {
            return Vec::new();
        }
        MoveGenerator::new().generate_moves(&self.board, self.turn)
    }

    /// Applies the legal move matching a from/to selection for the side to
    /// move. Returns whether the moved man was promoted.
    pub fn make_move(
        &mut self,
        from: BoardCoordinate,
        to: BoardCoordinate,
    ) -> Result<bool, MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameOver);
        }
        let mv = find_move(&self.board, from, to, self.turn)?;
        Ok(self.apply(&mv))
    }

    /// Applies a move the search engine produced for the side to move, with
    /// the same turn and status bookkeeping as `make_move`.
    pub fn apply_engine_move(&mut self, mv: &Move) -> bool {
        self.apply(mv)
    }

    fn apply(&mut self, mv: &Move) -> bool {
        let promoted = self.board.apply_move(mv);
        self.last_move = Some((mv.from, mv.to));
        self.turn = self.turn.opposite();
        self.update_status();
        promoted
    }

    // Runs right after a move, so the winner check always speaks for the
    // side about to move.
    fn update_status(&mut self) {
        if let Some(side) = winner(&self.board) {
            self.status = GameStatus::Won(side);
        }
    }
}
