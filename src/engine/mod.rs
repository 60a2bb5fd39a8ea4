use crate::logic::board::{Board, BoardCoordinate};
use serde::{Deserialize, Serialize};

pub mod config;
pub mod eval;
pub mod search;


/// One complete turn: a step, or a capture chain collapsed into a single
/// from/to transition with every captured square recorded in jump order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: BoardCoordinate,
    pub to: BoardCoordinate,
    pub captured: Vec<BoardCoordinate>,
}

impl Move {
    /// A simple step with no captures.
    #[must_use]
    pub const fn step(from: BoardCoordinate, to: BoardCoordinate) -> Self {
        Self {
            from,
            to,
            captured: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
    pub time_ms: u64,
}

pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> i32;
}

pub trait Searcher {
    /// Picks a move for the automated side (Red) at the given search depth.
    /// `None` means Red has no legal move: the game is over, not an error.
    fn search(&mut self, board: &Board, depth: u8) -> Option<(Move, SearchStats)>;
}
