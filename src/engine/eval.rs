use crate::engine::config::EngineConfig;
use crate::engine::Evaluator;
use crate::logic::board::Board;
use std::sync::Arc;

/// Plain material count with the configured piece values; positive favors
/// White.
pub struct MaterialEvaluator {
    config: Arc<EngineConfig>,
}

impl MaterialEvaluator {
    #[must_use]
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        board.material_balance(self.config.val_man, self.config.val_king)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::{BoardCoordinate, Cell};

    fn coord(row: usize, col: usize) -> BoardCoordinate {
        BoardCoordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_initial_position_is_balanced() {
        let evaluator = MaterialEvaluator::new(Arc::new(EngineConfig::default()));
        assert_eq!(evaluator.evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_kings_outweigh_men() {
        let mut board = Board::empty();
        board.set(coord(4, 3), Cell::KingWhite);
        board.set(coord(2, 1), Cell::ManRed);
        board.set(coord(2, 3), Cell::ManRed);

        // One king against two men: 3 - 2.
        let evaluator = MaterialEvaluator::new(Arc::new(EngineConfig::default()));
        assert_eq!(evaluator.evaluate(&board), 1);
    }

    #[test]
    fn test_configured_values_are_used() {
        let config = EngineConfig {
            val_man: 10,
            val_king: 25,
            ..EngineConfig::default()
        };

        let mut board = Board::empty();
        board.set(coord(5, 2), Cell::ManWhite);
        board.set(coord(0, 1), Cell::KingRed);

        let evaluator = MaterialEvaluator::new(Arc::new(config));
        assert_eq!(evaluator.evaluate(&board), 10 - 25);
    }
}
