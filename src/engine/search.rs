use crate::engine::config::EngineConfig;
use crate::engine::eval::MaterialEvaluator;
use crate::engine::{Evaluator, Move, SearchStats, Searcher};
use crate::logic::board::{Board, Side};
use crate::logic::generator::MoveGenerator;
use crate::logic::rules::winner;
use std::sync::Arc;
use std::time::Instant;

const INFINITY: i32 = i32::MAX;

/// Depth-limited minimax with alpha-beta pruning for the automated side.
/// White is modeled as the maximizer of the White-positive evaluation, Red
/// as the minimizer; every branch runs on its own clone of the board, so no
/// state is shared between siblings.
pub struct AlphaBetaEngine {
    config: Arc<EngineConfig>,
    evaluator: MaterialEvaluator,
    generator: MoveGenerator,
    nodes_searched: u32,
}

impl AlphaBetaEngine {
    #[must_use]
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            evaluator: MaterialEvaluator::new(config.clone()),
            config,
            generator: MoveGenerator::new(),
            nodes_searched: 0,
        }
    }

    pub fn update_config(&mut self, config: Arc<EngineConfig>) {
        self.evaluator = MaterialEvaluator::new(config.clone());
        self.config = config;
    }

    /// Configured default depth, for drivers that do not pick one per move.
    #[must_use]
    pub fn default_depth(&self) -> u8 {
        self.config.search_depth
    }

    /// Minimax value of `board`, searched `depth` plies deep. A node is
    /// terminal when the depth is exhausted or the position already has a
    /// winner; it then scores as the static evaluation. Sibling enumeration
    /// stops as soon as `beta <= alpha`.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes_searched = self.nodes_searched.saturating_add(1);

        if depth == 0 || winner(board).is_some() {
            return self.evaluator.evaluate(board);
        }

        let side = if maximizing { Side::White } else { Side::Red };
        let moves = self.generator.generate_moves(board, side);
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in moves {
            let mut next = board.clone();
            next.apply_move(&mv);
            let score = self.minimax(&next, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

impl Searcher for AlphaBetaEngine {
    fn search(&mut self, board: &Board, depth: u8) -> Option<(Move, SearchStats)> {
        self.nodes_searched = 0;
        let start = Instant::now();
        let depth = depth.max(1);

        let candidates = self.generator.generate_moves(board, Side::Red);
        if candidates.is_empty() {
            return None;
        }

        let mut best_score = -INFINITY;
        let mut best_move = None;

        for mv in candidates {
            let mut next = board.clone();
            next.apply_move(&mv);

            // The evaluation is White-positive, so Red ranks candidates by
            // the negated subtree value; the next ply is White's, hence
            // maximizing. A strict comparison keeps the first candidate on
            // ties.
            let score = -self.minimax(&next, depth - 1, -INFINITY, INFINITY, true);
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        let stats = SearchStats {
            depth,
            nodes: self.nodes_searched,
            time_ms: start.elapsed().as_millis() as u64,
        };

        let mv = best_move?;
        log::debug!(
            "search depth {} chose {:?} -> {:?} (score {}, {} nodes, {} ms)",
            depth,
            mv.from,
            mv.to,
            best_score,
            stats.nodes,
            stats.time_ms
        );
        Some((mv, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::{BoardCoordinate, Cell};

    fn coord(row: usize, col: usize) -> BoardCoordinate {
        BoardCoordinate::new(row, col).unwrap()
    }

    fn engine() -> AlphaBetaEngine {
        AlphaBetaEngine::new(Arc::new(EngineConfig::default()))
    }

    #[test]
    fn test_depth_one_move_is_legal_on_the_initial_board() {
        let board = Board::new();
        let mut engine = engine();

        let (mv, stats) = engine.search(&board, 1).unwrap();

        let legal = MoveGenerator::new().generate_moves(&board, Side::Red);
        assert!(legal.contains(&mv));
        assert_eq!(stats.depth, 1);
        assert!(stats.nodes > 0);
    }

    #[test]
    fn test_no_move_signals_game_end() {
        let mut board = Board::empty();
        board.set(coord(5, 2), Cell::ManWhite);

        let mut engine = engine();
        assert!(engine.search(&board, 3).is_none());
    }

    #[test]
    fn test_red_prefers_the_longer_chain() {
        let mut board = Board::empty();
        // A two-jump chain on the left, a single jump on the right.
        board.set(coord(2, 1), Cell::ManRed);
        board.set(coord(3, 2), Cell::ManWhite);
        board.set(coord(5, 4), Cell::ManWhite);
        board.set(coord(2, 5), Cell::ManRed);
        board.set(coord(3, 6), Cell::ManWhite);

        let mut engine = engine();
        let (mv, _) = engine.search(&board, 1).unwrap();

        assert_eq!(mv.from, coord(2, 1));
        assert_eq!(mv.captured.len(), 2);
    }

    #[test]
    fn test_red_avoids_walking_into_a_capture() {
        let mut board = Board::empty();
        board.set(coord(0, 1), Cell::ManRed);
        board.set(coord(3, 2), Cell::ManRed);
        board.set(coord(5, 4), Cell::ManWhite);

        let mut engine = engine();
        let (mv, _) = engine.search(&board, 2).unwrap();

        // Stepping to (4, 3) hands White a jump; at depth 2 every other
        // move is equal, so the first safe candidate in scan order wins.
        assert!(!(mv.from == coord(3, 2) && mv.to == coord(4, 3)));
        assert_eq!(mv, Move::step(coord(0, 1), coord(1, 0)));
    }
}
