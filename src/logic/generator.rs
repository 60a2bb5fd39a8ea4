use crate::engine::Move;
use crate::logic::board::{Board, BoardCoordinate, Cell, Side};

/// Diagonal directions, in the fixed enumeration order up-left, up-right,
/// down-left, down-right. White men use the first pair, red men the second,
/// kings all four.
const UP: [(isize, isize); 2] = [(-1, -1), (-1, 1)];
const DOWN: [(isize, isize); 2] = [(1, -1), (1, 1)];
const ALL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub struct MoveGenerator;

impl MoveGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn directions(piece: Cell) -> &'static [(isize, isize)] {
        match piece {
            Cell::ManWhite => &UP,
            Cell::ManRed => &DOWN,
            Cell::KingWhite | Cell::KingRed => &ALL,
            Cell::Empty => &[],
        }
    }

    /// Every move available to `side`, scanning squares row-major. If any
    /// piece of the side has a capture, only capture moves are returned:
    /// capture is mandatory and suppresses simple moves for the whole side.
    #[must_use]
    pub fn generate_moves(&self, board: &Board, side: Side) -> Vec<Move> {
        let mut simple = Vec::new();
        let mut captures = Vec::new();

        for pos in Board::coordinates() {
            if board.get(pos).side() != Some(side) {
                continue;
            }
            for mv in self.piece_moves(board, pos) {
                if mv.is_capture() {
                    captures.push(mv);
                } else {
                    simple.push(mv);
                }
            }
        }

        if captures.is_empty() {
            simple
        } else {
            captures
        }
    }

    /// Moves for the single piece at `from`: simple diagonal steps onto
    /// empty squares, followed by its capture chains. Empty for an empty
    /// square. Mandatory capture is applied by `generate_moves`, not here.
    #[must_use]
    pub fn piece_moves(&self, board: &Board, from: BoardCoordinate) -> Vec<Move> {
        let piece = board.get(from);
        let mut moves = Vec::new();

        for &(dr, dc) in Self::directions(piece) {
            if let Some(to) = from.offset(dr, dc) {
                if board.get(to).is_empty() {
                    moves.push(Move::step(from, to));
                }
            }
        }

        moves.extend(self.capture_chains(board, from, piece, &[]));
        moves
    }

    /// Maximal capture chains for `piece` jumping from `from`.
    ///
    /// A jump is legal when the adjacent cell holds an enemy not yet in
    /// `already_captured` and the cell behind it is on-board and empty. Each
    /// legal jump is explored on a clone of `board` with the jump applied;
    /// if the landing square yields further captures, the single jump is
    /// replaced by the longer chain(s) rebased to the original starting
    /// square, carrying the accumulated capture list. Chains that diverge at
    /// a branch point are all returned as separate moves. The direction set
    /// stays the piece's own for the whole chain: a man reaching the back
    /// rank mid-jump does not pick up king directions.
    #[must_use]
    pub fn capture_chains(
        &self,
        board: &Board,
        from: BoardCoordinate,
        piece: Cell,
        already_captured: &[BoardCoordinate],
    ) -> Vec<Move> {
        let mut chains = Vec::new();

        for &(dr, dc) in Self::directions(piece) {
            let Some(over) = from.offset(dr, dc) else {
                continue;
            };
            let Some(landing) = from.offset(2 * dr, 2 * dc) else {
                continue;
            };

            if !piece.is_enemy(board.get(over))
                || !board.get(landing).is_empty()
                || already_captured.contains(&over)
            {
                continue;
            }

            let mut captured = already_captured.to_vec();
            captured.push(over);

            // Continue from the landing square on a board where this jump
            // has been made.
            let mut next = board.clone();
            next.set(from, Cell::Empty);
            next.set(over, Cell::Empty);
            next.set(landing, piece);

            let continuations = self.capture_chains(&next, landing, piece, &captured);
            if continuations.is_empty() {
                chains.push(Move {
                    from,
                    to: landing,
                    captured,
                });
            } else {
                for chain in continuations {
                    chains.push(Move {
                        from,
                        to: chain.to,
                        captured: chain.captured,
                    });
                }
            }
        }

        chains
    }

    /// True if `side` has at least one legal move. Short-circuits on the
    /// first step or jump found instead of building move lists.
    #[must_use]
    pub fn has_legal_moves(&self, board: &Board, side: Side) -> bool {
        for pos in Board::coordinates() {
            let piece = board.get(pos);
            if piece.side() != Some(side) {
                continue;
            }
            for &(dr, dc) in Self::directions(piece) {
                let Some(next) = pos.offset(dr, dc) else {
                    continue;
                };
                if board.get(next).is_empty() {
                    return true;
                }
                if piece.is_enemy(board.get(next)) {
                    if let Some(landing) = pos.offset(2 * dr, 2 * dc) {
                        if board.get(landing).is_empty() {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}
