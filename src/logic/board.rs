use crate::engine::Move;
use serde::{Deserialize, Serialize};

pub const ROWS: usize = 8;
pub const COLS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    White,
    Red,
}

impl Side {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::White => Self::Red,
            Self::Red => Self::White,
        }
    }

    /// Back rank a man of this side promotes on.
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Self::White => 0,
            Self::Red => ROWS - 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    ManWhite,
    ManRed,
    KingWhite,
    KingRed,
}

impl Cell {
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Empty => None,
            Self::ManWhite | Self::KingWhite => Some(Side::White),
            Self::ManRed | Self::KingRed => Some(Side::Red),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Self::KingWhite | Self::KingRed)
    }

    /// True iff both cells hold pieces of opposite sides.
    #[must_use]
    pub fn is_enemy(self, other: Self) -> bool {
        match (self.side(), other.side()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// King of the same side; kings and `Empty` pass through unchanged.
    #[must_use]
    pub const fn promoted(self) -> Self {
        match self {
            Self::ManWhite => Self::KingWhite,
            Self::ManRed => Self::KingRed,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCoordinate {
    pub row: usize,
    pub col: usize,
}

impl BoardCoordinate {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < ROWS && col < COLS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Dark squares are the only squares pieces ever occupy.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Coordinate `(dr, dc)` away from this one, if still on the board.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Self::new(row, col)
    }
}

/// Per-side piece tallies, as rendered by a driver and consumed by the
/// evaluator and the terminal-position check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceCount {
    pub white_men: i32,
    pub red_men: i32,
    pub white_kings: i32,
    pub red_kings: i32,
}

impl PieceCount {
    #[must_use]
    pub const fn total(self, side: Side) -> i32 {
        match side {
            Side::White => self.white_men + self.white_kings,
            Side::Red => self.red_men + self.red_kings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Cell; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting position: red men on the dark squares of rows 0-2, white men
    /// on the dark squares of rows 5-7, rows 3-4 empty.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for pos in Self::coordinates() {
            if !pos.is_dark() {
                continue;
            }
            if pos.row < 3 {
                board.set(pos, Cell::ManRed);
            } else if pos.row > 4 {
                board.set(pos, Cell::ManWhite);
            }
        }
        board
    }

    /// Board with no pieces, for scenario construction.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            grid: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Row-major iterator over every coordinate.
    pub fn coordinates() -> impl Iterator<Item = BoardCoordinate> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| BoardCoordinate { row, col }))
    }

    #[must_use]
    pub fn get(&self, pos: BoardCoordinate) -> Cell {
        self.grid[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: BoardCoordinate, cell: Cell) {
        self.grid[pos.row][pos.col] = cell;
    }

    /// Applies a move previously generated for this exact position: empties
    /// the source square and every captured square, places the piece on the
    /// destination, and promotes a man landing on the enemy back rank.
    /// Returns whether a promotion occurred. Moves from any other position
    /// are not re-validated.
    pub fn apply_move(&mut self, mv: &Move) -> bool {
        let piece = self.get(mv.from);
        self.set(mv.from, Cell::Empty);
        for &taken in &mv.captured {
            self.set(taken, Cell::Empty);
        }

        let promotes = !piece.is_king()
            && piece
                .side()
                .is_some_and(|side| mv.to.row == side.promotion_row());
        self.set(mv.to, if promotes { piece.promoted() } else { piece });
        promotes
    }

    #[must_use]
    pub fn piece_count(&self) -> PieceCount {
        let mut count = PieceCount::default();
        for row in &self.grid {
            for cell in row {
                match cell {
                    Cell::ManWhite => count.white_men += 1,
                    Cell::ManRed => count.red_men += 1,
                    Cell::KingWhite => count.white_kings += 1,
                    Cell::KingRed => count.red_kings += 1,
                    Cell::Empty => {}
                }
            }
        }
        count
    }

    /// Material balance with the given piece values; positive favors White.
    #[must_use]
    pub fn material_balance(&self, man_value: i32, king_value: i32) -> i32 {
        let count = self.piece_count();
        (count.white_men - count.red_men) * man_value
            + (count.white_kings - count.red_kings) * king_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: usize, col: usize) -> BoardCoordinate {
        BoardCoordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_initial_setup() {
        let board = Board::new();
        let count = board.piece_count();
        assert_eq!(count.white_men, 12);
        assert_eq!(count.red_men, 12);
        assert_eq!(count.white_kings, 0);
        assert_eq!(count.red_kings, 0);

        // Pieces only on dark squares, middle rows empty.
        for pos in Board::coordinates() {
            let cell = board.get(pos);
            if !pos.is_dark() || pos.row == 3 || pos.row == 4 {
                assert!(cell.is_empty(), "unexpected piece at {pos:?}");
            }
        }

        assert_eq!(board.get(coord(0, 1)), Cell::ManRed);
        assert_eq!(board.get(coord(2, 7)), Cell::ManRed);
        assert_eq!(board.get(coord(5, 0)), Cell::ManWhite);
        assert_eq!(board.get(coord(7, 6)), Cell::ManWhite);
    }

    #[test]
    fn test_apply_simple_move() {
        let mut board = Board::new();
        let mv = Move::step(coord(5, 2), coord(4, 3));
        let promoted = board.apply_move(&mv);

        assert!(!promoted);
        assert!(board.get(coord(5, 2)).is_empty());
        assert_eq!(board.get(coord(4, 3)), Cell::ManWhite);
    }

    #[test]
    fn test_apply_capture_clears_captured_squares() {
        let mut board = Board::empty();
        board.set(coord(4, 3), Cell::ManWhite);
        board.set(coord(3, 2), Cell::ManRed);

        let mv = Move {
            from: coord(4, 3),
            to: coord(2, 1),
            captured: vec![coord(3, 2)],
        };
        board.apply_move(&mv);

        assert!(board.get(coord(4, 3)).is_empty());
        assert!(board.get(coord(3, 2)).is_empty());
        assert_eq!(board.get(coord(2, 1)), Cell::ManWhite);
    }

    #[test]
    fn test_promotion_on_far_row_only() {
        let mut board = Board::empty();
        board.set(coord(2, 3), Cell::ManWhite);

        // One short of the back rank: still a man.
        assert!(!board.apply_move(&Move::step(coord(2, 3), coord(1, 2))));
        assert_eq!(board.get(coord(1, 2)), Cell::ManWhite);

        // Landing on row 0 promotes.
        assert!(board.apply_move(&Move::step(coord(1, 2), coord(0, 1))));
        assert_eq!(board.get(coord(0, 1)), Cell::KingWhite);
    }

    #[test]
    fn test_red_promotes_on_row_seven() {
        let mut board = Board::empty();
        board.set(coord(6, 1), Cell::ManRed);

        assert!(board.apply_move(&Move::step(coord(6, 1), coord(7, 2))));
        assert_eq!(board.get(coord(7, 2)), Cell::KingRed);
    }

    #[test]
    fn test_king_does_not_repromote() {
        let mut board = Board::empty();
        board.set(coord(1, 2), Cell::KingRed);

        // An already promoted piece stays a king wherever it lands.
        assert!(!board.apply_move(&Move::step(coord(1, 2), coord(0, 3))));
        assert_eq!(board.get(coord(0, 3)), Cell::KingRed);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::new();
        let snapshot = board.clone();

        let mut branch = board.clone();
        branch.apply_move(&Move::step(coord(5, 2), coord(4, 1)));

        assert_ne!(branch, board);
        assert_eq!(board, snapshot);
    }
}
