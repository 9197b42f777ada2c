use super::types::{Action, BOARD_SIZE, GameOutcome, Mark};
use super::win_detector::check_win;

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A 3x3 position. Transitions return a new board; the receiver is never modified.
///
/// Mark counts are kept alongside the grid so turn and fullness queries never rescan it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    x_count: usize,
    o_count: usize,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut x_count = 0;
        let mut o_count = 0;
        for &cell in cells.iter().flatten() {
            match cell {
                Mark::X => x_count += 1,
                Mark::O => o_count += 1,
                Mark::Empty => {}
            }
        }

        Self { cells, x_count, o_count }
    }

    pub fn cells(&self) -> [[Mark; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }

    pub fn get(&self, action: Action) -> Mark {
        self.cells[action.row()][action.col()]
    }

    pub fn x_count(&self) -> usize {
        self.x_count
    }

    pub fn o_count(&self) -> usize {
        self.o_count
    }

    pub fn is_empty(&self) -> bool {
        self.x_count == 0 && self.o_count == 0
    }

    pub fn is_full(&self) -> bool {
        self.x_count + self.o_count == CELL_COUNT
    }

    /// X opens, so X also moves whenever the counts are level. A full board reports X.
    pub fn turn_owner(&self) -> Mark {
        if self.is_empty() || self.is_full() || self.x_count <= self.o_count {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Empty cells in row-major order. The search relies on this order for tie-breaks.
    pub fn legal_actions(&self) -> Vec<Action> {
        Action::all().filter(|&action| self.get(action) == Mark::Empty).collect()
    }

    /// Returns `None` if the cell is taken or `player` is `Mark::Empty`.
    pub fn place(&self, action: Action, player: Mark) -> Option<Board> {
        if self.get(action) != Mark::Empty {
            return None;
        }

        let mut next = *self;
        match player {
            Mark::X => next.x_count += 1,
            Mark::O => next.o_count += 1,
            Mark::Empty => return None,
        }
        next.cells[action.row()][action.col()] = player;
        Some(next)
    }

    pub fn result(&self, action: Action) -> Option<Board> {
        self.place(action, self.turn_owner())
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Only meaningful on terminal boards; anything without a winner scores 0.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            _ => 0,
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.winner() {
            Some(Mark::X) => GameOutcome::XWins,
            Some(Mark::O) => GameOutcome::OWins,
            _ if self.is_full() => GameOutcome::Draw,
            _ => GameOutcome::InProgress,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    fn action(row: usize, col: usize) -> Action {
        Action::new(row, col).unwrap()
    }

    fn sample_boards() -> Vec<Board> {
        vec![
            Board::new(),
            Board::from_cells([[X, E, E], [E, E, E], [E, E, E]]),
            Board::from_cells([[X, X, E], [O, O, E], [E, E, E]]),
            Board::from_cells([[X, X, X], [O, O, E], [E, E, E]]),
            Board::from_cells([[X, O, X], [X, O, O], [O, X, X]]),
            Board::from_cells([[O, X, X], [X, O, E], [X, E, O]]),
        ]
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.legal_actions().len(), 9);
        assert_eq!(board.turn_owner(), X);
        assert_eq!(board.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_from_cells_counts_marks() {
        let cells = [[X, X, E], [O, O, E], [E, E, E]];
        let board = Board::from_cells(cells);
        assert_eq!(board.cells(), cells);
        assert_eq!(board.x_count(), 2);
        assert_eq!(board.o_count(), 2);
        assert!(!board.is_empty());
    }

    #[test]
    fn test_turn_owner_alternates() {
        let board = Board::new();
        let after_x = board.result(action(1, 1)).unwrap();
        assert_eq!(after_x.turn_owner(), O);
        let after_o = after_x.result(action(0, 0)).unwrap();
        assert_eq!(after_o.turn_owner(), X);
    }

    #[test]
    fn test_turn_owner_on_full_board_is_x() {
        let board = Board::from_cells([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(board.is_full());
        assert_eq!(board.turn_owner(), X);
    }

    #[test]
    fn test_legal_actions_complement_marks() {
        for board in sample_boards() {
            assert_eq!(board.legal_actions().len() + board.x_count() + board.o_count(), 9);
            for action in board.legal_actions() {
                assert_eq!(board.get(action), E);
            }
        }
    }

    #[test]
    fn test_legal_actions_row_major() {
        let board = Board::from_cells([[X, E, E], [E, O, E], [E, E, X]]);
        let actions: Vec<(usize, usize)> =
            board.legal_actions().iter().map(|a| (a.row(), a.col())).collect();
        assert_eq!(actions, vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_place_sets_cell_without_touching_original() {
        let board = Board::from_cells([[X, E, E], [E, E, E], [E, E, E]]);
        let snapshot = board;

        let next = board.place(action(2, 1), O).unwrap();

        assert_eq!(next.get(action(2, 1)), O);
        assert_eq!(next.o_count(), 1);
        assert_eq!(board, snapshot);
        assert_eq!(board.get(action(2, 1)), E);
    }

    #[test]
    fn test_place_on_occupied_cell_fails() {
        let board = Board::from_cells([[X, E, E], [E, E, E], [E, E, E]]);
        assert!(board.place(action(0, 0), O).is_none());
        assert!(board.place(action(0, 0), X).is_none());
        assert_eq!(board.x_count(), 1);
    }

    #[test]
    fn test_place_empty_mark_fails() {
        assert!(Board::new().place(action(0, 0), E).is_none());
    }

    #[test]
    fn test_result_uses_turn_owner() {
        let board = Board::from_cells([[X, E, E], [E, E, E], [E, E, E]]);
        let next = board.result(action(1, 1)).unwrap();
        assert_eq!(next.get(action(1, 1)), O);
    }

    #[test]
    fn test_terminal_iff_winner_or_full() {
        for board in sample_boards() {
            assert_eq!(board.is_terminal(), board.winner().is_some() || board.is_full());
        }
    }

    #[test]
    fn test_x_three_in_a_row() {
        let board = Board::from_cells([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(board.winner(), Some(X));
        assert_eq!(board.utility(), 1);
        assert!(board.is_terminal());
        assert_eq!(board.outcome(), GameOutcome::XWins);
    }

    #[test]
    fn test_o_diagonal_win() {
        let board = Board::from_cells([[O, X, X], [X, O, E], [X, E, O]]);
        assert_eq!(board.winner(), Some(O));
        assert_eq!(board.utility(), -1);
        assert_eq!(board.outcome(), GameOutcome::OWins);
    }

    #[test]
    fn test_full_board_draw() {
        let board = Board::from_cells([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
        assert_eq!(board.utility(), 0);
        assert_eq!(board.outcome(), GameOutcome::Draw);
    }

    #[test]
    fn test_queries_are_idempotent() {
        for board in sample_boards() {
            assert_eq!(board.winner(), board.winner());
            assert_eq!(board.is_terminal(), board.is_terminal());
            assert_eq!(board.utility(), board.utility());
        }
    }

    #[test]
    fn test_display() {
        let board = Board::from_cells([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(board.to_string(), "XX./OO./...");
    }
}
