use super::board::Board;
use super::types::{BOARD_SIZE, Mark};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    WrongRowCount(usize),
    WrongColumnCount { row: usize, found: usize },
    ImpossibleCounts { x: usize, o: usize },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::WrongRowCount(found) => {
                write!(f, "board must have {} rows, found {}", BOARD_SIZE, found)
            }
            BoardError::WrongColumnCount { row, found } => write!(
                f,
                "row {} must have {} cells, found {}",
                row, BOARD_SIZE, found
            ),
            BoardError::ImpossibleCounts { x, o } => write!(
                f,
                "impossible mark counts: {} X and {} O (X moves first and players alternate)",
                x, o
            ),
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// Builds a board from an externally supplied grid, checking only its shape.
    pub fn from_grid(grid: &[Vec<Mark>]) -> Result<Board, BoardError> {
        if grid.len() != BOARD_SIZE {
            return Err(BoardError::WrongRowCount(grid.len()));
        }

        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, values) in grid.iter().enumerate() {
            if values.len() != BOARD_SIZE {
                return Err(BoardError::WrongColumnCount { row, found: values.len() });
            }
            cells[row].copy_from_slice(values);
        }

        Ok(Board::from_cells(cells))
    }

    /// Fails unless the position could arise from alternating play starting with X.
    pub fn check_counts(&self) -> Result<(), BoardError> {
        let (x, o) = (self.x_count(), self.o_count());
        if x == o || x == o + 1 {
            Ok(())
        } else {
            Err(BoardError::ImpossibleCounts { x, o })
        }
    }
}
