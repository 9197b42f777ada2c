use super::types::{BOARD_SIZE, Mark};

type Line = [(usize, usize); BOARD_SIZE];

// Scan order: rows, columns, main diagonal, anti-diagonal.
const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the mark owning the first complete line, if any.
pub fn check_win(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Option<Mark> {
    LINES.iter().find_map(|line| line_owner(cells, line))
}

fn line_owner(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE], line: &Line) -> Option<Mark> {
    let (row, col) = line[0];
    let mark = cells[row][col];
    if mark == Mark::Empty {
        return None;
    }

    if line.iter().all(|&(r, c)| cells[r][c] == mark) {
        Some(mark)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_no_winner_on_empty_board() {
        assert_eq!(check_win(&[[E; 3]; 3]), None);
    }

    #[test]
    fn test_detects_every_line() {
        for line in LINES {
            let mut cells = [[E; 3]; 3];
            for (r, c) in line {
                cells[r][c] = O;
            }
            assert_eq!(check_win(&cells), Some(O), "line {:?}", line);
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let cells = [[X, X, O], [E, E, E], [E, E, E]];
        assert_eq!(check_win(&cells), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Not reachable in legal play, but the answer must still be deterministic.
        let cells = [[X, X, X], [E, E, E], [O, O, O]];
        assert_eq!(check_win(&cells), Some(X));
        let cells = [[O, O, O], [E, E, E], [X, X, X]];
        assert_eq!(check_win(&cells), Some(O));
        let cells = [[O, E, X], [O, E, X], [O, E, X]];
        assert_eq!(check_win(&cells), Some(O));
    }
}
