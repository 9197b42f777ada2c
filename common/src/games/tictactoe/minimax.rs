use super::board::Board;
use super::types::{Action, Mark};

const X_WINS: i32 = 1;
const O_WINS: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax value of the position from X's point of view.
    pub value: i32,
    /// `None` only for terminal positions.
    pub action: Option<Action>,
    pub nodes: u64,
}

/// Optimal move for the side to move, or `None` if the game is already over.
///
/// Among equally good moves the first one in row-major order is returned.
pub fn best_move(board: &Board) -> Option<Action> {
    evaluate(board).action
}

/// Full-depth minimax from `board`. Stops exploring siblings once a side reaches its
/// best possible score, which never changes the chosen move's value.
pub fn evaluate(board: &Board) -> SearchResult {
    let mut nodes = 0;
    let (value, action) = if board.turn_owner() == Mark::X {
        max_value(board, &mut nodes)
    } else {
        min_value(board, &mut nodes)
    };

    SearchResult { value, action, nodes }
}

fn max_value(board: &Board, nodes: &mut u64) -> (i32, Option<Action>) {
    *nodes += 1;
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let mut best_value = i32::MIN;
    let mut best_action = None;

    for action in board.legal_actions() {
        let Some(next) = board.result(action) else {
            continue;
        };

        let (value, _) = min_value(&next, nodes);
        if value > best_value {
            best_value = value;
            best_action = Some(action);
            if best_value == X_WINS {
                break;
            }
        }
    }

    (best_value, best_action)
}

fn min_value(board: &Board, nodes: &mut u64) -> (i32, Option<Action>) {
    *nodes += 1;
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let mut best_value = i32::MAX;
    let mut best_action = None;

    for action in board.legal_actions() {
        let Some(next) = board.result(action) else {
            continue;
        };

        let (value, _) = max_value(&next, nodes);
        if value < best_value {
            best_value = value;
            best_action = Some(action);
            if best_value == O_WINS {
                break;
            }
        }
    }

    (best_value, best_action)
}
