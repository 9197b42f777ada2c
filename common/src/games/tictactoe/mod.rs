mod board;
mod minimax;
mod types;
mod validate;
mod win_detector;

pub use board::Board;
pub use minimax::{SearchResult, best_move, evaluate};
pub use types::{Action, BOARD_SIZE, GameOutcome, Mark};
pub use validate::BoardError;
