mod board;
mod bot_controller;
mod game_state;
mod score;
mod types;
mod win_detector;

pub use board::{BOARD_WIDTH, Board, CELL_COUNT, get_available_moves, is_valid_move};
pub use bot_controller::{BotInput, best_move, calculate_minimax_move, minimax};
pub use game_state::{AI_MARK, FIRST_MARK, GameStatus, TicTacToeGameState, TurnState};
pub use score::ScoreTally;
pub use types::{Cell, InvalidMove, Mark, Mode, Outcome, WinLine};
pub use win_detector::{WIN_LINES, check_win_with_line, evaluate};
