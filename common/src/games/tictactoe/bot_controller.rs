use super::board::{Board, get_available_moves};
use super::game_state::{AI_MARK, TicTacToeGameState};
use super::types::{Mark, Outcome};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board(),
            bot_mark: state.turn().current_mark,
        }
    }
}

/// Picks the move for [`AI_MARK`].
pub fn best_move(board: &Board) -> Option<usize> {
    calculate_minimax_move(&BotInput {
        board: *board,
        bot_mark: AI_MARK,
    })
}

/// Exhaustive minimax over every continuation of `input.board`.
///
/// Ties keep the lowest index. Returns `None` when the board has no empty cell.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.bot_mark;
    let mut board = input.board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(&board) {
        board.place(index, bot_mark);
        let score = minimax(&mut board, false, bot_mark);
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Scores `board` from `bot_mark`'s point of view with the given side to move.
///
/// The board is restored before returning.
pub fn minimax(board: &mut Board, is_maximizing: bool, bot_mark: Mark) -> i32 {
    match evaluate(board) {
        Outcome::Win { mark, .. } if mark == bot_mark => return WIN_SCORE,
        Outcome::Win { .. } => return LOSS_SCORE,
        Outcome::Draw => return DRAW_SCORE,
        Outcome::InProgress => {}
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.place(index, bot_mark);
            let eval = minimax(board, false, bot_mark);
            board.clear(index);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let opponent_mark = bot_mark.opponent();
        let mut min_eval = i32::MAX;
        for index in moves {
            board.place(index, opponent_mark);
            let eval = minimax(board, true, bot_mark);
            board.clear(index);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Cell;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::X;
    const O: Cell = Cell::O;

    #[test]
    fn test_empty_board_picks_top_left() {
        assert_eq!(best_move(&Board::new()), Some(0));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(best_move(&board), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        assert_eq!(best_move(&board), Some(2));
    }

    #[test]
    fn test_blocks_opponent_line() {
        let board = Board::from_cells([O, O, E, E, X, E, E, E, E]);
        assert_eq!(best_move(&board), Some(2));
    }

    #[test]
    fn test_endgame_choice_does_not_lose() {
        let board = Board::from_cells([X, O, X, O, X, O, E, E, E]);
        let index = best_move(&board).unwrap();
        assert!([6, 7, 8].contains(&index));

        let mut after = board;
        after.place(index, Mark::X);
        assert!(minimax(&mut after, false, Mark::X) >= 0);
    }

    #[test]
    fn test_search_does_not_touch_input() {
        let board = Board::from_cells([O, E, E, E, X, E, E, E, E]);
        let input = BotInput { board, bot_mark: Mark::X };
        let _ = calculate_minimax_move(&input);
        assert_eq!(input.board, board);
    }

    #[test]
    fn test_minimax_restores_board() {
        let mut board = Board::from_cells([O, E, E, E, X, E, E, E, O]);
        let snapshot = board;
        let _ = minimax(&mut board, true, Mark::X);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_bot_can_play_o() {
        let board = Board::from_cells([X, X, E, E, O, E, E, E, E]);
        let input = BotInput { board, bot_mark: Mark::O };
        assert_eq!(calculate_minimax_move(&input), Some(2));
    }

    #[test]
    fn test_input_from_game_state_uses_current_mark() {
        let mut state = TicTacToeGameState::default();
        state.apply_move(4).unwrap();
        let input = BotInput::from_game_state(&state);
        assert_eq!(input.bot_mark, Mark::X);
        assert_eq!(input.board.get(4), Some(O));
    }
}
