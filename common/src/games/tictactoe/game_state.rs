use super::board::{Board, CELL_COUNT, is_valid_move};
use super::score::ScoreTally;
use super::types::{InvalidMove, Mark, Mode, Outcome};
use super::win_detector::evaluate;

/// The human always plays O and moves first.
pub const FIRST_MARK: Mark = Mark::O;
pub const AI_MARK: Mark = Mark::X;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnState {
    pub current_mark: Mark,
    pub move_count: usize,
    pub round_over: bool,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            current_mark: FIRST_MARK,
            move_count: 0,
            round_over: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Mark),
    RoundOver(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    turn: TurnState,
    scores: ScoreTally,
    mode: Mode,
    outcome: Outcome,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            turn: TurnState::default(),
            scores: ScoreTally::new(),
            mode,
            outcome: Outcome::InProgress,
            last_move: None,
        }
    }

    /// Places the current mark at `index` and evaluates the board.
    ///
    /// A finished round is counted in the score tally exactly once. Rejected moves leave
    /// every part of the state untouched.
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, InvalidMove> {
        if self.turn.round_over {
            return Err(InvalidMove::RoundOver);
        }

        if index >= CELL_COUNT {
            return Err(InvalidMove::OutOfRange(index));
        }

        if !is_valid_move(&self.board, index) {
            return Err(InvalidMove::Occupied(index));
        }

        self.board.place(index, self.turn.current_mark);
        self.turn.move_count += 1;
        self.last_move = Some(index);

        let outcome = evaluate(&self.board);
        self.outcome = outcome;

        if outcome.is_over() {
            self.turn.round_over = true;
            self.scores.record(&outcome);
        } else {
            self.turn.current_mark = self.turn.current_mark.opponent();
        }

        Ok(outcome)
    }

    /// Starts a new round. Scores are kept.
    pub fn reset_round(&mut self) {
        self.board = Board::new();
        self.turn = TurnState::default();
        self.outcome = Outcome::InProgress;
        self.last_move = None;
    }

    /// Starts a new round and clears the score tally.
    pub fn new_session(&mut self) {
        self.reset_round();
        self.scores.reset();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// True when the AI should compute and apply the next move.
    pub fn ai_move_pending(&self) -> bool {
        self.mode == Mode::HumanVsAi && !self.turn.round_over && self.turn.current_mark == AI_MARK
    }

    pub fn status(&self) -> GameStatus {
        if self.turn.round_over {
            GameStatus::RoundOver(self.outcome)
        } else {
            GameStatus::AwaitingMove(self.turn.current_mark)
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn scores(&self) -> ScoreTally {
        self.scores
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
