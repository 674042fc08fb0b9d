use common::games::tictactoe::{
    AI_MARK, Cell, GameStatus, Mark, Mode, Outcome, TicTacToeGameState, WinLine,
};

use crate::colors::Palette;

pub struct TicTacToeGameUi {
    palette: Palette,
    dark_mode: bool,
    show_hints: bool,
}

impl TicTacToeGameUi {
    const ROW_SEPARATOR: &'static str = " ---+---+---";

    pub fn new(palette: Palette, show_hints: bool) -> Self {
        Self {
            dark_mode: palette == Palette::dark(),
            palette,
            show_hints,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.palette = Palette::for_theme(self.dark_mode);
    }

    pub fn render_game(&self, state: &TicTacToeGameState) -> String {
        let winning_line = match state.outcome() {
            Outcome::Win { line, .. } => Some(line),
            _ => None,
        };

        let mut lines = vec![self.render_header(state), String::new()];
        for (row_index, row) in state.board().rows().enumerate() {
            if row_index > 0 {
                lines.push(Self::ROW_SEPARATOR.to_string());
            }
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(column, cell)| {
                    self.render_cell(row_index * row.len() + column, *cell, winning_line)
                })
                .collect();
            lines.push(format!(" {}", cells.join("|")));
        }
        lines.push(String::new());
        lines.push(self.render_status(state));
        lines.join("\n")
    }

    fn render_header(&self, state: &TicTacToeGameState) -> String {
        let scores = state.scores();
        format!(
            "Mode: {}   Score  X: {}  O: {}  Draws: {}",
            state.mode(),
            scores.wins(Mark::X),
            scores.wins(Mark::O),
            scores.draws
        )
    }

    fn render_cell(&self, index: usize, cell: Cell, winning_line: Option<WinLine>) -> String {
        let text = match cell.mark() {
            Some(mark) => {
                let color = match cell {
                    Cell::X => self.palette.x,
                    _ => self.palette.o,
                };
                let symbol = self.palette.paint(color, &mark.to_string());
                if winning_line.is_some_and(|line| line.contains(index)) {
                    self.palette.paint(self.palette.winner, &symbol)
                } else {
                    symbol
                }
            }
            None if self.show_hints => self.palette.paint(self.palette.hint, &(index + 1).to_string()),
            None => " ".to_string(),
        };
        format!(" {} ", text)
    }

    pub fn render_status(&self, state: &TicTacToeGameState) -> String {
        match state.status() {
            GameStatus::RoundOver(Outcome::Win { mark, .. }) => {
                format!("🎉 {} Wins! Press r for another round or n for a new session.", mark)
            }
            GameStatus::RoundOver(_) => {
                "😐 It's a Draw! Press r for another round or n for a new session.".to_string()
            }
            GameStatus::AwaitingMove(mark) if state.mode() == Mode::HumanVsAi && mark == AI_MARK => {
                format!("AI ({}) is thinking...", mark)
            }
            GameStatus::AwaitingMove(mark) => format!("{} to move (1-9, r, n, m, d, q)", mark),
        }
    }
}
