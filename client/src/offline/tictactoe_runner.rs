use std::time::Duration;

use common::games::tictactoe::{AI_MARK, InvalidMove, Mode, Outcome, ScoreTally, TicTacToeGameState, best_move};
use common::log;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::colors::Palette;
use crate::config::Config;
use crate::game_ui::tictactoe::TicTacToeGameUi;
use crate::state::{ClientCommand, parse_command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    Moved(Outcome),
    RoundReset,
    SessionReset,
    ModeChanged(Mode),
    ThemeToggled,
    Quit,
}

pub fn apply_command(
    state: &mut TicTacToeGameState,
    command: ClientCommand,
) -> Result<CommandEffect, InvalidMove> {
    match command {
        ClientCommand::PlaceMark(index) => {
            let mark = state.turn().current_mark;
            let outcome = state.apply_move(index)?;
            log!("{} placed at cell {}", mark, index + 1);
            Ok(CommandEffect::Moved(outcome))
        }
        ClientCommand::ResetRound => {
            state.reset_round();
            log!("Round reset, scores kept");
            Ok(CommandEffect::RoundReset)
        }
        ClientCommand::NewSession => {
            state.new_session();
            log!("New session started");
            Ok(CommandEffect::SessionReset)
        }
        ClientCommand::ToggleMode => {
            let mode = state.mode().toggled();
            state.set_mode(mode);
            log!("Mode switched to {}", mode);
            Ok(CommandEffect::ModeChanged(mode))
        }
        ClientCommand::ToggleTheme => Ok(CommandEffect::ThemeToggled),
        ClientCommand::Quit => Ok(CommandEffect::Quit),
    }
}

fn log_outcome(outcome: &Outcome, scores: &ScoreTally) {
    match outcome {
        Outcome::Win { mark, line } => log!(
            "{} won on cells {:?}, score X {} / O {} / draws {}",
            mark,
            line.indexes().map(|index| index + 1),
            scores.x_wins,
            scores.o_wins,
            scores.draws
        ),
        Outcome::Draw => log!(
            "Round drawn, score X {} / O {} / draws {}",
            scores.x_wins,
            scores.o_wins,
            scores.draws
        ),
        Outcome::InProgress => {}
    }
}

async fn play_ai_turn(
    state: &mut TicTacToeGameState,
    delay: Duration,
) -> Result<Outcome, Box<dyn std::error::Error>> {
    tokio::time::sleep(delay).await;

    let board = state.board();
    let calculated_move = tokio::task::spawn_blocking(move || best_move(&board)).await?;
    let Some(index) = calculated_move else {
        return Err("AI found no move on an unfinished board".into());
    };

    let outcome = state.apply_move(index)?;
    log!("AI placed {} at cell {}", AI_MARK, index + 1);
    Ok(outcome)
}

enum InputLine {
    Text(String),
    NotUtf8,
    Closed,
}

/// Reads one line as raw bytes so a bad encoding only costs that line.
async fn read_input_line<R>(input: &mut R, buf: &mut Vec<u8>) -> std::io::Result<InputLine>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if input.read_until(b'\n', buf).await? == 0 {
        return Ok(InputLine::Closed);
    }
    match std::str::from_utf8(buf) {
        Ok(line) => Ok(InputLine::Text(line.to_string())),
        Err(_) => Ok(InputLine::NotUtf8),
    }
}

/// Plays rounds on stdin/stdout until the player quits or input ends.
///
/// Returns the final score tally.
pub async fn run_tictactoe_game(config: &Config) -> Result<ScoreTally, Box<dyn std::error::Error>> {
    let state = play_session(config, BufReader::new(tokio::io::stdin())).await?;
    Ok(state.scores())
}

async fn play_session<R>(
    config: &Config,
    mut input: R,
) -> Result<TicTacToeGameState, Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
{
    let mut ui = TicTacToeGameUi::new(Palette::for_theme(config.dark_mode), config.show_hints);
    let ai_delay = Duration::from_millis(config.ai_delay_ms);
    let mut state = TicTacToeGameState::new(config.default_mode);
    let mut buf = Vec::new();

    log!("Starting in {} mode", state.mode());

    loop {
        println!("\n{}", ui.render_game(&state));

        if state.ai_move_pending() {
            let outcome = play_ai_turn(&mut state, ai_delay).await?;
            log_outcome(&outcome, &state.scores());
            continue;
        }

        let line = match read_input_line(&mut input, &mut buf).await? {
            InputLine::Text(line) => line,
            InputLine::NotUtf8 => {
                log!("Ignored input line that is not valid UTF-8");
                println!("Input was not valid UTF-8, try again");
                continue;
            }
            InputLine::Closed => {
                log!("Input closed");
                break;
            }
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match apply_command(&mut state, command) {
            Ok(CommandEffect::Quit) => break,
            Ok(CommandEffect::Moved(outcome)) => log_outcome(&outcome, &state.scores()),
            Ok(CommandEffect::ThemeToggled) => {
                ui.toggle_theme();
                log!("Dark mode {}", if ui.dark_mode() { "on" } else { "off" });
            }
            Ok(_) => {}
            Err(e) => {
                log!("Rejected move: {}", e);
                println!("Invalid move: {}", e);
            }
        }
    }

    Ok(state)
}
