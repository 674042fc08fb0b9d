use common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    /// Zero-based board index.
    PlaceMark(usize),
    ResetRound,
    NewSession,
    ToggleMode,
    ToggleTheme,
    Quit,
}

/// Parses one line of player input. Cells are numbered 1-9 for the player.
pub fn parse_command(input: &str) -> Result<ClientCommand, String> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "r" | "reset" => Ok(ClientCommand::ResetRound),
        "n" | "new" => Ok(ClientCommand::NewSession),
        "m" | "mode" => Ok(ClientCommand::ToggleMode),
        "d" | "dark" => Ok(ClientCommand::ToggleTheme),
        "q" | "quit" | "exit" => Ok(ClientCommand::Quit),
        other => match other.parse::<usize>() {
            Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(ClientCommand::PlaceMark(cell - 1)),
            Ok(cell) => Err(format!("Cell {} does not exist, pick 1-{}", cell, CELL_COUNT)),
            Err(_) => Err(format!(
                "Unknown command '{}'. Use 1-{}, r (reset round), n (new session), m (mode), d (dark mode), q (quit)",
                input, CELL_COUNT
            )),
        },
    }
}
