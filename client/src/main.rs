mod colors;
mod config;
mod game_ui;
mod offline;
mod state;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::tictactoe::Mode;
use common::{log, logger};

use config::get_config_manager;
use offline::run_tictactoe_game;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    TwoPlayer,
    Ai,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoPlayer => Mode::TwoPlayer,
            ModeArg::Ai => Mode::HumanVsAi,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Terminal tic-tac-toe against a friend or a minimax AI")]
struct Args {
    /// Overrides the configured starting mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Path to the YAML config; defaults to a file next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    ai_delay_ms: Option<u64>,

    #[arg(long)]
    dark_mode: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Writes the effective config back to the config file before playing
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_config()?;

    if let Some(mode) = args.mode {
        config.default_mode = mode.into();
    }
    if let Some(ai_delay_ms) = args.ai_delay_ms {
        config.ai_delay_ms = ai_delay_ms;
    }
    if args.dark_mode {
        config.dark_mode = true;
    }
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let scores = run_tictactoe_game(&config).await?;
    println!(
        "Final score  X: {}  O: {}  Draws: {}",
        scores.x_wins, scores.o_wins, scores.draws
    );
    log!("Session finished after {} rounds", scores.rounds_played());

    Ok(())
}
