mod config;
mod input;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::games::snake::{SnakeSessionSettings, SnakeSessionState};
use common::{log, logger};

use config::{Config, DEFAULT_CONFIG_FILE, get_config_manager};
use ui::create_game_window;

#[derive(Parser)]
#[command(name = "snake_desktop", about = "Classic Snake on a fixed grid")]
struct Args {
    /// YAML config file. Defaults are used when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,
    /// Seed for food placement.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
    /// Write the default config to `--config` and exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    if let Err(e) = run(args) {
        log!("Startup failed: {}", e);
        return Err(e);
    }
    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config_manager = get_config_manager(&args.config);

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        log!("Default config written to {}", args.config);
        return Ok(());
    }

    let config = config_manager.get_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let session_state = SnakeSessionState::create(SnakeSessionSettings::from(&config.game), seed)?;

    if let Some(summary) = create_game_window(&config, session_state)? {
        log!("Played {} game(s)", summary.games_played);
        for (place, entry) in summary.high_scores.entries().iter().enumerate() {
            log!("{}. Score: {}   Level: {}", place + 1, entry.score, entry.level);
        }
    }

    Ok(())
}
