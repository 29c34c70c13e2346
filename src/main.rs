//! Tanks - Entry Point
//!
//! Builds the board from the configuration, then runs the turn loop on
//! stdin/stdout until the last tank is full.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tanks::core::config::GameConfig;
use tanks::core::error::{Result, TankError};
use tanks::render::colors::Palette;
use tanks::simulation::{shortest_solution, Game, GameOutcome};

/// Move every item from the first tank to the last, one neighbor at a time
#[derive(Parser, Debug)]
#[command(name = "tanks")]
#[command(about = "Stacking puzzle: move items between adjacent tanks until the last one is full")]
struct Args {
    /// TOML file with `max_items` / `max_tanks`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Items per tank (overrides the config file)
    #[arg(long)]
    items: Option<usize>,

    /// Number of tanks (overrides the config file)
    #[arg(long)]
    tanks: Option<usize>,

    /// Disable terminal colors
    #[arg(long)]
    no_color: bool,

    /// Play the shortest solution instead of reading commands
    #[arg(long)]
    auto: bool,

    /// Log filter, e.g. `tanks=debug` (defaults to RUST_LOG, then `tanks=warn`)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tanks=warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = build_config(&args)?;
    tracing::info!(
        max_items = config.max_items,
        max_tanks = config.max_tanks,
        "Tanks starting..."
    );
    if config.max_tanks == 2 && config.max_items > 1 {
        tracing::warn!("two tanks cannot hold more than one item in a solvable puzzle");
    }

    let palette = if args.no_color {
        Palette::plain()
    } else {
        Palette::colored()
    };
    let mut game = Game::new(&config)?.with_palette(palette);

    let stdout = io::stdout();
    let mut output = stdout.lock();

    let outcome = if args.auto {
        let steps = shortest_solution(&config)?.ok_or_else(|| {
            TankError::InvalidConfig(format!(
                "no solution for {} items on {} tanks",
                config.max_items, config.max_tanks
            ))
        })?;
        let outcome = game.play_sequence(&steps)?;
        game.draw_result(&mut output)?;
        outcome
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        game.run(&mut input, &mut output)?
    };

    output.flush()?;
    if let GameOutcome::Stalled { moves } = outcome {
        tracing::error!(moves, "game stopped with no legal moves");
    }
    Ok(())
}

fn build_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(items) = args.items {
        config.max_items = items;
    }
    if let Some(tanks) = args.tanks {
        config.max_tanks = tanks;
    }
    config.validate()?;
    Ok(config)
}
