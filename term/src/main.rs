//! Terminal frontend: polls keys, feeds them to the engine and redraws.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event};
use minefield_core::{
    CellCount, Coord, GameConfig, MinefieldGenerator, Placement, PlayEngine,
    RandomMinefieldGenerator, seeded_rng,
};

use crate::input::Input;
use crate::screen::Screen;

mod input;
mod screen;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PlacementArg {
    /// Redraw whenever the drawn tile already holds a mine
    Rejection,
    /// Draw only among tiles that are still clear
    FreeTile,
}

impl From<PlacementArg> for Placement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Rejection => Placement::Rejection,
            PlacementArg::FreeTile => Placement::FreeTile,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width in tiles
    #[arg(long, default_value_t = 60)]
    width: Coord,

    /// Board height in tiles
    #[arg(long, default_value_t = 40)]
    height: Coord,

    /// Number of mines, between a quarter and half of the tiles when omitted
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Mine placement strategy
    #[arg(long, value_enum, default_value_t = PlacementArg::FreeTile)]
    placement: PlacementArg,

    /// Frames drawn per second
    #[arg(
        long,
        default_value_t = 30,
        value_parser = clap::value_parser!(u32).range(1..=240)
    )]
    fps: u32,

    /// Where to write the log, the terminal itself is taken by the game
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logger(args: &Args) -> anyhow::Result<PathBuf> {
    let path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("minefield.log"));

    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    Ok(path)
}

fn new_engine(args: &Args, seed: u64) -> anyhow::Result<PlayEngine> {
    let size = (args.height, args.width);
    let mut rng = seeded_rng(seed);

    let config = match args.mines {
        Some(mines) => GameConfig::new(size, mines),
        None => GameConfig::with_random_density(size, &mut rng),
    }
    .with_context(|| {
        format!(
            "Invalid game: {}x{} with {:?} mines",
            args.width, args.height, args.mines
        )
    })?;
    log::info!(
        "New game: {}x{}, {} mines, seed {}",
        config.cols(),
        config.rows(),
        config.mines,
        seed
    );

    let minefield = RandomMinefieldGenerator::new(rng, args.placement.into())
        .generate(config);
    PlayEngine::new(minefield).context("Failed to start game")
}

fn run(engine: &mut PlayEngine, screen: &mut Screen, frame: Duration) -> anyhow::Result<()> {
    let mut dirty = true;
    loop {
        if dirty {
            screen.draw(engine).context("Failed to draw frame")?;
            dirty = false;
        }

        if !event::poll(frame).context("Failed to poll input")? {
            continue;
        }
        let event = event::read().context("Failed to read input")?;

        match input::decode(&event) {
            Some(Input::Quit) => {
                log::info!("Quit requested");
                return Ok(());
            }
            Some(Input::Command(command)) => {
                let outcome = engine.apply(command);
                log::trace!("{:?} -> {:?}", command, outcome);
                dirty = outcome.has_update();
            }
            None => dirty = matches!(event, Event::Resize(..)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_path = init_logger(&args)?;
    log::debug!("args: {:?}", args);

    let seed = args.seed.unwrap_or_else(rand::random);
    // fail before the terminal is taken over
    let mut engine = new_engine(&args, seed)?;

    let frame = Duration::from_secs(1) / args.fps;
    {
        let mut screen = Screen::enter().context("Failed to set up terminal")?;
        run(&mut engine, &mut screen, frame)?;
    }

    log::info!(
        "Session over: {} tiles revealed, {} flagged",
        engine.revealed_count(),
        engine.flagged_count()
    );
    eprintln!("Log written to {}", log_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_board() {
        let args = Args::try_parse_from(["minefield"]).unwrap();

        assert_eq!((args.width, args.height), (60, 40));
        assert_eq!(args.mines, None);
        assert_eq!(args.placement, PlacementArg::FreeTile);
        assert_eq!(args.fps, 30);
    }

    #[test]
    fn explicit_mines_are_validated() {
        let args = Args::try_parse_from([
            "minefield",
            "--width",
            "3",
            "--height",
            "3",
            "-m",
            "9",
        ])
        .unwrap();

        assert!(new_engine(&args, 1).is_err());
    }

    #[test]
    fn same_seed_same_board() {
        let args = Args::try_parse_from([
            "minefield",
            "--width",
            "9",
            "--height",
            "9",
            "--placement",
            "rejection",
        ])
        .unwrap();

        let a = new_engine(&args, 11).unwrap();
        let b = new_engine(&args, 11).unwrap();

        assert_eq!(a, b);
        assert!((20..40).contains(&a.total_mines()));
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert!(Args::try_parse_from(["minefield", "--fps", "0"]).is_err());
    }
}
