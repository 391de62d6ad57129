#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a headless Meme Train game.

mod autopilot;
mod frame;
mod settings;
mod summary;

use std::{
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use meme_train_core::{Difficulty, Direction};
use meme_train_world::{self as world, query, Cadence, GameState};
use settings::GameFile;
use summary::Summary;

/// Command-line arguments accepted by the runner.
#[derive(Debug, Parser)]
#[command(name = "meme-train", version, about = "Headless Meme Train runner")]
struct Args {
    /// TOML file describing the game
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of grid columns
    #[arg(long)]
    columns: Option<u32>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<u32>,

    /// Seed for collectible placement
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation pace used with --realtime
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Stop after this many ticks even if the run is still going
    #[arg(long, default_value_t = 2_000)]
    max_ticks: u64,

    /// One input per tick: U, D, L, R, or `.` for none. Replaces the autopilot
    #[arg(long)]
    script: Option<String>,

    /// Print the arena after every tick
    #[arg(long)]
    frames: bool,

    /// Pace ticks with the difficulty cadence instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Format of the final report
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    summary: SummaryFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

/// Entry point for the Meme Train command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    let mut file = match &args.config {
        Some(path) => GameFile::load(path)?,
        None => GameFile::default(),
    };
    file.columns = args.columns.or(file.columns);
    file.rows = args.rows.or(file.rows);
    file.seed = args.seed.or(file.seed);
    file.difficulty = args.difficulty.map(Difficulty::from).or(file.difficulty);
    let (config, difficulty) = file.resolve()?;

    let mut script = args
        .script
        .as_deref()
        .map(parse_script)
        .transpose()?
        .map(Vec::into_iter);

    let menu = GameState::new(config).context("failed to create game")?;
    println!("{}", query::welcome_banner(&menu));

    let mut state = world::start(&menu);
    let mut cadence = Cadence::new(difficulty);
    let mut last_frame = Instant::now();
    let mut due = 0;

    while !query::phase(&state).is_terminal() {
        if query::tick_index(&state) >= args.max_ticks {
            log::info!("tick budget of {} exhausted", args.max_ticks);
            break;
        }
        if args.realtime && due == 0 {
            due = wait_for_tick(&mut cadence, &mut last_frame);
        }
        due = due.saturating_sub(1);

        let direction = match script.as_mut() {
            Some(inputs) => inputs.next().flatten(),
            None => autopilot::choose(&state),
        };
        let (next, events) = world::tick_with_events(&state, direction);
        for event in &events {
            log::debug!("{event:?}");
        }
        state = next;

        if args.frames {
            println!("{}", frame::render(&state));
        }
    }

    let summary = Summary::from_state(&state);
    match args.summary {
        SummaryFormat::Text => print!("{}", summary.to_text()),
        SummaryFormat::Json => println!("{}", summary.to_json()?),
    }
    Ok(())
}

/// Sleeps until the cadence releases at least one tick and returns how many.
fn wait_for_tick(cadence: &mut Cadence, last_frame: &mut Instant) -> u32 {
    loop {
        let now = Instant::now();
        let due = cadence.advance(now.duration_since(*last_frame));
        *last_frame = now;
        if due > 0 {
            return due;
        }
        thread::sleep(cadence.interval().min(Duration::from_millis(10)));
    }
}

/// Parses a tick script. Whitespace is ignored; `.` means no input.
fn parse_script(script: &str) -> Result<Vec<Option<Direction>>> {
    script
        .chars()
        .filter(|symbol| !symbol.is_whitespace())
        .map(|symbol| match symbol.to_ascii_uppercase() {
            'U' => Ok(Some(Direction::Up)),
            'D' => Ok(Some(Direction::Down)),
            'L' => Ok(Some(Direction::Left)),
            'R' => Ok(Some(Direction::Right)),
            '.' => Ok(None),
            other => bail!("unexpected script symbol `{other}`; use U, D, L, R or ."),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scripts() {
        assert_eq!(
            parse_script("U d .\nR").expect("valid script"),
            vec![
                Some(Direction::Up),
                Some(Direction::Down),
                None,
                Some(Direction::Right),
            ]
        );
        assert!(parse_script("UX").is_err());
    }

    #[test]
    fn flags_parse_into_arguments() {
        let args = Args::try_parse_from([
            "meme-train",
            "--columns",
            "10",
            "--difficulty",
            "hard",
            "--summary",
            "json",
            "--frames",
        ])
        .expect("valid flags");

        assert_eq!(args.columns, Some(10));
        assert_eq!(args.rows, None);
        assert_eq!(args.max_ticks, 2_000);
        assert!(matches!(args.difficulty, Some(DifficultyArg::Hard)));
        assert_eq!(args.summary, SummaryFormat::Json);
        assert!(args.frames);
        assert!(!args.realtime);
    }

    #[test]
    fn scripted_run_hits_the_wall() {
        let args = Args::try_parse_from([
            "meme-train",
            "--columns",
            "5",
            "--rows",
            "5",
            "--script",
            "LLL",
        ])
        .expect("valid flags");

        assert!(run(args).is_ok());
    }
}
