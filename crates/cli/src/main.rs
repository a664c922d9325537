//! Othello command-line driver
//!
//! Asks the classical engine for a move, counts move trees, and runs
//! engine-vs-engine matches.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use othello_core::{perft, Board, Engine};
use othello_cli::engines::ENGINE_NAMES;
use othello_cli::{create_engine, logging, AppConfig};
use tournament::{MatchRunner, TournamentConfig, TournamentResults};

const DEFAULT_CONFIG: &str = "othello.toml";

#[derive(Parser, Debug)]
#[command(name = "othello", version, about = "Othello engine tools")]
struct Cli {
    /// Config file; `othello.toml` is used when present
    #[arg(long, global = true, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: SubCommands,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Print the classical engine's move for a position
    Bestmove {
        /// Board text file (eight rows plus `b`/`w`); standard opening when omitted
        #[arg(value_hint = clap::ValueHint::FilePath)]
        board_file: Option<PathBuf>,
    },
    /// Count leaf positions of the move tree
    Perft {
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
        depth: u8,

        #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        board: Option<PathBuf>,
    },
    /// Play a match between two engines
    Match {
        engine1: String,
        engine2: String,

        /// Overrides `match.num_games`
        #[arg(short, long)]
        games: Option<u32>,

        /// Write JSON results here
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // An explicit --config must exist; the default file is optional
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = match &args.config {
        Some(path) => AppConfig::load(path),
        None => AppConfig::load_or_default(&config_path),
    }
    .context("failed to load configuration")?;

    logging::init(&config.log.filter);
    if !config_path.exists() {
        tracing::warn!(path = %config_path.display(), "config file not found, using defaults");
    }

    match args.command {
        SubCommands::Bestmove { board_file } => bestmove(board_file.as_deref()),
        SubCommands::Perft { depth, board } => run_perft(depth, board.as_deref()),
        SubCommands::Match {
            engine1,
            engine2,
            games,
            out,
        } => run_match(&config, &engine1, &engine2, games, out.as_deref()),
    }
}

fn read_board(path: Option<&Path>) -> Result<Board> {
    let Some(path) = path else {
        return Ok(Board::new());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    text.parse::<Board>()
        .with_context(|| format!("invalid board in {}", path.display()))
}

fn bestmove(board_file: Option<&Path>) -> Result<()> {
    let board = read_board(board_file)?;
    let mut engine = classical_engine::ClassicalEngine::new();

    let start = Instant::now();
    let result = engine.search(&board);
    let elapsed = start.elapsed();

    match result.best_move {
        Some(mv) => println!("bestmove {mv} score {} nodes {}", result.score, result.nodes),
        None => println!("bestmove pass"),
    }
    tracing::debug!(?elapsed, "search time");
    Ok(())
}

fn run_perft(depth: u8, board_file: Option<&Path>) -> Result<()> {
    let board = read_board(board_file)?;

    let start = Instant::now();
    let nodes = perft(&board, depth);
    let elapsed = start.elapsed();

    let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);
    println!("perft {depth}: {nodes} nodes in {:.3}s ({nps:.0} nps)", elapsed.as_secs_f64());
    Ok(())
}

fn run_match(
    config: &AppConfig,
    engine1_spec: &str,
    engine2_spec: &str,
    games: Option<u32>,
    out: Option<&Path>,
) -> Result<()> {
    let settings = &config.match_settings;
    // Distinct default seeds so two random engines do not mirror each other
    let seed2 = settings.seed.map(|seed| seed.wrapping_add(1));

    let Some(mut engine1) = create_engine(engine1_spec, settings.seed) else {
        bail!("unknown engine {engine1_spec:?} (expected one of {ENGINE_NAMES:?})");
    };
    let Some(mut engine2) = create_engine(engine2_spec, seed2) else {
        bail!("unknown engine {engine2_spec:?} (expected one of {ENGINE_NAMES:?})");
    };

    let mut match_config = settings.to_match_config(true);
    if let Some(games) = games {
        if games == 0 {
            bail!("--games must be greater than 0");
        }
        match_config.num_games = games;
    }

    let name1 = engine1.name().to_string();
    let name2 = engine2.name().to_string();
    tracing::info!(
        engine1 = %name1,
        engine2 = %name2,
        games = match_config.num_games,
        "starting match"
    );

    let runner = MatchRunner::new(match_config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    let mut results = TournamentResults::new(
        &format!("{name1} vs {name2}"),
        vec![name1.clone(), name2.clone()],
        TournamentConfig::from(runner.config()),
    );
    results.add_match(&name1, &name2, result);
    println!("{}", results.generate_report());

    if let Some(path) = out {
        results
            .save(path)
            .with_context(|| format!("failed to save results to {}", path.display()))?;
        tracing::info!(path = %path.display(), "results saved");
    }
    Ok(())
}
