use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tortoise::board::{Arrows, Board, CallOut, Game, Position, positions};
use tortoise::detect::Report;
use tortoise::identity::ValueEq;
use tortoise::policy::{StepBudget, detect_within};
use tortoise::transform::transform;
use tortoise::{Algorithm, CycleVerdict, TortoiseError};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tortoise")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("tortoise.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // Everything passes the logger; the global max level does the filtering
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();
    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(LevelFilter::Info);
    }

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// RUST_LOG wins over the config file; --verbose wins over both
fn apply_log_level(cli: &Cli, config: &Config) {
    if cli.is_verbose() {
        log::set_max_level(LevelFilter::Debug);
        return;
    }
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    if let Some(level) = config.log_level.as_deref() {
        match level.parse::<LevelFilter>() {
            Ok(filter) => log::set_max_level(filter),
            Err(_) => log::warn!("Ignoring unknown log level in config: {}", level),
        }
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Check {
            board,
            start,
            algorithm,
            budget,
            json,
        } => handle_check_command(board, *start, *algorithm, *budget, *json, config),
        Commands::Compare { board, start, budget } => handle_compare_command(board, *start, *budget, config),
        Commands::Moves {
            start,
            algorithm,
            budget,
        } => handle_moves_command(*start, *algorithm, *budget, config),
    }
}

fn load_board(path: &Path) -> Result<Board> {
    Board::load(path).context(format!("Failed to load board from {}", path.display()))
}

fn print_verdict(verdict: CycleVerdict) {
    match verdict {
        CycleVerdict::Terminates => println!("{} the moves run out before any square repeats", "Terminates:".green()),
        CycleVerdict::Cycles => println!("{} the token revisits a square and never stops", "Cycles:".red()),
    }
}

fn print_report(report: &Report) {
    print_verdict(report.verdict);
    println!("  algorithm:    {}", report.algorithm.to_string().cyan());
    println!("  reads:        {}", report.reads);
    if report.algorithm == Algorithm::SetBased {
        println!("  visited:      {}", report.peak_visited);
    }
    if let Some(length) = report.cycle_length {
        println!("  cycle length: {}", length);
    }
}

/// `Ok(None)` when the budget ran out before a verdict
fn settle(outcome: tortoise::Result<Report>) -> Result<Option<Report>> {
    match outcome {
        Ok(report) => Ok(Some(report)),
        Err(TortoiseError::Undetermined { budget }) => {
            info!("No verdict within {} reads", budget);
            Ok(None)
        }
        Err(e) => Err(e).context("Detection failed"),
    }
}

fn handle_check_command(
    board_path: &Path,
    start: Position,
    algorithm: Option<Algorithm>,
    budget: Option<usize>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let board = load_board(board_path)?;
    let algorithm = config.detection.algorithm_for(algorithm, Some(board.state_space()));
    let budget = config.detection.budget_for(budget).map(StepBudget::new);
    info!("Checking {} from {} with {}", board_path.display(), start, algorithm);

    let states = positions(Game::new(&board, start));
    match settle(detect_within(budget, algorithm, states, &ValueEq))? {
        Some(report) if json => {
            println!("{}", serde_json::to_string_pretty(&report).context("Failed to serialize report")?);
        }
        Some(report) => print_report(&report),
        None if json => println!("{}", serde_json::json!({ "algorithm": algorithm, "verdict": "undetermined" })),
        None => println!("{} no verdict within the step budget", "Undetermined:".yellow()),
    }
    Ok(())
}

fn handle_compare_command(board_path: &Path, start: Position, budget: Option<usize>, config: &Config) -> Result<()> {
    let board = load_board(board_path)?;
    let budget = config.detection.budget_for(budget).map(StepBudget::new);
    info!("Comparing algorithms on {} from {}", board_path.display(), start);

    let mut verdicts = Vec::new();
    for algorithm in Algorithm::ALL {
        let states = positions(Game::new(&board, start));
        match settle(detect_within(budget, algorithm, states, &ValueEq))? {
            Some(report) => {
                println!(
                    "{:<12} {:<11} reads={}",
                    algorithm.to_string().cyan(),
                    report.verdict.to_string(),
                    report.reads
                );
                verdicts.push(report.verdict);
            }
            None => println!("{:<12} {}", algorithm.to_string().cyan(), "undetermined".yellow()),
        }
    }

    match verdicts.first() {
        Some(first) if verdicts.iter().all(|v| v == first) => {
            println!("{} {}", "Agreement:".green(), first);
            Ok(())
        }
        Some(_) => Err(eyre::eyre!("Algorithms disagree on {} from {}", board_path.display(), start)),
        None => {
            println!("{}", "No algorithm reached a verdict".yellow());
            Ok(())
        }
    }
}

fn handle_moves_command(
    start: Position,
    algorithm: Option<Algorithm>,
    budget: Option<usize>,
    config: &Config,
) -> Result<()> {
    let algorithm = config.detection.algorithm_for(algorithm, None);
    let budget = config.detection.budget_for(budget).map(StepBudget::new);
    info!("Reading called-out moves from stdin, starting at {} with {}", start, algorithm);

    let stdin = io::stdin();
    let moves = CallOut::new(stdin.lock());
    let states = transform(start, Arrows, moves);
    match settle(detect_within(budget, algorithm, states, &ValueEq))? {
        Some(report) => print_report(&report),
        None => println!("{} no verdict within the step budget", "Undetermined:".yellow()),
    }
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_log_level(&cli, &config);

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
