//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - check: run one algorithm on a board from a starting square
//! - compare: run every algorithm and confirm they agree
//! - moves: detect over arrows called out on stdin

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tortoise::Algorithm;
use tortoise::board::Position;

/// Tortoise - does the token ever leave the board?
#[derive(Parser, Debug)]
#[command(name = "tortoise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decide whether a token placed on a board cycles or walks off
    Check {
        /// Board diagram file
        #[arg(short, long)]
        board: PathBuf,

        /// Starting square as x,y
        #[arg(short, long)]
        start: Position,

        /// Algorithm: floyd, teleporting or set-based (default from config)
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Give up after this many reads
        #[arg(long)]
        budget: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run all algorithms on the same board and report agreement
    Compare {
        /// Board diagram file
        #[arg(short, long)]
        board: PathBuf,

        /// Starting square as x,y
        #[arg(short, long)]
        start: Position,

        /// Give up after this many reads
        #[arg(long)]
        budget: Option<usize>,
    },

    /// Read called-out arrows from stdin, each heard once
    Moves {
        /// Starting square as x,y
        #[arg(short, long, default_value = "0,0")]
        start: Position,

        /// Algorithm: teleporting or set-based (floyd needs a replayable source)
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Give up after this many reads
        #[arg(long)]
        budget: Option<usize>,
    },
}
