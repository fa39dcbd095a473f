//! CLI module for tortoise - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for checking boards,
//! comparing algorithms and reading called-out moves.

pub mod commands;

pub use commands::Cli;
