//! CLI module for workbench - command-line interface and subcommands.
//!
//! Provides the main entry point: running the crew is the default,
//! with a subcommand to inspect the registered tools.

pub mod commands;

pub use commands::Cli;
