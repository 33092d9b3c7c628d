//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - run: wire the crew and put it to work (also the default)
//! - tools: list the registered tool variants

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Workbench - wire a crew of tools into a worker and put him to work
#[derive(Parser, Debug)]
#[command(name = "workbench")]
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
    pub command: Option<Commands>,
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
    /// Wire the crew and put it to work (default when no subcommand is given)
    Run,

    /// List the registered tool variants
    Tools,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should result in None command (run mode)
        let cli = Cli::try_parse_from(["workbench"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["workbench", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["workbench", "-c", "/path/to/config.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/config.yml")));
    }

    #[test]
    fn test_run_command() {
        let cli = Cli::try_parse_from(["workbench", "run"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Run)));
    }

    #[test]
    fn test_tools_command() {
        let cli = Cli::try_parse_from(["workbench", "tools"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Tools)));
    }

    #[test]
    fn test_tools_command_with_verbose() {
        let cli = Cli::try_parse_from(["workbench", "tools", "-v"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Tools)));
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_unknown_command_rejected() {
        let result = Cli::try_parse_from(["workbench", "hammer-time"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_works() {
        // Verify help doesn't panic
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["workbench", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
