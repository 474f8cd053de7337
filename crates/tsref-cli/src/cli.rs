//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// tsref - Keep TypeScript project references in sync with the workspace
/// dependency graph
#[derive(Parser, Debug)]
#[command(name = "tsref")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the workspace listing command (run through `sh -c` in the
    /// workspace root; must emit one JSON object per line)
    #[arg(long, global = true, value_name = "COMMAND")]
    pub list_command: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Verify that every tsconfig declares the references its dependencies
    /// require, without touching any file
    Check,

    /// Rewrite every out-of-sync tsconfig, including the workspace root
    Write,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_check() {
        let cli = Cli::parse_from(["tsref", "check"]);
        assert_eq!(cli.command, Commands::Check);
        assert!(!cli.verbose);
        assert!(cli.list_command.is_none());
    }

    #[test]
    fn test_parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tsref", "write", "--verbose", "--list-command", "cat x"]);
        assert_eq!(cli.command, Commands::Write);
        assert!(cli.verbose);
        assert_eq!(cli.list_command.as_deref(), Some("cat x"));
    }
}
