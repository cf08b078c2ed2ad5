//! Command-line interface for tictactoe_timeline.

use crate::config::DEFAULT_CONFIG_PATH;
use crate::replay::{OutputFormat, ReplayOp};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it is missing)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply a scripted game and print the resulting view
    Replay {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Operations: 0-8 plays that square, @n jumps to step n, sort toggles order
        ops: Vec<ReplayOp>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_flags_after_ops() {
        let cli = Cli::try_parse_from([
            "tictactoe_timeline",
            "replay",
            "4",
            "@0",
            "--format",
            "json",
            "--config",
            "other.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("other.toml"));
        match cli.command {
            Command::Replay { format, ops } => {
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(ops, vec![ReplayOp::Play(Position::Center), ReplayOp::Jump(0)]);
            }
            other => panic!("Expected replay, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe_timeline", "replay", "0"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(matches!(
            cli.command,
            Command::Replay {
                format: OutputFormat::Text,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_op_is_rejected() {
        assert!(Cli::try_parse_from(["tictactoe_timeline", "replay", "-1"]).is_err());
    }
}
